//! Splash screen rendering with block-letter title

use crate::state::SplashState;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const TITLE: [&str; 5] = [
    "█   █  ███  █   █    █████ ████   ███  ████  █████",
    "██  █ █   █ ██  █      █   █   █ █   █ █   █ █    ",
    "█ █ █  ███  █ █ █      █   ████  █████ █   █ ████ ",
    "█  ██ █   █ █  ██      █   █  █  █   █ █   █ █    ",
    "█   █  ███  █   █      █   █   █ █   █ ████  █████",
];

fn build_title() -> Vec<Line<'static>> {
    let style = Style::default().fg(Color::Cyan);
    TITLE
        .iter()
        .map(|row| Line::from(Span::styled(*row, style)))
        .collect()
}

/// Draw the splash screen
pub fn draw(frame: &mut Frame, area: Rect, splash_state: &SplashState) {
    let lines = build_title();

    let logo_height = lines.len() as u16;
    let logo_width = TITLE[0].chars().count() as u16;

    // Centered, shifted up by the scroll offset (may go above the screen)
    let base_y = area.y as i32 + (area.height.saturating_sub(logo_height)) as i32 / 2;
    let y_pos = base_y - splash_state.scroll_offset as i32;
    let x = area.x + (area.width.saturating_sub(logo_width)) / 2;

    let lines_off_top = if y_pos < 0 { (-y_pos) as usize } else { 0 };
    if lines_off_top >= lines.len() {
        return;
    }

    let visible_lines: Vec<Line> = lines.into_iter().skip(lines_off_top).collect();
    let visible_height = visible_lines.len() as u16;
    let render_y = if y_pos < 0 { area.y } else { y_pos as u16 };
    let max_height = area.height.saturating_sub(render_y.saturating_sub(area.y));

    let logo_area = Rect {
        x,
        y: render_y,
        width: logo_width.min(area.width),
        height: visible_height.min(max_height),
    };
    frame.render_widget(Paragraph::new(visible_lines), logo_area);

    if splash_state.scroll_offset < 1.0 && area.height >= 2 {
        let hint = "Press any key to skip";
        let hint_width = (hint.len() as u16).min(area.width);
        let hint_area = Rect {
            x: area.x + (area.width.saturating_sub(hint_width)) / 2,
            y: area.y + area.height - 2,
            width: hint_width,
            height: 1,
        };
        let hint_line = Line::from(Span::styled(hint, Style::default().fg(Color::DarkGray)));
        frame.render_widget(Paragraph::new(hint_line), hint_area);
    }
}
