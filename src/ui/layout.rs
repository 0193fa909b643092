//! Layout components (content area, status bar)

use crate::app::App;
use crate::state::{FormVariant, View};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Content area above the status bar
pub fn create_layout(area: Rect) -> Rect {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    chunks[0]
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let status_area = Rect {
        x: 0,
        y: area.height.saturating_sub(1),
        width: area.width,
        height: 1,
    };

    let mut spans = vec![];

    // Request indicator
    let indicator = if app.state.submission.is_submitting() {
        Span::styled(" ◌ ", Style::default().fg(Color::Yellow))
    } else if app.state.submission.error().is_some() {
        Span::styled(" ● ", Style::default().fg(Color::Red))
    } else {
        Span::styled(" ● ", Style::default().fg(Color::Green))
    };
    spans.push(indicator);

    let hints = get_view_hints(&app.state.current_view, app.state.form.variant);
    spans.push(Span::styled(hints, Style::default().fg(Color::Gray)));

    spans.push(Span::raw(" | "));
    spans.push(Span::styled(
        format!("→ {}", app.state.webhook_target),
        Style::default().fg(Color::Blue),
    ));

    let quit_hint = " ^C:quit ";

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, status_area);

    let quit_area = Rect {
        x: area.width.saturating_sub(quit_hint.len() as u16),
        y: area.height.saturating_sub(1),
        width: (quit_hint.len() as u16).min(area.width),
        height: 1,
    };
    let quit_widget =
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}

/// Get keyboard hints for the current view
fn get_view_hints(view: &View, variant: FormVariant) -> String {
    match view {
        View::Splash => "Press any key to skip".to_string(),
        View::Landing => match variant {
            FormVariant::Business => "Tab:next  ^S:submit  Esc:dismiss".to_string(),
            FormVariant::Course | FormVariant::Trading => {
                format!("[{variant}] Tab:next  ←/→:choose  Space:toggle  ^S:submit  Esc:dismiss")
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_area_leaves_status_row() {
        let content = create_layout(Rect::new(0, 0, 80, 24));
        assert_eq!(content, Rect::new(0, 0, 80, 23));
    }

    #[test]
    fn test_picker_hints_only_for_variants_with_pickers() {
        let business = get_view_hints(&View::Landing, FormVariant::Business);
        assert!(!business.contains("Space"));
        let trading = get_view_hints(&View::Landing, FormVariant::Trading);
        assert!(trading.starts_with("[trading]"));
        assert!(trading.contains("Space:toggle"));
    }
}
