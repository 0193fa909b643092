//! Lead form rendering with action panel

use super::field_renderer::{draw_field, draw_help_text, FIELD_HEIGHT};
use crate::app::App;
use crate::state::{FormButton, SubmissionPhase, SubmissionState};
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};
use std::ops::Range;

pub const SUCCESS_MESSAGE: &str = "Thank you for your interest! We'll be in touch soon.";

/// Draw the lead form with the action panel on its right
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(40),    // Form area
            Constraint::Length(24), // Action panel
        ])
        .split(area);

    draw_form(frame, main_chunks[0], app);
    draw_action_panel(frame, main_chunks[1], app);
}

/// Fields that fit in `capacity` slots, scrolled so the focused one shows
fn visible_range(count: usize, active: usize, capacity: usize) -> Range<usize> {
    if capacity == 0 {
        return 0..0;
    }
    if count <= capacity {
        return 0..count;
    }
    let focus = active.min(count - 1);
    let start = (focus + 1).saturating_sub(capacity);
    start..start + capacity
}

fn draw_form(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.state.form;
    let form_focused = !form.is_buttons_row_active();
    let border_color = if form_focused {
        Color::Cyan
    } else {
        Color::DarkGray
    };

    let mut block = Block::default()
        .title(" Get Started Today ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let inner = block.inner(area);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Fields
            Constraint::Length(1), // Help text
        ])
        .horizontal_margin(1)
        .split(inner);

    let capacity = (chunks[0].height / FIELD_HEIGHT) as usize;
    let count = form.fields.len();
    let range = visible_range(count, form.active_field_index, capacity);
    if range.len() < count {
        block = block.title_bottom(
            Line::from(format!(" {}-{} of {count} ", range.start + 1, range.end)).right_aligned(),
        );
    }
    frame.render_widget(block, area);

    let constraints: Vec<Constraint> = range
        .clone()
        .map(|_| Constraint::Length(FIELD_HEIGHT))
        .chain(std::iter::once(Constraint::Min(0)))
        .collect();
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(chunks[0]);

    for (row, index) in range.enumerate() {
        draw_field(
            frame,
            rows[row],
            &form.fields[index],
            form.active_field_index == index,
        );
    }

    draw_help_text(frame, chunks[1]);
}

fn draw_action_panel(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.state.form;
    let submission = &app.state.submission;
    let is_focused = form.is_buttons_row_active();
    let border_color = if is_focused {
        Color::Cyan
    } else {
        Color::DarkGray
    };

    let block = Block::default()
        .title(" Actions ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(BUTTON_HEIGHT), // Submit (primary)
            Constraint::Length(BUTTON_HEIGHT), // Clear
            Constraint::Length(1),
            Constraint::Min(0), // Inline message
        ])
        .split(inner_area);

    let enabled = !submission.is_submitting();
    for (button, slot) in FormButton::ALL.iter().zip([chunks[0], chunks[1]]) {
        let (label, accent) = match button {
            FormButton::Submit if submission.is_submitting() => ("Submitting...", Color::Yellow),
            FormButton::Submit => ("Get Started", Color::Green),
            FormButton::Clear => ("Clear", Color::Gray),
        };
        render_button(
            frame,
            slot,
            label,
            is_focused && form.selected_button == *button,
            enabled,
            Some(accent),
        );
    }

    if let Some(message) = status_message(submission) {
        frame.render_widget(message.wrap(Wrap { trim: true }), chunks[3]);
    }
}

/// Inline message for the current submission phase
fn status_message(submission: &SubmissionState) -> Option<Paragraph<'static>> {
    let line = match submission.phase() {
        SubmissionPhase::Failed(message) => Line::from(Span::styled(
            message.clone(),
            Style::default().fg(Color::Red),
        )),
        SubmissionPhase::Success => Line::from(Span::styled(
            SUCCESS_MESSAGE,
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )),
        SubmissionPhase::Submitting => Line::from(Span::styled(
            "Sending your details...",
            Style::default().fg(Color::Yellow),
        )),
        SubmissionPhase::Idle | SubmissionPhase::Validating => return None,
    };
    Some(Paragraph::new(line))
}
