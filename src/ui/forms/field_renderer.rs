//! Field rendering utilities for forms

use crate::state::{FieldKind, FieldValue, FormField, InputKind};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Rows a single field occupies (border + content + border)
pub const FIELD_HEIGHT: u16 = 3;

/// Draw a form field using FormField from the domain layer
pub fn draw_field(frame: &mut Frame, area: Rect, field: &FormField, is_active: bool) {
    let style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };

    let border_style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let placeholder = Style::default().fg(Color::DarkGray);
    let cursor = Span::styled("▌", Style::default().fg(Color::Cyan));

    let spans: Vec<Span> = match &field.value {
        FieldValue::Text(text) => {
            let mut spans = if text.is_empty() && !field.spec.placeholder.is_empty() && !is_active
            {
                vec![Span::styled(field.spec.placeholder, placeholder)]
            } else {
                vec![Span::styled(text.clone(), style)]
            };
            if is_active {
                spans.push(cursor);
            }
            spans
        }
        FieldValue::Choice(_) => {
            let value = field.display_value();
            let shown = if value.is_empty() {
                Span::styled("Select...", placeholder)
            } else {
                Span::styled(value, style)
            };
            if is_active {
                vec![
                    Span::styled("◀ ", style),
                    shown,
                    Span::styled(" ▶", style),
                ]
            } else {
                vec![shown]
            }
        }
        FieldValue::Choices { selected, cursor } => {
            multi_select_spans(&field.spec.kind, selected, *cursor, is_active)
        }
        FieldValue::Toggle(on) => {
            let mark = if *on { "[x]" } else { "[ ]" };
            vec![Span::styled(mark, style)]
        }
    };

    let required = if field.spec.is_required() { " *" } else { "" };
    let hint = if is_active { kind_hint(&field.spec.kind) } else { "" };

    let block = Block::default()
        .title(format!(" {}{required} ", field.label()))
        .title_bottom(Line::from(Span::styled(hint, placeholder)).right_aligned())
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}

/// One chip per option, the cursor option underlined while focused
fn multi_select_spans(
    kind: &FieldKind,
    selected: &[bool],
    cursor: usize,
    is_active: bool,
) -> Vec<Span<'static>> {
    let mut spans = Vec::new();
    for (i, on) in selected.iter().enumerate() {
        let Some(label) = kind.option_label(i) else {
            continue;
        };
        let mut style = if *on {
            Style::default().fg(Color::Green)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        if is_active && i == cursor {
            style = style.add_modifier(Modifier::UNDERLINED | Modifier::BOLD);
        }
        let mark = if *on { "■" } else { "□" };
        spans.push(Span::styled(format!("{mark} {label}"), style));
        spans.push(Span::raw("  "));
    }
    spans
}

/// Key hint shown under the focused field
fn kind_hint(kind: &FieldKind) -> &'static str {
    match kind {
        FieldKind::Text(InputKind::Email) => " email ",
        FieldKind::Text(InputKind::Tel) => " 10-15 digits ",
        FieldKind::Text(InputKind::Url) => " http(s):// ",
        FieldKind::Text(InputKind::Text) => "",
        FieldKind::Select(_) | FieldKind::Country => " ←/→ choose  ⌫ clear ",
        FieldKind::MultiSelect(_) => " ←/→ move  Space toggle ",
        FieldKind::Checkbox => " Space toggle ",
    }
}

/// Draw help text for form navigation
pub fn draw_help_text(frame: &mut Frame, area: Rect) {
    let key = Style::default().fg(Color::Cyan);
    let help = Paragraph::new(Line::from(vec![
        Span::styled("Tab", key),
        Span::raw(": next field  "),
        Span::styled("Enter", key),
        Span::raw("/"),
        Span::styled("Ctrl+S", key),
        Span::raw(": submit  "),
        Span::styled("Esc", key),
        Span::raw(": dismiss"),
    ]))
    .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, area);
}
