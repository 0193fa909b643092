//! Landing page: hero, feature cards and the lead form

use super::forms;
use crate::app::App;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

const HERO_TITLE: &str = "Transform Your Business with n8n Trade";
const HERO_SUBTITLE: &str = "Automate your trading workflows with powerful integrations";

/// Feature cards (title, description), left to right
const FEATURES: [(&str, &str); 3] = [
    (
        "Automated Workflows",
        "Streamline your trading processes with automated workflows",
    ),
    (
        "Powerful Integrations",
        "Connect with multiple trading platforms and tools",
    ),
    (
        "Custom Solutions",
        "Build custom solutions tailored to your needs",
    ),
];

const HERO_HEIGHT: u16 = 3;
const FEATURE_HEIGHT: u16 = 4;

/// Draw the landing page
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    // Hero and cards give way to the form on short terminals
    let show_features = area.height >= 30;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HERO_HEIGHT),
            Constraint::Length(if show_features { FEATURE_HEIGHT } else { 0 }),
            Constraint::Min(0),
        ])
        .split(area);

    draw_hero(frame, chunks[0]);
    if show_features {
        draw_features(frame, chunks[1]);
    }
    forms::draw_lead_form(frame, chunks[2], app);
}

fn draw_hero(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(Span::styled(
            HERO_TITLE,
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(HERO_SUBTITLE, Style::default().fg(Color::Gray))),
    ];
    let hero = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(hero, area);
}

fn draw_features(frame: &mut Frame, area: Rect) {
    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(area);

    for ((title, description), card) in FEATURES.iter().zip(cards.iter()) {
        let block = Block::default()
            .title(Span::styled(
                format!(" {title} "),
                Style::default().add_modifier(Modifier::BOLD),
            ))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::DarkGray));
        let body = Paragraph::new(*description)
            .style(Style::default().fg(Color::Gray))
            .wrap(Wrap { trim: true })
            .block(block);
        frame.render_widget(body, *card);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::FormVariant;
    use crate::webhook::MockLeadSubmitter;
    use ratatui::{backend::TestBackend, Terminal};
    use std::sync::Arc;

    fn render(height: u16) -> String {
        let mut submitter = MockLeadSubmitter::new();
        submitter
            .expect_target()
            .return_const("http://localhost:5678/webhook-test/course-lead-webhook".to_string());
        let app = App::with_submitter(FormVariant::Business, Arc::new(submitter));

        let mut terminal = Terminal::new(TestBackend::new(120, height)).unwrap();
        terminal
            .draw(|frame| draw(frame, frame.area(), &app))
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_hero_and_cards_on_tall_terminal() {
        let text = render(40);
        assert!(text.contains(HERO_TITLE));
        for (title, _) in FEATURES {
            assert!(text.contains(title), "missing card {title}");
        }
        assert!(text.contains("Get Started Today"));
    }

    #[test]
    fn test_cards_hidden_on_short_terminal() {
        let text = render(20);
        assert!(text.contains(HERO_TITLE));
        assert!(!text.contains("Powerful Integrations"));
    }
}
