//! Application state and core logic

use crate::config::LeadformConfig;
use crate::state::{AppState, FieldKind, Form, FormButton, FormVariant, SplashState, View};
use crate::webhook::{LeadSubmitter, SubmissionError, WebhookClient};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;
use tokio::sync::mpsc;

/// Result of one webhook request, sent back from the request task
pub type SubmissionOutcome = Result<(), SubmissionError>;

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Where validated leads are sent
    submitter: Arc<dyn LeadSubmitter>,
    outcome_tx: mpsc::UnboundedSender<SubmissionOutcome>,
    outcome_rx: mpsc::UnboundedReceiver<SubmissionOutcome>,
    /// Whether the app should quit
    quit: bool,
    /// Splash screen animation state
    pub splash_state: Option<SplashState>,
}

impl App {
    /// Create a new App posting to the configured webhook
    pub fn new(config: &LeadformConfig) -> Self {
        let client = WebhookClient::new(config.webhook_url());
        let mut app = Self::with_submitter(config.form_variant(), Arc::new(client));
        app.state.current_view = View::Splash;
        app.splash_state = Some(SplashState::new());
        app
    }

    /// Create an App around any submitter, starting on the landing view
    pub fn with_submitter(variant: FormVariant, submitter: Arc<dyn LeadSubmitter>) -> Self {
        let (outcome_tx, outcome_rx) = mpsc::unbounded_channel();
        Self {
            state: AppState::new(variant, submitter.target()),
            submitter,
            outcome_tx,
            outcome_rx,
            quit: false,
            splash_state: None,
        }
    }

    /// Update splash animation state
    /// Returns true if animation is complete and we should transition
    pub fn update_splash(&mut self, terminal_height: u16) -> bool {
        if let Some(ref mut splash) = self.splash_state {
            splash.update(terminal_height);
            if splash.is_complete() {
                self.splash_state = None;
                self.state.current_view = View::Landing;
                return true;
            }
        }
        false
    }

    /// Check if in splash screen
    pub fn in_splash(&self) -> bool {
        matches!(self.state.current_view, View::Splash)
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn request_quit(&mut self) {
        self.quit = true;
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) {
        match self.state.current_view {
            View::Splash => self.handle_splash_key(key),
            View::Landing => self.handle_landing_key(key),
        }
    }

    fn handle_splash_key(&mut self, _key: KeyEvent) {
        if let Some(ref mut splash) = self.splash_state {
            splash.skip();
        }
        self.splash_state = None;
        self.state.current_view = View::Landing;
    }

    /// Handle keys on the landing page form
    fn handle_landing_key(&mut self, key: KeyEvent) {
        let on_action_panel = self.state.form.is_buttons_row_active();
        let active_kind = self.state.form.active_kind();
        let is_picker = matches!(
            active_kind,
            Some(FieldKind::Select(_) | FieldKind::MultiSelect(_) | FieldKind::Country)
        );
        let is_toggle = matches!(
            active_kind,
            Some(FieldKind::Checkbox | FieldKind::MultiSelect(_))
        );

        match key.code {
            KeyCode::Tab => self.state.form.next_field(),
            KeyCode::BackTab => self.state.form.prev_field(),
            // Up/Down for action panel navigation
            KeyCode::Up if on_action_panel => self.state.form.prev_button(),
            KeyCode::Down if on_action_panel => self.state.form.next_button(),
            KeyCode::Up => self.state.form.prev_field(),
            KeyCode::Down => self.state.form.next_field(),
            KeyCode::Enter if on_action_panel => match self.state.form.selected_button {
                FormButton::Submit => self.submit(),
                FormButton::Clear => self.state.clear_form(),
            },
            // Enter in a field submits, like a web form
            KeyCode::Enter => self.submit(),
            KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => self.submit(),
            KeyCode::Esc => self.state.submission.dismiss(),
            KeyCode::Left if is_picker => self.state.form_prev_option(),
            KeyCode::Right if is_picker => self.state.form_next_option(),
            KeyCode::Char(' ') if is_toggle => self.state.form_toggle(),
            KeyCode::Char(_) if key.modifiers.contains(KeyModifiers::CONTROL) => {}
            KeyCode::Char(c) if matches!(active_kind, Some(FieldKind::Text(_))) => {
                self.state.form_input_char(c);
            }
            KeyCode::Backspace if !on_action_panel => self.state.form_backspace(),
            _ => {}
        }
    }

    /// Validate the form and, if it passes, send it in the background.
    ///
    /// Ignored while a previous request is still pending.
    pub fn submit(&mut self) {
        if !self.state.submission.begin() {
            tracing::debug!("Submit ignored, request already in flight");
            return;
        }

        if let Err(err) = self.state.form.validate() {
            tracing::debug!(field = err.field, "Validation failed: {err}");
            self.state.submission.fail(err.to_string());
            return;
        }

        let payload = self.state.form.to_payload();
        self.state.submission.start_request();

        let submitter = Arc::clone(&self.submitter);
        let tx = self.outcome_tx.clone();
        tokio::spawn(async move {
            let outcome = submitter.submit(&payload).await;
            // Receiver only goes away when the app is shutting down
            let _ = tx.send(outcome);
        });
    }

    /// Apply any finished request outcomes. Called once per UI tick.
    pub fn poll_submission(&mut self) {
        while let Ok(outcome) = self.outcome_rx.try_recv() {
            self.apply_outcome(outcome);
        }
    }

    fn apply_outcome(&mut self, outcome: SubmissionOutcome) {
        match outcome {
            Ok(()) => {
                tracing::info!("Lead submitted");
                self.state.submission.succeed();
                self.state.form.reset();
            }
            Err(err) => {
                tracing::warn!("Lead submission failed: {err}");
                self.state.submission.fail(err.user_message());
            }
        }
    }
}
