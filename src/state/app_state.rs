//! Application state definitions

use super::forms::{Form, FormField, FormVariant, LeadForm, SubmissionState};

/// Current view in the application
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum View {
    /// Splash screen with title animation
    Splash,
    /// Hero, feature cards and the lead form
    #[default]
    Landing,
}

/// Main application state
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub current_view: View,
    pub form: LeadForm,
    pub submission: SubmissionState,
    /// Webhook the form posts to, shown in the status bar
    pub webhook_target: String,
}

impl AppState {
    pub fn new(variant: FormVariant, webhook_target: impl Into<String>) -> Self {
        Self {
            current_view: View::Landing,
            form: LeadForm::new(variant),
            submission: SubmissionState::default(),
            webhook_target: webhook_target.into(),
        }
    }

    /// Text input is routed to the focused field.
    ///
    /// Editing clears a stale success message but keeps an error visible until
    /// the next submit or `Esc`.
    pub fn form_input_char(&mut self, c: char) {
        if let Some(field) = self.focused_field_mut() {
            field.push_char(c);
        }
        self.clear_success();
    }

    pub fn form_backspace(&mut self) {
        if let Some(field) = self.focused_field_mut() {
            field.pop_char();
        }
        self.clear_success();
    }

    pub fn form_toggle(&mut self) {
        if let Some(field) = self.focused_field_mut() {
            field.toggle();
        }
        self.clear_success();
    }

    pub fn form_next_option(&mut self) {
        if let Some(field) = self.focused_field_mut() {
            field.next_option();
        }
        self.clear_success();
    }

    pub fn form_prev_option(&mut self) {
        if let Some(field) = self.focused_field_mut() {
            field.prev_option();
        }
        self.clear_success();
    }

    /// Clear all values. Ignored while a request is pending.
    pub fn clear_form(&mut self) {
        if self.submission.is_submitting() {
            return;
        }
        self.form.reset();
        self.submission.dismiss();
    }

    fn focused_field_mut(&mut self) -> Option<&mut FormField> {
        self.form.get_active_field_mut()
    }

    fn clear_success(&mut self) {
        if self.submission.is_success() {
            self.submission.dismiss();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::SubmissionPhase;

    #[test]
    fn test_default_view_is_landing() {
        assert_eq!(View::default(), View::Landing);
        let state = AppState::default();
        assert_eq!(state.current_view, View::Landing);
        assert_eq!(state.form.variant, FormVariant::Business);
    }

    #[test]
    fn test_input_goes_to_focused_field() {
        let mut state = AppState::new(FormVariant::Business, "http://hook");
        state.form_input_char('J');
        state.form_input_char('o');
        state.form.next_field();
        state.form_input_char('D');
        assert_eq!(state.form.fields[0].as_text(), "Jo");
        assert_eq!(state.form.fields[1].as_text(), "D");
        state.form_backspace();
        assert_eq!(state.form.fields[1].as_text(), "");
    }

    #[test]
    fn test_input_on_buttons_row_is_ignored() {
        let mut state = AppState::new(FormVariant::Business, "http://hook");
        state.form.prev_field();
        state.form_input_char('x');
        assert!(state.form.fields.iter().all(|f| f.as_text().is_empty()));
    }

    #[test]
    fn test_editing_clears_success_but_not_error() {
        let mut state = AppState::default();
        state.submission.begin();
        state.submission.start_request();
        state.submission.succeed();
        state.form_input_char('A');
        assert_eq!(state.submission.phase(), &SubmissionPhase::Idle);

        state.submission.begin();
        state.submission.fail("Please enter your last name");
        state.form_input_char('B');
        assert_eq!(state.submission.error(), Some("Please enter your last name"));
    }

    #[test]
    fn test_select_keys_on_course_select() {
        let mut state = AppState::new(FormVariant::Course, "http://hook");
        let country = state
            .form
            .fields
            .iter()
            .position(|f| f.key() == "country")
            .unwrap();
        state.form.set_active_field(country);
        state.form_next_option();
        state.form_next_option();
        assert_eq!(state.form.fields[country].display_value(), "United Kingdom");
        state.form_prev_option();
        assert_eq!(state.form.fields[country].display_value(), "United States");
    }

    #[test]
    fn test_clear_form_ignored_while_submitting() {
        let mut state = AppState::default();
        state.form_input_char('A');
        state.submission.begin();
        state.submission.start_request();
        state.clear_form();
        assert_eq!(state.form.fields[0].as_text(), "A");

        state.submission.fail("boom");
        state.clear_form();
        assert_eq!(state.form.fields[0].as_text(), "");
        assert!(state.submission.error().is_none());
    }
}
