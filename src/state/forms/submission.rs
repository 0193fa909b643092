//! Submission state machine

/// Where the current submit attempt is
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmissionPhase {
    #[default]
    Idle,
    Validating,
    Submitting,
    Success,
    Failed(String),
}

/// Submission status shown next to the form.
///
/// A single phase enum backs the three flags the UI reads, so a pending
/// request and a success can never be reported together.
#[derive(Debug, Clone, Default)]
pub struct SubmissionState {
    phase: SubmissionPhase,
}

impl SubmissionState {
    pub fn phase(&self) -> &SubmissionPhase {
        &self.phase
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == SubmissionPhase::Submitting
    }

    pub fn is_success(&self) -> bool {
        self.phase == SubmissionPhase::Success
    }

    pub fn error(&self) -> Option<&str> {
        match &self.phase {
            SubmissionPhase::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// Start a submit attempt. Returns false while a request is in flight.
    pub fn begin(&mut self) -> bool {
        if matches!(
            self.phase,
            SubmissionPhase::Submitting | SubmissionPhase::Validating
        ) {
            return false;
        }
        self.phase = SubmissionPhase::Validating;
        true
    }

    /// Validation passed, the request is going out
    pub fn start_request(&mut self) {
        if self.phase == SubmissionPhase::Validating {
            self.phase = SubmissionPhase::Submitting;
        }
    }

    /// Validation or the request failed
    pub fn fail(&mut self, message: impl Into<String>) {
        if matches!(
            self.phase,
            SubmissionPhase::Validating | SubmissionPhase::Submitting
        ) {
            self.phase = SubmissionPhase::Failed(message.into());
        }
    }

    pub fn succeed(&mut self) {
        if self.phase == SubmissionPhase::Submitting {
            self.phase = SubmissionPhase::Success;
        }
    }

    /// Drop a resolved message. A pending request is left alone.
    pub fn dismiss(&mut self) {
        if matches!(
            self.phase,
            SubmissionPhase::Success | SubmissionPhase::Failed(_)
        ) {
            self.phase = SubmissionPhase::Idle;
        }
    }
}
