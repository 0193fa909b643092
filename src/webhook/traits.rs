//! Trait abstraction for lead submission to enable mocking in tests

use super::error::SubmissionError;
use crate::state::LeadPayload;
use async_trait::async_trait;

/// Sends a validated lead somewhere. One call is one request: no retries.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LeadSubmitter: Send + Sync {
    /// Deliver the payload, succeeding only on a 2xx answer
    async fn submit(&self, payload: &LeadPayload) -> Result<(), SubmissionError>;

    /// Where leads are delivered, for display
    fn target(&self) -> String;
}
