//! Webhook client module for lead submission

mod client;
mod error;
mod traits;

pub use client::WebhookClient;
pub use error::SubmissionError;
pub use traits::LeadSubmitter;

#[cfg(test)]
pub use traits::MockLeadSubmitter;
