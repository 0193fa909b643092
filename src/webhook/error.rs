//! Webhook submission errors

use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;

/// Shown when nothing more specific is known about a failure
pub const GENERIC_FAILURE: &str = "Failed to submit form. Please try again.";

/// Longest plain-text body that is shown to the user as-is
const MAX_PLAIN_MESSAGE_LEN: usize = 200;

/// Errors from sending a lead to the webhook
#[derive(Debug, Error)]
pub enum SubmissionError {
    /// The webhook answered with a non-2xx status
    #[error("webhook rejected submission ({status}): {message}")]
    Rejected { status: StatusCode, message: String },

    /// Transport failure before a response arrived
    #[error("webhook request failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("failed to encode lead payload: {0}")]
    Encode(#[from] serde_json::Error),
}

impl SubmissionError {
    /// Build a rejection from a non-2xx status and its response body
    pub fn rejected(status: StatusCode, body: &str) -> Self {
        Self::Rejected {
            status,
            message: describe_failure(status, body),
        }
    }

    /// Text for the inline error region
    pub fn user_message(&self) -> String {
        match self {
            Self::Rejected { message, .. } => message.clone(),
            Self::Network(_) | Self::Encode(_) => GENERIC_FAILURE.to_string(),
        }
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
    error: Option<ErrorField>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ErrorField {
    Text(String),
    Detail { message: Option<String> },
}

/// Message the server put in the body, if any
fn server_message(body: &str) -> Option<String> {
    let body = body.trim();
    if body.is_empty() {
        return None;
    }

    if let Ok(parsed) = serde_json::from_str::<ErrorBody>(body) {
        return parsed
            .message
            .or(match parsed.error {
                Some(ErrorField::Text(text)) => Some(text),
                Some(ErrorField::Detail { message }) => message,
                None => None,
            })
            .map(|m| m.trim().to_string())
            .filter(|m| !m.is_empty());
    }

    // Short plain-text bodies are usually a readable reason; HTML pages are not
    let looks_like_markup = body.starts_with('<') || body.starts_with('{') || body.starts_with('[');
    if !looks_like_markup && body.len() <= MAX_PLAIN_MESSAGE_LEN && !body.contains('\n') {
        return Some(body.to_string());
    }
    None
}

/// Hint for statuses a lead form user can act on
fn status_hint(status: StatusCode) -> Option<&'static str> {
    match status {
        StatusCode::BAD_REQUEST => {
            Some("The submitted details were rejected. Please check the form and try again.")
        }
        StatusCode::NOT_FOUND => {
            Some("The signup service is not available right now. Please try again later.")
        }
        StatusCode::TOO_MANY_REQUESTS => {
            Some("Too many submissions. Please wait a moment and try again.")
        }
        s if s.is_server_error() => {
            Some("The server encountered an error. Please try again later.")
        }
        _ => None,
    }
}

/// Pick the best message for a failed response: server message, then a
/// status hint, then the status reason, then the generic fallback.
pub fn describe_failure(status: StatusCode, body: &str) -> String {
    if let Some(message) = server_message(body) {
        return message;
    }
    if let Some(hint) = status_hint(status) {
        return hint.to_string();
    }
    match status.canonical_reason() {
        Some(reason) => format!("Request failed: {reason}"),
        None => GENERIC_FAILURE.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod describe {
        use super::*;

        #[test]
        fn test_json_message_wins() {
            let msg = describe_failure(
                StatusCode::INTERNAL_SERVER_ERROR,
                r#"{"message":"Workflow could not be started"}"#,
            );
            assert_eq!(msg, "Workflow could not be started");
        }

        #[test]
        fn test_json_error_string() {
            let msg = describe_failure(StatusCode::BAD_REQUEST, r#"{"error":"Email already registered"}"#);
            assert_eq!(msg, "Email already registered");
        }

        #[test]
        fn test_json_nested_error_message() {
            let msg = describe_failure(
                StatusCode::UNPROCESSABLE_ENTITY,
                r#"{"error":{"message":"Phone is invalid"}}"#,
            );
            assert_eq!(msg, "Phone is invalid");
        }

        #[test]
        fn test_plain_text_body() {
            let msg = describe_failure(StatusCode::CONFLICT, "Lead already exists");
            assert_eq!(msg, "Lead already exists");
        }

        #[test]
        fn test_html_body_falls_through_to_hint() {
            let msg = describe_failure(
                StatusCode::BAD_GATEWAY,
                "<html><body>Bad Gateway</body></html>",
            );
            assert_eq!(msg, "The server encountered an error. Please try again later.");
        }

        #[test]
        fn test_json_without_message_uses_hint() {
            let msg = describe_failure(StatusCode::NOT_FOUND, r#"{"code":404}"#);
            assert_eq!(
                msg,
                "The signup service is not available right now. Please try again later."
            );
        }

        #[test]
        fn test_status_text_fallback() {
            let msg = describe_failure(StatusCode::FORBIDDEN, "");
            assert_eq!(msg, "Request failed: Forbidden");
        }

        #[test]
        fn test_generic_fallback_for_unknown_status() {
            let status = StatusCode::from_u16(499).unwrap();
            assert_eq!(describe_failure(status, "  "), GENERIC_FAILURE);
        }

        #[test]
        fn test_blank_json_message_ignored() {
            let msg = describe_failure(StatusCode::TOO_MANY_REQUESTS, r#"{"message":"  "}"#);
            assert_eq!(msg, "Too many submissions. Please wait a moment and try again.");
        }
    }

    mod user_message {
        use super::*;

        #[test]
        fn test_rejected_uses_described_message() {
            let err = SubmissionError::rejected(StatusCode::FORBIDDEN, "");
            assert_eq!(err.user_message(), "Request failed: Forbidden");
            assert!(err.to_string().contains("403"));
        }

        #[test]
        fn test_encode_uses_generic() {
            let json_err = serde_json::from_str::<u32>("nope").unwrap_err();
            let err = SubmissionError::from(json_err);
            assert_eq!(err.user_message(), GENERIC_FAILURE);
        }
    }
}
