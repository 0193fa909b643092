//! Field validation rules
//!
//! Rules are evaluated field by field, in schema order, and stop at the first
//! failure. Only the optional-value rules (`MinLength`, `Email`, `Phone`,
//! `Url`, `Digits`) skip empty input; emptiness is `Required`'s job.

use super::field::FormField;
use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("Invalid email regex")
});

static PHONE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?\d{10,15}$").expect("Invalid phone regex"));

static URL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^https?://[A-Za-z0-9_.-]+(?:/[A-Za-z0-9_.-]*)*$").expect("Invalid URL regex")
});

/// A single validation rule with the message shown when it fails
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    Required(&'static str),
    MinLength { min: usize, message: &'static str },
    Email(&'static str),
    Phone(&'static str),
    Url(&'static str),
    Digits(&'static str),
}

impl Rule {
    pub const fn required(message: &'static str) -> Self {
        Rule::Required(message)
    }

    pub const fn min_length(min: usize, message: &'static str) -> Self {
        Rule::MinLength { min, message }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Rule::Required(m)
            | Rule::Email(m)
            | Rule::Phone(m)
            | Rule::Url(m)
            | Rule::Digits(m) => m,
            Rule::MinLength { message, .. } => message,
        }
    }

    /// Check the rule against a field's current value
    pub fn check(&self, field: &FormField) -> bool {
        if let Rule::Required(_) = self {
            return field.is_filled();
        }

        // Non-text fields read as empty here
        let raw = field.as_text();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return true;
        }

        match self {
            Rule::Required(_) => true,
            Rule::MinLength { min, .. } => trimmed.chars().count() >= *min,
            Rule::Email(_) => EMAIL_PATTERN.is_match(raw),
            Rule::Phone(_) => {
                let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
                PHONE_PATTERN.is_match(&digits)
            }
            Rule::Url(_) => URL_PATTERN.is_match(raw),
            Rule::Digits(_) => trimmed.chars().all(|c| c.is_ascii_digit()),
        }
    }
}

/// First failing rule of a form
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValidationError {
    /// Key of the field that failed
    pub field: &'static str,
    pub message: &'static str,
}

/// Validate fields in order, reporting only the first violation
pub fn validate<'a>(
    fields: impl IntoIterator<Item = &'a FormField>,
) -> Result<(), ValidationError> {
    for field in fields {
        if let Some(rule) = field.spec.rules.iter().find(|rule| !rule.check(field)) {
            return Err(ValidationError {
                field: field.key(),
                message: rule.message(),
            });
        }
    }
    Ok(())
}
