//! Form domain layer
//!
//! Schema-driven lead form: field definitions, values, validation rules and
//! the submission state machine.

mod field;
mod form_state;
mod schema;
mod submission;
mod validator;

pub use field::{FieldValue, FormField};
pub use form_state::{Form, FormButton, LeadForm, LeadPayload};
pub use schema::{FieldKind, FormVariant, InputKind};
pub use submission::{SubmissionPhase, SubmissionState};
