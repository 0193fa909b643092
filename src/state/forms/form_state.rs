//! Lead form state: ordered fields, focus and payload building

use super::field::FormField;
use super::schema::{FieldKind, FormVariant};
use super::validator::{validate, ValidationError};
use serde::Serialize;
use serde_json::{Map, Value};

/// Trait for common form operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
    fn get_active_field_mut(&mut self) -> Option<&mut FormField>;
    fn get_field(&self, index: usize) -> Option<&FormField>;
}

/// Buttons in the action panel, top to bottom
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormButton {
    #[default]
    Submit,
    Clear,
}

impl FormButton {
    pub const ALL: [FormButton; 2] = [FormButton::Submit, FormButton::Clear];

    pub fn toggle(&self) -> Self {
        match self {
            Self::Submit => Self::Clear,
            Self::Clear => Self::Submit,
        }
    }
}

/// JSON body sent to the webhook
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct LeadPayload(Map<String, Value>);

impl LeadPayload {
    #[cfg(test)]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Number of top-level keys in the body
    pub fn key_count(&self) -> usize {
        self.0.len()
    }
}

/// The lead-capture form: one field per schema entry plus the action panel row
#[derive(Debug, Clone)]
pub struct LeadForm {
    pub variant: FormVariant,
    pub fields: Vec<FormField>,
    pub active_field_index: usize,
    pub selected_button: FormButton,
}

impl LeadForm {
    pub fn new(variant: FormVariant) -> Self {
        Self {
            variant,
            fields: variant.fields().into_iter().map(FormField::new).collect(),
            active_field_index: 0,
            selected_button: FormButton::Submit,
        }
    }

    /// Returns true if the buttons row is currently active
    pub fn is_buttons_row_active(&self) -> bool {
        self.active_field_index == self.fields.len()
    }

    pub fn next_button(&mut self) {
        self.selected_button = self.selected_button.toggle();
    }

    pub fn prev_button(&mut self) {
        self.selected_button = self.selected_button.toggle();
    }

    /// Kind of the focused field, `None` on the buttons row
    pub fn active_kind(&self) -> Option<FieldKind> {
        self.get_field(self.active_field_index).map(|f| f.spec.kind)
    }

    /// Look up a field by payload key
    #[cfg(test)]
    pub fn field(&self, key: &str) -> Option<&FormField> {
        self.fields.iter().find(|f| f.key() == key)
    }

    #[cfg(test)]
    pub fn field_mut(&mut self, key: &str) -> Option<&mut FormField> {
        self.fields.iter_mut().find(|f| f.key() == key)
    }

    /// Run the validation rule table over the fields in order
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate(&self.fields)
    }

    /// Build the JSON body from the current values
    pub fn to_payload(&self) -> LeadPayload {
        let mut map = Map::new();
        for field in &self.fields {
            field.write_json(&mut map);
        }
        LeadPayload(map)
    }

    /// Back to the empty defaults, focus on the first field
    pub fn reset(&mut self) {
        for field in &mut self.fields {
            field.clear();
        }
        self.active_field_index = 0;
        self.selected_button = FormButton::Submit;
    }
}

impl Default for LeadForm {
    fn default() -> Self {
        Self::new(FormVariant::default())
    }
}

impl Form for LeadForm {
    fn field_count(&self) -> usize {
        self.fields.len() + 1 // fields + buttons
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(self.fields.len());
    }
    fn get_active_field_mut(&mut self) -> Option<&mut FormField> {
        // Buttons row has no FormField
        self.fields.get_mut(self.active_field_index)
    }
    fn get_field(&self, index: usize) -> Option<&FormField> {
        self.fields.get(index)
    }
}
