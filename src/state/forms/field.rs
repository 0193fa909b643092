//! Form field value objects

use super::schema::{FieldKind, FieldSpec, COUNTRIES};
use serde_json::{Map, Value};

/// Type-safe field values
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    /// Index of the chosen option, if any
    Choice(Option<usize>),
    /// One flag per option plus the option under the cursor
    Choices { selected: Vec<bool>, cursor: usize },
    Toggle(bool),
}

impl FieldValue {
    /// Empty value for a field kind
    pub fn empty(kind: &FieldKind) -> Self {
        match kind {
            FieldKind::Text(_) => FieldValue::Text(String::new()),
            FieldKind::Select(_) | FieldKind::Country => FieldValue::Choice(None),
            FieldKind::MultiSelect(options) => FieldValue::Choices {
                selected: vec![false; options.len()],
                cursor: 0,
            },
            FieldKind::Checkbox => FieldValue::Toggle(false),
        }
    }
}

/// Represents a single form field with its configuration and value
#[derive(Debug, Clone)]
pub struct FormField {
    pub spec: FieldSpec,
    pub value: FieldValue,
}

impl FormField {
    pub fn new(spec: FieldSpec) -> Self {
        let value = FieldValue::empty(&spec.kind);
        Self { spec, value }
    }

    pub fn key(&self) -> &'static str {
        self.spec.key
    }

    pub fn label(&self) -> &'static str {
        self.spec.label
    }

    /// Get the text value (returns empty string for non-text fields)
    pub fn as_text(&self) -> &str {
        match &self.value {
            FieldValue::Text(s) => s,
            _ => "",
        }
    }

    /// Whether the field holds anything a user entered or picked
    pub fn is_filled(&self) -> bool {
        match &self.value {
            FieldValue::Text(s) => !s.trim().is_empty(),
            FieldValue::Choice(choice) => choice.is_some(),
            FieldValue::Choices { selected, .. } => selected.iter().any(|s| *s),
            FieldValue::Toggle(on) => *on,
        }
    }

    /// Set the text value (no-op for non-text fields)
    #[cfg(test)]
    pub fn set_text(&mut self, value: impl Into<String>) {
        if let FieldValue::Text(s) = &mut self.value {
            *s = value.into();
        }
    }

    /// Select the option at `index` (no-op for non-select fields)
    #[cfg(test)]
    pub fn select(&mut self, index: usize) {
        if index >= self.spec.kind.option_count() {
            return;
        }
        match &mut self.value {
            FieldValue::Choice(choice) => *choice = Some(index),
            FieldValue::Choices { selected, cursor } => {
                selected[index] = true;
                *cursor = index;
            }
            _ => {}
        }
    }

    /// Push a character to a text field
    pub fn push_char(&mut self, c: char) {
        if let FieldValue::Text(s) = &mut self.value {
            s.push(c);
        }
    }

    /// Remove the last character from a text field, or clear a choice
    pub fn pop_char(&mut self) {
        match &mut self.value {
            FieldValue::Text(s) => {
                s.pop();
            }
            FieldValue::Choice(choice) => *choice = None,
            _ => {}
        }
    }

    /// Toggle a checkbox, or the multi-select option under the cursor
    pub fn toggle(&mut self) {
        match &mut self.value {
            FieldValue::Toggle(on) => *on = !*on,
            FieldValue::Choices { selected, cursor } => {
                if let Some(flag) = selected.get_mut(*cursor) {
                    *flag = !*flag;
                }
            }
            _ => {}
        }
    }

    /// Cycle forward through options (select) or move the cursor (multi-select)
    pub fn next_option(&mut self) {
        let count = self.spec.kind.option_count();
        if count == 0 {
            return;
        }
        match &mut self.value {
            FieldValue::Choice(choice) => {
                *choice = Some(choice.map_or(0, |i| (i + 1) % count));
            }
            FieldValue::Choices { cursor, .. } => *cursor = (*cursor + 1) % count,
            _ => {}
        }
    }

    /// Cycle backward through options (select) or move the cursor (multi-select)
    pub fn prev_option(&mut self) {
        let count = self.spec.kind.option_count();
        if count == 0 {
            return;
        }
        match &mut self.value {
            FieldValue::Choice(choice) => {
                *choice = Some(match *choice {
                    None | Some(0) => count - 1,
                    Some(i) => i - 1,
                });
            }
            FieldValue::Choices { cursor, .. } => {
                *cursor = if *cursor == 0 { count - 1 } else { *cursor - 1 };
            }
            _ => {}
        }
    }

    /// Clear the field value
    pub fn clear(&mut self) {
        self.value = FieldValue::empty(&self.spec.kind);
    }

    /// Get the display value for rendering
    pub fn display_value(&self) -> String {
        match &self.value {
            FieldValue::Text(s) => s.clone(),
            FieldValue::Choice(None) => String::new(),
            FieldValue::Choice(Some(i)) => self
                .spec
                .kind
                .option_label(*i)
                .unwrap_or_default()
                .to_string(),
            FieldValue::Choices { selected, .. } => selected
                .iter()
                .enumerate()
                .filter(|(_, on)| **on)
                .filter_map(|(i, _)| self.spec.kind.option_label(i))
                .collect::<Vec<_>>()
                .join(", "),
            FieldValue::Toggle(true) => "[x] Yes".to_string(),
            FieldValue::Toggle(false) => "[ ] No".to_string(),
        }
    }

    /// Write this field's JSON representation into the payload map
    pub fn write_json(&self, out: &mut Map<String, Value>) {
        let key = self.key();
        match (&self.spec.kind, &self.value) {
            (FieldKind::Country, FieldValue::Choice(choice)) => {
                let country = choice.and_then(|i| COUNTRIES.get(i));
                out.insert(
                    format!("{key}Code"),
                    Value::from(country.map_or("", |c| c.code)),
                );
                out.insert(
                    format!("{key}Name"),
                    Value::from(country.map_or("", |c| c.name)),
                );
            }
            (FieldKind::Select(options), FieldValue::Choice(choice)) => {
                let value = choice.and_then(|i| options.get(i)).map_or("", |c| c.value);
                out.insert(key.to_string(), Value::from(value));
            }
            (FieldKind::MultiSelect(options), FieldValue::Choices { selected, .. }) => {
                let values: Vec<Value> = options
                    .iter()
                    .zip(selected)
                    .filter(|(_, on)| **on)
                    .map(|(c, _)| Value::from(c.value))
                    .collect();
                out.insert(key.to_string(), Value::Array(values));
            }
            (_, FieldValue::Toggle(on)) => {
                out.insert(key.to_string(), Value::Bool(*on));
            }
            (_, FieldValue::Text(s)) => {
                out.insert(key.to_string(), Value::from(s.as_str()));
            }
            // Kind and value are created together in `new`/`clear`
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::forms::schema::FormVariant;
    use serde_json::json;

    fn field(variant: FormVariant, key: &str) -> FormField {
        let spec = variant
            .fields()
            .into_iter()
            .find(|f| f.key == key)
            .unwrap();
        FormField::new(spec)
    }

    mod text {
        use super::*;

        #[test]
        fn test_push_and_pop() {
            let mut f = field(FormVariant::Business, "firstName");
            f.push_char('A');
            f.push_char('d');
            assert_eq!(f.as_text(), "Ad");
            f.pop_char();
            assert_eq!(f.as_text(), "A");
        }

        #[test]
        fn test_whitespace_is_not_filled() {
            let mut f = field(FormVariant::Business, "firstName");
            f.set_text("   ");
            assert!(!f.is_filled());
        }

        #[test]
        fn test_option_navigation_is_noop() {
            let mut f = field(FormVariant::Business, "email");
            f.next_option();
            f.toggle();
            assert_eq!(f.value, FieldValue::Text(String::new()));
        }
    }

    mod select {
        use super::*;

        #[test]
        fn test_next_option_starts_at_first() {
            let mut f = field(FormVariant::Course, "skillLevel");
            assert!(!f.is_filled());
            f.next_option();
            assert_eq!(f.value, FieldValue::Choice(Some(0)));
            assert_eq!(f.display_value(), "Beginner");
        }

        #[test]
        fn test_prev_option_wraps_to_last() {
            let mut f = field(FormVariant::Course, "skillLevel");
            f.prev_option();
            assert_eq!(f.value, FieldValue::Choice(Some(2)));
            f.next_option();
            assert_eq!(f.value, FieldValue::Choice(Some(0)));
        }

        #[test]
        fn test_backspace_clears_choice() {
            let mut f = field(FormVariant::Course, "skillLevel");
            f.select(1);
            f.pop_char();
            assert!(!f.is_filled());
        }

        #[test]
        fn test_select_out_of_range_is_ignored() {
            let mut f = field(FormVariant::Course, "skillLevel");
            f.select(42);
            assert!(!f.is_filled());
        }
    }

    mod multi_select {
        use super::*;

        #[test]
        fn test_toggle_under_cursor() {
            let mut f = field(FormVariant::Trading, "tradingInterest");
            f.next_option();
            f.toggle();
            f.next_option();
            f.next_option();
            f.toggle();
            assert_eq!(f.display_value(), "Forex, Options");
            f.toggle();
            assert_eq!(f.display_value(), "Forex");
        }

        #[test]
        fn test_write_json_as_array() {
            let mut f = field(FormVariant::Trading, "tradingInterest");
            f.select(0);
            f.select(2);
            let mut out = Map::new();
            f.write_json(&mut out);
            assert_eq!(out["tradingInterest"], json!(["stocks", "crypto"]));
        }
    }

    mod country {
        use super::*;

        #[test]
        fn test_flattened_code_and_name() {
            let mut f = field(FormVariant::Course, "country");
            f.select(1);
            let mut out = Map::new();
            f.write_json(&mut out);
            assert_eq!(out["countryCode"], json!("GB"));
            assert_eq!(out["countryName"], json!("United Kingdom"));
            assert!(!out.contains_key("country"));
        }

        #[test]
        fn test_unset_country_writes_empty_strings() {
            let f = field(FormVariant::Course, "country");
            let mut out = Map::new();
            f.write_json(&mut out);
            assert_eq!(out["countryCode"], json!(""));
            assert_eq!(out["countryName"], json!(""));
        }
    }

    mod checkbox {
        use super::*;

        #[test]
        fn test_toggle_and_clear() {
            let mut f = field(FormVariant::Course, "newsletter");
            f.toggle();
            assert_eq!(f.value, FieldValue::Toggle(true));
            assert_eq!(f.display_value(), "[x] Yes");
            f.clear();
            assert_eq!(f.value, FieldValue::Toggle(false));
        }
    }
}
