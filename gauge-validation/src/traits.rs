// Host capabilities

use crate::messages::humanize;
use crate::{FieldValue, ValidationError};
use std::collections::BTreeMap;

/// The record being validated, as seen by a validator.
///
/// Hosts implement this for their form models; [`Record`] is a map-backed
/// implementation.
pub trait Subject {
    /// Current value of a field; missing fields read as [`FieldValue::Null`].
    fn value(&self, field: &str) -> FieldValue;

    /// Display label used in messages.
    fn label(&self, field: &str) -> String {
        humanize(field)
    }

    /// Record a validation error against a field.
    fn add_error(&mut self, error: ValidationError);
}

/// Map-backed [`Subject`] with its own error collection.
#[derive(Debug, Clone, Default)]
pub struct Record {
    values: BTreeMap<String, FieldValue>,
    labels: BTreeMap<String, String>,
    errors: Vec<ValidationError>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a record from the members of a JSON object. Non-object input
    /// yields an empty record.
    pub fn from_json(value: serde_json::Value) -> Self {
        let values = match value {
            serde_json::Value::Object(map) => {
                map.into_iter().map(|(k, v)| (k, FieldValue::from(v))).collect()
            }
            _ => BTreeMap::new(),
        };
        Self {
            values,
            ..Self::default()
        }
    }

    pub fn with(mut self, field: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.set(field, value);
        self
    }

    pub fn with_label(mut self, field: impl Into<String>, label: impl Into<String>) -> Self {
        self.labels.insert(field.into(), label.into());
        self
    }

    pub fn set(&mut self, field: impl Into<String>, value: impl Into<FieldValue>) {
        self.values.insert(field.into(), value.into());
    }

    pub fn get(&self, field: &str) -> Option<&FieldValue> {
        self.values.get(field)
    }

    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    pub fn field_errors(&self, field: &str) -> Vec<&ValidationError> {
        self.errors.iter().filter(|e| e.field == field).collect()
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn clear_errors(&mut self) {
        self.errors.clear();
    }
}

impl Subject for Record {
    fn value(&self, field: &str) -> FieldValue {
        self.values.get(field).cloned().unwrap_or_default()
    }

    fn label(&self, field: &str) -> String {
        self.labels
            .get(field)
            .cloned()
            .unwrap_or_else(|| humanize(field))
    }

    fn add_error(&mut self, error: ValidationError) {
        self.errors.push(error);
    }
}
