// Validation errors

use crate::messages;
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;
use thiserror::Error;

/// Boxed error returned by deferred bound computations.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Why a value was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationKind {
    /// Not interpretable as a number at all (collection, boolean, opaque object)
    InvalidType,
    /// Scalar that does not match the integer/number pattern
    PatternMismatch,
    /// Below the resolved minimum
    BelowMinimum,
    /// Above the resolved maximum
    AboveMaximum,
}

impl ViolationKind {
    /// Constraint name recorded on [`ValidationError`].
    pub fn constraint(&self) -> &'static str {
        match self {
            ViolationKind::InvalidType => "invalidType",
            ViolationKind::PatternMismatch => "pattern",
            ViolationKind::BelowMinimum => "min",
            ViolationKind::AboveMaximum => "max",
        }
    }
}

/// A single failed check: a message template plus its placeholder values.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Violation {
    pub kind: ViolationKind,
    pub template: String,
    pub params: BTreeMap<String, Value>,
}

impl Violation {
    pub fn new(kind: ViolationKind, template: impl Into<String>) -> Self {
        Self {
            kind,
            template: template.into(),
            params: BTreeMap::new(),
        }
    }

    pub fn with_param(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.params.insert(name.into(), value.into());
        self
    }

    pub fn param(&self, name: &str) -> Option<&Value> {
        self.params.get(name)
    }

    /// Render the template, substituting `{attribute}` with `label`.
    pub fn render(&self, label: &str) -> String {
        messages::format_message(&self.template, label, &self.params)
    }

    /// Attribute this violation to a field.
    pub fn into_error(self, field: &str, label: &str) -> ValidationError {
        let message = self.render(label);
        ValidationError::new(field, message)
            .with_constraint(self.kind.constraint())
            .with_params(self.params)
    }
}

/// Validation error for a single field
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationError {
    /// Field name that failed validation
    pub field: String,

    /// Rendered error message
    pub message: String,

    /// Validation constraint that failed
    pub constraint: String,

    /// Value that failed validation (optional)
    pub value: Option<String>,

    /// Placeholder values used to render the message
    pub params: BTreeMap<String, Value>,
}

impl ValidationError {
    /// Create a new validation error
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            constraint: "custom".to_string(),
            value: None,
            params: BTreeMap::new(),
        }
    }

    /// Set the constraint name
    pub fn with_constraint(mut self, constraint: impl Into<String>) -> Self {
        self.constraint = constraint.into();
        self
    }

    /// Set the invalid value
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn with_params(mut self, params: BTreeMap<String, Value>) -> Self {
        self.params = params;
        self
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ValidationError {}

/// Collection of validation errors
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationErrors {
    pub errors: Vec<ValidationError>,
}

impl ValidationErrors {
    /// Create a new validation errors collection
    pub fn new(errors: Vec<ValidationError>) -> Self {
        Self { errors }
    }

    /// Check if there are any errors
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Get the number of errors
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Add an error
    pub fn add(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    /// Get errors for a specific field
    pub fn get_field_errors(&self, field: &str) -> Vec<&ValidationError> {
        self.errors.iter().filter(|e| e.field == field).collect()
    }

    /// Convert to JSON representation
    pub fn to_json(&self) -> Value {
        serde_json::json!({ "errors": self.errors })
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for error in &self.errors {
            writeln!(f, "{}", error)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

impl From<Vec<ValidationError>> for ValidationErrors {
    fn from(errors: Vec<ValidationError>) -> Self {
        Self::new(errors)
    }
}

impl IntoIterator for ValidationErrors {
    type Item = ValidationError;
    type IntoIter = std::vec::IntoIter<ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

/// Failure to produce a concrete bound. Not a validation outcome: these
/// abort the validation call and are left to the host to handle.
#[derive(Debug, Error)]
pub enum BoundError {
    /// A deferred bound computation failed
    #[error("failed to resolve {bound} bound for `{field}`: {source}")]
    Resolution {
        field: String,
        bound: &'static str,
        #[source]
        source: BoxError,
    },

    /// A deferred bound was used where no subject is available
    #[error("{bound} bound is deferred and cannot be resolved without a subject")]
    Unresolved { bound: &'static str },
}
