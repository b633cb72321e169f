// Rule sets: validators registered against fields

use crate::{BoundError, ClientRule, NumberValidator, Subject, ValidationErrors};
use serde_json::Value;
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{debug, trace};

#[derive(Debug, Clone)]
struct FieldRule {
    field: String,
    validator: Arc<NumberValidator>,
}

/// Validators registered against field names and run over a [`Subject`].
///
/// Registered validators are finalized. A field may carry several rules;
/// they run in registration order. Empty values are skipped for validators
/// with `skip_on_empty` set.
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    rules: Vec<FieldRule>,
}

impl RuleSet {
    /// Create an empty rule set
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a validator for a field
    pub fn rule(mut self, field: impl Into<String>, validator: NumberValidator) -> Self {
        self.push(field, validator);
        self
    }

    /// Add the same validator for several fields
    pub fn rule_for_fields(mut self, fields: &[&str], validator: NumberValidator) -> Self {
        let validator = Arc::new(validator.finalized());
        for field in fields {
            self.rules.push(FieldRule {
                field: (*field).to_string(),
                validator: Arc::clone(&validator),
            });
        }
        self
    }

    pub fn push(&mut self, field: impl Into<String>, validator: NumberValidator) {
        self.rules.push(FieldRule {
            field: field.into(),
            validator: Arc::new(validator.finalized()),
        });
    }

    /// Mutable access to the first validator registered for `field`, e.g. to
    /// attach a deferred bound to a rule loaded from configuration.
    pub fn rule_mut(&mut self, field: &str) -> Option<&mut NumberValidator> {
        self.rules
            .iter_mut()
            .find(|rule| rule.field == field)
            .map(|rule| Arc::make_mut(&mut rule.validator))
    }

    pub fn get(&self, field: &str) -> Option<&NumberValidator> {
        self.rules
            .iter()
            .find(|rule| rule.field == field)
            .map(|rule| rule.validator.as_ref())
    }

    /// Distinct field names in registration order
    pub fn fields(&self) -> Vec<&str> {
        let mut fields: Vec<&str> = Vec::new();
        for rule in &self.rules {
            if !fields.contains(&rule.field.as_str()) {
                fields.push(&rule.field);
            }
        }
        fields
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Run every rule and collect the rendered errors without touching the
    /// subject's own error collection.
    pub fn check(&self, subject: &dyn Subject) -> Result<ValidationErrors, BoundError> {
        let mut errors = ValidationErrors::default();

        for rule in &self.rules {
            let value = subject.value(&rule.field);
            if rule.validator.skip_on_empty && value.is_empty() {
                trace!(field = %rule.field, "skipping empty value");
                continue;
            }

            let violations = rule.validator.validate(subject, &rule.field)?;
            if violations.is_empty() {
                continue;
            }

            let label = subject.label(&rule.field);
            let shown = value.to_string();
            for violation in violations {
                errors.add(
                    violation
                        .into_error(&rule.field, &label)
                        .with_value(shown.clone()),
                );
            }
        }

        debug!(rules = self.rules.len(), errors = errors.len(), "rule set checked");
        Ok(errors)
    }

    /// Run every rule, appending errors to the subject. Returns `true` when
    /// the subject passed.
    pub fn validate(&self, subject: &mut dyn Subject) -> Result<bool, BoundError> {
        let errors = self.check(&*subject)?;
        let valid = errors.is_empty();
        for error in errors {
            subject.add_error(error);
        }
        Ok(valid)
    }

    /// Client descriptors for every rule, keyed by field.
    pub fn client_rules(&self, subject: &dyn Subject) -> Result<Value, BoundError> {
        let mut by_field: BTreeMap<&str, Vec<ClientRule>> = BTreeMap::new();
        for rule in &self.rules {
            by_field
                .entry(rule.field.as_str())
                .or_default()
                .push(rule.validator.client_rule(subject, &rule.field)?);
        }
        Ok(serde_json::to_value(by_field).unwrap_or(Value::Null))
    }
}
