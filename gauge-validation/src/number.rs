// Number validator with fixed or deferred bounds

use crate::client::ClientRule;
use crate::messages::{
    INPUT_LABEL, INTEGER_MESSAGE, INVALID_MESSAGE, NUMBER_MESSAGE, TOO_BIG_MESSAGE,
    TOO_SMALL_MESSAGE,
};
use crate::{Bound, BoundError, FieldValue, ResolvedBounds, Subject, Violation, ViolationKind};
use once_cell::sync::Lazy;
use regex::Regex;
use std::cmp::Ordering;
use tracing::trace;

pub const INTEGER_PATTERN: &str = r"^\s*[+-]?\d+\s*$";
pub const NUMBER_PATTERN: &str = r"^\s*[-+]?[0-9]*\.?[0-9]+([eE][-+]?[0-9]+)?\s*$";

static INTEGER_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(INTEGER_PATTERN).unwrap());
static NUMBER_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(NUMBER_PATTERN).unwrap());

/// Which entry point is checking; decides the message for non-numbers and
/// whether to stop at the first failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Attribute,
    Value,
}

/// Validates that a value is a number (or an integer) within optional bounds.
///
/// Bounds are either fixed or [`Bound::Deferred`], computed from the subject
/// on every call. Resolution never mutates the validator, so one instance can
/// be shared between threads.
///
/// # Examples
///
/// ```
/// use gauge_validation::{Bound, NumberValidator, Record, Subject, ViolationKind};
///
/// let validator = NumberValidator::integer()
///     .with_min(1)
///     .with_max(Bound::deferred(|subject: &dyn Subject, _: &str| {
///         subject.value("stock").to_number().unwrap_or(0.0)
///     }))
///     .finalized();
///
/// let order = Record::new().with("stock", 10).with("qty", 15);
/// let violations = validator.validate(&order, "qty").unwrap();
///
/// assert_eq!(violations.len(), 1);
/// assert_eq!(violations[0].kind, ViolationKind::AboveMaximum);
/// assert_eq!(violations[0].render("Quantity"), "Quantity must be no greater than 10.");
/// ```
#[derive(Debug, Clone)]
pub struct NumberValidator {
    /// Only accept integers
    pub integer_only: bool,

    pub min: Option<Bound>,
    pub max: Option<Bound>,

    /// Message for non-numbers and pattern mismatches
    pub message: Option<String>,

    /// Message for values below `min`; supports `{min}`
    pub too_small: Option<String>,

    /// Message for values above `max`; supports `{max}`
    pub too_big: Option<String>,

    pub integer_pattern: Regex,
    pub number_pattern: Regex,

    /// Hint for hosts and clients: empty values are not validated
    pub skip_on_empty: bool,
}

impl NumberValidator {
    /// Validator accepting any number.
    pub fn new() -> Self {
        Self {
            integer_only: false,
            min: None,
            max: None,
            message: None,
            too_small: None,
            too_big: None,
            integer_pattern: INTEGER_REGEX.clone(),
            number_pattern: NUMBER_REGEX.clone(),
            skip_on_empty: true,
        }
    }

    /// Validator accepting integers only.
    pub fn integer() -> Self {
        Self {
            integer_only: true,
            ..Self::new()
        }
    }

    pub fn with_min(mut self, min: impl Into<Bound>) -> Self {
        self.min = Some(min.into());
        self
    }

    pub fn with_max(mut self, max: impl Into<Bound>) -> Self {
        self.max = Some(max.into());
        self
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn with_too_small(mut self, message: impl Into<String>) -> Self {
        self.too_small = Some(message.into());
        self
    }

    pub fn with_too_big(mut self, message: impl Into<String>) -> Self {
        self.too_big = Some(message.into());
        self
    }

    pub fn with_integer_pattern(mut self, pattern: Regex) -> Self {
        self.integer_pattern = pattern;
        self
    }

    pub fn with_number_pattern(mut self, pattern: Regex) -> Self {
        self.number_pattern = pattern;
        self
    }

    pub fn skip_on_empty(mut self, skip: bool) -> Self {
        self.skip_on_empty = skip;
        self
    }

    /// Fill in default messages that were not configured.
    ///
    /// `too_small`/`too_big` are only defaulted when the matching bound is
    /// set. Configured messages are never overwritten, so calling this more
    /// than once is harmless.
    pub fn finalize(&mut self) {
        if self.message.is_none() {
            self.message = Some(self.default_message().to_string());
        }
        if self.min.is_some() && self.too_small.is_none() {
            self.too_small = Some(TOO_SMALL_MESSAGE.to_string());
        }
        if self.max.is_some() && self.too_big.is_none() {
            self.too_big = Some(TOO_BIG_MESSAGE.to_string());
        }
    }

    /// Builder form of [`finalize`](Self::finalize).
    pub fn finalized(mut self) -> Self {
        self.finalize();
        self
    }

    fn default_message(&self) -> &'static str {
        if self.integer_only {
            INTEGER_MESSAGE
        } else {
            NUMBER_MESSAGE
        }
    }

    /// Template used for non-numbers and pattern mismatches.
    pub fn message_template(&self) -> &str {
        self.message.as_deref().unwrap_or_else(|| self.default_message())
    }

    pub fn too_small_template(&self) -> &str {
        self.too_small.as_deref().unwrap_or(TOO_SMALL_MESSAGE)
    }

    pub fn too_big_template(&self) -> &str {
        self.too_big.as_deref().unwrap_or(TOO_BIG_MESSAGE)
    }

    /// The pattern in effect for this validator.
    pub fn pattern(&self) -> &Regex {
        if self.integer_only {
            &self.integer_pattern
        } else {
            &self.number_pattern
        }
    }

    /// Resolve `min`/`max` for one call. The result is local to the caller.
    pub fn resolve_bounds(
        &self,
        subject: &dyn Subject,
        field: &str,
    ) -> Result<ResolvedBounds, BoundError> {
        let min = match &self.min {
            Some(bound) => Some(bound.resolve("min", subject, field)?),
            None => None,
        };
        let max = match &self.max {
            Some(bound) => Some(bound.resolve("max", subject, field)?),
            None => None,
        };
        Ok(ResolvedBounds { min, max })
    }

    /// Bounds for the context-free path; deferred bounds are an error.
    pub fn fixed_bounds(&self) -> Result<ResolvedBounds, BoundError> {
        let fixed = |bound: &Option<Bound>, name: &'static str| match bound {
            Some(Bound::Fixed(value)) => Ok(Some(*value)),
            Some(Bound::Deferred(_)) => Err(BoundError::Unresolved { bound: name }),
            None => Ok(None),
        };
        Ok(ResolvedBounds {
            min: fixed(&self.min, "min")?,
            max: fixed(&self.max, "max")?,
        })
    }

    /// Validate `field` of `subject`, collecting every applicable violation.
    ///
    /// A value that is not a number at all yields a single violation; other
    /// values are checked against the pattern, `min` and `max`
    /// independently. An empty result means the value passed.
    pub fn validate(
        &self,
        subject: &dyn Subject,
        field: &str,
    ) -> Result<Vec<Violation>, BoundError> {
        let bounds = self.resolve_bounds(subject, field)?;
        let value = subject.value(field);
        let violations = self.check(&value, &bounds, Mode::Attribute);
        trace!(field, violations = violations.len(), "number rule checked");
        Ok(violations)
    }

    /// Validate `field` and append rendered errors to the subject.
    ///
    /// Returns `true` when the field passed.
    pub fn validate_attribute(
        &self,
        subject: &mut dyn Subject,
        field: &str,
    ) -> Result<bool, BoundError> {
        let violations = self.validate(&*subject, field)?;
        if violations.is_empty() {
            return Ok(true);
        }

        let label = subject.label(field);
        let value = subject.value(field).to_string();
        for violation in violations {
            subject.add_error(violation.into_error(field, &label).with_value(value.clone()));
        }
        Ok(false)
    }

    /// Validate a bare value with no subject, returning only the first
    /// violation. Bounds must be fixed.
    ///
    /// ```
    /// use gauge_validation::NumberValidator;
    ///
    /// let validator = NumberValidator::new().with_max(100);
    /// assert!(validator.validate_value(&"42.5".into()).unwrap().is_none());
    ///
    /// let violation = validator.validate_value(&true.into()).unwrap().unwrap();
    /// assert_eq!(violation.render("the input value"), "the input value is invalid.");
    /// ```
    pub fn validate_value(&self, value: &FieldValue) -> Result<Option<Violation>, BoundError> {
        let bounds = self.fixed_bounds()?;
        Ok(self.check(value, &bounds, Mode::Value).into_iter().next())
    }

    /// Like [`validate_value`](Self::validate_value), rendered with the
    /// generic input label.
    pub fn validate_value_message(&self, value: &FieldValue) -> Result<Option<String>, BoundError> {
        Ok(self
            .validate_value(value)?
            .map(|violation| violation.render(INPUT_LABEL)))
    }

    /// Describe this rule for a client-side pre-submission check.
    pub fn client_rule(
        &self,
        subject: &dyn Subject,
        field: &str,
    ) -> Result<ClientRule, BoundError> {
        let bounds = self.resolve_bounds(subject, field)?;
        Ok(ClientRule::describe(self, &subject.label(field), &bounds))
    }

    fn check(&self, value: &FieldValue, bounds: &ResolvedBounds, mode: Mode) -> Vec<Violation> {
        if value.is_not_number() {
            let template = match mode {
                Mode::Attribute => self.message_template(),
                Mode::Value => INVALID_MESSAGE,
            };
            return vec![Violation::new(ViolationKind::InvalidType, template)];
        }

        let mut violations = Vec::new();

        if !self.pattern().is_match(&value.normalized()) {
            violations.push(Violation::new(
                ViolationKind::PatternMismatch,
                self.message_template(),
            ));
            if mode == Mode::Value {
                return violations;
            }
        }

        // Bounds are only compared for values that coerce to a finite number.
        let Some(number) = value.to_numeric() else {
            return violations;
        };

        if let Some(min) = bounds.min {
            if number.compare(min) == Some(Ordering::Less) {
                violations.push(
                    Violation::new(ViolationKind::BelowMinimum, self.too_small_template())
                        .with_param("min", min),
                );
            }
        }
        if let Some(max) = bounds.max {
            if number.compare(max) == Some(Ordering::Greater) {
                violations.push(
                    Violation::new(ViolationKind::AboveMaximum, self.too_big_template())
                        .with_param("max", max),
                );
            }
        }

        if mode == Mode::Value {
            violations.truncate(1);
        }
        violations
    }
}

impl Default for NumberValidator {
    fn default() -> Self {
        Self::new()
    }
}
