// Client-side rule descriptors

use crate::messages::format_message;
use crate::{NumberValidator, Numeric, ResolvedBounds};
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;

/// Payload consumed by a browser-side script to re-check a number field
/// before submission.
///
/// Serializes as `{ pattern, message, min?, tooSmall?, max?, tooBig?,
/// skipOnEmpty? }`. Bounds are JSON numbers so client comparisons match the
/// server's numeric comparison.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientRule {
    /// JavaScript regular expression literal, e.g. `/^\s*[+-]?\d+\s*$/`
    pub pattern: String,

    pub message: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<Numeric>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub too_small: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<Numeric>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub too_big: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip_on_empty: Option<u8>,
}

impl ClientRule {
    pub(crate) fn describe(
        validator: &NumberValidator,
        label: &str,
        bounds: &ResolvedBounds,
    ) -> Self {
        let no_params = BTreeMap::new();

        let bound_message = |template: &str, name: &str, value: Numeric| {
            let mut params = BTreeMap::new();
            params.insert(name.to_string(), Value::from(value));
            format_message(template, label, &params)
        };

        Self {
            pattern: js_regex(validator.pattern().as_str()),
            message: format_message(validator.message_template(), label, &no_params),
            min: bounds.min,
            too_small: bounds
                .min
                .map(|min| bound_message(validator.too_small_template(), "min", min)),
            max: bounds.max,
            too_big: bounds
                .max
                .map(|max| bound_message(validator.too_big_template(), "max", max)),
            skip_on_empty: validator.skip_on_empty.then_some(1),
        }
    }

    pub fn to_json(&self) -> Value {
        serde_json::to_value(self).unwrap_or(Value::Null)
    }
}

/// Wrap a pattern as a JavaScript regex literal.
fn js_regex(pattern: &str) -> String {
    let mut out = String::with_capacity(pattern.len() + 2);
    out.push('/');
    let mut escaped = false;
    for c in pattern.chars() {
        if c == '/' && !escaped {
            out.push('\\');
        }
        escaped = c == '\\' && !escaped;
        out.push(c);
    }
    out.push('/');
    out
}
