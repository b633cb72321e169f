//! Default message templates and placeholder rendering.
//!
//! Templates use `{name}` placeholders. `{attribute}` is always the field's
//! display label; any other placeholder is looked up in the violation params
//! and left untouched when absent.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use serde_json::Value;
use std::collections::BTreeMap;

pub const INTEGER_MESSAGE: &str = "{attribute} must be an integer.";
pub const NUMBER_MESSAGE: &str = "{attribute} must be a number.";
pub const TOO_SMALL_MESSAGE: &str = "{attribute} must be no less than {min}.";
pub const TOO_BIG_MESSAGE: &str = "{attribute} must be no greater than {max}.";

/// Used by the context-free path for values that are not numbers at all.
pub const INVALID_MESSAGE: &str = "{attribute} is invalid.";

/// Label substituted for `{attribute}` when there is no field.
pub const INPUT_LABEL: &str = "the input value";

static PLACEHOLDER: Lazy<Regex> = Lazy::new(|| Regex::new(r"\{(\w+)\}").unwrap());

/// Substitute `{attribute}` and `{param}` placeholders.
pub fn format_message(template: &str, label: &str, params: &BTreeMap<String, Value>) -> String {
    PLACEHOLDER
        .replace_all(template, |caps: &Captures<'_>| {
            let name = &caps[1];
            if name == "attribute" {
                return label.to_string();
            }
            match params.get(name) {
                Some(Value::String(s)) => s.clone(),
                // 10.0 renders as "10", like the bound it came from
                Some(Value::Number(n)) if n.is_f64() => n.as_f64().unwrap_or_default().to_string(),
                Some(value) => value.to_string(),
                None => caps[0].to_string(),
            }
        })
        .into_owned()
}

/// Display label derived from a field name: `cat_id` -> `Cat Id`,
/// `maxAmount` -> `Max Amount`.
pub fn humanize(field: &str) -> String {
    let mut words: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut prev_lower = false;

    for c in field.chars() {
        if matches!(c, '_' | '-' | '.' | ' ') {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            prev_lower = false;
            continue;
        }
        if c.is_uppercase() && prev_lower && !current.is_empty() {
            words.push(std::mem::take(&mut current));
        }
        prev_lower = c.is_lowercase() || c.is_ascii_digit();
        current.push(c);
    }
    if !current.is_empty() {
        words.push(current);
    }

    words
        .iter()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}
