// Rule definitions as they appear in configuration files

use crate::{ConfigError, Result};
use gauge_validation::{Bound, NumberValidator, Numeric, RuleSet};
use regex::Regex;
use serde::Deserialize;
use std::collections::BTreeMap;

fn default_true() -> bool {
    true
}

/// One number rule.
///
/// Bounds accept numbers or numeric strings (`min = "5"`); either way they
/// are stored as numbers. Deferred bounds cannot be written in a file and
/// are attached in code through [`RuleSet::rule_mut`].
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RuleConfig {
    #[serde(default)]
    pub integer_only: bool,

    pub min: Option<Numeric>,
    pub max: Option<Numeric>,

    pub message: Option<String>,
    pub too_small: Option<String>,
    pub too_big: Option<String>,

    /// Overrides the default integer pattern
    pub integer_pattern: Option<String>,

    /// Overrides the default number pattern
    pub number_pattern: Option<String>,

    #[serde(default = "default_true")]
    pub skip_on_empty: bool,

    /// Additional fields validated by the same rule
    #[serde(default)]
    pub fields: Vec<String>,
}

impl RuleConfig {
    /// Check bounds ordering and pattern syntax.
    pub fn check(&self, field: &str) -> Result<()> {
        if let (Some(min), Some(max)) = (self.min, self.max) {
            if min.as_f64() > max.as_f64() {
                return Err(ConfigError::ValidationError(format!(
                    "{}: min ({}) is greater than max ({})",
                    field, min, max
                )));
            }
        }
        compile(field, self.integer_pattern.as_deref())?;
        compile(field, self.number_pattern.as_deref())?;
        Ok(())
    }

    /// Build the finalized validator described by this rule.
    pub fn to_validator(&self, field: &str) -> Result<NumberValidator> {
        let mut validator = NumberValidator {
            integer_only: self.integer_only,
            min: self.min.map(Bound::Fixed),
            max: self.max.map(Bound::Fixed),
            message: self.message.clone(),
            too_small: self.too_small.clone(),
            too_big: self.too_big.clone(),
            skip_on_empty: self.skip_on_empty,
            ..NumberValidator::new()
        };
        if let Some(pattern) = compile(field, self.integer_pattern.as_deref())? {
            validator.integer_pattern = pattern;
        }
        if let Some(pattern) = compile(field, self.number_pattern.as_deref())? {
            validator.number_pattern = pattern;
        }
        Ok(validator.finalized())
    }
}

fn compile(field: &str, pattern: Option<&str>) -> Result<Option<Regex>> {
    pattern
        .map(|p| {
            Regex::new(p).map_err(|source| ConfigError::Pattern {
                field: field.to_string(),
                source,
            })
        })
        .transpose()
}

/// Contents of a rule file: rules keyed by field name.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RuleFile {
    #[serde(default)]
    pub rules: BTreeMap<String, RuleConfig>,
}

impl RuleFile {
    pub fn check(&self) -> Result<()> {
        for (field, rule) in &self.rules {
            rule.check(field)?;
        }
        Ok(())
    }

    /// Build a rule set with one entry per field (plus each rule's extra
    /// `fields`).
    pub fn into_rule_set(self) -> Result<RuleSet> {
        let mut rules = RuleSet::new();
        for (field, rule) in &self.rules {
            let validator = rule.to_validator(field)?;
            for extra in &rule.fields {
                rules.push(extra.clone(), validator.clone());
            }
            rules.push(field.clone(), validator);
        }
        Ok(rules)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gauge_validation::Record;

    fn parse(toml: &str) -> RuleFile {
        toml::from_str(toml).unwrap()
    }

    #[test]
    fn test_string_bounds_become_numbers() {
        let file = parse(
            r#"
            [rules.qty]
            integer_only = true
            min = "5"
            max = "10"
            "#,
        );
        let validator = file.rules["qty"].to_validator("qty").unwrap();

        assert_eq!(
            validator.min.as_ref().and_then(Bound::as_fixed),
            Some(Numeric::Int(5))
        );
        assert_eq!(
            validator.too_big.as_deref(),
            Some("{attribute} must be no greater than {max}.")
        );
    }

    #[test]
    fn test_min_above_max_rejected() {
        let file = parse(
            r#"
            [rules.qty]
            min = 10
            max = 5
            "#,
        );
        assert!(matches!(file.check(), Err(ConfigError::ValidationError(_))));
    }

    #[test]
    fn test_bad_pattern_rejected() {
        let file = parse(
            r#"
            [rules.code]
            integer_only = true
            integer_pattern = "^(\\d+$"
            "#,
        );
        assert!(matches!(
            file.rules["code"].to_validator("code"),
            Err(ConfigError::Pattern { .. })
        ));
    }

    #[test]
    fn test_unknown_keys_rejected() {
        let result: std::result::Result<RuleFile, _> = toml::from_str(
            r#"
            [rules.qty]
            minimum = 1
            "#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_into_rule_set_with_shared_rule() {
        let file = parse(
            r#"
            [rules.status]
            integer_only = true
            fields = ["cat_id"]
            message = "{attribute} must be a whole number."
            "#,
        );
        let rules = file.into_rule_set().unwrap();
        assert_eq!(rules.len(), 2);

        let record = Record::new().with("status", "1").with("cat_id", "x");
        let errors = rules.check(&record).unwrap();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.errors[0].message, "Cat Id must be a whole number.");
    }

    #[test]
    fn test_skip_on_empty_default() {
        let file = parse("[rules.qty]\n");
        assert!(file.rules["qty"].skip_on_empty);

        let file = parse("[rules.qty]\nskip_on_empty = false\n");
        assert!(!file.rules["qty"].skip_on_empty);
    }
}
