//! File loading tests for gauge-config

use gauge_config::{ConfigError, ConfigLoader, FileFormat, load};
use gauge_validation::{Bound, Record, Subject};
use std::io::Write;
use tempfile::NamedTempFile;

fn temp_file(suffix: &str, content: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_load_toml_file() {
    let file = temp_file(
        ".toml",
        r#"
        [rules.qty]
        integer_only = true
        min = 1
        too_small = "Order at least {min}."

        [rules.price]
        min = "0.01"
        max = 1000
        "#,
    );

    let rules = load(file.path()).unwrap().into_rule_set().unwrap();
    let record = Record::new().with("qty", 0).with("price", "1000.5");
    let errors = rules.check(&record).unwrap();

    let messages: Vec<&str> = errors.errors.iter().map(|e| e.message.as_str()).collect();
    assert_eq!(
        messages,
        vec!["Price must be no greater than 1000.", "Order at least 1."]
    );
}

#[test]
fn test_load_json_file() {
    let file = temp_file(
        ".json",
        r#"{"rules": {"age": {"integer_only": true, "min": 0, "max": "130"}}}"#,
    );

    let loader = ConfigLoader::auto(file.path()).unwrap();
    assert_eq!(loader.format(), FileFormat::Json);

    let rules = loader.load_file(file.path()).unwrap().into_rule_set().unwrap();
    let client = rules.client_rules(&Record::new()).unwrap();
    assert_eq!(client["age"][0]["max"], 130);
    assert_eq!(client["age"][0]["message"], "Age must be an integer.");
}

#[test]
fn test_deferred_bound_after_loading() {
    let file = temp_file(".toml", "[rules.seats]\ninteger_only = true\nmin = 1\n");

    let mut rules = load(file.path()).unwrap().into_rule_set().unwrap();
    let rule = rules.rule_mut("seats").unwrap();
    rule.max = Some(Bound::deferred(|subject: &dyn Subject, _: &str| {
        subject.value("available").to_number().unwrap_or(0.0)
    }));

    let booking = Record::new().with("seats", 5).with("available", 4);
    let errors = rules.check(&booking).unwrap();
    assert_eq!(errors.errors[0].message, "Seats must be no greater than 4.");
}

#[test]
fn test_unsupported_extension() {
    let file = temp_file(".yaml", "rules: {}");
    assert!(matches!(
        load(file.path()),
        Err(ConfigError::UnsupportedFormat(ext)) if ext == "yaml"
    ));
}

#[test]
fn test_missing_file() {
    assert!(matches!(
        load("/nonexistent/gauge-rules.toml"),
        Err(ConfigError::IoError(_))
    ));
}

#[test]
fn test_invalid_bounds_rejected_on_load() {
    let file = temp_file(".toml", "[rules.qty]\nmin = 5\nmax = 1\n");
    assert!(matches!(
        load(file.path()),
        Err(ConfigError::ValidationError(_))
    ));
}
