//! Integration tests for gauge-validation

use gauge_validation::*;
use serde_json::json;

/// A host form model implementing the capability trait directly.
struct OrderForm {
    quantity: String,
    in_stock: i64,
    errors: Vec<ValidationError>,
}

impl Subject for OrderForm {
    fn value(&self, field: &str) -> FieldValue {
        match field {
            "quantity" => self.quantity.as_str().into(),
            "in_stock" => self.in_stock.into(),
            _ => FieldValue::Null,
        }
    }

    fn label(&self, field: &str) -> String {
        match field {
            "quantity" => "Order quantity".to_string(),
            other => messages::humanize(other),
        }
    }

    fn add_error(&mut self, error: ValidationError) {
        self.errors.push(error);
    }
}

fn stock_limited() -> NumberValidator {
    NumberValidator::integer()
        .with_min(1)
        .with_max(Bound::deferred(|subject: &dyn Subject, _: &str| {
            match subject.value("in_stock") {
                FieldValue::Int(n) => n,
                _ => 0,
            }
        }))
        .finalized()
}

#[test]
fn test_host_model_receives_errors() {
    let validator = stock_limited();
    let mut form = OrderForm {
        quantity: "15".to_string(),
        in_stock: 10,
        errors: Vec::new(),
    };

    assert!(!validator.validate_attribute(&mut form, "quantity").unwrap());
    assert_eq!(form.errors.len(), 1);
    assert_eq!(
        form.errors[0].message,
        "Order quantity must be no greater than 10."
    );
    assert_eq!(form.errors[0].params["max"], json!(10));
}

#[test]
fn test_all_violations_reported() {
    let validator = stock_limited();
    let mut form = OrderForm {
        quantity: "-2.5".to_string(),
        in_stock: 10,
        errors: Vec::new(),
    };

    validator.validate_attribute(&mut form, "quantity").unwrap();
    let constraints: Vec<&str> = form.errors.iter().map(|e| e.constraint.as_str()).collect();
    assert_eq!(constraints, vec!["pattern", "min"]);
}

#[test]
fn test_client_payload_shape() {
    let validator = stock_limited();
    let form = OrderForm {
        quantity: String::new(),
        in_stock: 3,
        errors: Vec::new(),
    };

    let payload = validator.client_rule(&form, "quantity").unwrap().to_json();
    assert_eq!(payload["min"], json!(1));
    assert_eq!(payload["max"], json!(3));
    assert_eq!(payload["message"], "Order quantity must be an integer.");
    assert_eq!(payload["tooBig"], "Order quantity must be no greater than 3.");
    assert_eq!(payload["skipOnEmpty"], 1);
}

#[test]
fn test_string_bounds_serialize_as_numbers() {
    let validator: NumberValidator = NumberValidator::new()
        .with_min(serde_json::from_value::<Bound>(json!("5")).unwrap())
        .with_max(serde_json::from_value::<Bound>(json!("10")).unwrap());

    let payload = validator.client_rule(&Record::new(), "n").unwrap().to_json();
    assert_eq!(payload["min"], json!(5));
    assert_eq!(payload["max"], json!(10));
    assert!(payload["min"].is_number());
}

#[test]
fn test_record_from_json_payload() {
    let rules = RuleSet::new()
        .rule("age", NumberValidator::integer().with_min(0))
        .rule("tags", NumberValidator::new());
    let mut record = Record::from_json(json!({"age": true, "tags": [1, 2]}));

    assert!(!rules.validate(&mut record).unwrap());
    assert_eq!(record.field_errors("age")[0].message, "Age must be an integer.");
    assert_eq!(record.field_errors("tags")[0].constraint, "invalidType");
}

#[test]
fn test_validation_errors_json() {
    let rules = RuleSet::new().rule("qty", NumberValidator::integer().with_max(5));
    let record = Record::new().with("qty", 6);

    let errors = rules.check(&record).unwrap();
    let json = errors.to_json();
    assert_eq!(json["errors"][0]["field"], "qty");
    assert_eq!(json["errors"][0]["constraint"], "max");
    assert_eq!(json["errors"][0]["value"], "6");
    assert_eq!(json["errors"][0]["params"]["max"], 5);
}
