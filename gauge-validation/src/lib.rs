//! Numeric field validation for Gauge
//!
//! Validates that a field holds a number (or an integer) within optional
//! `min`/`max` bounds. Bounds can be fixed or computed per call from the
//! record being validated, and every rule can describe itself to a
//! client-side script for pre-submission checks.
//!
//! # Examples
//!
//! ## Validating a record
//!
//! ```
//! use gauge_validation::{NumberValidator, Record, RuleSet};
//!
//! let rules = RuleSet::new()
//!     .rule("age", NumberValidator::integer().with_min(18).with_max(130))
//!     .rule("height", NumberValidator::new().with_min(0.3));
//!
//! let mut form = Record::new()
//!     .with("age", "17")
//!     .with("height", "1.82")
//!     .with_label("age", "Your age");
//!
//! assert!(!rules.validate(&mut form).unwrap());
//! assert_eq!(form.errors()[0].message, "Your age must be no less than 18.");
//! ```
//!
//! ## Bounds computed from the record
//!
//! ```
//! use gauge_validation::{Bound, NumberValidator, Record, Subject};
//!
//! let validator = NumberValidator::integer()
//!     .with_max(Bound::deferred(|subject: &dyn Subject, _field: &str| {
//!         subject.value("seats_left").to_number().unwrap_or(0.0)
//!     }))
//!     .finalized();
//!
//! let booking = Record::new().with("seats_left", 2).with("seats", 3);
//! assert_eq!(validator.validate(&booking, "seats").unwrap().len(), 1);
//! ```
//!
//! ## Client descriptors
//!
//! ```
//! use gauge_validation::{NumberValidator, Record};
//!
//! let validator = NumberValidator::integer().with_min(1).finalized();
//! let rule = validator.client_rule(&Record::new(), "qty").unwrap();
//!
//! assert_eq!(rule.to_json()["min"], 1);
//! assert_eq!(rule.to_json()["tooSmall"], "Qty must be no less than 1.");
//! ```

mod bound;
mod client;
mod errors;
pub mod messages;
mod number;
mod rules;
mod traits;
mod value;

pub use bound::*;
pub use client::*;
pub use errors::*;
pub use number::*;
pub use rules::*;
pub use traits::*;
pub use value::*;
