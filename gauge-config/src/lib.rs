//! Rule configuration for Gauge
//!
//! Loads number rules from TOML or JSON files and turns them into a
//! [`RuleSet`](gauge_validation::RuleSet).
//!
//! ```
//! use gauge_config::{ConfigLoader, FileFormat};
//! use gauge_validation::Record;
//!
//! let file = ConfigLoader::new(FileFormat::Toml)
//!     .parse(r#"
//!         [rules.qty]
//!         integer_only = true
//!         min = 1
//!         max = "100"
//!     "#)
//!     .unwrap();
//! let rules = file.into_rule_set().unwrap();
//!
//! let order = Record::new().with("qty", 250);
//! let errors = rules.check(&order).unwrap();
//! assert_eq!(errors.errors[0].message, "Qty must be no greater than 100.");
//! ```

pub mod error;
pub mod loader;
pub mod rules;

pub use error::{ConfigError, Result};
pub use loader::{ConfigLoader, FileFormat, load};
pub use rules::{RuleConfig, RuleFile};
