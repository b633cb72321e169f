// Gauge - numeric field validation with deferred bounds
//
// Re-exports the validation core and, behind features, logging setup,
// file-based rule configuration, and settings search.

// Re-export core functionality
pub use gauge_validation::*;

// Re-export optional crates
#[cfg(feature = "log")]
pub use gauge_log;

#[cfg(feature = "config")]
pub use gauge_config;

#[cfg(feature = "settings")]
pub use gauge_settings;

// Prelude for common imports
pub mod prelude {
    pub use crate::{
        Bound,
        ClientRule,
        FieldValue,
        NumberValidator,
        Numeric,
        Record,
        RuleSet,
        Subject,
        ValidationError,
        ValidationErrors,
        Violation,
        ViolationKind,
    };
}
