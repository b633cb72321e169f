//! Settings error types

use gauge_validation::BoundError;
use thiserror::Error;

/// Settings error types
#[derive(Error, Debug)]
pub enum SettingsError {
    /// Setting not found
    #[error("Setting not found: {0}")]
    NotFound(i64),

    /// Id already taken
    #[error("Duplicate setting id: {0}")]
    DuplicateId(i64),

    /// Backing store failure
    #[error("Store error: {0}")]
    Store(String),

    /// Search parameter validation could not run
    #[error(transparent)]
    Bound(#[from] BoundError),
}

/// Result type for settings operations
pub type Result<T> = std::result::Result<T, SettingsError>;
