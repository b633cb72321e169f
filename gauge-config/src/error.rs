// Error types for rule configuration

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    LoadError(String),

    #[error("Unsupported configuration format: {0}")]
    UnsupportedFormat(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Invalid pattern for `{field}`: {source}")]
    Pattern {
        field: String,
        #[source]
        source: regex::Error,
    },

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ConfigError>;
