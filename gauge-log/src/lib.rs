//! Gauge logging setup
//!
//! Gauge crates log through [`tracing`]. This crate installs a subscriber
//! configured from environment variables so applications get consistent
//! output with one call.
//!
//! # Usage
//!
//! ```rust
//! gauge_log::init();
//!
//! tracing::info!(rules = 3, "rule file loaded");
//! ```
//!
//! # Environment Variables
//!
//! - `GAUGE_DEBUG=1` - Enable debug logging
//! - `GAUGE_LOG_LEVEL=trace|debug|info|warn|error|off` - Set log level
//! - `GAUGE_LOG_FORMAT=pretty|compact|json` - Set output format
//! - `GAUGE_LOG_COLOR=1|0` - Enable/disable ANSI colors
//! - `RUST_LOG` - Full filter directives; overrides `GAUGE_LOG_LEVEL`

use once_cell::sync::Lazy;
use std::env;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use tracing_subscriber::EnvFilter;

// ============================================================================
// Log Levels
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Level {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
    Off,
}

impl Level {
    /// Directive understood by [`EnvFilter`].
    pub fn as_filter(&self) -> &'static str {
        match self {
            Level::Trace => "trace",
            Level::Debug => "debug",
            Level::Info => "info",
            Level::Warn => "warn",
            Level::Error => "error",
            Level::Off => "off",
        }
    }
}

impl FromStr for Level {
    type Err = UnknownValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "trace" => Ok(Level::Trace),
            "debug" => Ok(Level::Debug),
            "info" => Ok(Level::Info),
            "warn" | "warning" => Ok(Level::Warn),
            "error" => Ok(Level::Error),
            "off" | "none" => Ok(Level::Off),
            other => Err(UnknownValue(other.to_string())),
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_filter().to_uppercase())
    }
}

// ============================================================================
// Log Format
// ============================================================================

/// Output format for log lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// Multi-line, human oriented
    Pretty,
    /// Single line per event
    Compact,
    /// One JSON object per event
    Json,
}

impl FromStr for Format {
    type Err = UnknownValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pretty" => Ok(Format::Pretty),
            "compact" => Ok(Format::Compact),
            "json" => Ok(Format::Json),
            other => Err(UnknownValue(other.to_string())),
        }
    }
}

/// Unrecognized level or format name.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown logging value: {0}")]
pub struct UnknownValue(pub String);

// ============================================================================
// Configuration
// ============================================================================

static CONFIG: Lazy<LogConfig> = Lazy::new(LogConfig::from_env);

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    pub level: Level,
    pub format: Format,
    /// ANSI colors (ignored by the JSON format)
    pub color: bool,
    /// Include the event target (module path)
    pub targets: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: Level::Info,
            format: Format::Json,
            color: false,
            targets: true,
        }
    }
}

impl LogConfig {
    /// Read configuration from `GAUGE_*` environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Read configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let flag = |key: &str| {
            lookup(key).map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        };

        let debug = flag("GAUGE_DEBUG").unwrap_or(false);

        let level = lookup("GAUGE_LOG_LEVEL")
            .and_then(|s| s.parse().ok())
            .unwrap_or(if debug { Level::Debug } else { Level::Info });

        let format = lookup("GAUGE_LOG_FORMAT")
            .and_then(|s| s.parse().ok())
            .unwrap_or(Format::Json);

        // Color by default only on a terminal that has not opted out.
        let color = flag("GAUGE_LOG_COLOR")
            .unwrap_or_else(|| lookup("NO_COLOR").is_none() && lookup("TERM").is_some());

        Self {
            level,
            format,
            color: color && format != Format::Json,
            targets: true,
        }
    }

    pub fn level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    pub fn format(mut self, format: Format) -> Self {
        self.format = format;
        self
    }

    pub fn color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    pub fn targets(mut self, targets: bool) -> Self {
        self.targets = targets;
        self
    }

    /// Filter from `RUST_LOG` when set, otherwise from `level`.
    pub fn filter(&self) -> EnvFilter {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(self.level.as_filter()))
    }

    /// Install a global subscriber. Returns `false` if one was already set.
    pub fn init(&self) -> bool {
        let builder = tracing_subscriber::fmt()
            .with_env_filter(self.filter())
            .with_ansi(self.color)
            .with_target(self.targets)
            .with_writer(std::io::stderr);

        let result = match self.format {
            Format::Pretty => builder.pretty().try_init(),
            Format::Compact => builder.compact().try_init(),
            #[cfg(feature = "json")]
            Format::Json => builder.json().try_init(),
            #[cfg(not(feature = "json"))]
            Format::Json => builder.compact().try_init(),
        };
        result.is_ok()
    }
}

// ============================================================================
// Public API
// ============================================================================

/// Global configuration, read from the environment on first use.
pub fn config() -> &'static LogConfig {
    &CONFIG
}

/// Install the global subscriber from the environment configuration.
///
/// Safe to call more than once; later calls are no-ops.
pub fn init() -> bool {
    config().init()
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn test_level_ordering() {
        assert!(Level::Trace < Level::Debug);
        assert!(Level::Debug < Level::Info);
        assert!(Level::Warn < Level::Error);
        assert!(Level::Error < Level::Off);
    }

    #[test]
    fn test_level_from_str() {
        assert_eq!("debug".parse::<Level>(), Ok(Level::Debug));
        assert_eq!("DEBUG".parse::<Level>(), Ok(Level::Debug));
        assert_eq!("warning".parse::<Level>(), Ok(Level::Warn));
        assert!("verbose".parse::<Level>().is_err());
        assert_eq!(Level::Warn.to_string(), "WARN");
    }

    #[test]
    fn test_format_from_str() {
        assert_eq!("pretty".parse::<Format>(), Ok(Format::Pretty));
        assert_eq!("compact".parse::<Format>(), Ok(Format::Compact));
        assert_eq!("json".parse::<Format>(), Ok(Format::Json));
        assert_eq!(
            "xml".parse::<Format>().unwrap_err().to_string(),
            "unknown logging value: xml"
        );
    }

    #[test]
    fn test_defaults_without_env() {
        let config = LogConfig::from_lookup(lookup(&[]));
        assert_eq!(config.level, Level::Info);
        assert_eq!(config.format, Format::Json);
        assert!(!config.color);
    }

    #[test]
    fn test_debug_flag_lowers_level() {
        let config = LogConfig::from_lookup(lookup(&[("GAUGE_DEBUG", "true")]));
        assert_eq!(config.level, Level::Debug);

        let config = LogConfig::from_lookup(lookup(&[
            ("GAUGE_DEBUG", "1"),
            ("GAUGE_LOG_LEVEL", "warn"),
        ]));
        assert_eq!(config.level, Level::Warn);
    }

    #[test]
    fn test_color_only_for_text_formats() {
        let config = LogConfig::from_lookup(lookup(&[
            ("GAUGE_LOG_FORMAT", "pretty"),
            ("TERM", "xterm"),
        ]));
        assert!(config.color);

        let config = LogConfig::from_lookup(lookup(&[
            ("GAUGE_LOG_FORMAT", "pretty"),
            ("TERM", "xterm"),
            ("NO_COLOR", "1"),
        ]));
        assert!(!config.color);

        let config = LogConfig::from_lookup(lookup(&[("GAUGE_LOG_COLOR", "1")]));
        assert!(!config.color);
    }

    #[test]
    fn test_init_twice() {
        let config = LogConfig::default().format(Format::Compact).level(Level::Off);
        config.init();
        assert!(!config.init());
    }
}
