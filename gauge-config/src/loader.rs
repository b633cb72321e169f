// Rule file loaders

use crate::{ConfigError, Result, RuleFile};
use std::fs;
use std::path::Path;
use tracing::info;

/// Supported rule file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    Json,
    Toml,
}

impl FileFormat {
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "json" => Some(FileFormat::Json),
            "toml" => Some(FileFormat::Toml),
            _ => None,
        }
    }
}

/// Rule file loader
#[derive(Debug, Clone, Copy)]
pub struct ConfigLoader {
    format: FileFormat,
}

impl ConfigLoader {
    pub fn new(format: FileFormat) -> Self {
        Self { format }
    }

    /// Auto-detect format from file extension
    pub fn auto(path: impl AsRef<Path>) -> Result<Self> {
        let ext = path
            .as_ref()
            .extension()
            .and_then(|s| s.to_str())
            .ok_or_else(|| ConfigError::LoadError("No file extension found".to_string()))?;

        let format = FileFormat::from_extension(ext)
            .ok_or_else(|| ConfigError::UnsupportedFormat(ext.to_string()))?;

        Ok(Self::new(format))
    }

    pub fn format(&self) -> FileFormat {
        self.format
    }

    /// Load rule definitions from a file
    pub fn load_file(&self, path: impl AsRef<Path>) -> Result<RuleFile> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let file = self.parse(&content)?;
        info!(path = %path.display(), rules = file.rules.len(), "loaded rule file");
        Ok(file)
    }

    /// Parse rule definitions from a string
    pub fn parse(&self, content: &str) -> Result<RuleFile> {
        let file: RuleFile = match self.format {
            FileFormat::Json => serde_json::from_str(content)
                .map_err(|e| ConfigError::ParseError(format!("JSON parse error: {}", e)))?,
            FileFormat::Toml => toml::from_str(content)
                .map_err(|e| ConfigError::ParseError(format!("TOML parse error: {}", e)))?,
        };
        file.check()?;
        Ok(file)
    }
}

/// Load a rule file, detecting the format from its extension.
pub fn load(path: impl AsRef<Path>) -> Result<RuleFile> {
    let path = path.as_ref();
    ConfigLoader::auto(path)?.load_file(path)
}
