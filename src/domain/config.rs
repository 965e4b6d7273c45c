//! `wpgen.toml` schema.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::level_filters::LevelFilter;

use crate::domain::AppError;

/// Optional configuration file at the workspace root.
pub const CONFIG_FILE: &str = "wpgen.toml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WpgenConfig {
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub document: DocumentConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl WpgenConfig {
    pub fn parse(content: &str) -> Result<Self, AppError> {
        let config: WpgenConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), AppError> {
        self.output.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

/// Output directory names, relative to the workspace root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    #[serde(default = "default_business_dir")]
    pub business_dir: String,
    #[serde(default = "default_technical_dir")]
    pub technical_dir: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { business_dir: default_business_dir(), technical_dir: default_technical_dir() }
    }
}

impl OutputConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        validate_dir_name("output.business_dir", &self.business_dir)?;
        validate_dir_name("output.technical_dir", &self.technical_dir)?;
        Ok(())
    }
}

fn validate_dir_name(key: &str, value: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::config_error(format!("{key} must not be empty")));
    }
    if value.contains(['/', '\\']) || value == "." || value == ".." {
        return Err(AppError::config_error(format!(
            "{key} must be a single directory name, got '{value}'"
        )));
    }
    Ok(())
}

fn default_business_dir() -> String {
    "generated_whitepapers".to_string()
}

fn default_technical_dir() -> String {
    "technical_documentation".to_string()
}

/// Structured-document backend selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentBackend {
    /// Built-in Office Open XML writer (when compiled in).
    #[default]
    Docx,
    /// No structured backend; Word output is unavailable.
    None,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DocumentConfig {
    #[serde(default)]
    pub backend: DocumentBackend,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    /// Level used when `RUST_LOG` is not set.
    #[serde(default = "default_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: default_level() }
    }
}

impl LoggingConfig {
    pub fn level_filter(&self) -> Result<LevelFilter, AppError> {
        LevelFilter::from_str(&self.level).map_err(|_| {
            AppError::config_error(format!(
                "logging.level must be one of off, error, warn, info, debug, trace, got '{}'",
                self.level
            ))
        })
    }

    pub fn validate(&self) -> Result<(), AppError> {
        self.level_filter().map(|_| ())
    }
}

fn default_level() -> String {
    "info".to_string()
}
