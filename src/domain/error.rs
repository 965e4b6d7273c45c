use std::io;

use thiserror::Error;

/// Library-wide error type for wpgen operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// The structured-document backend is not present.
    #[error("Structured document backend '{backend}' is not available")]
    CapabilityUnavailable { backend: String },

    /// A Markdown template could not be loaded or rendered.
    #[error("Template '{name}' failed: {details}")]
    Template { name: String, details: String },

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// The document container could not be written.
    #[error("Failed to package document: {0}")]
    Package(String),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    pub fn capability_unavailable<S: Into<String>>(backend: S) -> Self {
        AppError::CapabilityUnavailable { backend: backend.into() }
    }

    /// Whether this error is the recoverable "backend missing" condition.
    pub fn is_capability_unavailable(&self) -> bool {
        matches!(self, AppError::CapabilityUnavailable { .. })
    }

    /// Provide an `io::ErrorKind`-like view for callers expecting legacy behavior.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::Configuration(_) | AppError::TomlParse(_) => io::ErrorKind::InvalidInput,
            AppError::CapabilityUnavailable { .. } => io::ErrorKind::Unsupported,
            AppError::Template { .. } | AppError::Package(_) => io::ErrorKind::InvalidData,
        }
    }
}
