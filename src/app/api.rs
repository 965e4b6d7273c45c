//! Public library API.
//!
//! Each call loads `wpgen.toml` from the workspace root, writes to the real
//! filesystem and stamps filenames with the local wall clock.

use std::path::Path;

use crate::adapters::{FilesystemArtifactStore, SystemClock};
use crate::app::AppContext;
use crate::app::commands::{business, technical};
use crate::app::config::load_config;
use crate::domain::AppError;

pub use crate::app::commands::GenerationReport;
pub use crate::app::commands::business::BusinessOptions;
pub use crate::app::commands::technical::TechnicalOptions;

/// Context over the local filesystem rooted at `workspace`.
pub fn open(workspace: &Path) -> Result<AppContext<FilesystemArtifactStore, SystemClock>, AppError> {
    let config = load_config(workspace)?;
    AppContext::new(workspace.to_path_buf(), config, FilesystemArtifactStore, SystemClock)
}

/// Generate a business-generator whitepaper under `<workspace>/generated_whitepapers`.
pub fn generate_business(
    options: &BusinessOptions,
    workspace: &Path,
) -> Result<GenerationReport, AppError> {
    business::execute(&open(workspace)?, options)
}

/// Generate technical documentation under `<workspace>/technical_documentation`.
pub fn generate_technical(
    options: &TechnicalOptions,
    workspace: &Path,
) -> Result<GenerationReport, AppError> {
    technical::execute(&open(workspace)?, options)
}
