//! Catalog -> Renderer -> Persistence pipelines.

pub mod business;
pub mod technical;

use std::path::PathBuf;

use serde::Serialize;
use tracing::debug;

use crate::app::render::Renderer;
use crate::domain::{AppError, ArtifactKind, OutputFormat};

/// Files written by one invocation, in production order, plus non-fatal warnings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GenerationReport {
    pub files: Vec<PathBuf>,
    pub warnings: Vec<String>,
}

impl GenerationReport {
    pub(crate) fn warn(&mut self, message: String) {
        debug!(%message, "warning recorded");
        self.warnings.push(message);
    }
}

/// Decide up front whether the structured kind is produced.
///
/// `Ok(false)` either because it was not requested or because `both` tolerates a
/// missing backend (recorded as a warning). The downgrade needs a Markdown rendition
/// to still be written; without one, or for a plain `word` request, a missing
/// backend fails before anything is written.
pub(crate) fn structured_enabled(
    renderer: &Renderer<'_>,
    format: OutputFormat,
    has_markdown: bool,
    report: &mut GenerationReport,
) -> Result<bool, AppError> {
    if !format.includes(ArtifactKind::Word) {
        return Ok(false);
    }
    if renderer.has_builder() {
        return Ok(true);
    }

    let err = AppError::capability_unavailable(renderer.backend());
    if format.tolerates_missing_backend() && has_markdown {
        report.warn(format!("{err}; skipping Word document generation"));
        Ok(false)
    } else {
        Err(err)
    }
}
