//! Word (`.docx`) backend for the [`DocumentBuilder`] capability.

mod package;
mod xml;

use crate::domain::{AppError, Document};
use crate::ports::DocumentBuilder;

/// Backend name as written in `wpgen.toml`.
pub const BACKEND_NAME: &str = "docx";

/// Writes Office Open XML word-processing packages.
#[derive(Debug, Clone, Copy, Default)]
pub struct DocxBuilder;

impl DocumentBuilder for DocxBuilder {
    fn name(&self) -> &'static str {
        BACKEND_NAME
    }

    fn build(&self, document: &Document) -> Result<Vec<u8>, AppError> {
        package::write_package(document)
    }
}
