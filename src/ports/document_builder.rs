use crate::domain::{AppError, Document};

/// Capability that serializes a [`Document`] into a word-processor container.
///
/// Renderers depend on this trait only. A missing backend is represented by the
/// absence of an implementation, never by a builder that fails at build time.
pub trait DocumentBuilder {
    /// Backend name used in diagnostics.
    fn name(&self) -> &'static str;

    /// Serialize the document.
    fn build(&self, document: &Document) -> Result<Vec<u8>, AppError>;
}
