use std::path::{Path, PathBuf};

use crate::adapters::MarkdownTemplates;
use crate::app::render::Renderer;
use crate::domain::{AppError, DocumentBackend, WpgenConfig};
use crate::ports::{ArtifactStore, Clock, DocumentBuilder};

/// The only structured backend wpgen ships.
const DOCX_BACKEND: &str = "docx";

/// Application context holding dependencies for command execution.
pub struct AppContext<S: ArtifactStore, C: Clock> {
    root: PathBuf,
    config: WpgenConfig,
    store: S,
    clock: C,
    templates: MarkdownTemplates,
    builder: Option<Box<dyn DocumentBuilder>>,
}

impl<S: ArtifactStore, C: Clock> AppContext<S, C> {
    /// Create a context whose structured backend follows `config.document.backend`.
    pub fn new(root: PathBuf, config: WpgenConfig, store: S, clock: C) -> Result<Self, AppError> {
        let builder = detect_backend(config.document.backend);
        Self::with_builder(root, config, store, clock, builder)
    }

    /// Create a context with an explicit backend, bypassing detection.
    pub fn with_builder(
        root: PathBuf,
        config: WpgenConfig,
        store: S,
        clock: C,
        builder: Option<Box<dyn DocumentBuilder>>,
    ) -> Result<Self, AppError> {
        let templates = MarkdownTemplates::embedded()?;
        Ok(Self { root, config, store, clock, templates, builder })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn config(&self) -> &WpgenConfig {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn renderer(&self) -> Renderer<'_> {
        Renderer::new(&self.templates, self.builder.as_deref(), self.backend_name())
    }

    /// Name of the structured backend, used in diagnostics even when it is missing.
    pub fn backend_name(&self) -> &'static str {
        self.builder.as_ref().map_or(DOCX_BACKEND, |builder| builder.name())
    }
}

#[cfg(feature = "docx")]
fn detect_backend(backend: DocumentBackend) -> Option<Box<dyn DocumentBuilder>> {
    match backend {
        DocumentBackend::Docx => Some(Box::new(crate::adapters::docx::DocxBuilder)),
        DocumentBackend::None => None,
    }
}

#[cfg(not(feature = "docx"))]
fn detect_backend(backend: DocumentBackend) -> Option<Box<dyn DocumentBuilder>> {
    tracing::debug!(?backend, "built without the docx feature; structured output is unavailable");
    None
}
