//! Catalog record + output kind -> [`RenderedDocument`].
//!
//! Markdown bodies come from the embedded templates. Structured documents are
//! assembled as a [`Document`](crate::domain::Document) tree and only turned
//! into bytes by the configured [`DocumentBuilder`].

mod business;
mod premium;
mod technical;
mod technical_brief;
mod technical_deep_dive;

use chrono::NaiveDateTime;

use crate::adapters::MarkdownTemplates;
use crate::domain::{
    AppError, ArtifactKind, BusinessVariant, RenderedDocument, TechWhitepaperConfig,
    WhitepaperConfig,
};
use crate::ports::DocumentBuilder;

pub use business::BUSINESS_SECTIONS;

/// Renders documents against a fixed template set and an optional backend.
pub struct Renderer<'a> {
    templates: &'a MarkdownTemplates,
    builder: Option<&'a dyn DocumentBuilder>,
    backend: &'a str,
}

impl<'a> Renderer<'a> {
    /// `backend` names the configured structured backend for diagnostics.
    pub fn new(
        templates: &'a MarkdownTemplates,
        builder: Option<&'a dyn DocumentBuilder>,
        backend: &'a str,
    ) -> Self {
        Self { templates, builder, backend }
    }

    pub fn has_builder(&self) -> bool {
        self.builder.is_some()
    }

    /// Configured backend name, whether or not it is available.
    pub fn backend(&self) -> &'a str {
        self.backend
    }

    fn require_builder(&self) -> Result<&'a dyn DocumentBuilder, AppError> {
        self.builder.ok_or_else(|| AppError::capability_unavailable(self.backend))
    }

    /// Render one business-generator variant.
    ///
    /// Structured output fails with `CapabilityUnavailable` before any work is
    /// done when no backend is configured. The fixed variants have no Markdown
    /// rendition.
    pub fn business(
        &self,
        variant: BusinessVariant,
        record: &WhitepaperConfig,
        kind: ArtifactKind,
        now: NaiveDateTime,
    ) -> Result<RenderedDocument, AppError> {
        if kind == ArtifactKind::Word {
            self.require_builder()?;
        }

        match (variant, kind) {
            (BusinessVariant::Business, ArtifactKind::Markdown) => {
                business::markdown(self.templates, record, now.date()).map(RenderedDocument::Text)
            }
            (BusinessVariant::Business, ArtifactKind::Word) => {
                Ok(RenderedDocument::Structured(business::document(record)))
            }
            (BusinessVariant::Premium, ArtifactKind::Word) => {
                Ok(RenderedDocument::Structured(premium::document()))
            }
            (BusinessVariant::Technical, ArtifactKind::Word) => {
                Ok(RenderedDocument::Structured(technical_brief::document()))
            }
            (variant, ArtifactKind::Markdown) => Err(AppError::config_error(format!(
                "The {} whitepaper is only available as a Word document",
                variant
            ))),
        }
    }

    /// Technical whitepaper: Markdown from the architecture record, or the fixed deep-dive document.
    pub fn technical_whitepaper(
        &self,
        config: &TechWhitepaperConfig,
        kind: ArtifactKind,
        now: NaiveDateTime,
    ) -> Result<RenderedDocument, AppError> {
        match kind {
            ArtifactKind::Markdown => technical::whitepaper(self.templates, config, now.date())
                .map(RenderedDocument::Text),
            ArtifactKind::Word => {
                self.require_builder()?;
                Ok(RenderedDocument::Structured(technical_deep_dive::document()))
            }
        }
    }

    pub fn api_reference(&self, config: &TechWhitepaperConfig) -> Result<RenderedDocument, AppError> {
        technical::api_reference(self.templates, config).map(RenderedDocument::Text)
    }

    pub fn deployment_guide(
        &self,
        config: &TechWhitepaperConfig,
    ) -> Result<RenderedDocument, AppError> {
        technical::deployment_guide(self.templates, config).map(RenderedDocument::Text)
    }

    /// Serialize a rendered document to the bytes written to disk.
    pub fn encode(&self, rendered: &RenderedDocument) -> Result<Vec<u8>, AppError> {
        match rendered {
            RenderedDocument::Text(text) => Ok(text.clone().into_bytes()),
            RenderedDocument::Structured(document) => self.require_builder()?.build(document),
        }
    }
}
