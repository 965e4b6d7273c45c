//! Output selectors and the in-memory rendered artifact.

use std::fmt;

use super::document::Document;

/// Kind of artifact written to disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArtifactKind {
    /// Marked-up text (Markdown).
    Markdown,
    /// Structured word-processor document.
    Word,
}

impl ArtifactKind {
    pub fn extension(&self) -> &'static str {
        match self {
            ArtifactKind::Markdown => "md",
            ArtifactKind::Word => "docx",
        }
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArtifactKind::Markdown => f.write_str("markdown"),
            ArtifactKind::Word => f.write_str("word"),
        }
    }
}

/// Output kind(s) requested by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Markdown,
    Word,
    Both,
}

impl OutputFormat {
    /// Artifact kinds in production order.
    pub fn kinds(&self) -> &'static [ArtifactKind] {
        match self {
            OutputFormat::Markdown => &[ArtifactKind::Markdown],
            OutputFormat::Word => &[ArtifactKind::Word],
            OutputFormat::Both => &[ArtifactKind::Markdown, ArtifactKind::Word],
        }
    }

    /// Whether a missing structured backend degrades to a warning.
    pub fn tolerates_missing_backend(&self) -> bool {
        matches!(self, OutputFormat::Both)
    }

    pub fn includes(&self, kind: ArtifactKind) -> bool {
        self.kinds().contains(&kind)
    }
}

/// Document shape produced by the business generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BusinessVariant {
    /// Record-driven whitepaper for one industry.
    #[default]
    Business,
    /// Fixed-content premium whitepaper.
    Premium,
    /// Fixed-content technical brief.
    Technical,
}

impl BusinessVariant {
    /// Only the record-driven variant has a Markdown rendition.
    pub fn supports(&self, kind: ArtifactKind) -> bool {
        match self {
            BusinessVariant::Business => true,
            BusinessVariant::Premium | BusinessVariant::Technical => kind == ArtifactKind::Word,
        }
    }
}

impl fmt::Display for BusinessVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BusinessVariant::Business => f.write_str("business"),
            BusinessVariant::Premium => f.write_str("premium"),
            BusinessVariant::Technical => f.write_str("technical"),
        }
    }
}

/// Document set produced by the technical generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TechnicalDocKind {
    #[default]
    Whitepaper,
    Api,
    Deployment,
    All,
}

impl fmt::Display for TechnicalDocKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TechnicalDocKind::Whitepaper => f.write_str("whitepaper"),
            TechnicalDocKind::Api => f.write_str("api"),
            TechnicalDocKind::Deployment => f.write_str("deployment"),
            TechnicalDocKind::All => f.write_str("all"),
        }
    }
}

/// A finished artifact, before persistence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderedDocument {
    Text(String),
    Structured(Document),
}

impl RenderedDocument {
    pub fn kind(&self) -> ArtifactKind {
        match self {
            RenderedDocument::Text(_) => ArtifactKind::Markdown,
            RenderedDocument::Structured(_) => ArtifactKind::Word,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            RenderedDocument::Text(text) => Some(text),
            RenderedDocument::Structured(_) => None,
        }
    }

    pub fn as_document(&self) -> Option<&Document> {
        match self {
            RenderedDocument::Text(_) => None,
            RenderedDocument::Structured(doc) => Some(doc),
        }
    }
}
