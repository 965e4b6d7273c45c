pub mod catalog;
pub mod config;
pub mod document;
pub mod error;
pub mod labels;
pub mod rendered;
pub mod technical;

pub use catalog::{Industry, UseCase, WhitepaperConfig, lookup};
pub use config::{CONFIG_FILE, DocumentBackend, OutputConfig, WpgenConfig};
pub use document::{Alignment, Block, DefaultFont, Document, Paragraph, Run, Table};
pub use error::AppError;
pub use rendered::{ArtifactKind, BusinessVariant, OutputFormat, RenderedDocument, TechnicalDocKind};
pub use technical::{TechWhitepaperConfig, core_architecture};
