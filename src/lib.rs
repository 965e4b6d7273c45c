//! wpgen: generate MIZ OKI 3.0™ whitepapers as Markdown and Word documents.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api;
pub use app::api::{
    BusinessOptions, GenerationReport, TechnicalOptions, generate_business, generate_technical,
};
pub use domain::{AppError, BusinessVariant, OutputFormat, TechnicalDocKind};
