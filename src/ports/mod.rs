mod artifact_store;
mod clock;
mod document_builder;

pub use artifact_store::ArtifactStore;
pub use clock::Clock;
pub use document_builder::DocumentBuilder;
