pub mod clock;
#[cfg(feature = "docx")]
pub mod docx;
pub mod filesystem;
pub mod templates;

pub use clock::SystemClock;
pub use filesystem::FilesystemArtifactStore;
pub use templates::MarkdownTemplates;
