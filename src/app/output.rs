//! Output layout and artifact filenames.

use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;
use tracing::info;

use crate::domain::{AppError, ArtifactKind, Industry, OutputConfig};
use crate::ports::ArtifactStore;

pub const API_DOCS_DIR: &str = "api_docs";
pub const ARCHITECTURE_DIR: &str = "architecture";
pub const DEPLOYMENT_DIR: &str = "deployment";

/// Directories owned by the business generator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BusinessLayout {
    pub output: PathBuf,
}

impl BusinessLayout {
    pub fn new(root: &Path, config: &OutputConfig) -> Self {
        Self { output: root.join(&config.business_dir) }
    }

    pub fn create<S: ArtifactStore>(&self, store: &S) -> Result<(), AppError> {
        store.ensure_dir(&self.output)
    }
}

/// Directories owned by the technical generator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TechnicalLayout {
    pub output: PathBuf,
    pub api_docs: PathBuf,
    pub architecture: PathBuf,
    pub deployment: PathBuf,
}

impl TechnicalLayout {
    pub fn new(root: &Path, config: &OutputConfig) -> Self {
        let output = root.join(&config.technical_dir);
        Self {
            api_docs: output.join(API_DOCS_DIR),
            architecture: output.join(ARCHITECTURE_DIR),
            deployment: output.join(DEPLOYMENT_DIR),
            output,
        }
    }

    /// All four directories are created up front, even those the run will not write to.
    pub fn create<S: ArtifactStore>(&self, store: &S) -> Result<(), AppError> {
        for dir in [&self.output, &self.api_docs, &self.architecture, &self.deployment] {
            store.ensure_dir(dir)?;
        }
        Ok(())
    }
}

/// Second-resolution timestamp used in generated filenames.
pub fn timestamp(now: NaiveDateTime) -> String {
    now.format("%Y%m%d_%H%M%S").to_string()
}

/// Day-resolution stamp used by the API reference and deployment guide.
pub fn datestamp(now: NaiveDateTime) -> String {
    now.format("%Y%m%d").to_string()
}

pub fn business_filename(industry: Industry, stamp: &str, kind: ArtifactKind) -> String {
    format!("MIZ_OKI_3.0_Whitepaper_{}_{}.{}", industry.key(), stamp, kind.extension())
}

pub fn premium_filename(stamp: &str) -> String {
    format!("MIZ_OKI_3.0_Premium_Whitepaper_{}.{}", stamp, ArtifactKind::Word.extension())
}

pub fn technical_filename(stamp: &str, kind: ArtifactKind) -> String {
    format!("MIZ_OKI_3.0_Technical_Whitepaper_{}.{}", stamp, kind.extension())
}

pub fn api_reference_filename(date: &str) -> String {
    format!("MIZ_OKI_API_Reference_{date}.md")
}

pub fn deployment_guide_filename(date: &str) -> String {
    format!("MIZ_OKI_Deployment_Guide_{date}.md")
}

/// Reject `--output` values that would escape the output directory.
pub fn validate_filename(name: &str) -> Result<(), AppError> {
    if name.trim().is_empty() {
        return Err(AppError::config_error("Output filename must not be empty"));
    }
    if name.contains(['/', '\\']) || name == "." || name == ".." {
        return Err(AppError::config_error(format!(
            "Output filename must be a plain file name, got '{name}'"
        )));
    }
    Ok(())
}

/// Write one artifact. Same-second runs for the same selector overwrite each other.
pub fn save<S: ArtifactStore>(
    store: &S,
    dir: &Path,
    filename: &str,
    bytes: &[u8],
) -> Result<PathBuf, AppError> {
    store.ensure_dir(dir)?;
    let path = store.write(dir, filename, bytes)?;
    info!(path = %path.display(), bytes = bytes.len(), "artifact saved");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::ports::Clock;
    use crate::testing::{FixedClock, MemoryArtifactStore};

    #[test]
    fn filenames_follow_fixed_prefixes() {
        let now = FixedClock::at(2025, 7, 11, 9, 5, 3).now();
        let stamp = timestamp(now);
        assert_eq!(stamp, "20250711_090503");
        assert_eq!(
            business_filename(Industry::Healthcare, &stamp, ArtifactKind::Markdown),
            "MIZ_OKI_3.0_Whitepaper_healthcare_20250711_090503.md"
        );
        assert_eq!(premium_filename(&stamp), "MIZ_OKI_3.0_Premium_Whitepaper_20250711_090503.docx");
        assert_eq!(
            technical_filename(&stamp, ArtifactKind::Word),
            "MIZ_OKI_3.0_Technical_Whitepaper_20250711_090503.docx"
        );
        assert_eq!(api_reference_filename(&datestamp(now)), "MIZ_OKI_API_Reference_20250711.md");
        assert_eq!(
            deployment_guide_filename(&datestamp(now)),
            "MIZ_OKI_Deployment_Guide_20250711.md"
        );
    }

    #[test]
    fn technical_layout_creates_all_directories() {
        let store = MemoryArtifactStore::new();
        let layout = TechnicalLayout::new(Path::new("work"), &OutputConfig::default());
        layout.create(&store).expect("create");

        for dir in ["", "api_docs", "architecture", "deployment"] {
            let path = Path::new("work/technical_documentation").join(dir);
            assert!(store.has_dir(&path), "missing {}", path.display());
        }
    }

    #[test]
    fn saving_identical_content_twice_is_byte_identical() {
        let store = MemoryArtifactStore::new();
        let dir = Path::new("out");
        let first = save(&store, dir, "a.md", b"same").expect("first");
        let second = save(&store, dir, "b.md", b"same").expect("second");

        assert_ne!(first, second);
        assert_eq!(store.read(&first), store.read(&second));
    }

    #[test]
    fn same_name_overwrites() {
        let store = MemoryArtifactStore::new();
        let dir = Path::new("out");
        save(&store, dir, "a.md", b"old").expect("first");
        let path = save(&store, dir, "a.md", b"new").expect("second");

        assert_eq!(store.file_count(), 1);
        assert_eq!(store.read(&path).as_deref(), Some(&b"new"[..]));
    }

    #[test]
    fn output_filename_must_be_plain() {
        assert!(validate_filename("paper.md").is_ok());
        for bad in ["", " ", "../x.md", "a/b.md", "a\\b.md", ".."] {
            assert!(validate_filename(bad).is_err(), "{bad:?}");
        }
    }
}
