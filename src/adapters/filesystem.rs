use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::AppError;
use crate::ports::ArtifactStore;

/// Artifact store writing straight to the local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct FilesystemArtifactStore;

impl ArtifactStore for FilesystemArtifactStore {
    fn ensure_dir(&self, dir: &Path) -> Result<(), AppError> {
        fs::create_dir_all(dir)?;
        Ok(())
    }

    fn write(&self, dir: &Path, filename: &str, bytes: &[u8]) -> Result<PathBuf, AppError> {
        let path = dir.join(filename);
        fs::write(&path, bytes)?;
        Ok(path)
    }
}
