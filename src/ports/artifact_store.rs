use std::path::{Path, PathBuf};

use crate::domain::AppError;

/// Port for writing generated artifacts.
pub trait ArtifactStore {
    /// Create `dir` and any missing parents. Existing directories are left as-is.
    fn ensure_dir(&self, dir: &Path) -> Result<(), AppError>;

    /// Write `bytes` to `dir/filename`, replacing an existing file, and return the path.
    fn write(&self, dir: &Path, filename: &str, bytes: &[u8]) -> Result<PathBuf, AppError>;
}
