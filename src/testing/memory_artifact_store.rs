use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};

use crate::domain::AppError;
use crate::ports::ArtifactStore;

/// In-memory artifact store. Writing into a directory that was never ensured fails
/// the same way the filesystem does.
#[derive(Default)]
#[allow(dead_code)]
pub struct MemoryArtifactStore {
    pub dirs: RefCell<BTreeSet<PathBuf>>,
    pub files: RefCell<BTreeMap<PathBuf, Vec<u8>>>,
}

#[allow(dead_code)]
impl MemoryArtifactStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn read(&self, path: &Path) -> Option<Vec<u8>> {
        self.files.borrow().get(path).cloned()
    }

    pub fn file_count(&self) -> usize {
        self.files.borrow().len()
    }

    pub fn has_dir(&self, dir: &Path) -> bool {
        self.dirs.borrow().contains(dir)
    }
}

impl ArtifactStore for MemoryArtifactStore {
    fn ensure_dir(&self, dir: &Path) -> Result<(), AppError> {
        let mut dirs = self.dirs.borrow_mut();
        for ancestor in dir.ancestors() {
            if !ancestor.as_os_str().is_empty() {
                dirs.insert(ancestor.to_path_buf());
            }
        }
        Ok(())
    }

    fn write(&self, dir: &Path, filename: &str, bytes: &[u8]) -> Result<PathBuf, AppError> {
        if !self.has_dir(dir) {
            return Err(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("directory {} does not exist", dir.display()),
            )
            .into());
        }
        let path = dir.join(filename);
        self.files.borrow_mut().insert(path.clone(), bytes.to_vec());
        Ok(path)
    }
}
