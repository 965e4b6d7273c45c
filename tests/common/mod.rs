//! Shared testing utilities for wpgen CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Testing harness providing an isolated workspace for CLI exercises.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");
        Self { root, work_dir }
    }

    /// Path to the workspace directory used for CLI invocations.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Build a command for invoking the compiled `wpgen` binary inside the workspace.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("wpgen").expect("Failed to locate wpgen binary");
        cmd.current_dir(&self.work_dir).env_remove("RUST_LOG");
        cmd
    }

    /// Write `wpgen.toml` at the workspace root.
    pub fn write_config(&self, content: &str) {
        fs::write(self.work_dir.join("wpgen.toml"), content).expect("Failed to write wpgen.toml");
    }

    /// Disable the structured-document backend for this workspace.
    pub fn disable_backend(&self) {
        self.write_config("[document]\nbackend = \"none\"\n");
    }

    pub fn business_dir(&self) -> PathBuf {
        self.work_dir.join("generated_whitepapers")
    }

    pub fn technical_dir(&self) -> PathBuf {
        self.work_dir.join("technical_documentation")
    }

    /// Sorted file names directly inside `dir`; empty when the directory is absent.
    pub fn files_in(&self, dir: &Path) -> Vec<String> {
        let Ok(entries) = fs::read_dir(dir) else {
            return Vec::new();
        };
        let mut names: Vec<String> = entries
            .map(|entry| entry.expect("Failed to read dir entry"))
            .filter(|entry| entry.path().is_file())
            .map(|entry| entry.file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }

    /// Read the only file in `dir` as UTF-8.
    pub fn read_single(&self, dir: &Path) -> String {
        let files = self.files_in(dir);
        assert_eq!(files.len(), 1, "expected exactly one file in {}: {files:?}", dir.display());
        fs::read_to_string(dir.join(&files[0])).expect("Failed to read generated file")
    }
}
