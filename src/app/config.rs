//! `wpgen.toml` loading.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::domain::{AppError, CONFIG_FILE, WpgenConfig};

/// Load `wpgen.toml` from the workspace root, or defaults when the file is absent.
pub fn load_config(root: &Path) -> Result<WpgenConfig, AppError> {
    let path = root.join(CONFIG_FILE);
    let content = match fs::read_to_string(&path) {
        Ok(content) => content,
        Err(err) if err.kind() == ErrorKind::NotFound => return Ok(WpgenConfig::default()),
        Err(err) => return Err(err.into()),
    };

    WpgenConfig::parse(&content).map_err(|err| match err {
        AppError::Configuration(message) => {
            AppError::config_error(format!("{}: {}", path.display(), message))
        }
        other => other,
    })
}
