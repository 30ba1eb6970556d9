//! File system paths for the client.

use crate::{CoreError, CoreResult};
use std::path::PathBuf;

/// Config filename under the base directory.
const CONFIG_FILE_NAME: &str = "config.json";
/// Local storage filename under the base directory.
const STORAGE_FILE_NAME: &str = "storage.json";

/// Manages file system paths for the client.
#[derive(Debug, Clone)]
pub struct Paths {
    /// Base directory for client files (~/.campus)
    base_dir: PathBuf,
}

impl Paths {
    /// Create a new Paths instance rooted at `~/.campus`.
    pub fn new() -> CoreResult<Self> {
        let home = dirs::home_dir()
            .ok_or_else(|| CoreError::Path("Could not determine home directory".to_string()))?;
        Ok(Self {
            base_dir: home.join(".campus"),
        })
    }

    /// Create a new Paths instance with a custom base directory.
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory.
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the config file path (`<base>/config.json`).
    pub fn config_file(&self) -> PathBuf {
        self.base_dir.join(CONFIG_FILE_NAME)
    }

    /// Get the durable client storage file path (`<base>/storage.json`).
    pub fn storage_file(&self) -> PathBuf {
        self.base_dir.join(STORAGE_FILE_NAME)
    }

    /// Create the base directory if it does not exist.
    pub fn ensure_dirs(&self) -> CoreResult<()> {
        if !self.base_dir.exists() {
            tracing::debug!(path = %self.base_dir.display(), "Creating base directory");
        }
        std::fs::create_dir_all(&self.base_dir)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn custom_base_dir_is_used_for_all_files() {
        let paths = Paths::with_base_dir(PathBuf::from("/tmp/campus-test"));
        assert_eq!(paths.config_file(), PathBuf::from("/tmp/campus-test/config.json"));
        assert_eq!(paths.storage_file(), PathBuf::from("/tmp/campus-test/storage.json"));
    }

    #[test]
    fn ensure_dirs_creates_base() {
        let dir = tempfile::tempdir().unwrap();
        let paths = Paths::with_base_dir(dir.path().join("nested"));
        paths.ensure_dirs().unwrap();
        assert!(paths.base_dir().exists());
    }
}
