//! Filesystem registry backend

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{GraftError, Result};
use crate::path_utils;

use super::{INDEX_FILE, RegistrySource};

/// Registry served from a directory containing `registry.json`
#[derive(Debug, Clone)]
pub struct LocalRegistry {
    root: PathBuf,
}

impl LocalRegistry {
    pub fn new(root: &Path) -> Self {
        Self {
            root: root.to_path_buf(),
        }
    }

    fn read(&self, path: &Path) -> Result<String> {
        fs::read_to_string(path).map_err(|e| GraftError::RegistryFetchFailed {
            location: path.display().to_string(),
            reason: e.to_string(),
        })
    }
}

impl RegistrySource for LocalRegistry {
    fn location(&self) -> String {
        self.root.display().to_string()
    }

    fn read_index(&self) -> Result<String> {
        self.read(&self.root.join(INDEX_FILE))
    }

    fn read_file(&self, path: &str) -> Result<String> {
        if !path_utils::is_safe_relative(path) {
            return Err(GraftError::RegistryFetchFailed {
                location: path.to_string(),
                reason: "path escapes the registry root".to_string(),
            });
        }
        self.read(&self.root.join(path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_fixtures::create_temp_dir;

    #[test]
    fn test_reads_index_and_files() {
        let temp = create_temp_dir();
        fs::write(temp.path().join(INDEX_FILE), r#"{"name":"r","components":[]}"#).unwrap();
        fs::create_dir_all(temp.path().join("ui")).unwrap();
        fs::write(temp.path().join("ui/button.tsx"), "button").unwrap();

        let registry = LocalRegistry::new(temp.path());
        assert!(registry.read_index().unwrap().contains("components"));
        assert_eq!(registry.read_file("ui/button.tsx").unwrap(), "button");
    }

    #[test]
    fn test_missing_index_is_fetch_error() {
        let temp = create_temp_dir();
        let registry = LocalRegistry::new(temp.path());

        let err = registry.read_index().unwrap_err();
        assert!(matches!(err, GraftError::RegistryFetchFailed { .. }));
    }

    #[test]
    fn test_rejects_escaping_path() {
        let temp = create_temp_dir();
        let registry = LocalRegistry::new(temp.path());

        let err = registry.read_file("../outside.ts").unwrap_err();
        assert!(err.to_string().contains("escapes"));
    }
}
