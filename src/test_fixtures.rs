//! Test fixtures and utilities for reducing test setup duplication.
//!
//! # Usage
//!
//! ```ignore
//! use crate::test_fixtures::{create_project, item, MemoryRegistry};
//!
//! #[test]
//! fn my_test() {
//!     let (temp, project) = create_project();
//!     let registry = MemoryRegistry::new(vec![item("button", &["ui/button.tsx"], &[])])
//!         .with_file("ui/button.tsx", "export {}");
//! }
//! ```

use std::collections::{HashMap, HashSet};
use std::path::PathBuf;

use tempfile::TempDir;

use crate::config::{self, ProjectConfig};
use crate::error::{GraftError, Result};
use crate::registry::{RegistryIndex, RegistryItem, RegistrySource};
use crate::ui::{Reporter, SyncEvent};
use crate::workspace::{PACKAGE_MANIFEST, Project};

/// Create a temp directory in the system temp location.
///
/// # Panics
///
/// Panics if the temp directory cannot be created.
#[must_use]
pub fn create_temp_dir() -> TempDir {
    tempfile::Builder::new()
        .prefix("graft-test-")
        .tempdir()
        .expect("Failed to create temp directory")
}

/// Create an initialized project with default configuration.
///
/// This creates:
/// - A temp directory with `package.json`
/// - `graft.json` with default settings
/// - The (empty) install directory
///
/// # Panics
///
/// Panics if any of the files cannot be written.
#[must_use]
pub fn create_project() -> (TempDir, Project) {
    create_project_with(&ProjectConfig::default())
}

/// Create an initialized project with the given configuration.
///
/// # Panics
///
/// Panics if any of the files cannot be written.
#[must_use]
pub fn create_project_with(project_config: &ProjectConfig) -> (TempDir, Project) {
    let temp = create_temp_dir();
    std::fs::write(temp.path().join(PACKAGE_MANIFEST), "{}").expect("Failed to write package.json");
    config::save_config(temp.path(), project_config).expect("Failed to write graft.json");

    let project = Project::open(temp.path()).expect("Failed to open project");
    std::fs::create_dir_all(project.install_dir()).expect("Failed to create install dir");
    (temp, project)
}

/// Write a file into the project's install directory.
///
/// # Panics
///
/// Panics if the file cannot be written.
pub fn write_installed(project: &Project, file_name: &str, content: &str) -> PathBuf {
    let path = project.install_dir().join(file_name);
    std::fs::write(&path, content).expect("Failed to write installed file");
    path
}

/// Build a registry item with files and registry dependencies
#[must_use]
pub fn item(name: &str, files: &[&str], registry_dependencies: &[&str]) -> RegistryItem {
    RegistryItem {
        name: name.to_string(),
        kind: "registry:ui".to_string(),
        description: format!("The {name} component"),
        category: "test".to_string(),
        status: crate::registry::ComponentStatus::Stable,
        files: files.iter().map(|f| (*f).to_string()).collect(),
        dependencies: Vec::new(),
        dev_dependencies: Vec::new(),
        registry_dependencies: registry_dependencies
            .iter()
            .map(|d| (*d).to_string())
            .collect(),
    }
}

/// In-memory registry source
///
/// Files not added with [`MemoryRegistry::with_file`] read as fetch errors,
/// and paths marked with [`MemoryRegistry::failing`] always fail.
#[derive(Debug, Clone)]
pub struct MemoryRegistry {
    index: RegistryIndex,
    files: HashMap<String, String>,
    failing: HashSet<String>,
    broken_index: bool,
}

impl MemoryRegistry {
    #[must_use]
    pub fn new(components: Vec<RegistryItem>) -> Self {
        Self {
            index: RegistryIndex {
                name: "memory".to_string(),
                version: "0.0.0".to_string(),
                components,
            },
            files: HashMap::new(),
            failing: HashSet::new(),
            broken_index: false,
        }
    }

    #[must_use]
    pub fn with_file(mut self, path: &str, content: &str) -> Self {
        self.files.insert(path.to_string(), content.to_string());
        self
    }

    #[must_use]
    pub fn failing(mut self, path: &str) -> Self {
        self.failing.insert(path.to_string());
        self
    }

    #[must_use]
    pub fn with_broken_index(mut self) -> Self {
        self.broken_index = true;
        self
    }
}

impl RegistrySource for MemoryRegistry {
    fn location(&self) -> String {
        "memory".to_string()
    }

    fn read_index(&self) -> Result<String> {
        if self.broken_index {
            return Err(GraftError::RegistryFetchFailed {
                location: "memory/registry.json".to_string(),
                reason: "connection reset".to_string(),
            });
        }
        serde_json::to_string(&self.index).map_err(|e| GraftError::RegistryParseFailed {
            location: "memory".to_string(),
            reason: e.to_string(),
        })
    }

    fn read_file(&self, path: &str) -> Result<String> {
        if self.failing.contains(path) {
            return Err(GraftError::RegistryFetchFailed {
                location: format!("memory/{path}"),
                reason: "simulated failure".to_string(),
            });
        }
        self.files
            .get(path)
            .cloned()
            .ok_or_else(|| GraftError::RegistryFetchFailed {
                location: format!("memory/{path}"),
                reason: "HTTP 404 Not Found".to_string(),
            })
    }
}

/// Reporter that keeps every event for assertions
#[derive(Debug, Default)]
pub struct RecordingReporter {
    pub events: Vec<SyncEvent>,
    pub finished: bool,
}

impl RecordingReporter {
    /// Names of installed components, in event order
    pub fn names_installed(&self) -> Vec<String> {
        self.events
            .iter()
            .filter_map(|e| match e {
                SyncEvent::Installed { name, .. } => Some(name.clone()),
                _ => None,
            })
            .collect()
    }

    /// Names of failed components, in event order
    pub fn names_failed(&self) -> Vec<String> {
        self.events
            .iter()
            .filter_map(|e| match e {
                SyncEvent::Failed { name, .. } => Some(name.clone()),
                _ => None,
            })
            .collect()
    }
}

impl Reporter for RecordingReporter {
    fn report(&mut self, event: SyncEvent) {
        self.events.push(event);
    }

    fn finish(&mut self) {
        self.finished = true;
    }
}
