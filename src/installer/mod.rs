//! Component file installation
//!
//! This module handles:
//! - Applying import alias rewriting to fetched registry content
//! - Writing each component file, flattened to its base name, into the
//!   project's install directory
//! - Best-effort bookkeeping when only some of a component's files land
//!
//! A component is handed over fully fetched ([`ComponentData`]), so nothing is
//! written for a component whose fetch failed part way.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, warn};

use crate::config::AliasConfig;
use crate::content::rewrite_imports;
use crate::error::GraftError;
use crate::registry::ComponentData;

pub mod writer;

/// A component file that was not written
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SkippedFile {
    pub file_name: String,
    pub reason: String,
}

/// Result of writing one component
#[derive(Debug, Default)]
pub struct ComponentWrite {
    /// Paths written, in the component's file order
    pub written: Vec<PathBuf>,
    /// Files that could not be written, with the error that stopped each
    pub failed: Vec<(String, GraftError)>,
}

impl ComponentWrite {
    /// Nothing was written and at least one file failed
    pub fn is_total_failure(&self) -> bool {
        self.written.is_empty() && !self.failed.is_empty()
    }

    pub fn skipped_files(&self) -> Vec<SkippedFile> {
        self.failed
            .iter()
            .map(|(file_name, error)| SkippedFile {
                file_name: file_name.clone(),
                reason: error.to_string(),
            })
            .collect()
    }
}

/// Writes fetched components into an install directory
pub struct Installer<'a> {
    install_dir: &'a Path,
    aliases: &'a AliasConfig,
    overwrite: bool,
}

impl<'a> Installer<'a> {
    pub fn new(install_dir: &'a Path, aliases: &'a AliasConfig, overwrite: bool) -> Self {
        Self {
            install_dir,
            aliases,
            overwrite,
        }
    }

    /// Write every file of `component`, continuing past per-file failures
    pub fn install_component(&self, component: &ComponentData) -> ComponentWrite {
        let mut result = ComponentWrite::default();

        for file in &component.files {
            let content = rewrite_imports(&file.content, self.aliases);
            match writer::write_file(self.install_dir, &file.file_name, &content, self.overwrite) {
                Ok(path) => {
                    debug!(component = %component.name, path = %path.display(), "wrote file");
                    result.written.push(path);
                }
                Err(e) => {
                    warn!(component = %component.name, file = %file.file_name, error = %e, "file not written");
                    result.failed.push((file.file_name.clone(), e));
                }
            }
        }

        result
    }
}
