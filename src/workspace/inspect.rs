//! Installed state inspection
//!
//! Compares files in the project's install directory with their registry
//! originals. Installed files are flat (`button.tsx`), so ownership is looked
//! up by base name in the catalog.
//!
//! A file is:
//! - `local-only` when no registry component publishes its base name
//! - `identical` when its normalized content equals the normalized,
//!   alias-rewritten registry content
//! - `modified` otherwise, including when either side could not be read

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, warn};
use walkdir::WalkDir;
use wax::{CandidatePath, Glob, Pattern};

use crate::config::AliasConfig;
use crate::content::{equivalent, rewrite_imports};
use crate::error::{GraftError, Result};
use crate::registry::{Catalog, RegistryClient, RegistryItem};

/// Generated aggregation (barrel) files, never compared against the registry
pub const AGGREGATION_FILES: &[&str] = &["index.ts", "index.tsx", "index.js", "index.jsx"];

/// File names considered component sources even without a registry owner
pub const SOURCE_PATTERN: &str = "*.{ts,tsx,js,jsx,mjs,cjs,vue,svelte,css}";

/// Classification of an installed file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum InstallState {
    Identical,
    Modified,
    LocalOnly,
}

impl std::fmt::Display for InstallState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            InstallState::Identical => "identical",
            InstallState::Modified => "modified",
            InstallState::LocalOnly => "local-only",
        })
    }
}

/// One inspected file in the install directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InstalledComponent {
    /// Owning component name, or the file name for local-only files
    pub name: String,
    pub file_name: String,
    pub path: PathBuf,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub registry_path: Option<String>,
    pub status: InstallState,
    /// Why the comparison could not be made (status is then `modified`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Alias-rewritten registry content, kept for patch rendering
    #[serde(skip)]
    pub registry_content: Option<String>,
}

impl InstalledComponent {
    /// Whether the file has a registry counterpart
    pub fn is_tracked(&self) -> bool {
        self.status != InstallState::LocalOnly
    }
}

/// Compares an install directory against a catalog
pub struct Inspector<'a> {
    client: &'a RegistryClient,
    catalog: &'a Catalog,
    aliases: &'a AliasConfig,
}

impl<'a> Inspector<'a> {
    pub fn new(client: &'a RegistryClient, catalog: &'a Catalog, aliases: &'a AliasConfig) -> Self {
        Self {
            client,
            catalog,
            aliases,
        }
    }

    /// Classify every candidate file in `dir`, sorted by file name
    ///
    /// A missing directory yields an empty list.
    pub fn inspect(&self, dir: &Path) -> Result<Vec<InstalledComponent>> {
        let files = candidate_files(dir, self.catalog)?;
        Ok(files
            .into_iter()
            .map(|(file_name, path)| self.inspect_file(file_name, path))
            .collect())
    }

    fn inspect_file(&self, file_name: String, path: PathBuf) -> InstalledComponent {
        let Some((item, registry_path)) = self.catalog.owner_of(&file_name) else {
            debug!(file = %file_name, "local-only");
            return InstalledComponent {
                name: file_name.clone(),
                file_name,
                path,
                registry_path: None,
                status: InstallState::LocalOnly,
                error: None,
                registry_content: None,
            };
        };

        let mut entry = InstalledComponent {
            name: item.name.clone(),
            file_name,
            path,
            registry_path: Some(registry_path.to_string()),
            status: InstallState::Modified,
            error: None,
            registry_content: None,
        };

        match self.compare(&entry.path, registry_path) {
            Ok((identical, registry_content)) => {
                if identical {
                    entry.status = InstallState::Identical;
                }
                entry.registry_content = Some(registry_content);
            }
            Err(e) => {
                warn!(component = %entry.name, file = %entry.file_name, error = %e, "comparison failed");
                entry.error = Some(e.to_string());
            }
        }

        debug!(component = %entry.name, file = %entry.file_name, status = %entry.status, "inspected");
        entry
    }

    fn compare(&self, local_path: &Path, registry_path: &str) -> Result<(bool, String)> {
        let local = fs::read_to_string(local_path).map_err(|e| GraftError::FileReadFailed {
            path: local_path.display().to_string(),
            reason: e.to_string(),
        })?;
        let canonical = self.client.fetch_file(registry_path)?;
        let transformed = rewrite_imports(&canonical, self.aliases).into_owned();

        Ok((equivalent(&local, &transformed), transformed))
    }
}

/// Files in `dir` (non-recursive) that are component sources
///
/// Aggregation files are excluded by name. Any file whose name the catalog
/// knows is included regardless of extension.
fn candidate_files(dir: &Path, catalog: &Catalog) -> Result<Vec<(String, PathBuf)>> {
    if !dir.is_dir() {
        return Ok(Vec::new());
    }

    let glob = Glob::new(SOURCE_PATTERN).map_err(|e| GraftError::IoError {
        message: format!("invalid source pattern: {e}"),
    })?;

    let mut files = Vec::new();
    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = match entry {
            Ok(entry) => entry,
            // The install directory itself could not be listed
            Err(e) if e.depth() == 0 => {
                return Err(GraftError::FileReadFailed {
                    path: dir.display().to_string(),
                    reason: e.to_string(),
                });
            }
            Err(e) => {
                warn!(
                    path = %e.path().unwrap_or(dir).display(),
                    error = %e,
                    "skipping unreadable entry"
                );
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }

        let file_name = entry.file_name().to_string_lossy().into_owned();
        if AGGREGATION_FILES.contains(&file_name.as_str()) {
            continue;
        }
        let candidate = CandidatePath::from(file_name.as_str());
        let is_source = glob.matched(&candidate).is_some();
        if is_source || catalog.owner_of(&file_name).is_some() {
            files.push((file_name, entry.into_path()));
        }
    }
    Ok(files)
}

/// Whether any of the component's files exists in `dir` (by name, not content)
pub fn is_installed(dir: &Path, item: &RegistryItem) -> bool {
    item.file_names().any(|name| dir.join(name).is_file())
}

/// Distinct component names in first-seen order matching `filter`
pub fn component_names<F>(entries: &[InstalledComponent], filter: F) -> Vec<String>
where
    F: Fn(&InstalledComponent) -> bool,
{
    let mut names: Vec<String> = Vec::new();
    for entry in entries.iter().filter(|e| e.is_tracked() && filter(e)) {
        if !names.contains(&entry.name) {
            names.push(entry.name.clone());
        }
    }
    names
}
