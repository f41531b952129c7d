//! Component registry access
//!
//! The registry is a JSON index (`registry.json`) listing components, plus the
//! raw source files each component publishes. Two interchangeable backends
//! serve it:
//!
//! - [`LocalRegistry`]: a directory on disk (registry development)
//! - [`RemoteRegistry`]: an HTTP base URL (production)
//!
//! ```text
//! {base}/registry.json        ← catalog
//! {base}/{file path}          ← one request per component file
//! ```
//!
//! Nothing here writes to the consuming project.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::ProjectConfig;
use crate::error::{GraftError, Result};
use crate::path_utils;

pub mod catalog;
pub mod local;
pub mod remote;

pub use catalog::Catalog;
pub use local::LocalRegistry;
pub use remote::RemoteRegistry;

/// Catalog file name, relative to the registry root
pub const INDEX_FILE: &str = "registry.json";

/// Registry used when neither a local directory nor a config URL is given
pub const DEFAULT_REGISTRY_URL: &str = "https://registry.graft.dev/r";

/// Release maturity of a component
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentStatus {
    #[default]
    Stable,
    Beta,
    Experimental,
}

impl std::fmt::Display for ComponentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            ComponentStatus::Stable => "stable",
            ComponentStatus::Beta => "beta",
            ComponentStatus::Experimental => "experimental",
        };
        f.write_str(label)
    }
}

/// One installable component as listed in the registry index
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistryItem {
    pub name: String,
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub status: ComponentStatus,
    pub files: Vec<String>,
    #[serde(default)]
    pub dependencies: Vec<String>,
    #[serde(default)]
    pub dev_dependencies: Vec<String>,
    #[serde(default)]
    pub registry_dependencies: Vec<String>,
}

impl RegistryItem {
    /// Base names the component's files are installed under
    pub fn file_names(&self) -> impl Iterator<Item = &str> {
        self.files.iter().map(|path| path_utils::base_name(path))
    }
}

/// The `registry.json` document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryIndex {
    pub name: String,
    #[serde(default)]
    pub version: String,
    pub components: Vec<RegistryItem>,
}

/// A fetched component source file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentFile {
    /// Path inside the registry (e.g. `ui/button.tsx`)
    pub path: String,
    /// Base name the file is installed under (e.g. `button.tsx`)
    pub file_name: String,
    /// Canonical registry content
    pub content: String,
}

/// A registry item with every file materialized
///
/// Lives for one command invocation; never cached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentData {
    pub name: String,
    pub files: Vec<ComponentFile>,
    pub dependencies: Vec<String>,
    pub dev_dependencies: Vec<String>,
    pub registry_dependencies: Vec<String>,
}

/// Raw access to a registry backend
pub trait RegistrySource {
    /// Human readable location (directory or base URL)
    fn location(&self) -> String;

    /// Read the `registry.json` document
    fn read_index(&self) -> Result<String>;

    /// Read one published file by its registry path
    fn read_file(&self, path: &str) -> Result<String>;
}

/// Which backend serves the registry for this invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transport {
    Local(PathBuf),
    Remote(String),
}

impl Transport {
    /// Select the backend: a local override wins, then the configured URL,
    /// then the default registry.
    pub fn select(registry_dir: Option<&Path>, config: &ProjectConfig) -> Self {
        match registry_dir {
            Some(dir) => Transport::Local(dir.to_path_buf()),
            None => Transport::Remote(
                config
                    .registry
                    .clone()
                    .unwrap_or_else(|| DEFAULT_REGISTRY_URL.to_string()),
            ),
        }
    }
}

/// Typed client over a [`RegistrySource`]
pub struct RegistryClient {
    source: Box<dyn RegistrySource>,
}

impl RegistryClient {
    pub fn new(source: impl RegistrySource + 'static) -> Self {
        Self {
            source: Box::new(source),
        }
    }

    /// Build a client for the selected transport
    pub fn from_transport(transport: &Transport) -> Result<Self> {
        Ok(match transport {
            Transport::Local(dir) => Self::new(LocalRegistry::new(dir)),
            Transport::Remote(url) => Self::new(RemoteRegistry::new(url)?),
        })
    }

    pub fn location(&self) -> String {
        self.source.location()
    }

    /// Fetch and validate the full catalog
    ///
    /// Any failure here is fatal for the calling command.
    pub fn catalog(&self) -> Result<Catalog> {
        let location = self.source.location();
        let content = self.source.read_index()?;
        let catalog = Catalog::from_json(&content, &location)?;
        debug!(
            registry = %location,
            components = catalog.items().len(),
            "loaded registry catalog"
        );
        Ok(catalog)
    }

    /// Fetch one registry file
    pub fn fetch_file(&self, path: &str) -> Result<String> {
        self.source.read_file(path)
    }

    /// Materialize a component with all of its file contents
    ///
    /// Returns [`GraftError::ComponentNotFound`] when the catalog has no such
    /// component. Either every file is fetched or an error is returned.
    pub fn fetch_component(&self, catalog: &Catalog, name: &str) -> Result<ComponentData> {
        let item = catalog
            .get(name)
            .ok_or_else(|| GraftError::ComponentNotFound {
                name: name.to_string(),
            })?;

        let files = item
            .files
            .iter()
            .map(|path| {
                let content = self.source.read_file(path)?;
                Ok(ComponentFile {
                    path: path.clone(),
                    file_name: path_utils::base_name(path).to_string(),
                    content,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        debug!(component = name, files = files.len(), "fetched component");

        Ok(ComponentData {
            name: item.name.clone(),
            files,
            dependencies: item.dependencies.clone(),
            dev_dependencies: item.dev_dependencies.clone(),
            registry_dependencies: item.registry_dependencies.clone(),
        })
    }
}
