//! Project configuration (`graft.json`)
//!
//! The configuration is read-only input for the engine: where components are
//! installed, which import aliases the project uses, and optionally which
//! registry to pull from.
//!
//! ```json
//! {
//!   "installDir": "src/components/ui",
//!   "aliases": { "utils": "@/lib/utils", "components": "@/components/ui" },
//!   "registry": "https://registry.example.com/r"
//! }
//! ```

use std::fs;
use std::path::{Component, Path};

use serde::{Deserialize, Serialize};

use crate::error::{GraftError, Result};

/// Project config filename
pub const CONFIG_FILE: &str = "graft.json";

/// Default directory components are written to, relative to the project root
pub const DEFAULT_INSTALL_DIR: &str = "src/components/ui";

/// Import token registry sources use for the shared utilities module
pub const DEFAULT_UTILS_ALIAS: &str = "@/lib/utils";

/// Import token registry sources use for sibling components
pub const DEFAULT_COMPONENTS_ALIAS: &str = "@/components/ui";

/// Import aliases configured by the consuming project
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields, default)]
pub struct AliasConfig {
    pub utils: String,
    pub components: String,
}

impl Default for AliasConfig {
    fn default() -> Self {
        Self {
            utils: DEFAULT_UTILS_ALIAS.to_string(),
            components: DEFAULT_COMPONENTS_ALIAS.to_string(),
        }
    }
}

/// Contents of `graft.json`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields, default)]
pub struct ProjectConfig {
    pub install_dir: String,
    pub aliases: AliasConfig,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub registry: Option<String>,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            install_dir: DEFAULT_INSTALL_DIR.to_string(),
            aliases: AliasConfig::default(),
            registry: None,
        }
    }
}

impl ProjectConfig {
    /// Parse and validate configuration from JSON
    pub fn from_json(content: &str, path: &Path) -> Result<Self> {
        let config: Self =
            serde_json::from_str(content).map_err(|e| GraftError::ConfigParseFailed {
                path: path.display().to_string(),
                reason: e.to_string(),
            })?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize configuration to pretty JSON with a trailing newline
    pub fn to_json(&self) -> Result<String> {
        let mut json =
            serde_json::to_string_pretty(self).map_err(|e| GraftError::ConfigInvalid {
                message: e.to_string(),
            })?;
        json.push('\n');
        Ok(json)
    }

    /// Check invariants serde cannot express
    pub fn validate(&self) -> Result<()> {
        let install_dir = Path::new(&self.install_dir);
        if self.install_dir.trim().is_empty()
            || install_dir.is_absolute()
            || install_dir
                .components()
                .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir))
        {
            return Err(GraftError::ConfigInvalid {
                message: format!(
                    "installDir must be a relative path inside the project, got '{}'",
                    self.install_dir
                ),
            });
        }

        for (key, alias) in [
            ("aliases.utils", &self.aliases.utils),
            ("aliases.components", &self.aliases.components),
        ] {
            if alias.is_empty()
                || alias
                    .chars()
                    .any(|c| c.is_whitespace() || matches!(c, '"' | '\'' | '`'))
            {
                return Err(GraftError::ConfigInvalid {
                    message: format!("{key} must be a non-empty import path, got '{alias}'"),
                });
            }
        }

        if let Some(url) = &self.registry {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(GraftError::ConfigInvalid {
                    message: format!("registry must start with http:// or https://, got '{url}'"),
                });
            }
        }

        Ok(())
    }
}

/// Load `graft.json` from a project root
pub fn load_config(root: &Path) -> Result<ProjectConfig> {
    let path = root.join(CONFIG_FILE);
    let content = fs::read_to_string(&path).map_err(|e| GraftError::ConfigReadFailed {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;
    ProjectConfig::from_json(&content, &path)
}

/// Write `graft.json` into a project root
pub fn save_config(root: &Path, config: &ProjectConfig) -> Result<()> {
    let path = root.join(CONFIG_FILE);
    let content = config.to_json()?;

    fs::write(&path, content).map_err(|e| GraftError::FileWriteFailed {
        path: path.display().to_string(),
        reason: e.to_string(),
    })
}
