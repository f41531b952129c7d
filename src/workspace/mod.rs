//! Project detection for Graft
//!
//! This module handles:
//! - Locating the project root (nearest ancestor with `graft.json`)
//! - Distinguishing "not a project" from "project not initialized"
//! - Package manager detection for dependency install hints
//! - Installed state inspection ([`inspect`])
//!
//! ## Project Structure
//!
//! ```text
//! my-app/
//! ├── package.json
//! ├── graft.json            # Graft configuration
//! └── src/components/ui/    # installDir, flat list of component files
//!     ├── button.tsx
//!     └── dialog.tsx
//! ```

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::{self, CONFIG_FILE, ProjectConfig};
use crate::error::{GraftError, Result};

pub mod inspect;

/// Marker file of a JavaScript project
pub const PACKAGE_MANIFEST: &str = "package.json";

/// An initialized Graft project
#[derive(Debug, Clone)]
pub struct Project {
    /// Root directory of the project (where graft.json is located)
    pub root: PathBuf,

    /// Parsed graft.json
    pub config: ProjectConfig,
}

impl Project {
    /// Detect if a project config exists at the given path
    pub fn exists(root: &Path) -> bool {
        root.join(CONFIG_FILE).is_file()
    }

    /// Find the project root by searching upward for graft.json
    pub fn find_from(start: &Path) -> Option<PathBuf> {
        start
            .ancestors()
            .find(|dir| Self::exists(dir))
            .map(Path::to_path_buf)
    }

    /// Discover and open the project containing `start`
    ///
    /// Fails with [`GraftError::NotInitialized`] when a `package.json` is found
    /// without a `graft.json`, and with [`GraftError::ProjectNotFound`] when
    /// neither exists.
    pub fn discover(start: &Path) -> Result<Self> {
        let start = dunce::canonicalize(start).unwrap_or_else(|_| start.to_path_buf());

        if let Some(root) = Self::find_from(&start) {
            debug!(root = %root.display(), "found project config");
            return Self::open(&root);
        }

        match find_package_root(&start) {
            Some(root) => Err(GraftError::NotInitialized {
                path: root.display().to_string(),
            }),
            None => Err(GraftError::ProjectNotFound {
                path: start.display().to_string(),
            }),
        }
    }

    /// Open an existing project
    pub fn open(root: &Path) -> Result<Self> {
        let config = config::load_config(root)?;
        Ok(Self {
            root: root.to_path_buf(),
            config,
        })
    }

    /// Absolute path of the component install directory
    pub fn install_dir(&self) -> PathBuf {
        self.root.join(&self.config.install_dir)
    }

    /// Package manager used by this project
    pub fn package_manager(&self) -> PackageManager {
        PackageManager::detect(&self.root)
    }
}

/// Find the nearest ancestor containing package.json
pub fn find_package_root(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .find(|dir| dir.join(PACKAGE_MANIFEST).is_file())
        .map(Path::to_path_buf)
}

/// JavaScript package manager, detected from lockfiles
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackageManager {
    Npm,
    Pnpm,
    Yarn,
    Bun,
}

impl PackageManager {
    /// Detect from lockfiles in the project root, defaulting to npm
    pub fn detect(root: &Path) -> Self {
        let has = |name: &str| root.join(name).is_file();

        if has("pnpm-lock.yaml") {
            PackageManager::Pnpm
        } else if has("yarn.lock") {
            PackageManager::Yarn
        } else if has("bun.lockb") || has("bun.lock") {
            PackageManager::Bun
        } else {
            PackageManager::Npm
        }
    }

    /// Command that adds packages, e.g. `pnpm add -D`
    pub fn install_command(self, dev: bool) -> String {
        let (program, verb, dev_flag) = match self {
            PackageManager::Npm => ("npm", "install", "--save-dev"),
            PackageManager::Pnpm => ("pnpm", "add", "-D"),
            PackageManager::Yarn => ("yarn", "add", "-D"),
            PackageManager::Bun => ("bun", "add", "-d"),
        };
        if dev {
            format!("{program} {verb} {dev_flag}")
        } else {
            format!("{program} {verb}")
        }
    }
}
