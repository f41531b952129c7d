//! Command helper utilities

use std::path::{Path, PathBuf};

use inquire::InquireError;
use tracing::debug;

use crate::error::{GraftError, Result};
use crate::operations::Decision;
use crate::registry::{RegistryClient, Transport};
use crate::workspace::Project;

/// Resolve project path from optional argument
///
/// If a path is provided, use it. Otherwise, resolve to the current directory.
pub fn resolve_project_path(cwd: Option<PathBuf>) -> Result<PathBuf> {
    match cwd {
        Some(path) => Ok(path),
        None => std::env::current_dir().map_err(|e| GraftError::IoError {
            message: format!("Failed to get current directory: {e}"),
        }),
    }
}

/// An opened project plus the registry client selected for it
pub struct Session {
    pub project: Project,
    pub client: RegistryClient,
}

impl Session {
    /// Discover the project and select the registry transport
    pub fn open(cwd: Option<PathBuf>, registry_dir: Option<&Path>) -> Result<Self> {
        let start = resolve_project_path(cwd)?;
        let project = Project::discover(&start)?;
        let client = registry_client(registry_dir, &project)?;
        Ok(Self { project, client })
    }
}

/// Build the registry client for a project
pub fn registry_client(registry_dir: Option<&Path>, project: &Project) -> Result<RegistryClient> {
    let transport = Transport::select(registry_dir, &project.config);
    debug!(?transport, "selected registry transport");
    RegistryClient::from_transport(&transport)
}

/// Ask for confirmation, unless `assume_yes` is set
///
/// An interrupted prompt (Esc, Ctrl-C) counts as a cancellation.
pub fn confirm(message: &str, assume_yes: bool) -> Result<Decision> {
    if assume_yes {
        return Ok(Decision::Confirmed);
    }

    match inquire::Confirm::new(message).with_default(false).prompt() {
        Ok(true) => Ok(Decision::Confirmed),
        Ok(false) | Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => {
            Ok(Decision::Cancelled)
        }
        Err(InquireError::NotTTY) => Err(GraftError::IoError {
            message: "Cannot prompt for confirmation without a terminal; pass --yes".to_string(),
        }),
        Err(e) => Err(e.into()),
    }
}
