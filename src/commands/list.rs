//! List command implementation
//!
//! Lists the components the registry publishes. Works outside an initialized
//! project too, using the default registry.

use std::path::PathBuf;

use tracing::debug;

use crate::cli::ListArgs;
use crate::config::ProjectConfig;
use crate::error::Result;
use crate::registry::{RegistryClient, Transport};
use crate::ui::display;
use crate::workspace::Project;

use super::helpers::resolve_project_path;

/// Run list command
pub fn run(cwd: Option<PathBuf>, registry_dir: Option<PathBuf>, args: &ListArgs) -> Result<i32> {
    let start = resolve_project_path(cwd)?;
    let config = match Project::discover(&start) {
        Ok(project) => project.config,
        Err(e) => {
            debug!(error = %e, "no project config, using defaults");
            ProjectConfig::default()
        }
    };

    let transport = Transport::select(registry_dir.as_deref(), &config);
    let catalog = RegistryClient::from_transport(&transport)?.catalog()?;
    display::print_catalog(&catalog, args.json)?;
    Ok(0)
}
