//! Init command implementation
//!
//! Writes `graft.json` next to the project's `package.json`.

use std::path::{Path, PathBuf};

use console::Style;
use tracing::info;

use crate::cli::InitArgs;
use crate::config::{self, CONFIG_FILE, ProjectConfig};
use crate::error::{GraftError, Result};
use crate::workspace::{PACKAGE_MANIFEST, Project};

use super::helpers::resolve_project_path;

/// Run init command
pub fn run(cwd: Option<PathBuf>, args: &InitArgs) -> Result<i32> {
    let root = resolve_project_path(cwd)?;
    let root = dunce::canonicalize(&root).unwrap_or(root);
    let config = init_project(&root, args)?;

    println!(
        "{} {}",
        Style::new().green().apply_to("Created"),
        root.join(CONFIG_FILE).display()
    );
    println!("  installDir: {}", config.install_dir);
    println!("  utils:      {}", config.aliases.utils);
    println!("  components: {}", config.aliases.components);
    if let Some(registry) = &config.registry {
        println!("  registry:   {registry}");
    }
    Ok(0)
}

/// Build, validate and write the configuration for `root`
pub fn init_project(root: &Path, args: &InitArgs) -> Result<ProjectConfig> {
    if !root.join(PACKAGE_MANIFEST).is_file() {
        return Err(GraftError::ProjectNotFound {
            path: root.display().to_string(),
        });
    }
    if Project::exists(root) && !args.force {
        return Err(GraftError::AlreadyInitialized {
            path: root.join(CONFIG_FILE).display().to_string(),
        });
    }

    let mut project_config = ProjectConfig::default();
    if let Some(dir) = &args.install_dir {
        project_config.install_dir.clone_from(dir);
    }
    if let Some(alias) = &args.utils_alias {
        project_config.aliases.utils.clone_from(alias);
    }
    if let Some(alias) = &args.components_alias {
        project_config.aliases.components.clone_from(alias);
    }
    project_config.registry.clone_from(&args.registry);

    project_config.validate()?;
    config::save_config(root, &project_config)?;
    info!(root = %root.display(), "project initialized");
    Ok(project_config)
}
