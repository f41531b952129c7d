//! Update operation
//!
//! Re-syncs installed components from the registry. Targets are either the
//! explicitly named components, every component with a modified file, or
//! (with `all`) every tracked component. Local-only files are never touched.
//! New registry dependencies of a target are not pulled in; `add` does that.

use tracing::info;

use crate::cli::UpdateArgs;
use crate::error::{GraftError, Result};
use crate::registry::Catalog;
use crate::workspace::inspect::{InstallState, InstalledComponent, component_names};

use super::{Decision, SkipReason, SyncEngine, SyncReport};

/// Configuration options for update
#[derive(Debug, Clone, Default)]
pub struct UpdateOptions {
    pub all: bool,
    pub dry_run: bool,
}

impl From<&UpdateArgs> for UpdateOptions {
    fn from(args: &UpdateArgs) -> Self {
        Self {
            all: args.all,
            dry_run: args.dry_run,
        }
    }
}

/// Read-only result of the update planning phase
#[derive(Debug)]
pub struct UpdatePlan {
    pub catalog: Catalog,
    pub entries: Vec<InstalledComponent>,
    /// Components that will be re-fetched and overwritten
    pub targets: Vec<String>,
    /// Explicitly named components with no local files
    pub not_installed: Vec<String>,
    /// Explicitly named components absent from the catalog
    pub not_found: Vec<String>,
}

impl UpdatePlan {
    pub fn is_empty(&self) -> bool {
        self.targets.is_empty() && self.not_installed.is_empty() && self.not_found.is_empty()
    }

    /// Exit code the plan predicts: non-zero when a named component is unknown
    pub fn exit_code(&self) -> i32 {
        i32::from(!self.not_found.is_empty())
    }

    /// Installed files that belong to the targets
    pub fn target_files(&self) -> impl Iterator<Item = &InstalledComponent> {
        self.entries
            .iter()
            .filter(|e| e.is_tracked() && self.targets.contains(&e.name))
    }
}

impl SyncEngine<'_> {
    /// Inspect the install directory and select update targets
    pub fn plan_update(&mut self, names: &[String], options: &UpdateOptions) -> Result<UpdatePlan> {
        let catalog = self.load_catalog()?;
        let entries = self.inspect(&catalog)?;

        let mut targets = Vec::new();
        let mut not_installed = Vec::new();
        let mut not_found = Vec::new();

        if names.is_empty() {
            targets = if options.all {
                component_names(&entries, |_| true)
            } else {
                component_names(&entries, |e| e.status == InstallState::Modified)
            };
        } else {
            let installed = component_names(&entries, |_| true);
            for name in names {
                let bucket = if !catalog.contains(name) {
                    &mut not_found
                } else if installed.contains(name) {
                    &mut targets
                } else {
                    &mut not_installed
                };
                if !bucket.contains(name) {
                    bucket.push(name.clone());
                }
            }
        }

        info!(
            targets = targets.len(),
            not_installed = not_installed.len(),
            not_found = not_found.len(),
            "update planned"
        );

        Ok(UpdatePlan {
            catalog,
            entries,
            targets,
            not_installed,
            not_found,
        })
    }

    /// Overwrite every target with fresh registry content
    ///
    /// A cancelled decision records every target as skipped and writes
    /// nothing.
    pub fn apply_update(&mut self, plan: UpdatePlan, decision: Decision) -> Result<SyncReport> {
        let mut report = SyncReport::default();

        for name in &plan.not_found {
            let error = GraftError::ComponentNotFound { name: name.clone() };
            self.fail(name, error.to_string(), &mut report);
        }
        for name in &plan.not_installed {
            self.skip(name, SkipReason::NotInstalled, &mut report);
        }

        for name in &plan.targets {
            match decision {
                Decision::Confirmed => {
                    self.sync_component(&plan.catalog, name, true, &mut report)?;
                }
                Decision::Cancelled => self.skip(name, SkipReason::Cancelled, &mut report),
            }
        }

        self.reporter.finish();
        Ok(report)
    }
}
