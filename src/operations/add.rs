//! Add operation
//!
//! Resolves the requested names plus their registry dependencies, drops
//! components already present in the install directory (unless overwriting),
//! and installs the rest in dependency order.

use tracing::info;

use crate::cli::AddArgs;
use crate::error::{GraftError, Result};
use crate::registry::Catalog;
use crate::resolver::{ResolvedSet, resolve};
use crate::ui::SyncEvent;
use crate::workspace::inspect::is_installed;

use super::{SkipReason, SyncEngine, SyncReport};

/// Configuration options for add
#[derive(Debug, Clone, Default)]
pub struct AddOptions {
    pub overwrite: bool,
    pub strict: bool,
    pub dry_run: bool,
}

impl From<&AddArgs> for AddOptions {
    fn from(args: &AddArgs) -> Self {
        Self {
            overwrite: args.overwrite,
            strict: args.strict,
            dry_run: args.dry_run,
        }
    }
}

/// Read-only result of the add planning phase
#[derive(Debug)]
pub struct AddPlan {
    pub catalog: Catalog,
    pub resolved: ResolvedSet,
    /// Components to fetch and write, dependencies first
    pub to_install: Vec<String>,
    /// Components skipped because a file of theirs already exists
    pub already_installed: Vec<String>,
}

impl AddPlan {
    /// Requested names the catalog does not contain
    pub fn not_found(&self) -> Vec<String> {
        self.resolved
            .missing_requested()
            .map(str::to_string)
            .collect()
    }

    /// Exit code the plan predicts: non-zero when a requested name is unknown
    pub fn exit_code(&self) -> i32 {
        i32::from(self.resolved.missing_requested().next().is_some())
    }
}

impl SyncEngine<'_> {
    /// Resolve and partition the requested components without writing
    ///
    /// # Errors
    ///
    /// Registry and cycle errors, and [`GraftError::UnresolvedDependencies`]
    /// in strict mode.
    pub fn plan_add(&mut self, names: &[String], options: &AddOptions) -> Result<AddPlan> {
        let catalog = self.load_catalog()?;
        let resolved = resolve(names, &catalog).into_result()?;

        if options.strict {
            let missing: Vec<String> = resolved
                .missing_transitive()
                .map(|u| u.name.clone())
                .collect();
            if !missing.is_empty() {
                return Err(GraftError::UnresolvedDependencies { names: missing });
            }
        }

        let install_dir = self.project.install_dir();
        let (already_installed, to_install): (Vec<String>, Vec<String>) =
            resolved.order.iter().cloned().partition(|name| {
                !options.overwrite
                    && catalog
                        .get(name)
                        .is_some_and(|item| is_installed(&install_dir, item))
            });

        info!(
            requested = names.len(),
            resolved = resolved.order.len(),
            install = to_install.len(),
            skip = already_installed.len(),
            "add planned"
        );

        Ok(AddPlan {
            catalog,
            resolved,
            to_install,
            already_installed,
        })
    }

    /// Fetch and write every planned component
    pub fn apply_add(&mut self, plan: AddPlan, options: &AddOptions) -> Result<SyncReport> {
        let mut report = SyncReport {
            unresolved: plan.resolved.unresolved.clone(),
            ..SyncReport::default()
        };

        self.reporter.report(SyncEvent::Resolved {
            order: plan.resolved.order.clone(),
        });
        for missing in plan.resolved.missing_transitive() {
            self.reporter.report(SyncEvent::Unresolved(missing.clone()));
        }

        for name in plan.not_found() {
            let error = GraftError::ComponentNotFound { name: name.clone() };
            self.fail(&name, error.to_string(), &mut report);
        }

        for name in &plan.resolved.order {
            if plan.already_installed.contains(name) {
                self.skip(name, SkipReason::AlreadyInstalled, &mut report);
            } else {
                self.sync_component(&plan.catalog, name, options.overwrite, &mut report)?;
            }
        }

        self.reporter.finish();
        Ok(report)
    }

    /// Plan and apply in one step
    pub fn add(&mut self, names: &[String], options: &AddOptions) -> Result<SyncReport> {
        let plan = self.plan_add(names, options)?;
        self.apply_add(plan, options)
    }
}
