//! Sync engine core
//!
//! Holds the collaborators shared by add, update and diff, and the
//! per-component fetch → write step that add and update both run.

use tracing::{debug, info, warn};

use crate::error::Result;
use crate::installer::Installer;
use crate::registry::{Catalog, RegistryClient};
use crate::ui::{Reporter, SyncEvent};
use crate::workspace::Project;
use crate::workspace::inspect::{InstalledComponent, Inspector};

use super::{ComponentState, SyncReport};

/// Orchestrates registry, resolver, inspector and installer for one command
pub struct SyncEngine<'a> {
    pub(crate) client: &'a RegistryClient,
    pub(crate) project: &'a Project,
    pub(crate) reporter: &'a mut dyn Reporter,
}

impl<'a> SyncEngine<'a> {
    pub fn new(
        client: &'a RegistryClient,
        project: &'a Project,
        reporter: &'a mut dyn Reporter,
    ) -> Self {
        Self {
            client,
            project,
            reporter,
        }
    }

    /// Load the registry catalog; failure is fatal for every operation
    pub(crate) fn load_catalog(&self) -> Result<Catalog> {
        let catalog = self.client.catalog()?;
        info!(
            registry = %self.client.location(),
            name = catalog.name(),
            version = catalog.version(),
            "catalog loaded"
        );
        Ok(catalog)
    }

    /// Classify the files in the project's install directory
    pub(crate) fn inspect(&mut self, catalog: &Catalog) -> Result<Vec<InstalledComponent>> {
        let project = self.project;
        let install_dir = project.install_dir();
        let entries = Inspector::new(self.client, catalog, &project.config.aliases)
            .inspect(&install_dir)?;
        debug!(dir = %install_dir.display(), files = entries.len(), "inspection complete");
        self.reporter.report(SyncEvent::Inspected {
            files: entries.len(),
        });
        Ok(entries)
    }

    /// Fetch one component and write its files
    ///
    /// Per-component errors are reported and recorded in `report`; only
    /// errors that are not scoped to this component are returned.
    pub(crate) fn sync_component(
        &mut self,
        catalog: &Catalog,
        name: &str,
        overwrite: bool,
        report: &mut SyncReport,
    ) -> Result<()> {
        self.reporter.report(SyncEvent::Fetching {
            name: name.to_string(),
        });

        let component = match self.client.fetch_component(catalog, name) {
            Ok(component) => component,
            Err(e) if e.is_recoverable() => {
                warn!(component = name, error = %e, "fetch failed");
                self.fail(name, e.to_string(), report);
                return Ok(());
            }
            Err(e) => return Err(e),
        };

        let project = self.project;
        let install_dir = project.install_dir();
        let installer = Installer::new(&install_dir, &project.config.aliases, overwrite);
        let write = installer.install_component(&component);

        if write.is_total_failure() {
            let error = write
                .failed
                .first()
                .map(|(_, e)| e.to_string())
                .unwrap_or_default();
            warn!(component = name, error = %error, "no files written");
            self.fail(name, error, report);
            return Ok(());
        }

        let skipped_files = write.skipped_files();
        for skipped in &skipped_files {
            self.reporter.report(SyncEvent::FileSkipped {
                name: name.to_string(),
                file_name: skipped.file_name.clone(),
                reason: skipped.reason.clone(),
            });
        }

        report.dependencies.extend(component.dependencies);
        report.dev_dependencies.extend(component.dev_dependencies);

        info!(component = name, files = write.written.len(), "installed");
        self.reporter.report(SyncEvent::Installed {
            name: name.to_string(),
            written: write.written.clone(),
        });
        report.push(
            name,
            ComponentState::Installed {
                written: write.written,
                skipped_files,
            },
        );
        Ok(())
    }

    pub(crate) fn fail(&mut self, name: &str, error: String, report: &mut SyncReport) {
        self.reporter.report(SyncEvent::Failed {
            name: name.to_string(),
            error: error.clone(),
        });
        report.push(name, ComponentState::Failed { error });
    }

    pub(crate) fn skip(&mut self, name: &str, reason: super::SkipReason, report: &mut SyncReport) {
        debug!(component = name, %reason, "skipped");
        self.reporter.report(SyncEvent::Skipped {
            name: name.to_string(),
            reason,
        });
        report.push(name, ComponentState::Skipped { reason });
    }
}
