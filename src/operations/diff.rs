//! Diff operation: inspection only, no writes

use serde::Serialize;

use crate::error::{GraftError, Result};
use crate::workspace::inspect::{InstallState, InstalledComponent};

use super::SyncEngine;

/// Installed state grouped by status
#[derive(Debug, Clone, Default)]
pub struct DiffReport {
    pub entries: Vec<InstalledComponent>,
}

/// Serializable view of a [`DiffReport`]
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DiffGroups<'a> {
    pub identical: Vec<&'a InstalledComponent>,
    pub modified: Vec<&'a InstalledComponent>,
    pub local_only: Vec<&'a InstalledComponent>,
    pub errors: usize,
}

impl DiffReport {
    pub fn with_status(&self, status: InstallState) -> impl Iterator<Item = &InstalledComponent> {
        self.entries.iter().filter(move |e| e.status == status)
    }

    /// Entries whose comparison could not be made
    pub fn errors(&self) -> impl Iterator<Item = &InstalledComponent> {
        self.entries.iter().filter(|e| e.error.is_some())
    }

    pub fn has_errors(&self) -> bool {
        self.errors().next().is_some()
    }

    pub fn is_clean(&self) -> bool {
        self.with_status(InstallState::Modified).next().is_none()
    }

    /// Non-zero when any file could not be compared
    pub fn exit_code(&self) -> i32 {
        i32::from(self.has_errors())
    }

    pub fn groups(&self) -> DiffGroups<'_> {
        DiffGroups {
            identical: self.with_status(InstallState::Identical).collect(),
            modified: self.with_status(InstallState::Modified).collect(),
            local_only: self.with_status(InstallState::LocalOnly).collect(),
            errors: self.errors().count(),
        }
    }
}

impl SyncEngine<'_> {
    /// Compare installed files with the registry
    ///
    /// With `component`, only that component's files are reported; a name the
    /// catalog does not know is [`GraftError::ComponentNotFound`].
    pub fn diff(&mut self, component: Option<&str>) -> Result<DiffReport> {
        let catalog = self.load_catalog()?;
        if let Some(name) = component.filter(|name| !catalog.contains(name)) {
            return Err(GraftError::ComponentNotFound {
                name: name.to_string(),
            });
        }

        let mut entries = self.inspect(&catalog)?;
        if let Some(name) = component {
            entries.retain(|e| e.is_tracked() && e.name == name);
        }

        self.reporter.finish();
        Ok(DiffReport { entries })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::RegistryClient;
    use crate::test_fixtures::{MemoryRegistry, RecordingReporter, create_project, item, write_installed};

    fn registry() -> MemoryRegistry {
        MemoryRegistry::new(vec![
            item("button", &["ui/button.tsx"], &[]),
            item("card", &["ui/card.tsx"], &[]),
        ])
        .with_file("ui/button.tsx", "export const Button = 1;\n")
        .with_file("ui/card.tsx", "export const Card = 1;\n")
    }

    #[test]
    fn test_diff_groups_by_status() {
        let (_temp, project) = create_project();
        write_installed(&project, "button.tsx", "export const Button = 1;   \n\n");
        write_installed(&project, "card.tsx", "export const Card = 2;\n");
        write_installed(&project, "mine.tsx", "local");
        let client = RegistryClient::new(registry());
        let mut reporter = RecordingReporter::default();

        let report = SyncEngine::new(&client, &project, &mut reporter)
            .diff(None)
            .unwrap();
        let groups = report.groups();

        assert_eq!(groups.identical.len(), 1);
        assert_eq!(groups.identical[0].name, "button");
        assert_eq!(groups.modified.len(), 1);
        assert_eq!(groups.modified[0].name, "card");
        assert_eq!(groups.local_only.len(), 1);
        assert_eq!(groups.errors, 0);
        assert!(!report.is_clean());
        assert_eq!(report.exit_code(), 0);
    }

    #[test]
    fn test_diff_does_not_write() {
        let (_temp, project) = create_project();
        let card = write_installed(&project, "card.tsx", "export const Card = 2;\n");
        let client = RegistryClient::new(registry());
        let mut reporter = RecordingReporter::default();

        SyncEngine::new(&client, &project, &mut reporter)
            .diff(None)
            .unwrap();
        assert_eq!(
            std::fs::read_to_string(card).unwrap(),
            "export const Card = 2;\n"
        );
        assert!(!project.install_dir().join("button.tsx").exists());
    }

    #[test]
    fn test_diff_single_component() {
        let (_temp, project) = create_project();
        write_installed(&project, "button.tsx", "export const Button = 1;\n");
        write_installed(&project, "card.tsx", "export const Card = 2;\n");
        let client = RegistryClient::new(registry());
        let mut reporter = RecordingReporter::default();

        let report = SyncEngine::new(&client, &project, &mut reporter)
            .diff(Some("card"))
            .unwrap();
        assert_eq!(report.entries.len(), 1);
        assert_eq!(report.entries[0].file_name, "card.tsx");
    }

    #[test]
    fn test_diff_unknown_component() {
        let (_temp, project) = create_project();
        let client = RegistryClient::new(registry());
        let mut reporter = RecordingReporter::default();

        let err = SyncEngine::new(&client, &project, &mut reporter)
            .diff(Some("carousel"))
            .unwrap_err();
        assert!(matches!(err, GraftError::ComponentNotFound { .. }));
    }

    #[test]
    fn test_diff_fetch_error_is_modified_and_fails() {
        let (_temp, project) = create_project();
        write_installed(&project, "card.tsx", "export const Card = 1;\n");
        let client = RegistryClient::new(registry().failing("ui/card.tsx"));
        let mut reporter = RecordingReporter::default();

        let report = SyncEngine::new(&client, &project, &mut reporter)
            .diff(None)
            .unwrap();
        let groups = report.groups();
        assert_eq!(groups.modified.len(), 1);
        assert_eq!(groups.errors, 1);
        assert_eq!(report.exit_code(), 1);
    }

    #[test]
    fn test_groups_serialize() {
        let (_temp, project) = create_project();
        write_installed(&project, "mine.tsx", "local");
        let client = RegistryClient::new(registry());
        let mut reporter = RecordingReporter::default();

        let report = SyncEngine::new(&client, &project, &mut reporter)
            .diff(None)
            .unwrap();
        let json = serde_json::to_value(report.groups()).unwrap();
        assert_eq!(json["localOnly"][0]["status"], "local-only");
        assert_eq!(json["localOnly"][0]["fileName"], "mine.tsx");
        assert_eq!(json["errors"], 0);
    }
}
