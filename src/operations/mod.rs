//! Sync operations: add, update and diff
//!
//! [`SyncEngine`] composes the registry client, resolver, inspector and
//! installer. Every command runs in two phases:
//!
//! 1. plan: read-only. Loads the catalog, resolves dependencies, inspects the
//!    install directory. Fatal errors (cycle, registry failure) surface here,
//!    before anything is written.
//! 2. apply: fetches and writes one component at a time. A failure is caught
//!    at the component boundary, reported, and tallied; the batch continues.
//!
//! User decisions (the update confirmation) come in as a [`Decision`] value.
//! The engine never prompts and never exits the process.

use std::collections::BTreeSet;
use std::path::PathBuf;

use serde::Serialize;

use crate::installer::SkippedFile;
use crate::resolver::UnresolvedDependency;

pub mod add;
pub mod diff;
pub mod engine;
pub mod update;

pub use add::{AddOptions, AddPlan};
pub use diff::DiffReport;
pub use engine::SyncEngine;
pub use update::{UpdateOptions, UpdatePlan};

/// Answer to "apply these changes?"
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Confirmed,
    Cancelled,
}

/// Why a component was not processed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SkipReason {
    AlreadyInstalled,
    NotInstalled,
    Cancelled,
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            SkipReason::AlreadyInstalled => "already installed",
            SkipReason::NotInstalled => "not installed",
            SkipReason::Cancelled => "cancelled",
        })
    }
}

/// Terminal state of one component
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "kebab-case")]
pub enum ComponentState {
    /// At least one file was written
    Installed {
        written: Vec<PathBuf>,
        #[serde(skip_serializing_if = "Vec::is_empty")]
        skipped_files: Vec<SkippedFile>,
    },
    Skipped { reason: SkipReason },
    Failed { error: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComponentOutcome {
    pub name: String,
    #[serde(flatten)]
    pub state: ComponentState,
}

/// Result of an add or update run
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncReport {
    pub outcomes: Vec<ComponentOutcome>,
    /// External packages required by the installed components
    pub dependencies: BTreeSet<String>,
    pub dev_dependencies: BTreeSet<String>,
    pub unresolved: Vec<UnresolvedDependency>,
}

impl SyncReport {
    pub(crate) fn push(&mut self, name: &str, state: ComponentState) {
        self.outcomes.push(ComponentOutcome {
            name: name.to_string(),
            state,
        });
    }

    fn count<F: Fn(&ComponentState) -> bool>(&self, f: F) -> usize {
        self.outcomes.iter().filter(|o| f(&o.state)).count()
    }

    pub fn installed_count(&self) -> usize {
        self.count(|s| matches!(s, ComponentState::Installed { .. }))
    }

    pub fn skipped_count(&self) -> usize {
        self.count(|s| matches!(s, ComponentState::Skipped { .. }))
    }

    pub fn failure_count(&self) -> usize {
        self.count(|s| matches!(s, ComponentState::Failed { .. }))
    }

    pub fn has_failures(&self) -> bool {
        self.failure_count() > 0
    }

    /// Process exit code: non-zero when any component failed
    pub fn exit_code(&self) -> i32 {
        i32::from(self.has_failures())
    }

    /// Outcome for a component name
    #[cfg(test)]
    pub fn outcome(&self, name: &str) -> Option<&ComponentState> {
        self.outcomes
            .iter()
            .find(|o| o.name == name)
            .map(|o| &o.state)
    }
}
