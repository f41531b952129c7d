//! Presentation layer
//!
//! The sync engine emits structured [`SyncEvent`]s through a [`Reporter`]
//! instead of writing to the terminal, so it can run under tests, in dry-run
//! mode, or behind a different front end.
//!
//! - [`console::ConsoleReporter`]: styled terminal output with a spinner
//! - [`SilentReporter`]: no output (JSON mode)
//! - [`display`]: rendering of final reports and listings

use std::path::PathBuf;

use crate::operations::SkipReason;
use crate::resolver::UnresolvedDependency;

pub mod console;
pub mod display;

/// Progress of a sync operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncEvent {
    /// Resolution finished; components will be processed in this order
    Resolved { order: Vec<String> },
    /// A referenced component is missing from the catalog
    Unresolved(UnresolvedDependency),
    Fetching { name: String },
    Installed { name: String, written: Vec<PathBuf> },
    /// Some files of an otherwise installed component were not written
    FileSkipped { name: String, file_name: String, reason: String },
    Skipped { name: String, reason: SkipReason },
    Failed { name: String, error: String },
    /// Installed state inspection finished
    Inspected { files: usize },
}

/// Sink for engine events
pub trait Reporter {
    fn report(&mut self, event: SyncEvent);

    /// Called once the operation is done, successful or not
    fn finish(&mut self) {}
}

/// Reporter that discards every event
#[derive(Debug, Default)]
pub struct SilentReporter;

impl Reporter for SilentReporter {
    fn report(&mut self, _event: SyncEvent) {}
}
