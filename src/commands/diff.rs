//! Diff command implementation

use std::path::PathBuf;

use crate::cli::DiffArgs;
use crate::error::Result;
use crate::operations::SyncEngine;
use crate::ui::console::ConsoleReporter;
use crate::ui::{Reporter, SilentReporter, display};

use super::helpers::Session;

/// Run diff command
pub fn run(cwd: Option<PathBuf>, registry_dir: Option<PathBuf>, args: &DiffArgs) -> Result<i32> {
    let session = Session::open(cwd, registry_dir.as_deref())?;
    let mut reporter: Box<dyn Reporter> = if args.json {
        Box::new(SilentReporter)
    } else {
        Box::new(ConsoleReporter::new())
    };

    let report = SyncEngine::new(&session.client, &session.project, reporter.as_mut())
        .diff(args.name.as_deref())?;

    if args.json {
        display::print_json(&report.groups())?;
    } else {
        display::print_diff(&report, args.patch);
    }
    Ok(report.exit_code())
}
