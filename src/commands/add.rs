//! Add command implementation

use std::path::PathBuf;

use crate::cli::AddArgs;
use crate::error::Result;
use crate::operations::{AddOptions, SyncEngine};
use crate::ui::console::ConsoleReporter;
use crate::ui::display;

use super::helpers::Session;

/// Run add command
pub fn run(cwd: Option<PathBuf>, registry_dir: Option<PathBuf>, args: &AddArgs) -> Result<i32> {
    let session = Session::open(cwd, registry_dir.as_deref())?;
    let options = AddOptions::from(args);
    let mut reporter = ConsoleReporter::new();
    let mut engine = SyncEngine::new(&session.client, &session.project, &mut reporter);

    let plan = engine.plan_add(&args.names, &options)?;
    if options.dry_run {
        display::print_add_plan(&plan);
        return Ok(plan.exit_code());
    }

    let report = engine.apply_add(plan, &options)?;
    display::print_sync_summary(&report, session.project.package_manager());
    Ok(report.exit_code())
}
