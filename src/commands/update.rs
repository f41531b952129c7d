//! Update command implementation

use std::path::PathBuf;

use console::Style;

use crate::cli::UpdateArgs;
use crate::error::Result;
use crate::operations::{Decision, SyncEngine, UpdateOptions};
use crate::ui::console::ConsoleReporter;
use crate::ui::display;

use super::helpers::{Session, confirm};

/// Run update command
pub fn run(cwd: Option<PathBuf>, registry_dir: Option<PathBuf>, args: &UpdateArgs) -> Result<i32> {
    let session = Session::open(cwd, registry_dir.as_deref())?;
    let options = UpdateOptions::from(args);
    let mut reporter = ConsoleReporter::new();
    let mut engine = SyncEngine::new(&session.client, &session.project, &mut reporter);

    let plan = engine.plan_update(&args.names, &options)?;
    display::print_update_plan(&plan);

    if options.dry_run {
        return Ok(plan.exit_code());
    }

    let decision = if plan.targets.is_empty() {
        Decision::Confirmed
    } else {
        let message = format!(
            "Overwrite {} component(s) with the registry version?",
            plan.targets.len()
        );
        confirm(&message, args.yes)?
    };

    if decision == Decision::Cancelled {
        println!("{}", Style::new().yellow().apply_to("Update cancelled."));
    }

    let report = engine.apply_update(plan, decision)?;
    if decision == Decision::Confirmed {
        display::print_sync_summary(&report, session.project.package_manager());
    }
    Ok(report.exit_code())
}
