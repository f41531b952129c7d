//! Display functions for plans, reports and the catalog
//!
//! Human output goes to stdout with `console` styling; `--json` output is
//! produced with `serde_json` from the same report types.

use console::Style;
use serde::Serialize;
use similar::TextDiff;

use crate::content::normalize;
use crate::error::{GraftError, Result};
use crate::operations::{AddPlan, ComponentState, DiffReport, SyncReport, UpdatePlan};
use crate::registry::Catalog;
use crate::workspace::PackageManager;
use crate::workspace::inspect::{InstallState, InstalledComponent};

/// Print any serializable report as pretty JSON
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).map_err(|e| GraftError::IoError {
        message: format!("Failed to serialize output: {e}"),
    })?;
    println!("{json}");
    Ok(())
}

/// Dry-run rendering of an add plan
pub fn print_add_plan(plan: &AddPlan) {
    let bold = Style::new().bold();
    println!("{}", bold.apply_to("Would install:"));
    if plan.to_install.is_empty() {
        println!("  (nothing)");
    }
    for name in &plan.to_install {
        let files = plan
            .catalog
            .get(name)
            .map(|item| item.file_names().collect::<Vec<_>>().join(", "))
            .unwrap_or_default();
        println!("  {} {}", Style::new().green().apply_to(name), files);
    }
    for name in &plan.already_installed {
        println!("  {} {} (already installed)", Style::new().dim().apply_to("-"), name);
    }
    for name in plan.not_found() {
        println!("  {} {} (not in registry)", Style::new().red().apply_to("✗"), name);
    }
    for missing in plan.resolved.missing_transitive() {
        if let Some(parent) = &missing.required_by {
            println!(
                "  {} '{}' required by '{}' is not in the registry",
                Style::new().yellow().apply_to("warning:"),
                missing.name,
                parent
            );
        }
    }
}

/// Files an update would overwrite
pub fn print_update_plan(plan: &UpdatePlan) {
    if plan.targets.is_empty() {
        println!("All installed components are up to date.");
    } else {
        println!("{}", Style::new().bold().apply_to("Components to update:"));
        for entry in plan.target_files() {
            let marker = match entry.status {
                InstallState::Modified => Style::new().yellow().apply_to("modified"),
                _ => Style::new().dim().apply_to("identical"),
            };
            println!("  {} {} ({})", entry.name, entry.file_name, marker);
        }
    }

    for name in &plan.not_installed {
        println!("  {} {} (not installed)", Style::new().dim().apply_to("-"), name);
    }
    for name in &plan.not_found {
        println!("  {} {} (not in registry)", Style::new().red().apply_to("✗"), name);
    }
}

/// Summary after add or update, with dependency install hints
pub fn print_sync_summary(report: &SyncReport, package_manager: PackageManager) {
    let installed = report.installed_count();
    let skipped = report.skipped_count();
    let failed = report.failure_count();

    println!();
    let summary = format!("{installed} installed, {skipped} skipped, {failed} failed");
    if failed > 0 {
        println!("{}", Style::new().red().bold().apply_to(summary));
        for outcome in &report.outcomes {
            if let ComponentState::Failed { error } = &outcome.state {
                println!("  {}: {}", outcome.name, error);
            }
        }
    } else {
        println!("{}", Style::new().green().apply_to(summary));
    }

    let hints = dependency_hints(report, package_manager);
    if !hints.is_empty() {
        println!();
        println!("{}", Style::new().bold().apply_to("Install the required packages:"));
        for hint in hints {
            println!("  {}", Style::new().cyan().apply_to(hint));
        }
    }
}

/// Commands installing the external packages a sync reported
pub fn dependency_hints(report: &SyncReport, package_manager: PackageManager) -> Vec<String> {
    let mut hints = Vec::new();
    if !report.dependencies.is_empty() {
        let packages: Vec<&str> = report.dependencies.iter().map(String::as_str).collect();
        hints.push(format!(
            "{} {}",
            package_manager.install_command(false),
            packages.join(" ")
        ));
    }
    if !report.dev_dependencies.is_empty() {
        let packages: Vec<&str> = report.dev_dependencies.iter().map(String::as_str).collect();
        hints.push(format!(
            "{} {}",
            package_manager.install_command(true),
            packages.join(" ")
        ));
    }
    hints
}

/// Grouped diff report; with `patch`, modified files get a unified diff
pub fn print_diff(report: &DiffReport, patch: bool) {
    if report.entries.is_empty() {
        println!("No components installed.");
        return;
    }

    let groups = [
        (InstallState::Modified, Style::new().yellow(), "Modified"),
        (InstallState::Identical, Style::new().green(), "Up to date"),
        (InstallState::LocalOnly, Style::new().dim(), "Local only"),
    ];

    for (status, style, title) in groups {
        let entries: Vec<&InstalledComponent> = report.with_status(status).collect();
        if entries.is_empty() {
            continue;
        }
        println!("{}", style.clone().bold().apply_to(format!("{title} ({})", entries.len())));
        for entry in entries {
            match &entry.error {
                Some(error) => println!(
                    "  {} {} {}",
                    entry.name,
                    entry.file_name,
                    Style::new().red().apply_to(format!("(error: {error})"))
                ),
                None if status == InstallState::LocalOnly => println!("  {}", entry.file_name),
                None => println!("  {} {}", entry.name, entry.file_name),
            }
        }
    }

    if patch {
        for entry in report.with_status(InstallState::Modified) {
            if let Some(diff) = entry_patch(entry) {
                println!();
                print_colored_patch(&diff);
            }
        }
    }

    if report.is_clean() {
        println!();
        println!("{}", Style::new().green().apply_to("No drift from the registry."));
    }
}

fn entry_patch(entry: &InstalledComponent) -> Option<String> {
    let registry = entry.registry_content.as_deref()?;
    let local = std::fs::read_to_string(&entry.path).ok()?;
    Some(unified_patch(&entry.file_name, &local, registry))
}

/// Unified diff from the local file to the registry version
///
/// Both sides are normalized first, so whitespace-only drift does not show.
pub fn unified_patch(file_name: &str, local: &str, registry: &str) -> String {
    let old = format!("{}\n", normalize(local));
    let new = format!("{}\n", normalize(registry));
    TextDiff::from_lines(&old, &new)
        .unified_diff()
        .context_radius(3)
        .header(&format!("local/{file_name}"), &format!("registry/{file_name}"))
        .to_string()
}

fn print_colored_patch(diff: &str) {
    for line in diff.lines() {
        let styled = if line.starts_with("+++") || line.starts_with("---") {
            Style::new().bold().apply_to(line)
        } else if line.starts_with('+') {
            Style::new().green().apply_to(line)
        } else if line.starts_with('-') {
            Style::new().red().apply_to(line)
        } else if line.starts_with("@@") {
            Style::new().cyan().apply_to(line)
        } else {
            Style::new().apply_to(line)
        };
        println!("{styled}");
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CatalogEntry<'a> {
    name: &'a str,
    category: &'a str,
    status: String,
    description: &'a str,
    registry_dependencies: &'a [String],
}

/// Catalog listing, grouped by category in registry order
pub fn print_catalog(catalog: &Catalog, json: bool) -> Result<()> {
    if json {
        let entries: Vec<CatalogEntry<'_>> = catalog
            .items()
            .iter()
            .map(|item| CatalogEntry {
                name: &item.name,
                category: &item.category,
                status: item.status.to_string(),
                description: &item.description,
                registry_dependencies: &item.registry_dependencies,
            })
            .collect();
        return print_json(&entries);
    }

    println!(
        "{} {}",
        Style::new().bold().apply_to(catalog.name()),
        Style::new().dim().apply_to(catalog.version())
    );

    let mut categories: Vec<&str> = Vec::new();
    for item in catalog.items() {
        if !categories.contains(&item.category.as_str()) {
            categories.push(&item.category);
        }
    }

    for category in categories {
        println!();
        let title = if category.is_empty() { "other" } else { category };
        println!("{}", Style::new().bold().yellow().apply_to(title));
        for item in catalog.items().iter().filter(|i| i.category == category) {
            let status = match item.status {
                crate::registry::ComponentStatus::Stable => String::new(),
                other => format!(" [{other}]"),
            };
            println!(
                "  {}{} {}",
                Style::new().bold().apply_to(&item.name),
                Style::new().magenta().apply_to(status),
                Style::new().dim().apply_to(&item.description)
            );
        }
    }
    Ok(())
}
