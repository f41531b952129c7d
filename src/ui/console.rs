//! Terminal reporter
//!
//! Prints one styled line per component outcome to stdout and shows a spinner
//! on stderr while a component is being fetched. The spinner hides itself when
//! stderr is not a terminal.

use std::time::Duration;

use console::Style;
use indicatif::{ProgressBar, ProgressStyle};

use super::{Reporter, SyncEvent};

pub struct ConsoleReporter {
    spinner: Option<ProgressBar>,
}

impl ConsoleReporter {
    pub fn new() -> Self {
        Self { spinner: None }
    }

    fn start_spinner(&mut self, message: String) {
        self.clear_spinner();
        let style = ProgressStyle::with_template("{spinner:.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner());
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(style);
        spinner.set_message(message);
        spinner.enable_steady_tick(Duration::from_millis(80));
        self.spinner = Some(spinner);
    }

    fn clear_spinner(&mut self) {
        if let Some(spinner) = self.spinner.take() {
            spinner.finish_and_clear();
        }
    }
}

impl Default for ConsoleReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl Reporter for ConsoleReporter {
    fn report(&mut self, event: SyncEvent) {
        let green = Style::new().green();
        let yellow = Style::new().yellow();
        let red = Style::new().red().bold();
        let dim = Style::new().dim();

        match event {
            SyncEvent::Resolved { order } => {
                if !order.is_empty() {
                    println!("{} {}", dim.apply_to("Resolved:"), order.join(", "));
                }
            }
            SyncEvent::Unresolved(missing) => match missing.required_by {
                Some(parent) => println!(
                    "{} '{}' (required by '{}') is not in the registry",
                    yellow.apply_to("warning:"),
                    missing.name,
                    parent
                ),
                None => println!(
                    "{} '{}' is not in the registry",
                    yellow.apply_to("warning:"),
                    missing.name
                ),
            },
            SyncEvent::Fetching { name } => self.start_spinner(format!("Fetching {name}")),
            SyncEvent::Installed { name, written } => {
                self.clear_spinner();
                let files: Vec<String> = written
                    .iter()
                    .filter_map(|p| p.file_name())
                    .map(|f| f.to_string_lossy().into_owned())
                    .collect();
                println!(
                    "{} {} {}",
                    green.apply_to("✓"),
                    Style::new().bold().apply_to(&name),
                    dim.apply_to(files.join(", "))
                );
            }
            SyncEvent::FileSkipped {
                name,
                file_name,
                reason,
            } => println!(
                "  {} {}/{}: {}",
                yellow.apply_to("!"),
                name,
                file_name,
                reason
            ),
            SyncEvent::Skipped { name, reason } => {
                self.clear_spinner();
                println!("{} {} ({})", dim.apply_to("-"), name, reason);
            }
            SyncEvent::Failed { name, error } => {
                self.clear_spinner();
                println!("{} {}: {}", red.apply_to("✗"), name, error);
            }
            SyncEvent::Inspected { .. } => {}
        }
    }

    fn finish(&mut self) {
        self.clear_spinner();
    }
}
