//! CLI definitions using clap derive API
//!
//! This module is organized into submodules for each command's argument types:
//! - init: Init command arguments
//! - add: Add command arguments
//! - update: Update command arguments
//! - diff: Diff command arguments
//! - list: List command arguments
//! - completions: Completions command arguments

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod add;
pub mod completions;
pub mod diff;
pub mod init;
pub mod list;
pub mod update;

pub use add::AddArgs;
pub use completions::CompletionsArgs;
pub use diff::DiffArgs;
pub use init::InitArgs;
pub use list::ListArgs;
pub use update::UpdateArgs;

/// Graft - copy-paste component registry client
///
/// Add UI components from a registry to your project as source files, detect
/// local drift, and re-sync.
#[derive(Parser, Debug)]
#[command(
    name = "graft",
    author,
    version,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Copy-paste component registry client",
    long_about = "Graft copies UI components from a registry into your project as plain source \
                  files, together with the registry components they depend on, and keeps track \
                  of how your copies drift from the registry.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  graft init                     \x1b[90m# Create graft.json\x1b[0m\n   \
                  graft add dialog               \x1b[90m# Add dialog and its dependencies\x1b[0m\n   \
                  graft diff                     \x1b[90m# Compare installed files with the registry\x1b[0m\n   \
                  graft update                   \x1b[90m# Re-sync modified components\x1b[0m\n   \
                  graft list                     \x1b[90m# List registry components\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    /// Project directory (defaults to current directory)
    #[arg(long, short = 'C', global = true, value_name = "DIR")]
    pub cwd: Option<PathBuf>,

    /// Read the registry from a local directory instead of the network
    #[arg(long, global = true, env = "GRAFT_REGISTRY_DIR", value_name = "DIR")]
    pub registry_dir: Option<PathBuf>,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create graft.json in the current project
    Init(InitArgs),

    /// Add components and their registry dependencies
    Add(AddArgs),

    /// Re-sync installed components from the registry
    Update(UpdateArgs),

    /// Compare installed components with the registry
    Diff(DiffArgs),

    /// List components available in the registry
    List(ListArgs),

    /// Show version information
    #[command(hide = true)]
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_cli_parsing_list() {
        let cli = Cli::try_parse_from(["graft", "list"]).unwrap();
        assert!(matches!(cli.command, Commands::List(_)));
    }

    #[test]
    fn test_cli_parsing_version() {
        let cli = Cli::try_parse_from(["graft", "version"]).unwrap();
        assert!(matches!(cli.command, Commands::Version));
    }

    #[test]
    fn test_cli_global_options() {
        let cli = Cli::try_parse_from(["graft", "-v", "-C", "/tmp/app", "list"]).unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.cwd, Some(PathBuf::from("/tmp/app")));
    }

    #[test]
    fn test_cli_global_options_after_subcommand() {
        let cli = Cli::try_parse_from(["graft", "diff", "--registry-dir", "/tmp/registry"]).unwrap();
        assert_eq!(cli.registry_dir, Some(PathBuf::from("/tmp/registry")));
    }

    #[test]
    #[serial]
    fn test_cli_registry_dir_from_env() {
        unsafe {
            std::env::set_var("GRAFT_REGISTRY_DIR", "/tmp/env-registry");
        }
        let from_env = Cli::try_parse_from(["graft", "list"]).unwrap();
        let from_flag =
            Cli::try_parse_from(["graft", "--registry-dir", "/tmp/flag-registry", "list"]).unwrap();
        unsafe {
            std::env::remove_var("GRAFT_REGISTRY_DIR");
        }

        assert_eq!(from_env.registry_dir, Some(PathBuf::from("/tmp/env-registry")));
        // Flag should override environment variable
        assert_eq!(from_flag.registry_dir, Some(PathBuf::from("/tmp/flag-registry")));
    }

    #[test]
    fn test_cli_parsing_completions() {
        let cli = Cli::try_parse_from(["graft", "completions", "bash"]).unwrap();
        match cli.command {
            Commands::Completions(args) => {
                assert_eq!(args.shell, clap_complete::Shell::Bash);
            }
            _ => panic!("Expected Completions command"),
        }
    }

    #[test]
    fn test_cli_parsing_completions_unknown_shell() {
        assert!(Cli::try_parse_from(["graft", "completions", "tcsh"]).is_err());
    }
}
