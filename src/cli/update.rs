use clap::Parser;

/// Arguments for the update command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                   Update every component that drifted from the registry:\n    graft update\n\n\
                   Update specific components:\n    graft update button dialog\n\n\
                   Re-sync every installed component without prompting:\n    graft update --all --yes")]
pub struct UpdateArgs {
    /// Components to update (defaults to every modified component)
    #[arg(value_name = "NAME")]
    pub names: Vec<String>,

    /// Update every installed component, modified or not
    #[arg(long, conflicts_with = "names")]
    pub all: bool,

    /// Skip the confirmation prompt
    #[arg(long, short = 'y')]
    pub yes: bool,

    /// Show what would be updated without writing any file
    #[arg(long)]
    pub dry_run: bool,
}
