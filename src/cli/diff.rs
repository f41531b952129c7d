use clap::Parser;

/// Arguments for the diff command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                   Compare every installed component with the registry:\n    graft diff\n\n\
                   Show line changes for one component:\n    graft diff button --patch\n\n\
                   Machine readable report:\n    graft diff --json")]
pub struct DiffArgs {
    /// Only report this component
    pub name: Option<String>,

    /// Print the report as JSON
    #[arg(long, conflicts_with = "patch")]
    pub json: bool,

    /// Print unified diffs for modified files
    #[arg(long)]
    pub patch: bool,
}
