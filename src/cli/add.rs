use clap::Parser;

/// Arguments for the add command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                   Add a component and its registry dependencies:\n    graft add dialog\n\n\
                   Add several components:\n    graft add button card badge\n\n\
                   Replace files that already exist:\n    graft add button --overwrite\n\n\
                   Preview without writing:\n    graft add dialog --dry-run")]
pub struct AddArgs {
    /// Component names to add
    #[arg(required = true, value_name = "NAME")]
    pub names: Vec<String>,

    /// Overwrite components that are already installed
    #[arg(long)]
    pub overwrite: bool,

    /// Fail when a component depends on something the registry does not publish
    #[arg(long)]
    pub strict: bool,

    /// Show what would be installed without writing any file
    #[arg(long)]
    pub dry_run: bool,
}
