use clap::Parser;

/// Arguments for the init command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                   Initialize with defaults:\n    graft init\n\n\
                   Custom install directory and utils alias:\n    graft init --install-dir app/ui --utils-alias ~/lib/utils\n\n\
                   Use a self-hosted registry:\n    graft init --registry https://ui.example.com/r")]
pub struct InitArgs {
    /// Directory components are written to, relative to the project root
    #[arg(long, value_name = "DIR")]
    pub install_dir: Option<String>,

    /// Import path of the utilities module
    #[arg(long, value_name = "ALIAS")]
    pub utils_alias: Option<String>,

    /// Import path of the components directory
    #[arg(long, value_name = "ALIAS")]
    pub components_alias: Option<String>,

    /// Registry base URL
    #[arg(long, value_name = "URL")]
    pub registry: Option<String>,

    /// Overwrite an existing graft.json
    #[arg(long)]
    pub force: bool,
}

#[cfg(test)]
mod tests {
    use super::super::{Cli, Commands};
    use clap::Parser;

    #[test]
    fn test_cli_parsing_init() {
        let cli = Cli::try_parse_from([
            "graft",
            "init",
            "--install-dir",
            "app/ui",
            "--utils-alias",
            "~/utils",
            "--force",
        ])
        .unwrap();
        match cli.command {
            Commands::Init(args) => {
                assert_eq!(args.install_dir, Some("app/ui".to_string()));
                assert_eq!(args.utils_alias, Some("~/utils".to_string()));
                assert_eq!(args.components_alias, None);
                assert!(args.force);
            }
            _ => panic!("Expected Init command"),
        }
    }
}
