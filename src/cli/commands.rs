use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "tl", about = concat!("[x] ticklist v", env!("CARGO_PKG_VERSION"), " - a to-do list for the terminal"), version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Read config from this file instead of the default location
    #[arg(short = 'c', long, global = true)]
    pub config: Option<PathBuf>,

    /// Route to start on: "#/", "#/active" or "#/completed"
    #[arg(short = 'r', long, global = true)]
    pub route: Option<String>,

    /// Write logs to this file (filter with RUST_LOG)
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run list commands from a file (or stdin) and print the result
    Script(ScriptArgs),
}

#[derive(Args)]
pub struct ScriptArgs {
    /// Command file; reads stdin when omitted
    pub file: Option<PathBuf>,
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["tl", "script", "cmds.txt", "--json", "-r", "#/active"]).unwrap();
        assert_eq!(cli.route.as_deref(), Some("#/active"));
        match cli.command {
            Some(Commands::Script(args)) => {
                assert!(args.json);
                assert_eq!(args.file, Some(PathBuf::from("cmds.txt")));
            }
            None => panic!("expected script subcommand"),
        }
    }

    #[test]
    fn no_subcommand_means_tui() {
        let cli = Cli::try_parse_from(["tl"]).unwrap();
        assert!(cli.command.is_none());
        assert!(cli.config.is_none());
    }
}
