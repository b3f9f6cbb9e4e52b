mod check;
mod completions;
mod generate;
mod init;
mod list;

use check::CheckCommand;
use clap::{Parser, Subcommand};
use completions::CompletionsCommand;
use eyre::Result;
use generate::GenerateCommand;
use init::InitCommand;
use list::ListCommand;

/// Extension trait for exiting on manifest or model errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T, E> UnwrapOrExit<T> for std::result::Result<T, Box<E>>
where
    E: miette::Diagnostic + Send + Sync + 'static,
{
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser)]
#[command(name = "docstub")]
#[command(version)]
#[command(about = "Generate markdown API stubs from a documentation model")]
pub(crate) struct Cli {
    /// Increase log verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        crate::logging::init(self.verbose);

        match &self.command {
            Commands::Init(cmd) => cmd.run(),
            Commands::Generate(cmd) => cmd.run(),
            Commands::Check(cmd) => cmd.run(),
            Commands::List(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Create a docstub.toml
    Init(InitCommand),

    /// Write one markdown stub per documented type
    #[command(alias = "gen")]
    Generate(GenerateCommand),

    /// Validate docstub.toml and the documentation model without writing
    Check(CheckCommand),

    /// List documented types and their stub paths
    List(ListCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_gen_alias() {
        let cli = Cli::try_parse_from(["docstub", "gen", "--dry-run"]).unwrap();
        assert!(matches!(cli.command, Commands::Generate(_)));
    }

    #[test]
    fn test_verbose_is_global() {
        let cli = Cli::try_parse_from(["docstub", "list", "-vv"]).unwrap();
        assert_eq!(cli.verbose, 2);
    }
}
