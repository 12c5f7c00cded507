mod check;
mod completions;
mod generate;
mod templates;

use check::CheckCommand;
use clap::{Parser, Subcommand};
use completions::CompletionsCommand;
use eyre::Result;
use generate::GenerateCommand;
use templates::TemplatesCommand;

/// Extension trait for exiting on interface errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for peergen_dsl::Result<T> {
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
#[command(name = "peergen")]
#[command(version)]
#[command(about = "Generate Neuron RPC peer classes from interface declarations")]
pub(crate) struct Cli {
    /// Log generation details to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn verbose(&self) -> bool {
        self.verbose
    }

    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Generate(cmd) => cmd.run(),
            Commands::Check(cmd) => cmd.run(),
            Commands::Templates(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the peer header and implementation
    Generate(GenerateCommand),

    /// Parse an interface file without generating code
    Check(CheckCommand),

    /// List or export the body templates
    Templates(TemplatesCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}
