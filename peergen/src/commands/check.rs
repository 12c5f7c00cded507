use std::path::PathBuf;

use clap::Args;
use eyre::{Context, Result};
use peergen_codegen::GeneratorConfig;
use peergen_dsl::InterfaceSource;

use super::UnwrapOrExit;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct CheckCommand {
    /// Interface declaration file
    pub input: PathBuf,

    /// Path to peergen.toml (defaults to ./peergen.toml when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Fail on the first line that is not a declaration
    #[arg(long)]
    pub strict: bool,

    /// Print the parse result as JSON
    #[arg(long)]
    pub json: bool,
}

impl CheckCommand {
    pub fn run(&self) -> Result<()> {
        let source = InterfaceSource::open(&self.input).unwrap_or_exit();

        if self.strict {
            source.ensure_strict().unwrap_or_exit();
        }

        if self.json {
            let json = serde_json::to_string_pretty(source.parsed())
                .wrap_err("Failed to serialize parse result")?;
            println!("{}", json);
            return Ok(());
        }

        for diagnostic in source.diagnostics() {
            eprintln!("{:?}", miette::Report::new(*diagnostic));
        }

        let config = GeneratorConfig::discover(self.config.as_deref())?;
        let report = ops::check(&source, &config)?;
        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
