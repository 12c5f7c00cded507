use std::path::PathBuf;

use clap::Args;
use eyre::{Result, bail};
use peergen_codegen::GeneratorConfig;
use peergen_core::to_pascal_case;
use peergen_dsl::InterfaceSource;

use super::UnwrapOrExit;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct GenerateCommand {
    /// Interface declaration file
    pub input: PathBuf,

    /// Class name (defaults to the input file name in PascalCase)
    #[arg(short, long)]
    pub name: Option<String>,

    /// Output directory (defaults to current directory)
    #[arg(short, long, default_value = ".")]
    pub output: PathBuf,

    /// Path to peergen.toml (defaults to ./peergen.toml when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Directory with template overrides (overrides peergen.toml setting)
    #[arg(short, long)]
    pub templates: Option<PathBuf>,

    /// Preview generated code without writing to disk
    #[arg(long)]
    pub dry_run: bool,
}

impl GenerateCommand {
    pub fn run(&self) -> Result<()> {
        let source = InterfaceSource::open(&self.input).unwrap_or_exit();

        let mut config = GeneratorConfig::discover(self.config.as_deref())?;
        if let Some(dir) = &self.templates {
            config.generator.templates = Some(dir.clone());
        }

        let name = match &self.name {
            Some(name) => name.clone(),
            None => to_pascal_case(source.stem().unwrap_or_default()),
        };
        if name.is_empty() {
            bail!(
                "cannot derive a class name from '{}', pass --name",
                self.input.display()
            );
        }

        let report = ops::generate(
            &source,
            &config,
            ops::generate::GenerateOptions {
                name: &name,
                output_dir: &self.output,
                dry_run: self.dry_run,
            },
        )?;

        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
