use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use peergen_codegen::GeneratorConfig;

use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct TemplatesCommand {
    /// Write the templates into this directory
    #[arg(long, value_name = "DIR")]
    pub export: Option<PathBuf>,

    /// Overwrite existing files when exporting
    #[arg(long, requires = "export")]
    pub force: bool,

    /// Path to peergen.toml; configured overrides are listed and exported too
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

impl TemplatesCommand {
    pub fn run(&self) -> Result<()> {
        let config = GeneratorConfig::discover(self.config.as_deref())?;
        let store = config.template_store()?;

        let report = match &self.export {
            Some(dir) => ops::templates::export(&store, dir, self.force)?,
            None => ops::templates::list(&store),
        };

        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
