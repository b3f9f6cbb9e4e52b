use std::path::PathBuf;

use clap::Args;
use docstub_manifest::{DocstubToml, MANIFEST_FILE};
use eyre::Result;

use super::UnwrapOrExit;
use crate::{
    collector, ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct ListCommand {
    /// Path to docstub.toml
    #[arg(short, long, default_value = MANIFEST_FILE)]
    pub config: PathBuf,
}

impl ListCommand {
    pub fn run(&self) -> Result<()> {
        let toml = DocstubToml::open(&self.config).unwrap_or_exit();
        let root = collector::from_manifest(&toml).collect().unwrap_or_exit();

        ops::list(&root)?.render(&mut TerminalOutput::new());
        Ok(())
    }
}
