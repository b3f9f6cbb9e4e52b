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
pub struct CheckCommand {
    /// Path to docstub.toml
    #[arg(short, long, default_value = MANIFEST_FILE)]
    pub config: PathBuf,
}

impl CheckCommand {
    pub fn run(&self) -> Result<()> {
        let toml = DocstubToml::open(&self.config).unwrap_or_exit();
        let collector = collector::from_manifest(&toml);
        tracing::debug!(
            config = %toml.path().display(),
            source = %collector.describe(),
            "loaded manifest"
        );
        let root = collector.collect().unwrap_or_exit();
        let readme = toml.manifest().docs.readme().map(|p| toml.resolve(p));

        let report = ops::check(
            &root,
            &self.config,
            collector.describe(),
            readme.as_deref(),
        );
        report.render(&mut TerminalOutput::new());

        if !report.is_valid() {
            std::process::exit(1);
        }
        Ok(())
    }
}
