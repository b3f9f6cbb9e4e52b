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
pub struct GenerateCommand {
    /// Path to docstub.toml
    #[arg(short, long, default_value = MANIFEST_FILE)]
    pub config: PathBuf,

    /// Output directory for the stubs
    #[arg(short, long, default_value = "docs")]
    pub output: PathBuf,

    /// Preview generated files without writing to disk
    #[arg(long)]
    pub dry_run: bool,
}

impl GenerateCommand {
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

        let report = ops::generate(
            &root,
            collector.describe(),
            ops::generate::GenerateOptions {
                output_dir: &self.output,
                readme: readme.as_deref(),
                dry_run: self.dry_run,
            },
        )?;

        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
