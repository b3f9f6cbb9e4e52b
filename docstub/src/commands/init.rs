use std::path::PathBuf;

use clap::Args;
use docstub_manifest::{DocstubToml, MANIFEST_FILE};
use eyre::{Result, bail};

use super::UnwrapOrExit;

#[derive(Args)]
pub struct InitCommand {
    /// Where to write the manifest
    #[arg(default_value = MANIFEST_FILE)]
    pub path: PathBuf,

    /// Overwrite an existing manifest
    #[arg(short, long)]
    pub force: bool,
}

impl InitCommand {
    pub fn run(&self) -> Result<()> {
        if self.path.exists() && !self.force {
            bail!(
                "{} already exists (use --force to overwrite)",
                self.path.display()
            );
        }

        let toml = DocstubToml::init(&self.path).unwrap_or_exit();
        println!("Created {}", toml.path().display());
        println!();
        println!("Next steps:");
        println!("  docstub check");
        println!("  docstub gen --output docs");
        Ok(())
    }
}
