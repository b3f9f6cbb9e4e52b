//! Manifest types and parsing for docstub.toml files.

mod file;
mod parse;

use std::path::Path;

pub use file::DocstubToml;
use serde::Deserialize;
use toml::Spanned;

/// Default manifest filename.
pub const MANIFEST_FILE: &str = "docstub.toml";

/// Manifest written by `docstub init`.
pub const DEFAULT_MANIFEST: &str = r#"[docs]
# Copied verbatim into the generated docs. Set to "" to skip.
readme = "README.md"

[collector]
# Runs `crystal doc --format=json` by default. Extra flags are appended.
flags = []
# Read a JSON file produced beforehand instead:
# json = "docs.json"
# Or run a different command:
# command = ["crystal", "doc", "--format=json"]
"#;

/// Root manifest for docstub.toml
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    /// Output documentation settings
    #[serde(default)]
    pub docs: DocsConfig,

    /// Where the documentation model comes from
    #[serde(default)]
    pub collector: CollectorConfig,
}

/// `[docs]` section
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DocsConfig {
    /// README to copy into the output; empty disables the copy
    #[serde(default = "default_readme")]
    pub readme: String,
}

fn default_readme() -> String {
    "README.md".to_string()
}

impl Default for DocsConfig {
    fn default() -> Self {
        Self {
            readme: default_readme(),
        }
    }
}

impl DocsConfig {
    /// README source path, if the copy is enabled.
    pub fn readme(&self) -> Option<&Path> {
        (!self.readme.is_empty()).then(|| Path::new(&self.readme))
    }
}

/// `[collector]` section
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CollectorConfig {
    /// Pre-generated JSON documentation model
    pub json: Option<Spanned<String>>,

    /// Command printing the JSON documentation model on stdout
    pub command: Option<Spanned<Vec<String>>>,

    /// Extra arguments appended to the command
    #[serde(default)]
    pub flags: Vec<String>,
}

/// Resolved collector choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollectorSource<'a> {
    /// Read this JSON file.
    Json(&'a Path),
    /// Run this command (program first).
    Command(&'a [String]),
    /// Run `crystal doc --format=json`.
    Crystal,
}

impl CollectorConfig {
    /// Which collector the manifest asks for.
    pub fn source(&self) -> CollectorSource<'_> {
        if let Some(json) = &self.json {
            return CollectorSource::Json(Path::new(json.get_ref()));
        }
        match &self.command {
            Some(command) => CollectorSource::Command(command.get_ref()),
            None => CollectorSource::Crystal,
        }
    }
}
