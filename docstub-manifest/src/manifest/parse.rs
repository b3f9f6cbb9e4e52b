//! Manifest parsing from files and strings.

use std::str::FromStr;

use super::{MANIFEST_FILE, Manifest};
use crate::{Error, Result, error::SourceContext};

impl FromStr for Manifest {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_manifest(s, MANIFEST_FILE)
    }
}

impl Manifest {
    /// Parse a docstub.toml from a string with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        parse_manifest(content, filename)
    }
}

/// Parse a manifest from content with the given filename for error reporting.
pub fn parse_manifest(content: &str, filename: &str) -> Result<Manifest> {
    let source_ctx = SourceContext::new(content, filename);
    let manifest: Manifest = toml::from_str(content).map_err(|e| source_ctx.parse_error(e))?;
    validate_manifest(&manifest, &source_ctx)?;
    Ok(manifest)
}

/// Validate the manifest after parsing.
fn validate_manifest(manifest: &Manifest, ctx: &SourceContext) -> Result<()> {
    let collector = &manifest.collector;

    if let (Some(_), Some(command)) = (&collector.json, &collector.command) {
        return Err(ctx.validation_error_at(
            "set either `collector.json` or `collector.command`, not both",
            command.span(),
        ));
    }

    if let Some(json) = &collector.json
        && json.get_ref().trim().is_empty()
    {
        return Err(ctx.validation_error_at("`collector.json` must not be empty", json.span()));
    }

    if let Some(command) = &collector.command
        && command.get_ref().first().is_none_or(|p| p.trim().is_empty())
    {
        return Err(ctx.validation_error_at(
            "`collector.command` must start with a program name",
            command.span(),
        ));
    }

    if collector.json.is_some() && !collector.flags.is_empty() {
        return Err(ctx.validation_error(
            "`collector.flags` only apply when the model comes from a command",
        ));
    }

    Ok(())
}
