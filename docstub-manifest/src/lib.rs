//! Parsing and validation of `docstub.toml`.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod error;
mod manifest;

pub use error::{Error, Result, SourceContext};
pub use manifest::{
    CollectorConfig, CollectorSource, DEFAULT_MANIFEST, DocsConfig, DocstubToml, MANIFEST_FILE,
    Manifest,
};
