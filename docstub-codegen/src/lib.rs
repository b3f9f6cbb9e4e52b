//! Markdown stub generation for docstub.
//!
//! Turns a documentation tree into one `# ::: Name` stub per documented
//! type, which the site generator's API-docs plugin later expands, plus
//! a verbatim copy of the project README.
//!
//! # Module Organization
//!
//! - [`files`] - The individual generated files ([`TypeStub`], [`ReadmeCopy`])
//! - [`StubGenerator`] - Walks the tree and writes every file through a sink

pub mod files;
mod generator;
mod types;

pub use files::{README_TARGET, ReadmeCopy, STUB_EXTENSION, TypeStub};
pub use generator::StubGenerator;
pub use types::{GenerateResult, PreviewFile};
