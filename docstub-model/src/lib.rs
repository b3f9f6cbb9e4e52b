//! Documentation model for docstub.
//!
//! The model is the JSON tree emitted by `crystal doc --format=json`:
//! a root program whose nested `types` describe every documented
//! namespace, class, struct, module, enum and alias.
//!
//! # Architecture
//!
//! ```text
//! crystal doc → Collector → DocRoot / DocType → docstub-codegen
//! ```

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod collector;
mod error;
mod serde_helpers;
mod types;

pub use collector::{Collector, CommandCollector, JsonFileCollector};
pub use error::{Error, Result};
pub use types::{DocRoot, DocType, WalkTypes, strip_generics};
