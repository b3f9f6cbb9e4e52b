//! Core utilities and types for docstub.
//!
//! This crate provides the output side of stub generation: qualified
//! names and how they map onto paths, generated files, and the sinks
//! those files are written through.

mod file;
mod name;
mod sink;

// File operations
pub use file::{File, GeneratedFile};
// Naming
pub use name::{DELIMITER, NameError, QualifiedName};
// Output sinks
pub use sink::{DirSink, FileSink, MemorySink};
