use std::path::PathBuf;

use docstub_core::QualifiedName;

/// Result of stub generation
#[derive(Debug, Default)]
pub struct GenerateResult {
    /// Paths of the stub files written, in traversal order
    pub stubs: Vec<PathBuf>,
    /// Path of the README copy, if one was written
    pub readme: Option<PathBuf>,
    /// Names whose stub path was already taken by an earlier file
    pub duplicates: Vec<QualifiedName>,
}

impl GenerateResult {
    /// Total number of files written.
    pub fn file_count(&self) -> usize {
        self.stubs.len() + usize::from(self.readme.is_some())
    }
}

/// A generated file for preview
#[derive(Debug)]
pub struct PreviewFile {
    /// Relative path from output directory
    pub path: String,
    /// File content
    pub content: String,
}
