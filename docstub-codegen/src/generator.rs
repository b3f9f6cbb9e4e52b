use std::{
    collections::HashSet,
    path::{Path, PathBuf},
};

use docstub_core::{File, FileSink, GeneratedFile};
use docstub_model::DocRoot;
use eyre::{Result, WrapErr};

use crate::{GenerateResult, PreviewFile, ReadmeCopy, TypeStub};

/// Generates one markdown stub per documented type, plus the README copy
pub struct StubGenerator<'a> {
    root: &'a DocRoot,
    readme: Option<ReadmeCopy>,
}

impl<'a> StubGenerator<'a> {
    pub fn new(root: &'a DocRoot) -> Self {
        Self { root, readme: None }
    }

    /// Copy this README content into the output.
    pub fn with_readme(mut self, content: impl Into<String>) -> Self {
        self.readme = Some(ReadmeCopy::new(content));
        self
    }

    /// Read the README to copy from disk.
    pub fn read_readme(self, path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .wrap_err_with(|| format!("Failed to read README '{}'", path.display()))?;
        Ok(self.with_readme(content))
    }

    /// Stubs for every type in the tree, in traversal order.
    pub fn stubs(&self) -> Result<Vec<TypeStub>> {
        self.root
            .walk_types()
            .map(|typ| -> Result<TypeStub> { Ok(TypeStub::new(typ.abs_id()?)) })
            .collect()
    }

    /// Every file that would be written, stubs first.
    pub fn files(&self) -> Result<Vec<File>> {
        let mut files: Vec<File> = self.stubs()?.iter().map(TypeStub::to_file).collect();
        if let Some(readme) = &self.readme {
            files.push(readme.to_file());
        }
        Ok(files)
    }

    /// Preview generated files without writing anything
    pub fn preview(&self) -> Result<Vec<PreviewFile>> {
        Ok(self
            .files()?
            .into_iter()
            .map(|file| PreviewFile {
                path: file.path().display().to_string(),
                content: file.content().to_string(),
            })
            .collect())
    }

    /// Write every file through `sink`
    pub fn generate(&self, sink: &mut dyn FileSink) -> Result<GenerateResult> {
        let stubs = self.stubs()?;
        let mut result = GenerateResult::default();

        // README is written last, so a stub at its path would be lost too.
        let mut seen: HashSet<PathBuf> = self.readme.iter().map(|r| r.path()).collect();
        for stub in &stubs {
            let path = stub.path();
            if !seen.insert(path.clone()) {
                tracing::warn!(
                    name = %stub.name,
                    path = %path.display(),
                    "stub path written more than once"
                );
                result.duplicates.push(stub.name.clone());
            }

            stub.write(sink)
                .wrap_err_with(|| format!("Failed to write stub '{}'", path.display()))?;
            result.stubs.push(path);
        }

        if let Some(readme) = &self.readme {
            let path = readme.path();
            readme
                .write(sink)
                .wrap_err_with(|| format!("Failed to write '{}'", path.display()))?;
            result.readme = Some(path);
        }

        tracing::info!(
            stubs = result.stubs.len(),
            readme = result.readme.is_some(),
            "generated documentation stubs"
        );
        Ok(result)
    }
}
