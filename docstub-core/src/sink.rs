//! Destinations for generated files.

use std::{
    fs,
    io::{BufWriter, Write},
    path::{Component, Path, PathBuf},
};

use eyre::{Result, bail};
use indexmap::IndexMap;

/// Something generated files can be written into.
///
/// Paths are always relative to the sink's root. Opening a path that was
/// already written truncates it.
pub trait FileSink {
    /// Open a file for writing.
    fn open(&mut self, path: &Path) -> Result<Box<dyn Write + '_>>;

    /// Write a whole file in one go.
    fn write_file(&mut self, path: &Path, content: &str) -> Result<()> {
        let mut writer = self.open(path)?;
        writer.write_all(content.as_bytes())?;
        writer.flush()?;
        Ok(())
    }
}

fn check_relative(path: &Path) -> Result<()> {
    if path.as_os_str().is_empty() {
        bail!("cannot write to an empty path");
    }
    if !path.components().all(|c| matches!(c, Component::Normal(_))) {
        bail!(
            "refusing to write '{}': output paths must be relative and stay inside the output directory",
            path.display()
        );
    }
    Ok(())
}

/// Writes files below a directory on disk.
#[derive(Debug, Clone)]
pub struct DirSink {
    root: PathBuf,
}

impl DirSink {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl FileSink for DirSink {
    fn open(&mut self, path: &Path) -> Result<Box<dyn Write + '_>> {
        check_relative(path)?;
        let full = self.root.join(path);
        if let Some(parent) = full.parent() {
            fs::create_dir_all(parent)?;
        }
        tracing::debug!(path = %full.display(), "writing file");
        Ok(Box::new(BufWriter::new(fs::File::create(&full)?)))
    }
}

/// Stages files in memory, in the order they were first opened.
#[derive(Debug, Default, Clone)]
pub struct MemorySink {
    files: IndexMap<PathBuf, Vec<u8>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw bytes of a staged file.
    pub fn get_bytes(&self, path: impl AsRef<Path>) -> Option<&[u8]> {
        self.files.get(path.as_ref()).map(Vec::as_slice)
    }

    /// Content of a staged file, if it exists and is valid UTF-8.
    pub fn get(&self, path: impl AsRef<Path>) -> Option<&str> {
        self.get_bytes(path)
            .and_then(|bytes| std::str::from_utf8(bytes).ok())
    }

    /// Check if a file has been staged.
    pub fn contains(&self, path: impl AsRef<Path>) -> bool {
        self.files.contains_key(path.as_ref())
    }

    /// Number of staged files.
    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Iterate over staged files.
    pub fn iter(&self) -> impl Iterator<Item = (&Path, &[u8])> {
        self.files
            .iter()
            .map(|(path, bytes)| (path.as_path(), bytes.as_slice()))
    }

    /// Paths of staged files.
    pub fn paths(&self) -> impl Iterator<Item = &Path> {
        self.files.keys().map(PathBuf::as_path)
    }
}

impl FileSink for MemorySink {
    fn open(&mut self, path: &Path) -> Result<Box<dyn Write + '_>> {
        check_relative(path)?;
        let buf = self.files.entry(path.to_path_buf()).or_default();
        buf.clear();
        Ok(Box::new(buf))
    }
}
