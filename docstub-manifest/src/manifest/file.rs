use std::path::{Path, PathBuf};

use super::{DEFAULT_MANIFEST, Manifest};
use crate::{Error, Result};

/// Represents a docstub.toml file with both raw content and parsed manifest.
pub struct DocstubToml {
    path: PathBuf,
    content: String,
    manifest: Manifest,
}

impl DocstubToml {
    /// Open and parse a docstub.toml file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = std::fs::read_to_string(&path).map_err(|e| {
            Box::new(Error::Io {
                path: path.clone(),
                source: e,
            })
        })?;
        let filename = path.display().to_string();
        let manifest = Manifest::from_str_with_filename(&content, &filename)?;

        Ok(Self {
            path,
            content,
            manifest,
        })
    }

    /// Write the default manifest to `path` and open it.
    pub fn init(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        std::fs::write(path, DEFAULT_MANIFEST).map_err(|e| {
            Box::new(Error::Write {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        Self::open(path)
    }

    /// Get the file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the raw content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Get the parsed manifest.
    pub fn manifest(&self) -> &Manifest {
        &self.manifest
    }

    /// Directory containing the manifest.
    pub fn base_dir(&self) -> &Path {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        }
    }

    /// Resolve a path from the manifest against its directory.
    pub fn resolve(&self, path: impl AsRef<Path>) -> PathBuf {
        self.base_dir().join(path)
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_open_missing() {
        let err = DocstubToml::open("does/not/exist/docstub.toml")
            .err()
            .unwrap();
        assert!(matches!(*err, Error::Io { .. }));
    }

    #[test]
    fn test_init_then_open() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("docstub.toml");

        let toml = DocstubToml::init(&path).unwrap();

        assert_eq!(toml.content(), DEFAULT_MANIFEST);
        assert_eq!(toml.base_dir(), temp.path());
        assert_eq!(
            toml.resolve("README.md"),
            temp.path().join("README.md")
        );
    }

    #[test]
    fn test_base_dir_of_bare_filename() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("docstub.toml");
        std::fs::write(&path, "").unwrap();

        let mut toml = DocstubToml::open(&path).unwrap();
        toml.path = PathBuf::from("docstub.toml");

        assert_eq!(toml.base_dir(), Path::new("."));
    }
}
