use std::path::{Path, PathBuf};

use eyre::Result;

use crate::FileSink;

/// Trait for types that represent a generated file
pub trait GeneratedFile {
    /// Get the file path relative to the output root
    fn path(&self) -> PathBuf;

    /// Render the file content
    fn render(&self) -> String;

    /// Materialize into a [`File`]
    fn to_file(&self) -> File {
        File::new(self.path(), self.render())
    }

    /// Write the file through a sink
    fn write(&self, sink: &mut dyn FileSink) -> Result<()> {
        sink.write_file(&self.path(), &self.render())
    }
}

/// A file to be generated
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct File {
    path: PathBuf,
    content: String,
}

impl File {
    /// Create a new file with the given relative path and content
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }

    /// Get the file path, relative to the output root
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the file content
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Write the file through a sink, replacing any previous content
    pub fn write(&self, sink: &mut dyn FileSink) -> Result<()> {
        sink.write_file(&self.path, &self.content)
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;
    use crate::{DirSink, MemorySink};

    #[test]
    fn test_file_write_to_memory() {
        let mut sink = MemorySink::new();
        let file = File::new("Foo/Bar.md", "# ::: Foo::Bar\n");

        file.write(&mut sink).unwrap();

        assert_eq!(sink.get("Foo/Bar.md"), Some("# ::: Foo::Bar\n"));
    }

    #[test]
    fn test_file_write_to_dir_overwrites() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("test.md"), "original").unwrap();

        let mut sink = DirSink::new(temp.path());
        File::new("test.md", "updated").write(&mut sink).unwrap();

        assert_eq!(
            fs::read_to_string(temp.path().join("test.md")).unwrap(),
            "updated"
        );
    }

    struct Greeting;

    impl GeneratedFile for Greeting {
        fn path(&self) -> PathBuf {
            PathBuf::from("hello.md")
        }

        fn render(&self) -> String {
            "hello\n".to_string()
        }
    }

    #[test]
    fn test_generated_file_to_file() {
        let file = Greeting.to_file();
        assert_eq!(file, File::new("hello.md", "hello\n"));
    }

    #[test]
    fn test_generated_file_write() {
        let mut sink = MemorySink::new();
        GeneratedFile::write(&Greeting, &mut sink).unwrap();
        assert_eq!(sink.get("hello.md"), Some("hello\n"));
    }

    #[test]
    fn test_accessors() {
        let file = File::new("a.md", "content");
        assert_eq!(file.path(), Path::new("a.md"));
        assert_eq!(file.content(), "content");
    }
}
