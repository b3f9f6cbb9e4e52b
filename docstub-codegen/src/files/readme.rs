use std::path::PathBuf;

use docstub_core::GeneratedFile;

/// Where the README copy lands in the output.
pub const README_TARGET: &str = "README.md";

/// Verbatim copy of the project README
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadmeCopy {
    pub content: String,
}

impl ReadmeCopy {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }
}

impl GeneratedFile for ReadmeCopy {
    fn path(&self) -> PathBuf {
        PathBuf::from(README_TARGET)
    }

    fn render(&self) -> String {
        self.content.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_readme_is_verbatim() {
        let content = "# Title\r\n\n  trailing spaces  \n\u{1F980}";
        let readme = ReadmeCopy::new(content);
        assert_eq!(readme.render(), content);
        assert_eq!(readme.path(), PathBuf::from("README.md"));
    }
}
