//! Qualified type names and their stub paths.

use std::{fmt, path::PathBuf, str::FromStr};

use thiserror::Error;

/// Separator between the segments of a qualified name.
pub const DELIMITER: &str = "::";

/// Error returned when a string is not a usable qualified name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NameError {
    #[error("qualified name is empty")]
    Empty,

    #[error("qualified name '{name}' has an empty segment")]
    EmptySegment { name: String },

    #[error("qualified name '{name}' has segment '{segment}', which is not a file name")]
    InvalidSegment { name: String, segment: String },
}

/// A namespaced name such as `Foo::Bar::Baz`.
///
/// Always non-empty, with no empty segment between delimiters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct QualifiedName(String);

impl QualifiedName {
    /// Validate and wrap a qualified name.
    pub fn parse(name: impl Into<String>) -> Result<Self, NameError> {
        let name = name.into();
        if name.is_empty() {
            return Err(NameError::Empty);
        }
        if name.split(DELIMITER).any(str::is_empty) {
            return Err(NameError::EmptySegment { name });
        }
        if let Some(segment) = name.split(DELIMITER).find(|s| !is_file_name(s)) {
            let segment = segment.to_string();
            return Err(NameError::InvalidSegment { name, segment });
        }
        Ok(Self(name))
    }

    /// The name as written, e.g. `Foo::Bar`.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Iterate over the segments, outermost first.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split(DELIMITER)
    }

    /// Relative path of the stub for this name: `Foo::Bar` -> `Foo/Bar.<ext>`.
    pub fn to_path(&self, ext: &str) -> PathBuf {
        let mut segments: Vec<&str> = self.segments().collect();
        let last = segments.pop().unwrap_or_default();

        let mut path: PathBuf = segments.into_iter().collect();
        path.push(format!("{}.{}", last, ext));
        path
    }
}

/// A segment maps to exactly one path component.
fn is_file_name(segment: &str) -> bool {
    segment != "." && segment != ".." && !segment.contains(['/', '\\'])
}

impl fmt::Display for QualifiedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for QualifiedName {
    type Err = NameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for QualifiedName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid() {
        let name = QualifiedName::parse("Foo::Bar").unwrap();
        assert_eq!(name.as_str(), "Foo::Bar");
        assert_eq!(name.to_string(), "Foo::Bar");
    }

    #[test]
    fn test_parse_empty() {
        assert_eq!(QualifiedName::parse(""), Err(NameError::Empty));
    }

    #[test]
    fn test_parse_empty_segment() {
        assert!(matches!(
            QualifiedName::parse("Foo::"),
            Err(NameError::EmptySegment { .. })
        ));
        assert!(matches!(
            QualifiedName::parse("::Foo"),
            Err(NameError::EmptySegment { .. })
        ));
        assert!(matches!(
            QualifiedName::parse("Foo::::Bar"),
            Err(NameError::EmptySegment { .. })
        ));
    }

    #[test]
    fn test_segments() {
        let name: QualifiedName = "A::B::C".parse().unwrap();
        assert_eq!(name.segments().collect::<Vec<_>>(), vec!["A", "B", "C"]);
    }

    #[test]
    fn test_parse_rejects_path_segments() {
        for bad in ["Foo/Bar", "Foo::Bar/Baz", "Foo\\Bar", "..", "Foo::..", "Foo::.::Bar"] {
            assert!(
                matches!(
                    QualifiedName::parse(bad),
                    Err(NameError::InvalidSegment { .. })
                ),
                "{bad}"
            );
        }
    }

    #[test]
    fn test_invalid_segment_names_the_segment() {
        let err = QualifiedName::parse("Foo::a/b").unwrap_err();
        assert_eq!(
            err,
            NameError::InvalidSegment {
                name: "Foo::a/b".to_string(),
                segment: "a/b".to_string(),
            }
        );
    }

    #[test]
    fn test_to_path_nested() {
        let name: QualifiedName = "A::B::C".parse().unwrap();
        assert_eq!(name.to_path("md"), PathBuf::from("A/B/C.md"));
    }

    #[test]
    fn test_to_path_top_level() {
        let name: QualifiedName = "Foo".parse().unwrap();
        assert_eq!(name.to_path("md"), PathBuf::from("Foo.md"));
    }

    #[test]
    fn test_to_path_is_deterministic() {
        let a: QualifiedName = "Foo::Bar".parse().unwrap();
        let b: QualifiedName = "Foo::Bar".parse().unwrap();
        assert_eq!(a.to_path("md"), b.to_path("md"));
    }

    #[test]
    fn test_single_colon_is_not_a_delimiter() {
        let name: QualifiedName = "Foo:Bar".parse().unwrap();
        assert_eq!(name.segments().count(), 1);
        assert_eq!(name.to_path("md"), PathBuf::from("Foo:Bar.md"));
    }
}
