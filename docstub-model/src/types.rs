//! Documentation tree types.

use std::{path::Path, str::FromStr};

use docstub_core::QualifiedName;
use serde::Deserialize;

use crate::{Error, Result, serde_helpers::null_as_default};

/// Root of a `crystal doc --format=json` document.
#[derive(Debug, Clone, Deserialize)]
pub struct DocRoot {
    /// Repository the docs were built from.
    #[serde(default)]
    pub repository_name: Option<String>,

    /// Rendered README body.
    #[serde(default)]
    pub body: Option<String>,

    /// The top-level program; its nested types are the documented API.
    pub program: DocType,
}

impl DocRoot {
    /// Parse a JSON document, naming `filename` in error reports.
    pub fn from_json(content: &str, filename: &str) -> Result<Self> {
        serde_json::from_str(content).map_err(|e| Error::parse(e, content, filename))
    }

    /// Read and parse a JSON document from disk.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        Self::from_json(&content, &path.display().to_string())
    }

    /// Every documented type, outermost first.
    pub fn walk_types(&self) -> WalkTypes<'_> {
        self.program.walk_types()
    }
}

impl FromStr for DocRoot {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_json(s, "docs.json")
    }
}

/// A documented type: class, struct, module, enum, alias, annotation or lib.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DocType {
    /// Short name, e.g. `Bar`.
    #[serde(default)]
    pub name: String,

    /// Fully qualified name, e.g. `Foo::Bar(T)`.
    pub full_name: String,

    /// Kind as reported by the doc generator (`class`, `module`, ...).
    #[serde(default, deserialize_with = "null_as_default")]
    pub kind: String,

    #[serde(default)]
    pub doc: Option<String>,

    #[serde(default)]
    pub summary: Option<String>,

    /// Types nested directly inside this one.
    #[serde(default, deserialize_with = "null_as_default")]
    pub types: Vec<DocType>,
}

impl DocType {
    /// Qualified identifier of this type with generic parameters removed.
    ///
    /// `Foo::Bar(T)` becomes `Foo::Bar`.
    pub fn abs_id(&self) -> Result<QualifiedName> {
        QualifiedName::parse(strip_generics(&self.full_name)).map_err(|source| {
            Box::new(Error::InvalidName {
                full_name: self.full_name.clone(),
                source,
            })
        })
    }

    /// Pre-order walk over every type nested below this one.
    ///
    /// The receiver itself is not yielded.
    pub fn walk_types(&self) -> WalkTypes<'_> {
        WalkTypes {
            stack: self.types.iter().rev().collect(),
        }
    }

    /// Check if this type has nested types.
    pub fn has_types(&self) -> bool {
        !self.types.is_empty()
    }
}

/// Iterator returned by [`DocType::walk_types`].
#[derive(Debug, Clone)]
pub struct WalkTypes<'a> {
    stack: Vec<&'a DocType>,
}

impl<'a> Iterator for WalkTypes<'a> {
    type Item = &'a DocType;

    fn next(&mut self) -> Option<Self::Item> {
        let typ = self.stack.pop()?;
        self.stack.extend(typ.types.iter().rev());
        Some(typ)
    }
}

/// Remove every parenthesized generic parameter list from a type name.
pub fn strip_generics(full_name: &str) -> String {
    let mut depth = 0usize;
    full_name
        .chars()
        .filter(|&c| match c {
            '(' => {
                depth += 1;
                false
            }
            ')' => {
                depth = depth.saturating_sub(1);
                false
            }
            _ => depth == 0,
        })
        .collect()
}
