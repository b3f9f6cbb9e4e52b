use std::path::PathBuf;

use docstub_core::{GeneratedFile, QualifiedName};

/// Extension of generated stub files.
pub const STUB_EXTENSION: &str = "md";

/// A one-line markdown stub for a documented type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeStub {
    pub name: QualifiedName,
}

impl TypeStub {
    pub fn new(name: QualifiedName) -> Self {
        Self { name }
    }
}

impl GeneratedFile for TypeStub {
    fn path(&self) -> PathBuf {
        self.name.to_path(STUB_EXTENSION)
    }

    fn render(&self) -> String {
        format!("# ::: {}\n", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stub(name: &str) -> TypeStub {
        TypeStub::new(name.parse().unwrap())
    }

    #[test]
    fn test_nested_stub() {
        let stub = stub("A::B::C");
        assert_eq!(stub.path(), PathBuf::from("A/B/C.md"));
        assert_eq!(stub.render(), "# ::: A::B::C\n");
    }

    #[test]
    fn test_top_level_stub() {
        let stub = stub("Foo");
        assert_eq!(stub.path(), PathBuf::from("Foo.md"));
        assert_eq!(stub.render(), "# ::: Foo\n");
    }

    #[test]
    fn test_render_is_single_line() {
        assert_eq!(stub("Foo::Bar").render().lines().count(), 1);
    }
}
