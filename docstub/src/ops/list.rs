//! List operation - every documented type and its stub path.

use docstub_codegen::STUB_EXTENSION;
use docstub_model::DocRoot;
use eyre::Result;

use crate::reports::{ListEntry, ListReport};

/// Execute the list operation.
pub fn list(root: &DocRoot) -> Result<ListReport> {
    let entries = root
        .walk_types()
        .map(|typ| -> Result<ListEntry> {
            let name = typ.abs_id()?;
            Ok(ListEntry {
                path: name.to_path(STUB_EXTENSION).display().to_string(),
                name: name.to_string(),
                kind: typ.kind.clone(),
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(ListReport { entries })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_entries() {
        let root: DocRoot = r#"{"program": {"full_name": "Toplevel", "types": [
            {"full_name": "Foo", "kind": "module", "types": [
                {"full_name": "Foo::Bar(T)", "kind": "class"}
            ]}
        ]}}"#
            .parse()
            .unwrap();

        let report = list(&root).unwrap();

        let rows: Vec<_> = report
            .entries
            .iter()
            .map(|e| (e.name.as_str(), e.kind.as_str(), e.path.as_str()))
            .collect();
        assert_eq!(
            rows,
            vec![
                ("Foo", "module", "Foo.md"),
                ("Foo::Bar", "class", "Foo/Bar.md"),
            ]
        );
    }

    #[test]
    fn test_list_invalid_name() {
        let root: DocRoot = r#"{"program": {"full_name": "Toplevel", "types": [{"full_name": ""}]}}"#
            .parse()
            .unwrap();
        assert!(list(&root).is_err());
    }
}
