//! Check operation - manifest and model validation.

use std::{
    collections::{BTreeMap, HashSet},
    error::Error as _,
    path::{Path, PathBuf},
};

use docstub_codegen::{README_TARGET, STUB_EXTENSION};
use docstub_model::DocRoot;

use crate::reports::CheckReport;

/// Execute the check operation.
///
/// Collects every problem instead of stopping at the first one.
pub fn check(
    root: &DocRoot,
    config_path: &Path,
    source: String,
    readme: Option<&Path>,
) -> CheckReport {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();
    let mut kinds: BTreeMap<String, usize> = BTreeMap::new();
    let mut seen: HashSet<PathBuf> = readme
        .map(|_| PathBuf::from(README_TARGET))
        .into_iter()
        .collect();
    let mut type_count = 0;

    for typ in root.walk_types() {
        type_count += 1;
        let kind = if typ.kind.is_empty() {
            "unknown"
        } else {
            typ.kind.as_str()
        };
        *kinds.entry(kind.to_string()).or_default() += 1;

        match typ.abs_id() {
            Ok(name) => {
                let path = name.to_path(STUB_EXTENSION);
                if !seen.insert(path.clone()) {
                    warnings.push(format!(
                        "stub for '{}' shares path '{}' with another file",
                        name,
                        path.display()
                    ));
                }
            }
            Err(e) => match e.source() {
                Some(cause) => errors.push(format!("{e}: {cause}")),
                None => errors.push(e.to_string()),
            },
        }
    }

    // Same read as `gen`.
    if let Some(readme) = readme
        && let Err(e) = std::fs::read_to_string(readme)
    {
        errors.push(format!("README '{}' cannot be read: {}", readme.display(), e));
    }

    CheckReport {
        config_path: config_path.to_path_buf(),
        source,
        type_count,
        kinds: kinds.into_iter().collect(),
        errors,
        warnings,
    }
}
