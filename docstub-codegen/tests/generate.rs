//! End-to-end stub generation into a real directory.

use std::{fs, path::Path};

use docstub_codegen::StubGenerator;
use docstub_core::{DirSink, MemorySink};
use docstub_model::DocRoot;
use tempfile::TempDir;

const DOCS_JSON: &str = r#"{
  "repository_name": "shard",
  "program": {
    "full_name": "Toplevel",
    "kind": "module",
    "types": [
      {
        "full_name": "Shard",
        "kind": "module",
        "types": [
          {"full_name": "Shard::Client", "kind": "class"},
          {
            "full_name": "Shard::Cache(K, V)",
            "kind": "class",
            "types": [{"full_name": "Shard::Cache::Entry", "kind": "struct"}]
          }
        ]
      },
      {"full_name": "Version", "kind": "alias"}
    ]
  }
}"#;

const README: &str = "# shard\n\nA shard.\r\n";

fn read_tree(dir: &Path) -> Vec<(String, String)> {
    let mut files = Vec::new();
    collect(dir, dir, &mut files);
    files.sort();
    files
}

fn collect(root: &Path, dir: &Path, files: &mut Vec<(String, String)>) {
    for entry in fs::read_dir(dir).unwrap() {
        let path = entry.unwrap().path();
        if path.is_dir() {
            collect(root, &path, files);
        } else {
            let rel = path.strip_prefix(root).unwrap().display().to_string();
            files.push((rel, fs::read_to_string(&path).unwrap()));
        }
    }
}

#[test]
fn test_generate_into_directory() {
    let root: DocRoot = DOCS_JSON.parse().unwrap();
    let temp = TempDir::new().unwrap();
    let mut sink = DirSink::new(temp.path());

    let result = StubGenerator::new(&root)
        .with_readme(README)
        .generate(&mut sink)
        .unwrap();

    assert_eq!(result.stubs.len(), root.walk_types().count());
    assert!(result.duplicates.is_empty());

    let listing = read_tree(temp.path())
        .into_iter()
        .map(|(path, content)| format!("{path}: {}", content.lines().next().unwrap_or("")))
        .collect::<Vec<_>>()
        .join("\n");
    insta::assert_snapshot!(listing, @r"
    README.md: # shard
    Shard.md: # ::: Shard
    Shard/Cache.md: # ::: Shard::Cache
    Shard/Cache/Entry.md: # ::: Shard::Cache::Entry
    Shard/Client.md: # ::: Shard::Client
    Version.md: # ::: Version
    ");
}

#[test]
fn test_readme_copy_is_byte_identical() {
    let root: DocRoot = DOCS_JSON.parse().unwrap();
    let temp = TempDir::new().unwrap();
    let readme_path = temp.path().join("README.src.md");
    fs::write(&readme_path, README).unwrap();

    let out = temp.path().join("docs");
    StubGenerator::new(&root)
        .read_readme(&readme_path)
        .unwrap()
        .generate(&mut DirSink::new(&out))
        .unwrap();

    assert_eq!(fs::read(out.join("README.md")).unwrap(), README.as_bytes());
}

#[test]
fn test_generation_is_idempotent() {
    let root: DocRoot = DOCS_JSON.parse().unwrap();
    let temp = TempDir::new().unwrap();
    let generator = StubGenerator::new(&root).with_readme(README);

    generator.generate(&mut DirSink::new(temp.path())).unwrap();
    let first = read_tree(temp.path());
    generator.generate(&mut DirSink::new(temp.path())).unwrap();
    let second = read_tree(temp.path());

    assert_eq!(first, second);
    assert_eq!(first.len(), 6);
}

#[test]
fn test_memory_and_directory_sinks_agree() {
    let root: DocRoot = DOCS_JSON.parse().unwrap();
    let generator = StubGenerator::new(&root).with_readme(README);

    let mut memory = MemorySink::new();
    generator.generate(&mut memory).unwrap();

    let temp = TempDir::new().unwrap();
    generator.generate(&mut DirSink::new(temp.path())).unwrap();

    for (path, bytes) in memory.iter() {
        assert_eq!(fs::read(temp.path().join(path)).unwrap(), bytes);
    }
    assert_eq!(memory.len(), read_tree(temp.path()).len());
}
