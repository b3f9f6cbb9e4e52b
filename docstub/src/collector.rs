//! Collector dispatch.
//!
//! Turns the `[collector]` section of a manifest into a runnable collector.

use docstub_manifest::{CollectorSource, DocstubToml};
use docstub_model::{Collector, CommandCollector, JsonFileCollector};

/// Build the collector a manifest asks for.
///
/// Relative paths resolve against the manifest's directory, which is also
/// where collector commands run.
pub fn from_manifest(toml: &DocstubToml) -> Box<dyn Collector> {
    let collector = &toml.manifest().collector;
    match collector.source() {
        CollectorSource::Json(path) => Box::new(JsonFileCollector::new(toml.resolve(path))),
        CollectorSource::Command(command) => {
            let (program, args) = command
                .split_first()
                .map(|(program, args)| (program.as_str(), args))
                .unwrap_or_default();
            Box::new(
                CommandCollector::new(program, args.iter().cloned())
                    .args(collector.flags.iter().cloned())
                    .current_dir(toml.base_dir()),
            )
        }
        CollectorSource::Crystal => Box::new(
            CommandCollector::crystal()
                .args(collector.flags.iter().cloned())
                .current_dir(toml.base_dir()),
        ),
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    fn open(content: &str) -> (TempDir, DocstubToml) {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("docstub.toml");
        fs::write(&path, content).unwrap();
        let toml = DocstubToml::open(&path).unwrap();
        (temp, toml)
    }

    #[test]
    fn test_default_is_crystal() {
        let (_temp, toml) = open("[collector]\nflags = [\"--project-name=shard\"]\n");
        assert_eq!(
            from_manifest(&toml).describe(),
            "crystal doc --format=json --project-name=shard"
        );
    }

    #[test]
    fn test_json_resolves_against_manifest() {
        let (temp, toml) = open("[collector]\njson = \"target/docs.json\"\n");
        assert_eq!(
            from_manifest(&toml).describe(),
            temp.path().join("target/docs.json").display().to_string()
        );
    }

    #[test]
    fn test_custom_command() {
        let (_temp, toml) = open("[collector]\ncommand = [\"cat\", \"docs.json\"]\n");
        assert_eq!(from_manifest(&toml).describe(), "cat docs.json");
    }
}
