//! Sources of the documentation model.

use std::{path::PathBuf, process::Command};

use crate::{DocRoot, Error, Result};

/// Something that can produce a documentation tree.
pub trait Collector {
    /// Human-readable description of where the tree comes from.
    fn describe(&self) -> String;

    /// Produce the documentation tree.
    fn collect(&self) -> Result<DocRoot>;
}

/// Reads a JSON document generated ahead of time.
#[derive(Debug, Clone)]
pub struct JsonFileCollector {
    path: PathBuf,
}

impl JsonFileCollector {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl Collector for JsonFileCollector {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn collect(&self) -> Result<DocRoot> {
        tracing::info!(path = %self.path.display(), "reading documentation model");
        DocRoot::from_file(&self.path)
    }
}

/// Runs the doc generator and parses what it prints on stdout.
#[derive(Debug, Clone)]
pub struct CommandCollector {
    program: String,
    args: Vec<String>,
    current_dir: Option<PathBuf>,
}

impl CommandCollector {
    /// Default program invoked when no command is configured.
    pub const DEFAULT_COMMAND: [&'static str; 3] = ["crystal", "doc", "--format=json"];

    /// Create a collector for `program` with the given arguments.
    pub fn new<I, S>(program: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
            current_dir: None,
        }
    }

    /// `crystal doc --format=json`
    pub fn crystal() -> Self {
        let [program, args @ ..] = Self::DEFAULT_COMMAND;
        Self::new(program, args)
    }

    /// Append extra arguments.
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Run the command from this directory.
    pub fn current_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.current_dir = Some(dir.into());
        self
    }

    /// The full command line, for display.
    pub fn command_line(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl Collector for CommandCollector {
    fn describe(&self) -> String {
        self.command_line()
    }

    fn collect(&self) -> Result<DocRoot> {
        let command_line = self.command_line();
        tracing::info!(command = %command_line, "running documentation collector");

        let mut command = Command::new(&self.program);
        command.args(&self.args);
        if let Some(dir) = &self.current_dir {
            command.current_dir(dir);
        }

        let output = command.output().map_err(|e| {
            Box::new(Error::Spawn {
                command: command_line.clone(),
                source: e,
            })
        })?;

        if !output.status.success() {
            return Err(Box::new(Error::CommandFailed {
                command: command_line,
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            }));
        }

        let stdout = String::from_utf8(output.stdout).map_err(|e| {
            Box::new(Error::Encoding {
                command: command_line.clone(),
                source: e,
            })
        })?;
        tracing::debug!(bytes = stdout.len(), "collector finished");

        DocRoot::from_json(&stdout, &format!("output of '{}'", command_line))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crystal_command_line() {
        let collector = CommandCollector::crystal();
        assert_eq!(collector.command_line(), "crystal doc --format=json");
    }

    #[test]
    fn test_extra_args() {
        let collector = CommandCollector::crystal().args(["--project-name=shard"]);
        assert_eq!(
            collector.describe(),
            "crystal doc --format=json --project-name=shard"
        );
    }

    #[test]
    fn test_json_file_missing() {
        let collector = JsonFileCollector::new("does/not/exist.json");
        let err = collector.collect().unwrap_err();
        assert!(matches!(*err, Error::Io { .. }));
    }

    #[test]
    fn test_spawn_failure() {
        let collector = CommandCollector::new("docstub-no-such-program", Vec::<String>::new());
        let err = collector.collect().unwrap_err();
        assert!(matches!(*err, Error::Spawn { .. }));
    }
}
