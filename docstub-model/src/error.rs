use std::path::PathBuf;

use docstub_core::NameError;
use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for model operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(help("generate it with 'crystal doc --format=json' or configure a collector command"))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse documentation model")]
    #[diagnostic(code(docstub::model::parse))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to run '{command}'")]
    #[diagnostic(
        code(docstub::collector::spawn),
        help("check that the program is installed and on PATH")
    )]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("'{command}' exited with {status}")]
    #[diagnostic(code(docstub::collector::failed), help("{stderr}"))]
    CommandFailed {
        command: String,
        status: String,
        stderr: String,
    },

    #[error("output of '{command}' is not valid UTF-8")]
    #[diagnostic(code(docstub::collector::encoding))]
    Encoding {
        command: String,
        #[source]
        source: std::string::FromUtf8Error,
    },

    #[error("invalid type name '{full_name}'")]
    #[diagnostic(code(docstub::model::invalid_name))]
    InvalidName {
        full_name: String,
        #[source]
        source: NameError,
    },
}

impl Error {
    /// Create a parse error from a serde_json error with source context
    pub fn parse(source: serde_json::Error, src: &str, filename: &str) -> Box<Self> {
        let span = offset_of(src, source.line(), source.column()).map(SourceSpan::from);
        Box::new(Error::Parse {
            src: NamedSource::new(filename, src.to_string()),
            span,
            source,
        })
    }
}

/// Convert a 1-based line/column pair into a byte offset.
fn offset_of(src: &str, line: usize, column: usize) -> Option<usize> {
    if line == 0 {
        return None;
    }
    let line_start: usize = src.split_inclusive('\n').take(line - 1).map(str::len).sum();
    Some((line_start + column.saturating_sub(1)).min(src.len()))
}
