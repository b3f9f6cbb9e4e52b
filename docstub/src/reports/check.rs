//! Check command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data from manifest and model validation.
#[derive(Debug)]
pub struct CheckReport {
    /// Path to the config file.
    pub config_path: PathBuf,
    /// Where the documentation model came from.
    pub source: String,
    /// Number of documented types.
    pub type_count: usize,
    /// Type counts per kind, sorted by kind.
    pub kinds: Vec<(String, usize)>,
    /// Error messages.
    pub errors: Vec<String>,
    /// Warning messages.
    pub warnings: Vec<String>,
}

impl CheckReport {
    /// Whether the check passed (no errors).
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        for error in &self.errors {
            out.error(error);
        }

        for warning in &self.warnings {
            out.warning(warning);
        }

        if !self.warnings.is_empty() || !self.errors.is_empty() {
            out.newline();
        }

        if self.is_valid() {
            out.preformatted(&format!("✓ {} is valid", self.config_path.display()));
            out.newline();
        }

        out.key_value("Source", &self.source);
        out.key_value("Types", &self.type_count.to_string());
        for (kind, count) in &self.kinds {
            out.list_item(&format!("{}: {}", kind, count));
        }
    }
}
