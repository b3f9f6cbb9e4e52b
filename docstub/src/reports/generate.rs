//! Generate command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data from stub generation.
#[derive(Debug)]
pub struct GenerateReport {
    /// Where the documentation model came from.
    pub source: String,

    /// Generation result (files written or preview).
    pub result: GenerationResult,
}

/// Result of stub generation.
#[derive(Debug)]
pub enum GenerationResult {
    /// Files were written to disk.
    Written(WrittenResult),
    /// Dry-run preview.
    Preview(PreviewResult),
}

/// Result when files were written to disk.
#[derive(Debug)]
pub struct WrittenResult {
    /// Output directory.
    pub output_dir: PathBuf,
    /// Number of stub files written.
    pub stub_count: usize,
    /// README copy, if any.
    pub readme: Option<String>,
    /// Qualified names that appeared more than once.
    pub duplicates: Vec<String>,
}

/// Result of a dry-run preview.
#[derive(Debug)]
pub struct PreviewResult {
    /// Files that would be generated.
    pub files: Vec<PreviewFile>,
}

/// A file in preview mode.
#[derive(Debug)]
pub struct PreviewFile {
    /// File path.
    pub path: String,
    /// File content.
    pub content: String,
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        match &self.result {
            GenerationResult::Written(written) => self.render_written(out, written),
            GenerationResult::Preview(preview) => self.render_preview(out, preview),
        }
    }
}

impl GenerateReport {
    fn render_written(&self, out: &mut dyn Output, written: &WrittenResult) {
        for name in &written.duplicates {
            out.warning(&format!("stub for '{}' collides with another file", name));
        }

        out.key_value("Source", &self.source);
        out.key_value("Generated", &written.output_dir.display().to_string());
        out.added_item(&format!(
            "{} type stub{}",
            written.stub_count,
            if written.stub_count == 1 { "" } else { "s" }
        ));
        if let Some(readme) = &written.readme {
            out.added_item(readme);
        }
    }

    fn render_preview(&self, out: &mut dyn Output, preview: &PreviewResult) {
        for file in &preview.files {
            out.divider(&file.path);
            out.preformatted(file.content.trim_end_matches('\n'));
        }

        out.divider("Summary");
        out.preformatted(&format!("{} files would be generated", preview.files.len()));
    }
}
