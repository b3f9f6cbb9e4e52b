//! Generate operation - stub files from the documentation model.

use std::path::Path;

use docstub_codegen::StubGenerator;
use docstub_core::DirSink;
use docstub_model::DocRoot;
use eyre::{Context, Result};

use crate::reports::{GenerateReport, GenerationResult, PreviewFile, PreviewResult, WrittenResult};

/// Options for the generate operation.
pub struct GenerateOptions<'a> {
    /// Output directory for generated stubs.
    pub output_dir: &'a Path,
    /// README to copy, if any.
    pub readme: Option<&'a Path>,
    /// Whether to preview without writing files.
    pub dry_run: bool,
}

/// Execute the generate operation.
pub fn generate(root: &DocRoot, source: String, opts: GenerateOptions) -> Result<GenerateReport> {
    let mut generator = StubGenerator::new(root);
    if let Some(readme) = opts.readme {
        generator = generator.read_readme(readme)?;
    }

    let result = if opts.dry_run {
        let files = generator
            .preview()?
            .into_iter()
            .map(|f| PreviewFile {
                path: f.path,
                content: f.content,
            })
            .collect();
        GenerationResult::Preview(PreviewResult { files })
    } else {
        let mut sink = DirSink::new(opts.output_dir);
        let gen_result = generator
            .generate(&mut sink)
            .wrap_err("Failed to generate stubs")?;

        GenerationResult::Written(WrittenResult {
            output_dir: opts.output_dir.to_path_buf(),
            stub_count: gen_result.stubs.len(),
            readme: gen_result.readme.map(|p| p.display().to_string()),
            duplicates: gen_result
                .duplicates
                .iter()
                .map(ToString::to_string)
                .collect(),
        })
    };

    Ok(GenerateReport { source, result })
}
