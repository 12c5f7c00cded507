//! Generate operation - peer class generation from an interface file.

use std::path::Path;

use eyre::{Context, Result};
use peergen_codegen::{Generator, GeneratorConfig};
use peergen_dsl::InterfaceSource;

use crate::reports::{GenerateReport, GenerationResult, WrittenFile, WrittenResult};

/// Options for the generate operation.
pub struct GenerateOptions<'a> {
    /// Class name of the generated peer.
    pub name: &'a str,
    /// Output directory for generated code.
    pub output_dir: &'a Path,
    /// Whether to preview without writing files.
    pub dry_run: bool,
}

/// Execute the generate operation.
pub fn generate(
    source: &InterfaceSource,
    config: &GeneratorConfig,
    opts: GenerateOptions,
) -> Result<GenerateReport> {
    tracing::debug!(
        input = %source.path().display(),
        name = opts.name,
        dry_run = opts.dry_run,
        "generating peer"
    );

    let templates = config.template_store()?;
    let parsed = source.parsed();
    let generator = Generator::from_parsed(opts.name, parsed, config, &templates);

    let result = if opts.dry_run {
        GenerationResult::Preview(generator.preview())
    } else {
        let generated = generator
            .generate(opts.output_dir)
            .wrap_err("Failed to generate code")?;

        GenerationResult::Written(WrittenResult {
            output_dir: opts.output_dir.to_path_buf(),
            files: generated
                .files
                .into_iter()
                .map(|(path, result)| WrittenFile {
                    name: file_name(&path),
                    result,
                })
                .collect(),
        })
    };

    Ok(GenerateReport {
        name: opts.name.to_string(),
        methods: parsed.method_count(),
        properties: parsed.property_count(),
        variants: generator.interface().variants().len(),
        skipped: parsed.skipped.len(),
        result,
    })
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
