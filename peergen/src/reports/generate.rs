//! Generate command report data structures.

use std::path::PathBuf;

use peergen_codegen::PreviewFile;
use peergen_core::WriteResult;

use super::output::{Output, Report};

/// Report data from code generation.
#[derive(Debug)]
pub struct GenerateReport {
    /// Generated class name.
    pub name: String,
    /// Number of method declarations.
    pub methods: usize,
    /// Number of property declarations.
    pub properties: usize,
    /// Number of emitted variants.
    pub variants: usize,
    /// Number of input lines that were not declarations.
    pub skipped: usize,
    /// Generation result (files written or preview).
    pub result: GenerationResult,
}

/// Result of code generation.
#[derive(Debug)]
pub enum GenerationResult {
    /// Files were written to disk.
    Written(WrittenResult),
    /// Dry-run preview.
    Preview(Vec<PreviewFile>),
}

/// Result when files were written to disk.
#[derive(Debug)]
pub struct WrittenResult {
    /// Output directory.
    pub output_dir: PathBuf,
    /// Every document and what happened to it.
    pub files: Vec<WrittenFile>,
}

/// One document of a generation run.
#[derive(Debug)]
pub struct WrittenFile {
    /// File name relative to the output directory.
    pub name: String,
    pub result: WriteResult,
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        if self.skipped > 0 {
            out.warning(&format!(
                "{} line{} skipped (run `peergen check` for details)",
                self.skipped,
                plural(self.skipped)
            ));
        }

        match &self.result {
            GenerationResult::Written(written) => self.render_written(out, written),
            GenerationResult::Preview(files) => self.render_preview(out, files),
        }
    }
}

impl GenerateReport {
    fn summary(&self) -> String {
        format!(
            "{} ({} method{}, {} propert{}, {} variant{})",
            self.name,
            self.methods,
            plural(self.methods),
            self.properties,
            if self.properties == 1 { "y" } else { "ies" },
            self.variants,
            plural(self.variants)
        )
    }

    fn render_written(&self, out: &mut dyn Output, written: &WrittenResult) {
        out.preformatted(&self.summary());
        out.newline();

        out.key_value("Generated", &written.output_dir.display().to_string());
        for file in &written.files {
            match file.result {
                WriteResult::Written => out.added_item(&file.name),
                WriteResult::Unchanged => out.list_item(&format!("{} (unchanged)", file.name)),
                WriteResult::Skipped => out.list_item(&format!("{} (kept)", file.name)),
            }
        }
    }

    fn render_preview(&self, out: &mut dyn Output, files: &[PreviewFile]) {
        for file in files {
            out.divider(&file.path);
            out.preformatted(&file.content);
        }

        out.divider("Summary");
        out.preformatted(&self.summary());
        out.preformatted(&format!("{} files would be generated", files.len()));
    }
}

pub(super) fn plural(count: usize) -> &'static str {
    if count == 1 { "" } else { "s" }
}
