use std::path::{Path, PathBuf};

use eyre::Result;
use peergen_core::{GeneratedFile, WriteResult};
use peergen_dsl::Parsed;

use crate::{
    config::GeneratorConfig,
    interface::{Interface, SynthesisContext},
    render::{HeaderFile, SourceFile},
    templates::TemplateStore,
};

/// Produces the header and implementation documents of one interface.
pub struct Generator<'a> {
    interface: Interface,
    templates: &'a TemplateStore,
}

impl<'a> Generator<'a> {
    pub fn new(interface: Interface, templates: &'a TemplateStore) -> Self {
        Self {
            interface,
            templates,
        }
    }

    /// Synthesize `name` from parsed declarations using the settings of
    /// `config`.
    pub fn from_parsed(
        name: &str,
        parsed: &Parsed,
        config: &GeneratorConfig,
        templates: &'a TemplateStore,
    ) -> Self {
        let equality = config.equality_policy();
        let ctx = SynthesisContext::new(templates, &equality)
            .with_guards(&config.guards)
            .with_framework_prefix(&config.generator.framework_prefix);

        Self::new(Interface::from_parsed(name, parsed, &ctx), templates)
    }

    pub fn interface(&self) -> &Interface {
        &self.interface
    }

    pub fn header(&self) -> HeaderFile<'_> {
        HeaderFile::new(&self.interface, self.templates)
    }

    pub fn source(&self) -> SourceFile<'_> {
        SourceFile::new(&self.interface, self.templates)
    }

    /// Render both documents without touching the filesystem.
    pub fn preview(&self) -> Vec<PreviewFile> {
        let base = Path::new("");
        vec![
            PreviewFile::of(&self.header(), base),
            PreviewFile::of(&self.source(), base),
        ]
    }

    /// Write both documents into `output_dir`, creating it if needed.
    pub fn generate(&self, output_dir: &Path) -> Result<GenerateResult> {
        let header = self.header();
        let source = self.source();
        let documents: [&dyn GeneratedFile; 2] = [&header, &source];

        let mut files = Vec::with_capacity(documents.len());
        for document in documents {
            let result = document.write(output_dir)?;
            files.push((document.path(output_dir), result));
        }

        Ok(GenerateResult { files })
    }
}

/// Result of code generation
#[derive(Debug, Default)]
pub struct GenerateResult {
    /// Every document with what happened to it
    pub files: Vec<(PathBuf, WriteResult)>,
}

impl GenerateResult {
    /// Number of documents whose content changed on disk.
    pub fn written(&self) -> usize {
        self.files
            .iter()
            .filter(|(_, result)| *result == WriteResult::Written)
            .count()
    }
}

/// A generated file for preview
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewFile {
    /// Path relative to the output directory
    pub path: String,
    /// File content
    pub content: String,
}

impl PreviewFile {
    fn of(file: &dyn GeneratedFile, base: &Path) -> Self {
        Self {
            path: file.path(base).display().to_string(),
            content: file.render(),
        }
    }
}
