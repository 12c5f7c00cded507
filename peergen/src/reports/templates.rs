//! Templates command report data structures.

use std::path::PathBuf;

use peergen_core::WriteResult;

use super::output::{Output, Report};

/// Report data from listing or exporting templates.
#[derive(Debug)]
pub enum TemplatesReport {
    /// Templates available to the generator.
    Listed(Vec<TemplateInfo>),
    /// Templates written to a directory.
    Exported {
        dir: PathBuf,
        files: Vec<(String, WriteResult)>,
    },
}

/// A template key with a short description of its text.
#[derive(Debug)]
pub struct TemplateInfo {
    pub key: String,
    pub lines: usize,
}

impl Report for TemplatesReport {
    fn render(&self, out: &mut dyn Output) {
        match self {
            TemplatesReport::Listed(templates) => {
                out.section(&format!("Templates ({})", templates.len()));
                for template in templates {
                    out.list_item(&format!("{} ({} lines)", template.key, template.lines));
                }
            }
            TemplatesReport::Exported { dir, files } => {
                out.key_value("Exported", &dir.display().to_string());
                for (key, result) in files {
                    match result {
                        WriteResult::Written => out.added_item(key),
                        WriteResult::Unchanged => out.list_item(&format!("{} (unchanged)", key)),
                        WriteResult::Skipped => {
                            out.list_item(&format!("{} (exists, use --force)", key))
                        }
                    }
                }
            }
        }
    }
}
