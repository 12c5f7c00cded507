//! Templates operation - inspect or export the template set.

use std::path::Path;

use eyre::Result;
use peergen_codegen::TemplateStore;
use peergen_core::Overwrite;

use crate::reports::{TemplateInfo, TemplatesReport};

/// Describe every template in the store.
pub fn list(store: &TemplateStore) -> TemplatesReport {
    TemplatesReport::Listed(
        store
            .iter()
            .map(|(key, text)| TemplateInfo {
                key: key.to_string(),
                lines: text.lines().count(),
            })
            .collect(),
    )
}

/// Write the store into `dir`. Existing files are kept unless `force` is set.
pub fn export(store: &TemplateStore, dir: &Path, force: bool) -> Result<TemplatesReport> {
    let overwrite = if force {
        Overwrite::Always
    } else {
        Overwrite::IfMissing
    };

    let files = store
        .export(dir, overwrite)?
        .into_iter()
        .map(|(path, result)| {
            let key = path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_default();
            (key, result)
        })
        .collect();

    Ok(TemplatesReport::Exported {
        dir: dir.to_path_buf(),
        files,
    })
}
