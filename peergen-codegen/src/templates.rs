//! Named template text used to render variant bodies and documents.

use std::path::{Path, PathBuf};

use eyre::{Context, Result};
use indexmap::IndexMap;
use peergen_core::{File, FileRules, Overwrite, WriteResult};

/// Outer template of the header document.
pub const HEADER_TEMPLATE: &str = "template.h";
/// Outer template of the implementation document.
pub const SOURCE_TEMPLATE: &str = "template.cpp";
/// Reader body.
pub const PROPERTY_READ: &str = "property_read";
/// Writer body that only notifies on change.
pub const PROPERTY_WRITE: &str = "property_write";
/// Writer body for types without `operator==`.
pub const PROPERTY_WRITE_NOCHECK: &str = "property_write_nocheck";

macro_rules! builtin {
    ($($key:literal),* $(,)?) => {
        &[$(($key, include_str!(concat!("../templates/", $key)))),*]
    };
}

/// Templates shipped with the generator, in canonical order.
pub const BUILTIN_TEMPLATES: &[(&str, &str)] = builtin![
    "template.h",
    "template.cpp",
    "method_slot",
    "method_slot_void",
    "method_fresh",
    "method_fresh_void",
    "method_async",
    "method_async_void",
    "method_bysignal",
    "method_bysignal_void",
    "method_bymetamethod",
    "method_bymetamethod_void",
    "method_byfunc",
    "method_byfunc_void",
    "method_byjsvalue",
    "method_byjsvalue_void",
    "property_read",
    "property_write",
    "property_write_nocheck",
];

/// Lookup table from template key to template text.
///
/// Loaded once per run and passed by reference to the synthesis and
/// rendering stages.
#[derive(Debug, Clone, Default)]
pub struct TemplateStore {
    templates: IndexMap<String, String>,
}

impl TemplateStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding the built-in templates.
    pub fn builtin() -> Self {
        let mut store = Self::new();
        for (key, text) in BUILTIN_TEMPLATES {
            store.insert(*key, *text);
        }
        store
    }

    /// Whether `key` names one of the built-in templates.
    pub fn is_known_key(key: &str) -> bool {
        BUILTIN_TEMPLATES.iter().any(|(k, _)| *k == key)
    }

    /// Add or replace a template.
    pub fn insert(&mut self, key: impl Into<String>, text: impl Into<String>) {
        self.templates.insert(key.into(), text.into());
    }

    /// Replace templates with the files found in `dir`.
    ///
    /// Files are matched by name against the known template keys; other
    /// files are ignored.
    pub fn with_overrides(mut self, dir: &Path) -> Result<Self> {
        let entries = std::fs::read_dir(dir)
            .wrap_err_with(|| format!("failed to read template directory '{}'", dir.display()))?;

        for entry in entries {
            let entry = entry?;
            let path = entry.path();
            let Some(key) = path.file_name().and_then(|n| n.to_str()) else {
                continue;
            };
            if !path.is_file() || !Self::is_known_key(key) {
                tracing::debug!(path = %path.display(), "ignoring file in template directory");
                continue;
            }

            let text = std::fs::read_to_string(&path)
                .wrap_err_with(|| format!("failed to read template '{}'", path.display()))?;
            tracing::debug!(key, "template overridden");
            self.insert(key, text);
        }

        Ok(self)
    }

    /// Get a template by key.
    ///
    /// Empty templates count as missing.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.templates
            .get(key)
            .map(String::as_str)
            .filter(|text| !text.trim().is_empty())
    }

    /// Iterate over all templates in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.templates.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Write every template into `dir`, one file per key.
    pub fn export(&self, dir: &Path, overwrite: Overwrite) -> Result<Vec<(PathBuf, WriteResult)>> {
        self.iter()
            .map(|(key, text)| {
                let file = File::new(dir.join(key), text).with_rules(FileRules { overwrite });
                let result = file.write()?;
                Ok((file.path().to_path_buf(), result))
            })
            .collect()
    }

    /// Number of templates.
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    /// Check if the store is empty.
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

/// Marker rendered in place of a body whose template could not be loaded.
pub fn missing_template_marker(key: &str) -> String {
    format!("//Error loading {}", key)
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_builtin_has_every_key() {
        let store = TemplateStore::builtin();

        assert_eq!(store.len(), BUILTIN_TEMPLATES.len());
        for (key, _) in BUILTIN_TEMPLATES {
            assert!(store.get(key).is_some(), "missing builtin template {}", key);
        }
    }

    #[test]
    fn test_builtin_method_templates_use_placeholders() {
        let store = TemplateStore::builtin();
        let fresh = store.get("method_fresh").unwrap();

        assert!(fresh.contains("invokeOnPeer(\"%1Slot\"%2%3)"));
        assert!(fresh.contains("%4 ret"));
    }

    #[test]
    fn test_empty_template_counts_as_missing() {
        let mut store = TemplateStore::new();
        store.insert("method_slot", "  \n");

        assert!(store.get("method_slot").is_none());
        assert!(store.get("method_async").is_none());
    }

    #[test]
    fn test_with_overrides_replaces_known_keys() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("method_async"), "    custom();\n").unwrap();
        std::fs::write(temp.path().join("README.md"), "not a template").unwrap();

        let store = TemplateStore::builtin()
            .with_overrides(temp.path())
            .unwrap();

        assert_eq!(store.get("method_async"), Some("    custom();\n"));
        assert!(store.get("README.md").is_none());
        assert_eq!(store.len(), BUILTIN_TEMPLATES.len());
    }

    #[test]
    fn test_with_overrides_missing_dir() {
        let temp = TempDir::new().unwrap();
        let result = TemplateStore::builtin().with_overrides(&temp.path().join("nope"));

        assert!(result.is_err());
    }

    #[test]
    fn test_missing_template_marker() {
        assert_eq!(
            missing_template_marker("method_fresh_void"),
            "//Error loading method_fresh_void"
        );
    }

    #[test]
    fn test_export_keeps_existing_files() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("method_slot"), "    mine();\n").unwrap();

        let written = TemplateStore::builtin()
            .export(temp.path(), Overwrite::IfMissing)
            .unwrap();

        assert_eq!(written.len(), BUILTIN_TEMPLATES.len());
        assert!(written.contains(&(temp.path().join("method_slot"), WriteResult::Skipped)));
        assert!(written.contains(&(temp.path().join("template.h"), WriteResult::Written)));
        assert_eq!(
            std::fs::read_to_string(temp.path().join("method_slot")).unwrap(),
            "    mine();\n"
        );
    }
}
