//! Generator configuration (`peergen.toml`).

use std::path::{Path, PathBuf};

use eyre::{Context, Result};
use serde::Deserialize;

use crate::{equality::EqualityPolicy, templates::TemplateStore, types::DEFAULT_FRAMEWORK_PREFIX};

/// Default configuration file name.
pub const CONFIG_FILE: &str = "peergen.toml";

/// Root of `peergen.toml`. Every section and key is optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    pub generator: GeneratorSection,
    pub guards: Guards,
    pub equality: EqualitySection,
}

/// `[generator]`
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorSection {
    /// Prefix identifying framework types that get an `#include`.
    pub framework_prefix: String,
    /// Directory with template overrides.
    pub templates: Option<PathBuf>,
}

impl Default for GeneratorSection {
    fn default() -> Self {
        Self {
            framework_prefix: DEFAULT_FRAMEWORK_PREFIX.to_string(),
            templates: None,
        }
    }
}

/// `[guards]`: conditions for variants needing an optional host capability.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Guards {
    /// Guard for closure callbacks.
    pub closures: String,
    /// Guard for script engine callbacks.
    pub scripting: String,
}

impl Default for Guards {
    fn default() -> Self {
        Self {
            closures: "__cplusplus >= 201103L".to_string(),
            scripting: "QT_QML_LIB".to_string(),
        }
    }
}

/// `[equality]`: overrides for the equality heuristic.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EqualitySection {
    pub comparable: Vec<String>,
    pub incomparable: Vec<String>,
}

impl GeneratorConfig {
    /// Load a configuration file.
    ///
    /// A relative `templates` directory is resolved against the directory
    /// holding the configuration file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .wrap_err_with(|| format!("failed to read config '{}'", path.display()))?;
        let mut config = Self::parse(&content)
            .wrap_err_with(|| format!("invalid config '{}'", path.display()))?;

        if let Some(templates) = &config.generator.templates
            && templates.is_relative()
            && let Some(parent) = path.parent()
        {
            config.generator.templates = Some(parent.join(templates));
        }

        Ok(config)
    }

    /// Load `path` if given, otherwise `peergen.toml` in the working
    /// directory when present, otherwise defaults.
    pub fn discover(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None if Path::new(CONFIG_FILE).is_file() => Self::load(Path::new(CONFIG_FILE)),
            None => Ok(Self::default()),
        }
    }

    /// Parse configuration text.
    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Equality policy with the configured overrides.
    pub fn equality_policy(&self) -> EqualityPolicy {
        EqualityPolicy::new(&self.generator.framework_prefix)
            .comparable(self.equality.comparable.iter().cloned())
            .incomparable(self.equality.incomparable.iter().cloned())
    }

    /// Built-in templates with the configured overrides applied.
    pub fn template_store(&self) -> Result<TemplateStore> {
        let store = TemplateStore::builtin();
        match &self.generator.templates {
            Some(dir) => store.with_overrides(dir),
            None => Ok(store),
        }
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;
    use crate::equality::EqualitySupport;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = GeneratorConfig::parse("").unwrap();

        assert_eq!(config.generator.framework_prefix, "Q");
        assert!(config.generator.templates.is_none());
        assert_eq!(config.guards, Guards::default());
    }

    #[test]
    fn test_parse_full_config() {
        let config = GeneratorConfig::parse(
            r#"
            [generator]
            framework_prefix = "K"
            templates = "tpl"

            [guards]
            scripting = "HAVE_SCRIPT"

            [equality]
            comparable = ["Point"]
            incomparable = ["KJob"]
            "#,
        )
        .unwrap();

        assert_eq!(config.generator.framework_prefix, "K");
        assert_eq!(config.guards.scripting, "HAVE_SCRIPT");
        assert_eq!(config.guards.closures, "__cplusplus >= 201103L");

        let policy = config.equality_policy();
        assert!(policy.supports_equality("Point"));
        assert!(!policy.supports_equality("KJob"));
        assert!(policy.supports_equality("KUrl"));
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        assert!(GeneratorConfig::parse("[generator]\nprefix = \"Q\"").is_err());
    }

    #[test]
    fn test_load_resolves_templates_relative_to_config() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(CONFIG_FILE);
        std::fs::write(&path, "[generator]\ntemplates = \"tpl\"\n").unwrap();

        let config = GeneratorConfig::load(&path).unwrap();

        assert_eq!(config.generator.templates, Some(temp.path().join("tpl")));
    }

    #[test]
    fn test_template_store_applies_overrides() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("property_read"), "    return m_%1 + 1;\n").unwrap();

        let config = GeneratorConfig {
            generator: GeneratorSection {
                templates: Some(temp.path().to_path_buf()),
                ..GeneratorSection::default()
            },
            ..GeneratorConfig::default()
        };

        let store = config.template_store().unwrap();
        assert_eq!(store.get("property_read"), Some("    return m_%1 + 1;\n"));
    }
}
