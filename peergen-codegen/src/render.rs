//! Header and implementation documents.

use std::path::{Path, PathBuf};

use peergen_core::{GeneratedFile, indent, substitute};

use crate::{
    interface::Interface,
    templates::{HEADER_TEMPLATE, SOURCE_TEMPLATE, TemplateStore, missing_template_marker},
    variant::Section,
};

const INDENT: &str = "    ";

/// The `<name>.h` document.
pub struct HeaderFile<'a> {
    interface: &'a Interface,
    templates: &'a TemplateStore,
}

impl<'a> HeaderFile<'a> {
    pub fn new(interface: &'a Interface, templates: &'a TemplateStore) -> Self {
        Self {
            interface,
            templates,
        }
    }

    /// Declarations grouped by section.
    ///
    /// The outer template already opens `public:`, so the leading public
    /// group gets no header of its own.
    fn declarations(&self) -> String {
        let mut out = String::new();
        let mut current = Section::Public;

        for variant in self.interface.variants() {
            if variant.section != current {
                out.push_str(&format!("\n{}:\n", variant.section.label()));
                current = variant.section;
            }
            out.push_str(&indent(&variant.declare(), INDENT));
            out.push('\n');
        }

        out
    }

    fn include_block(&self) -> String {
        self.interface
            .includes()
            .iter()
            .map(|ty| format!("#include <{}>\n", ty))
            .collect()
    }

    /// Annotated properties, a blank line, then the backing fields.
    fn private_block(&self) -> String {
        let mut block = String::new();
        for property in self.interface.properties() {
            block.push_str(property);
            block.push('\n');
        }
        block.push('\n');
        for variable in self.interface.variables() {
            block.push_str(variable);
            block.push('\n');
        }
        indent(&block, INDENT)
    }
}

impl GeneratedFile for HeaderFile<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(format!("{}.h", self.interface.name().to_lowercase()))
    }

    fn render(&self) -> String {
        let Some(template) = self.templates.get(HEADER_TEMPLATE) else {
            tracing::warn!(template = HEADER_TEMPLATE, "template not found");
            return missing_template_marker(HEADER_TEMPLATE);
        };

        let name = self.interface.name();
        substitute(
            template,
            &[
                name,
                &self.declarations(),
                &name.to_uppercase(),
                &self.include_block(),
                &self.private_block(),
            ],
        )
    }
}

/// The `<name>.cpp` document.
pub struct SourceFile<'a> {
    interface: &'a Interface,
    templates: &'a TemplateStore,
}

impl<'a> SourceFile<'a> {
    pub fn new(interface: &'a Interface, templates: &'a TemplateStore) -> Self {
        Self {
            interface,
            templates,
        }
    }

    /// Every definition followed by a blank line.
    fn definitions(&self) -> String {
        let name = self.interface.name();
        self.interface
            .variants()
            .iter()
            .filter_map(|variant| variant.define(name))
            .map(|definition| definition + "\n\n")
            .collect()
    }
}

impl GeneratedFile for SourceFile<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(format!("{}.cpp", self.interface.name().to_lowercase()))
    }

    fn render(&self) -> String {
        let Some(template) = self.templates.get(SOURCE_TEMPLATE) else {
            tracing::warn!(template = SOURCE_TEMPLATE, "template not found");
            return missing_template_marker(SOURCE_TEMPLATE);
        };

        let name = self.interface.name();
        substitute(
            template,
            &[name, &self.definitions(), &name.to_lowercase(), ""],
        )
    }
}

#[cfg(test)]
mod tests {
    use peergen_dsl::parse_str;

    use super::*;
    use crate::{equality::EqualityPolicy, interface::SynthesisContext};

    fn interface(src: &str) -> Interface {
        let templates = TemplateStore::builtin();
        let policy = EqualityPolicy::default();
        let ctx = SynthesisContext::new(&templates, &policy);
        Interface::from_parsed("ChatServer", &parse_str(src), &ctx)
    }

    #[test]
    fn test_paths_use_lowercase_name() {
        let templates = TemplateStore::builtin();
        let interface = interface("");
        let base = Path::new("out");

        assert_eq!(
            HeaderFile::new(&interface, &templates).path(base),
            base.join("chatserver.h")
        );
        assert_eq!(
            SourceFile::new(&interface, &templates).path(base),
            base.join("chatserver.cpp")
        );
    }

    #[test]
    fn test_declarations_group_sections() {
        let templates = TemplateStore::builtin();
        let interface =
            interface("Q_PROPERTY(int score READ score WRITE setScore NOTIFY scoreChanged)");
        let header = HeaderFile::new(&interface, &templates);

        assert_eq!(
            header.declarations(),
            "    int score();\n\npublic slots:\n    void setScore(int score);\n\nsignals:\n    void scoreChanged(int score);\n"
        );
    }

    #[test]
    fn test_private_block() {
        let templates = TemplateStore::builtin();
        let interface =
            interface("Q_PROPERTY(int score READ score WRITE setScore NOTIFY scoreChanged)");
        let header = HeaderFile::new(&interface, &templates);

        assert_eq!(
            header.private_block(),
            "    Q_PROPERTY(int score READ score WRITE setScore NOTIFY scoreChanged USER true)\n\n    int m_score;\n"
        );
    }

    #[test]
    fn test_header_render() {
        let templates = TemplateStore::builtin();
        let interface = interface("QString echo(QString text);");
        let text = HeaderFile::new(&interface, &templates).render();

        assert!(text.starts_with("#ifndef CHATSERVER_H\n#define CHATSERVER_H\n"));
        assert!(text.contains("#include <QString>\n"));
        assert!(text.contains("class ChatServer : public NeuronPeer"));
        assert!(text.contains("    Q_INVOKABLE QString echo(QString text);\n"));
        assert!(text.contains("    QString echoSlot(QString text);\n"));
        assert!(text.contains("\nsignals:\n    void echoSignal(QString text, QString *returnValue);\n"));
        assert!(text.contains(
            "    #ifdef QT_QML_LIB\n    Q_INVOKABLE QString echo(QString text, QJSValue callbackFunction);\n    #endif\n"
        ));
        assert!(!text.contains('%'));
    }

    #[test]
    fn test_source_render() {
        let templates = TemplateStore::builtin();
        let interface = interface("void ping();");
        let text = SourceFile::new(&interface, &templates).render();

        assert!(text.starts_with("#include \"chatserver.h\"\n"));
        assert!(text.contains("ChatServer::ChatServer(QObject *parent) : NeuronPeer(parent)"));
        assert!(text.contains("void ChatServer::pingAsync()\n{\n    invokeOnPeer(\"pingSlot\");\n}\n\n"));
        assert!(text.contains("#if __cplusplus >= 201103L\nvoid ChatServer::ping(std::function<void()> callbackFunction)\n{\n"));
        assert!(!text.contains("pingSignal()\n{"));
    }

    #[test]
    fn test_missing_outer_template() {
        let mut templates = TemplateStore::builtin();
        templates.insert(HEADER_TEMPLATE, "");
        let interface = interface("void ping();");

        assert_eq!(
            HeaderFile::new(&interface, &templates).render(),
            "//Error loading template.h"
        );
    }
}
