//! Check operation - parse an interface file and describe its expansion.

use eyre::Result;
use peergen_codegen::{GeneratorConfig, InterfaceBuilder, SynthesisContext};
use peergen_dsl::InterfaceSource;

use crate::reports::{CheckReport, DeclarationSummary};

/// Execute the check operation.
///
/// Every declaration is expanded on its own so the report can show which
/// members each input line turns into.
pub fn check(source: &InterfaceSource, config: &GeneratorConfig) -> Result<CheckReport> {
    let templates = config.template_store()?;
    let equality = config.equality_policy();
    let ctx = SynthesisContext::new(&templates, &equality)
        .with_guards(&config.guards)
        .with_framework_prefix(&config.generator.framework_prefix);

    let parsed = source.parsed();
    let mut includes = Vec::new();
    let declarations = parsed
        .declarations
        .iter()
        .map(|decl| {
            let mut builder = InterfaceBuilder::new(decl.name(), &ctx);
            builder.declare(decl);
            let interface = builder.finish();

            for include in interface.includes() {
                if !includes.contains(include) {
                    includes.push(include.clone());
                }
            }

            DeclarationSummary {
                line: decl.line(),
                name: decl.name().to_string(),
                members: interface
                    .variants()
                    .iter()
                    .map(|v| format!("{}({})", v.name, v.signature))
                    .collect(),
            }
        })
        .collect();
    includes.sort();

    Ok(CheckReport {
        input: source.path().to_path_buf(),
        declarations,
        includes,
        skipped: parsed.skipped.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_expands_each_declaration() {
        let source = InterfaceSource::from_content(
            "client.peer",
            "// api\nvoid send(QString text);\nQ_PROPERTY(QUrl home READ home WRITE setHome NOTIFY homeChanged)\noops\n",
        );

        let report = check(&source, &GeneratorConfig::default()).unwrap();

        assert_eq!(report.declarations.len(), 2);
        assert_eq!(report.declarations[0].line, 2);
        assert_eq!(report.declarations[0].members.len(), 8);
        assert!(report.declarations[0].members.contains(&"sendAsync(QString text)".to_string()));
        assert_eq!(
            report.declarations[1].members,
            vec!["home()", "setHome(QUrl home)", "homeChanged(QUrl home)"]
        );
        assert_eq!(report.includes, vec!["QString", "QUrl"]);
        assert_eq!(report.skipped, 1);
        assert!(!report.is_clean());
    }
}
