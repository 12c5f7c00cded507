//! Check command report data structures.

use std::path::PathBuf;

use super::{
    generate::plural,
    output::{Output, Report},
};

/// Report data from parsing an interface file.
#[derive(Debug)]
pub struct CheckReport {
    /// Path to the interface file.
    pub input: PathBuf,
    /// Recognized declarations in file order.
    pub declarations: Vec<DeclarationSummary>,
    /// Framework headers the generated class would include.
    pub includes: Vec<String>,
    /// Number of skipped lines.
    pub skipped: usize,
}

/// One declaration and the members it expands to.
#[derive(Debug)]
pub struct DeclarationSummary {
    /// 1-based line number.
    pub line: usize,
    /// Method or property name.
    pub name: String,
    /// Emitted members as `name(signature)`.
    pub members: Vec<String>,
}

impl CheckReport {
    /// Whether every non-comment line was a declaration.
    pub fn is_clean(&self) -> bool {
        self.skipped == 0
    }
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        out.title(&self.input.display().to_string());

        out.section(&format!(
            "{} declaration{}",
            self.declarations.len(),
            plural(self.declarations.len())
        ));
        for decl in &self.declarations {
            out.list_item(&format!("{} (line {})", decl.name, decl.line));
            for member in &decl.members {
                out.preformatted(&format!("      {}", member));
            }
        }

        if !self.includes.is_empty() {
            out.newline();
            out.key_value("Includes", &self.includes.join(", "));
        }

        out.newline();
        if self.is_clean() {
            out.preformatted(&format!("✓ {} is valid", self.input.display()));
        } else {
            out.warning(&format!(
                "{} line{} will be ignored",
                self.skipped,
                plural(self.skipped)
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::BufferOutput;

    #[test]
    fn test_render_lists_members() {
        let report = CheckReport {
            input: PathBuf::from("client.peer"),
            declarations: vec![DeclarationSummary {
                line: 1,
                name: "ping".to_string(),
                members: vec!["ping()".to_string(), "pingAsync()".to_string()],
            }],
            includes: Vec::new(),
            skipped: 0,
        };
        let mut out = BufferOutput::default();
        report.render(&mut out);

        assert_eq!(
            out.lines,
            vec![
                "client.peer",
                "1 declaration:",
                "  - ping (line 1)",
                "      ping()",
                "      pingAsync()",
                "",
                "✓ client.peer is valid",
            ]
        );
    }

    #[test]
    fn test_render_warns_on_skipped() {
        let report = CheckReport {
            input: PathBuf::from("client.peer"),
            declarations: Vec::new(),
            includes: vec!["QString".to_string()],
            skipped: 1,
        };
        let mut out = BufferOutput::default();
        report.render(&mut out);

        assert!(out.text().contains("Includes: QString"));
        assert_eq!(out.lines.last().unwrap(), "warning: 1 line will be ignored");
    }
}
