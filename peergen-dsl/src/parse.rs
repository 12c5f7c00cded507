//! Line classification and declaration matching.

use std::{ops::Range, sync::LazyLock};

use regex::Regex;
use serde::Serialize;

use crate::{
    decl::{Declaration, MethodDecl, PropertyDecl},
    params::parse_params,
};

/// Lines starting with this marker are ignored.
pub const COMMENT_MARKER: &str = "//";

/// Lines starting with this keyword are property declarations.
pub const PROPERTY_KEYWORD: &str = "Q_PROPERTY";

static METHOD_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<ret>.+?)\s*\b(?P<name>[A-Za-z_]\w*)\s*\((?P<params>.*)\)\s*;$")
        .expect("method pattern is valid")
});

static PROPERTY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^Q_PROPERTY\(\s*(?P<ty>\S+)\s+(?P<name>[A-Za-z_]\w*)\s+READ\s+(?P<read>[A-Za-z_]\w*)\s+WRITE\s+(?P<write>[A-Za-z_]\w*)\s+NOTIFY\s+(?P<notify>[A-Za-z_]\w*)\s*\)$",
    )
    .expect("property pattern is valid")
});

/// Result of parsing an interface file.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Parsed {
    /// Recognized declarations in file order.
    pub declarations: Vec<Declaration>,
    /// Lines that looked like neither a property nor a method.
    pub skipped: Vec<SkippedLine>,
}

impl Parsed {
    /// Number of method declarations.
    pub fn method_count(&self) -> usize {
        self.declarations
            .iter()
            .filter(|d| matches!(d, Declaration::Method(_)))
            .count()
    }

    /// Number of property declarations.
    pub fn property_count(&self) -> usize {
        self.declarations
            .iter()
            .filter(|d| matches!(d, Declaration::Property(_)))
            .count()
    }
}

/// A line the parser could not match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedLine {
    /// 1-based line number.
    pub line: usize,
    /// Byte range of the trimmed line in the source.
    pub span: Range<usize>,
    /// The trimmed line.
    pub text: String,
    pub reason: SkipReason,
}

/// Why a line was skipped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SkipReason {
    /// Matches neither the property nor the method shape.
    NotADeclaration,
    /// Starts with `Q_PROPERTY` but misses a part.
    MalformedProperty,
    /// Parameter list contains an empty entry.
    EmptyParameter { position: usize },
}

impl SkipReason {
    /// Short label shown under the offending line.
    pub fn label(&self) -> String {
        match self {
            SkipReason::NotADeclaration => "not a method or property declaration".to_string(),
            SkipReason::MalformedProperty => "incomplete property declaration".to_string(),
            SkipReason::EmptyParameter { position } => {
                format!("parameter {} is empty", position)
            }
        }
    }

    /// Hint on how to fix the line.
    pub fn help(&self) -> &'static str {
        match self {
            SkipReason::NotADeclaration => {
                "methods are written as 'ReturnType name(Type arg, ...);' including the trailing semicolon"
            }
            SkipReason::MalformedProperty => {
                "properties are written as 'Q_PROPERTY(Type name READ reader WRITE writer NOTIFY notifier)'"
            }
            SkipReason::EmptyParameter { .. } => "remove the stray comma from the parameter list",
        }
    }
}

/// Parse interface DSL text.
///
/// Never fails: lines that are not declarations are recorded in
/// [`Parsed::skipped`] and otherwise ignored.
pub fn parse_str(src: &str) -> Parsed {
    let mut parsed = Parsed::default();
    let mut offset = 0;

    for (index, raw) in src.split('\n').enumerate() {
        let line_no = index + 1;
        let line_start = offset;
        offset += raw.len() + 1;

        let line = raw.trim();
        if line.is_empty() || line.starts_with(COMMENT_MARKER) {
            continue;
        }
        let line = strip_trailing_comment(line);

        let leading = raw.len() - raw.trim_start().len();
        let span = line_start + leading..line_start + leading + line.len();

        let result = if line.starts_with(PROPERTY_KEYWORD) {
            parse_property(line, line_no).map(Declaration::Property)
        } else {
            parse_method(line, line_no).map(Declaration::Method)
        };

        match result {
            Ok(decl) => {
                tracing::debug!(line = line_no, name = decl.name(), "parsed declaration");
                parsed.declarations.push(decl);
            }
            Err(reason) => {
                tracing::debug!(line = line_no, text = line, ?reason, "skipping line");
                parsed.skipped.push(SkippedLine {
                    line: line_no,
                    span,
                    text: line.to_string(),
                    reason,
                });
            }
        }
    }

    parsed
}

/// Drop a `// ...` comment that follows a declaration.
///
/// Markers inside string literals, such as a default value of
/// `"http://host"`, are kept.
fn strip_trailing_comment(line: &str) -> &str {
    let mut in_string = false;
    let mut escaped = false;
    let mut previous = None;

    for (i, c) in line.char_indices() {
        match c {
            _ if escaped => escaped = false,
            '\\' if in_string => escaped = true,
            '"' => in_string = !in_string,
            '/' if !in_string && previous == Some('/') => return line[..i - 1].trim_end(),
            _ => {}
        }
        previous = Some(c);
    }
    line
}

fn parse_method(line: &str, line_no: usize) -> Result<MethodDecl, SkipReason> {
    let caps = METHOD_RE
        .captures(line)
        .ok_or(SkipReason::NotADeclaration)?;

    let return_type = caps["ret"].trim();
    if return_type.is_empty() {
        return Err(SkipReason::NotADeclaration);
    }

    Ok(MethodDecl {
        line: line_no,
        return_type: return_type.to_string(),
        name: caps["name"].to_string(),
        params: parse_params(&caps["params"])?,
    })
}

fn parse_property(line: &str, line_no: usize) -> Result<PropertyDecl, SkipReason> {
    let caps = PROPERTY_RE
        .captures(line)
        .ok_or(SkipReason::MalformedProperty)?;

    Ok(PropertyDecl {
        line: line_no,
        text: line.to_string(),
        ty: caps["ty"].to_string(),
        name: caps["name"].to_string(),
        read: caps["read"].to_string(),
        write: caps["write"].to_string(),
        notify: caps["notify"].to_string(),
    })
}
