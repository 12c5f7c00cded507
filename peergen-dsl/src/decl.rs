//! Declarations produced by the parser.

use serde::Serialize;

use crate::params::{base_type, value_type};

/// One parsed declaration line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Declaration {
    Method(MethodDecl),
    Property(PropertyDecl),
}

impl Declaration {
    /// 1-based line number in the interface file.
    pub fn line(&self) -> usize {
        match self {
            Declaration::Method(m) => m.line,
            Declaration::Property(p) => p.line,
        }
    }

    /// Declared name of the method or property.
    pub fn name(&self) -> &str {
        match self {
            Declaration::Method(m) => &m.name,
            Declaration::Property(p) => &p.name,
        }
    }
}

/// A remote method: `ReturnType name(params);`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MethodDecl {
    pub line: usize,
    pub return_type: String,
    pub name: String,
    pub params: Vec<Param>,
}

impl MethodDecl {
    /// Whether the method returns nothing.
    pub fn is_void(&self) -> bool {
        self.return_type == "void"
    }

    /// Return type with any reference decayed, e.g. `QString` for
    /// `const QString &`.
    pub fn value_type(&self) -> String {
        value_type(&self.return_type)
    }

    /// Parameter list as written in a C++ signature, e.g. `QString name, int count`.
    pub fn signature(&self) -> String {
        self.params
            .iter()
            .map(Param::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Comma-joined parameter names, e.g. `name, count`.
    pub fn param_names(&self) -> String {
        self.params
            .iter()
            .map(|p| p.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// A single method parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Param {
    /// Type exactly as declared, e.g. `const QString &`.
    pub ty: String,
    /// Declared name, or `argN` when the declaration left it out.
    pub name: String,
}

impl Param {
    pub fn new(ty: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            ty: ty.into(),
            name: name.into(),
        }
    }

    /// Type stripped of cv-qualifiers, references and pointers.
    pub fn base_type(&self) -> String {
        base_type(&self.ty)
    }
}

impl std::fmt::Display for Param {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.ty.ends_with(['*', '&']) {
            write!(f, "{}{}", self.ty, self.name)
        } else {
            write!(f, "{} {}", self.ty, self.name)
        }
    }
}

/// A property: `Q_PROPERTY(Type name READ reader WRITE writer NOTIFY notifier)`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PropertyDecl {
    pub line: usize,
    /// The trimmed declaration line.
    pub text: String,
    pub ty: String,
    pub name: String,
    pub read: String,
    pub write: String,
    pub notify: String,
}

impl PropertyDecl {
    /// Name of the backing field, e.g. `m_score`.
    pub fn field_name(&self) -> String {
        format!("m_{}", self.name)
    }
}
