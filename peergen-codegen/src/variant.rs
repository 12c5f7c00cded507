//! The emittable declarations derived from one input line.

use std::fmt;

use peergen_core::{substitute, trim_trailing_newlines};

use crate::{
    config::Guards,
    templates::{TemplateStore, missing_template_marker},
};

/// Visibility section a declaration is emitted in.
///
/// The derived order matches the lexicographic order of the section labels,
/// which is the primary sort key of the header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Section {
    Public,
    PublicSlots,
    Signals,
}

impl Section {
    /// Label used in the C++ class body.
    pub fn label(self) -> &'static str {
        match self {
            Section::Public => "public",
            Section::PublicSlots => "public slots",
            Section::Signals => "signals",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The eight ways one remote method can be invoked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MethodKind {
    /// Receiving-side handler that raises [`MethodKind::Signal`].
    Slot,
    /// Blocking call that waits for the reply in a local event loop.
    Fresh,
    /// Fire-and-forget call.
    Async,
    /// Reply delivered to a named slot of a target object.
    BySignal,
    /// Reply delivered through a reflected method handle.
    ByMetaMethod,
    /// Reply delivered to a closure.
    ByFunc,
    /// Reply delivered to a script engine function.
    ByJsValue,
    /// Completion notification carrying the result.
    Signal,
}

impl MethodKind {
    /// All kinds in synthesis order.
    pub const ALL: [MethodKind; 8] = [
        MethodKind::Slot,
        MethodKind::Fresh,
        MethodKind::Async,
        MethodKind::BySignal,
        MethodKind::ByMetaMethod,
        MethodKind::ByFunc,
        MethodKind::ByJsValue,
        MethodKind::Signal,
    ];

    /// Template key without the `_void` suffix; signals have no body.
    pub fn template_key(self) -> Option<&'static str> {
        match self {
            MethodKind::Slot => Some("method_slot"),
            MethodKind::Fresh => Some("method_fresh"),
            MethodKind::Async => Some("method_async"),
            MethodKind::BySignal => Some("method_bysignal"),
            MethodKind::ByMetaMethod => Some("method_bymetamethod"),
            MethodKind::ByFunc => Some("method_byfunc"),
            MethodKind::ByJsValue => Some("method_byjsvalue"),
            MethodKind::Signal => None,
        }
    }

    /// Emitted name for a method called `base`.
    pub fn name(self, base: &str) -> String {
        match self {
            MethodKind::Slot => format!("{}Slot", base),
            MethodKind::Async => format!("{}Async", base),
            MethodKind::Signal => format!("{}Signal", base),
            _ => base.to_string(),
        }
    }

    /// Emitted return type; signals carry results through a parameter.
    pub fn return_type(self, declared: &str) -> &str {
        match self {
            MethodKind::Signal => "void",
            _ => declared,
        }
    }

    pub fn section(self) -> Section {
        match self {
            MethodKind::Signal => Section::Signals,
            _ => Section::Public,
        }
    }

    /// Whether the variant is callable through the meta-object system.
    pub fn is_invokable(self) -> bool {
        matches!(
            self,
            MethodKind::Fresh | MethodKind::Async | MethodKind::ByJsValue
        )
    }

    /// Conditional-compilation guard for bindings needing a host capability.
    pub fn guard(self, guards: &Guards) -> Option<String> {
        match self {
            MethodKind::ByFunc => Some(guards.closures.clone()),
            MethodKind::ByJsValue => Some(guards.scripting.clone()),
            _ => None,
        }
    }

    /// Parameters appended after the declared ones, given the value type
    /// the method returns.
    pub fn extra_params(self, return_type: &str) -> Vec<String> {
        let is_void = return_type == "void";
        match self {
            MethodKind::BySignal => vec![
                "const QObject *obj".to_string(),
                "const char *callbackSlot".to_string(),
            ],
            MethodKind::ByMetaMethod => vec![
                "const QObject *obj".to_string(),
                "const QMetaMethod *callbackMethod".to_string(),
            ],
            MethodKind::ByFunc if is_void => {
                vec!["std::function<void()> callbackFunction".to_string()]
            }
            MethodKind::ByFunc => vec![format!(
                "std::function<void({})> callbackFunction",
                return_type
            )],
            MethodKind::ByJsValue => vec!["QJSValue callbackFunction".to_string()],
            MethodKind::Signal if !is_void => {
                let pointer = if return_type.ends_with('*') { "*" } else { " *" };
                vec![format!("{}{}returnValue", return_type, pointer)]
            }
            _ => Vec::new(),
        }
    }
}

/// What produced a variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VariantKind {
    Method(MethodKind),
    PropertyRead,
    PropertyWrite,
    PropertyNotify,
}

/// One emittable member declaration with its optional definition body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Variant {
    pub kind: VariantKind,
    pub name: String,
    pub return_type: String,
    /// Full parameter list, including appended extras.
    pub signature: String,
    /// Separator placed between declared and extra parameters.
    pub separator: String,
    pub section: Section,
    pub invokable: bool,
    pub guard: Option<String>,
    /// Definition body; `None` for declaration-only members (signals).
    pub body: Option<String>,
}

impl Variant {
    /// Header declaration, wrapped in its guard when it has one.
    pub fn declare(&self) -> String {
        let decl = format!(
            "{}{}({});",
            if self.invokable { "Q_INVOKABLE " } else { "" },
            join_type_and_name(&self.return_type, &self.name),
            self.signature
        );
        guarded(&decl, self.guard.as_deref())
    }

    /// Out-of-class definition for `class`, or `None` without a body.
    pub fn define(&self, class: &str) -> Option<String> {
        let body = self.body.as_deref()?;
        let qualified = format!("{}::{}", class, self.name);
        let definition = format!(
            "{}({})\n{{\n{}\n}}",
            join_type_and_name(&self.return_type, &qualified),
            self.signature,
            body
        );
        Some(guarded(&definition, self.guard.as_deref()))
    }

    /// Sort key: section, then name, then signature for overloads.
    pub(crate) fn sort_key(&self) -> (Section, &str, &str) {
        (self.section, &self.name, &self.signature)
    }
}

/// Render the template `key` with positional `args`.
///
/// A missing template renders as a visible error marker and is logged;
/// generation carries on with the remaining variants.
pub fn render_body(templates: &TemplateStore, key: &str, args: &[&str]) -> String {
    match templates.get(key) {
        Some(text) => trim_trailing_newlines(&substitute(text, args)).to_string(),
        None => {
            tracing::warn!(template = key, "template not found");
            missing_template_marker(key)
        }
    }
}

/// `int` + `count` -> `int count`, `const QString &` + `name` -> `const QString &name`.
fn join_type_and_name(ty: &str, name: &str) -> String {
    if ty.ends_with(['*', '&']) {
        format!("{}{}", ty, name)
    } else {
        format!("{} {}", ty, name)
    }
}

/// Wrap `text` in conditional compilation.
///
/// A bare macro name becomes `#ifdef NAME`, anything else `#if EXPR`.
fn guarded(text: &str, guard: Option<&str>) -> String {
    match guard {
        None => text.to_string(),
        Some(cond) => {
            let is_macro_name = !cond.is_empty()
                && cond.chars().all(|c| c.is_ascii_alphanumeric() || c == '_');
            let directive = if is_macro_name { "#ifdef" } else { "#if" };
            format!("{} {}\n{}\n#endif", directive, cond, text)
        }
    }
}
