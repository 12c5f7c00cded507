//! Decides whether a property type can be compared with `==`.
//!
//! Writers of comparable properties only emit their change notification
//! when the value actually changes; every other writer notifies
//! unconditionally.

use std::collections::BTreeSet;

use peergen_dsl::base_type;

use crate::types::{DEFAULT_FRAMEWORK_PREFIX, is_framework_type, split_template};

/// Predicate deciding whether values of a type support `operator==`.
pub trait EqualitySupport {
    fn supports_equality(&self, ty: &str) -> bool;
}

impl<F> EqualitySupport for F
where
    F: Fn(&str) -> bool,
{
    fn supports_equality(&self, ty: &str) -> bool {
        self(ty)
    }
}

/// Built-in and standard types that compare by value.
const PRIMITIVES: &[&str] = &[
    "bool", "char", "short", "int", "long", "long long", "float", "double", "signed",
    "unsigned", "unsigned char", "unsigned short", "unsigned int", "unsigned long",
    "unsigned long long", "size_t", "qint8", "qint16", "qint32", "qint64", "quint8", "quint16",
    "quint32", "quint64", "qlonglong", "qulonglong", "qreal", "uint", "uchar", "ushort",
    "ulong", "std::string", "std::wstring",
];

/// Framework types known to lack `operator==`.
const FRAMEWORK_INCOMPARABLE: &[&str] = &[
    "QJSValue", "QPixmap", "QBitmap", "QIcon", "QCursor", "QObject", "QFile", "QTimer",
    "QThread", "QMutex",
];

/// Configurable equality heuristic.
///
/// Resolution order for a type (after stripping `const`, `&`, `*`):
/// 1. explicit `incomparable` entries, 2. explicit `comparable` entries,
/// 3. pointers, 4. primitives, 5. framework types known to lack `==`,
/// 6. templates (`QList<T>`, `std::vector<T>`) compare when all their
///    arguments do, 7. other framework and `std::` types compare,
/// 8. everything else (user types) does not.
#[derive(Debug, Clone)]
pub struct EqualityPolicy {
    comparable: BTreeSet<String>,
    incomparable: BTreeSet<String>,
    framework_prefix: String,
}

impl Default for EqualityPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_FRAMEWORK_PREFIX)
    }
}

impl EqualityPolicy {
    pub fn new(framework_prefix: impl Into<String>) -> Self {
        Self {
            comparable: BTreeSet::new(),
            incomparable: BTreeSet::new(),
            framework_prefix: framework_prefix.into(),
        }
    }

    /// Treat these types as comparable.
    pub fn comparable<I, S>(mut self, types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.comparable.extend(types.into_iter().map(Into::into));
        self
    }

    /// Treat these types as not comparable.
    pub fn incomparable<I, S>(mut self, types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.incomparable.extend(types.into_iter().map(Into::into));
        self
    }

    fn check(&self, ty: &str) -> bool {
        let base = base_type(ty);

        if self.incomparable.contains(&base) {
            return false;
        }
        if self.comparable.contains(&base) {
            return true;
        }
        if ty.trim_end().ends_with('*') {
            return true;
        }
        if PRIMITIVES.contains(&base.as_str()) {
            return true;
        }
        if FRAMEWORK_INCOMPARABLE.contains(&base.as_str()) {
            return false;
        }

        let (outer, args) = split_template(&base);
        if !args.is_empty() {
            return self.is_library_type(outer) && args.iter().all(|arg| self.check(arg));
        }

        self.is_library_type(outer)
    }

    fn is_library_type(&self, name: &str) -> bool {
        name.starts_with("std::") || is_framework_type(name, &self.framework_prefix)
    }
}

impl EqualitySupport for EqualityPolicy {
    fn supports_equality(&self, ty: &str) -> bool {
        self.check(ty)
    }
}
