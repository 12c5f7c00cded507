//! Type-name helpers shared by include collection and the equality policy.

/// Default prefix identifying host framework types (`QString`, `QVariant`).
pub const DEFAULT_FRAMEWORK_PREFIX: &str = "Q";

/// Whether `name` follows the framework naming convention: the prefix
/// followed by an uppercase letter (`QString` yes, `qint32` and `Qux` no).
pub fn is_framework_type(name: &str, prefix: &str) -> bool {
    name.strip_prefix(prefix)
        .and_then(|rest| rest.chars().next())
        .is_some_and(|c| c.is_ascii_uppercase())
}

/// Every framework type referenced by `ty`, including template arguments.
///
/// `QMap<QString, QList<int>>` yields `QMap`, `QString`, `QList`. Nested
/// names resolve to their outer type, so `QHash::const_iterator` yields
/// `QHash`.
pub fn framework_types<'a>(ty: &'a str, prefix: &'a str) -> impl Iterator<Item = &'a str> {
    ty.split(|c: char| !(c.is_alphanumeric() || c == '_' || c == ':'))
        .map(|word| word.split_once("::").map_or(word, |(outer, _)| outer))
        .filter(move |word| is_framework_type(word, prefix))
}

/// Split `Outer<A, B>` into (`Outer`, [`A`, `B`]).
///
/// Types without template arguments return an empty list.
pub fn split_template(ty: &str) -> (&str, Vec<&str>) {
    let ty = ty.trim();
    match (ty.find('<'), ty.rfind('>')) {
        (Some(open), Some(close)) if open < close => (
            ty[..open].trim(),
            peergen_dsl::split_params(&ty[open + 1..close]),
        ),
        _ => (ty, Vec::new()),
    }
}
