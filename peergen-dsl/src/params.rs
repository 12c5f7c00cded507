//! Parameter list handling.

use crate::{decl::Param, parse::SkipReason};

/// Words that end a type rather than name a parameter (`unsigned int`).
const TYPE_KEYWORDS: &[&str] = &[
    "auto", "bool", "char", "const", "double", "float", "int", "long", "short", "signed",
    "unsigned", "void", "volatile", "wchar_t",
];

/// Split a raw parameter list on commas at nesting depth zero.
///
/// Commas inside `<>`, `()`, `[]` and `{}` belong to the enclosing
/// parameter, so `std::function<void(int, int)> cb, QMap<QString, int> m`
/// yields two pieces. Pieces are trimmed; an empty list yields no pieces.
pub fn split_params(raw: &str) -> Vec<&str> {
    if raw.trim().is_empty() {
        return Vec::new();
    }

    let mut pieces = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;

    for (i, c) in raw.char_indices() {
        match c {
            '<' | '(' | '[' | '{' => depth += 1,
            '>' | ')' | ']' | '}' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                pieces.push(raw[start..i].trim());
                start = i + 1;
            }
            _ => {}
        }
    }
    pieces.push(raw[start..].trim());

    pieces
}

/// Parse a raw parameter list into typed, named parameters.
///
/// Default values are dropped, `(void)` means no parameters, and unnamed
/// parameters are called `arg1`, `arg2`, ... by position.
pub fn parse_params(raw: &str) -> Result<Vec<Param>, SkipReason> {
    let pieces = split_params(raw);
    if pieces.len() == 1 && pieces[0] == "void" {
        return Ok(Vec::new());
    }

    pieces
        .into_iter()
        .enumerate()
        .map(|(i, piece)| {
            let piece = strip_default(piece);
            if piece.is_empty() {
                return Err(SkipReason::EmptyParameter { position: i + 1 });
            }
            Ok(match split_name(piece) {
                Some((ty, name)) => Param::new(ty, name),
                None => Param::new(piece, format!("arg{}", i + 1)),
            })
        })
        .collect()
}

/// Strip cv-qualifiers, references and pointers from a type.
///
/// `const QString &` becomes `QString`, `QObject *` becomes `QObject`.
/// Template arguments are left untouched.
pub fn base_type(ty: &str) -> String {
    let mut ty = ty.trim();
    loop {
        let before = ty;
        ty = ty.trim_end_matches(['*', '&']).trim();
        ty = ty.strip_suffix(" const").unwrap_or(ty).trim();
        ty = ty.strip_prefix("const ").unwrap_or(ty).trim();
        ty = ty.strip_prefix("volatile ").unwrap_or(ty).trim();
        if ty == before {
            return ty.to_string();
        }
    }
}

/// The type a returned value is held in.
///
/// A reference return decays to the referred type, so `const QString &`
/// becomes `QString`. Pointers keep their qualifiers because the `const`
/// applies to the pointee.
pub fn value_type(ty: &str) -> String {
    let ty = ty.trim();
    let Some(referred) = ty.strip_suffix('&') else {
        return ty.to_string();
    };

    let referred = referred.trim_end_matches('&').trim();
    if referred.ends_with('*') {
        return referred.to_string();
    }
    let referred = referred.strip_suffix(" const").unwrap_or(referred).trim();
    referred
        .strip_prefix("const ")
        .unwrap_or(referred)
        .trim()
        .to_string()
}

fn strip_default(piece: &str) -> &str {
    let mut depth = 0usize;
    for (i, c) in piece.char_indices() {
        match c {
            '<' | '(' | '[' | '{' => depth += 1,
            '>' | ')' | ']' | '}' => depth = depth.saturating_sub(1),
            '=' if depth == 0 => return piece[..i].trim(),
            _ => {}
        }
    }
    piece.trim()
}

/// Split `const QString &name` into (`const QString &`, `name`).
fn split_name(piece: &str) -> Option<(&str, &str)> {
    let ident_len: usize = piece
        .chars()
        .rev()
        .take_while(|c| c.is_alphanumeric() || *c == '_')
        .map(char::len_utf8)
        .sum();
    let (head, ident) = piece.split_at(piece.len() - ident_len);
    let head = head.trim_end();

    let is_name = !ident.is_empty()
        && !head.is_empty()
        && !head.ends_with("::")
        && !ident.starts_with(|c: char| c.is_ascii_digit())
        && !TYPE_KEYWORDS.contains(&ident);

    is_name.then_some((head, ident))
}
