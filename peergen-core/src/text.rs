//! Shared text helpers for template rendering.

/// Indent every non-empty line of `text` by `prefix`.
///
/// Empty lines stay empty so the output carries no trailing whitespace.
pub fn indent(text: &str, prefix: &str) -> String {
    text.split('\n')
        .map(|line| {
            if line.trim().is_empty() {
                String::new()
            } else {
                format!("{}{}", prefix, line)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Replace positional placeholders `%1`..`%9` with `args[0]`..`args[8]`.
///
/// Substitution is a single left-to-right pass: text coming from `args` is
/// never scanned for placeholders again. Placeholders without a matching
/// argument (and `%0`) are kept verbatim.
pub fn substitute(template: &str, args: &[&str]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut chars = template.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '%' {
            out.push(c);
            continue;
        }

        let arg = chars
            .peek()
            .and_then(|d| d.to_digit(10))
            .filter(|&d| d >= 1)
            .and_then(|d| args.get(d as usize - 1));

        match arg {
            Some(arg) => {
                chars.next();
                out.push_str(arg);
            }
            None => out.push('%'),
        }
    }

    out
}

/// Convert a file stem to PascalCase (e.g., "chat_server" -> "ChatServer")
pub fn to_pascal_case(s: &str) -> String {
    s.split(['_', '-', '.', ' '])
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                None => String::new(),
                Some(c) => c.to_uppercase().chain(chars).collect(),
            }
        })
        .collect()
}

/// Strip trailing `\n` / `\r\n` sequences.
pub fn trim_trailing_newlines(s: &str) -> &str {
    s.trim_end_matches(['\n', '\r'])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indent_skips_blank_lines() {
        assert_eq!(indent("a\n\nb", "    "), "    a\n\n    b");
        assert_eq!(indent("", "    "), "");
    }

    #[test]
    fn test_substitute_positional() {
        assert_eq!(substitute("%1(%3%2x)", &["f", ", ", "a, b"]), "f(a, b, x)");
        assert_eq!(substitute("%4 ret = %4();", &["", "", "", "int"]), "int ret = int();");
    }

    #[test]
    fn test_substitute_single_pass() {
        assert_eq!(substitute("%1 %2", &["%2", "b"]), "%2 b");
    }

    #[test]
    fn test_substitute_keeps_unknown() {
        assert_eq!(substitute("100% %0 %7", &["a"]), "100% %0 %7");
        assert_eq!(substitute("%", &[]), "%");
    }

    #[test]
    fn test_to_pascal_case() {
        assert_eq!(to_pascal_case("client"), "Client");
        assert_eq!(to_pascal_case("chat_server"), "ChatServer");
        assert_eq!(to_pascal_case("chat-server"), "ChatServer");
        assert_eq!(to_pascal_case("ChatServer"), "ChatServer");
        assert_eq!(to_pascal_case(""), "");
    }

    #[test]
    fn test_trim_trailing_newlines() {
        assert_eq!(trim_trailing_newlines("a\n\r\n\n"), "a");
        assert_eq!(trim_trailing_newlines("a\nb"), "a\nb");
    }
}
