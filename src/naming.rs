//! Humanization and quoting conventions for emitted Kotlin text.

/// Text conventions used when rendering [`Const`](crate::Const) values.
///
/// `humanize` turns arbitrary literal text into an identifier-safe fragment
/// for declaration names; `quote` produces an escaped Kotlin string-literal
/// token. Both are configurable so a generator can swap in its own rules.
#[derive(Debug, Clone, Copy)]
pub struct Conventions {
    /// Transform literal text into an identifier-safe fragment
    /// (e.g., "text/html" -> "textHtml").
    pub humanize: fn(&str) -> String,
    /// Produce a quoted, escaped string-literal token
    /// (e.g., `he"llo` -> `"he\"llo"`).
    pub quote: fn(&str) -> String,
}

/// Kotlin conventions.
pub const KOTLIN_CONVENTIONS: Conventions = Conventions {
    humanize: humanize_kotlin,
    quote: quote_kotlin,
};

impl Default for Conventions {
    fn default() -> Self {
        KOTLIN_CONVENTIONS
    }
}

/// Camel-join the alphanumeric runs of `text` into an identifier fragment.
///
/// Runs are split on any non-alphanumeric character. The first run is
/// lowercased, later runs are capitalized. Text with no alphanumeric content
/// yields `"empty"`; a leading digit gets an underscore prefix so the result
/// is always declaration-safe.
fn humanize_kotlin(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut boundary = false;
    for c in text.chars() {
        if c.is_alphanumeric() {
            if boundary && !out.is_empty() {
                out.extend(c.to_uppercase());
            } else {
                out.extend(c.to_lowercase());
            }
            boundary = false;
        } else {
            boundary = true;
        }
    }

    if out.is_empty() {
        return "empty".to_string();
    }
    if out.starts_with(|c: char| c.is_ascii_digit()) {
        out.insert(0, '_');
    }
    out
}

/// Wrap `text` in double quotes, escaping the characters Kotlin string
/// literals cannot carry verbatim (backslash, quote, dollar, and the common
/// control characters).
fn quote_kotlin(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    out.push('"');
    for c in text.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '$' => out.push_str("\\$"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            _ => out.push(c),
        }
    }
    out.push('"');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_humanize_splits_on_separators() {
        assert_eq!(humanize_kotlin("text/html"), "textHtml");
        assert_eq!(humanize_kotlin("aria-hidden"), "ariaHidden");
        assert_eq!(humanize_kotlin("some string here"), "someStringHere");
    }

    #[test]
    fn test_humanize_lowercases_leading_run() {
        assert_eq!(humanize_kotlin("GET"), "get");
        assert_eq!(humanize_kotlin("Content-Type"), "contentType");
    }

    #[test]
    fn test_humanize_leading_digit() {
        assert_eq!(humanize_kotlin("2fa"), "_2fa");
    }

    #[test]
    fn test_humanize_no_alphanumerics() {
        assert_eq!(humanize_kotlin("---"), "empty");
        assert_eq!(humanize_kotlin(""), "empty");
    }

    #[test]
    fn test_quote_plain_text() {
        assert_eq!(quote_kotlin("hello"), "\"hello\"");
    }

    #[test]
    fn test_quote_escapes() {
        assert_eq!(quote_kotlin("he\"llo"), "\"he\\\"llo\"");
        assert_eq!(quote_kotlin("a\\b"), "\"a\\\\b\"");
        assert_eq!(quote_kotlin("$price"), "\"\\$price\"");
        assert_eq!(quote_kotlin("line\nbreak"), "\"line\\nbreak\"");
    }

    #[test]
    fn test_default_is_kotlin() {
        let conventions = Conventions::default();
        assert_eq!((conventions.quote)("x"), "\"x\"");
        assert_eq!((conventions.humanize)("a-b"), "aB");
    }
}
