//! Append-only output sink abstraction.

/// An append-only text destination for emitted code.
///
/// The sink is the only mutable shared state in the emission core: text is
/// accumulated monotonically, with no deletion, random access, or undo. The
/// storage medium (in-memory buffer, file writer, network stream) is the
/// implementor's concern; flush and close semantics live outside this trait.
///
/// `append` returns the receiver so emitter calls chain without naming
/// intermediate temporaries.
pub trait Sink {
    /// Append `text` to the output.
    fn append(&mut self, text: &str) -> &mut Self;
}

impl Sink for String {
    fn append(&mut self, text: &str) -> &mut Self {
        self.push_str(text);
        self
    }
}

/// Run `body` against `value` for its side effects, then return `value`.
///
/// Scoping helper for keeping emission call chains fluent: build the sink,
/// emit into it, and get the populated sink back as one expression.
///
/// # Example
///
/// ```
/// use ktgen::{Emit, with};
///
/// let out = with(String::new(), |out| {
///     out.packg("com.example");
/// });
/// assert_eq!(out, "package com.example\n");
/// ```
pub fn with<T>(mut value: T, body: impl FnOnce(&mut T)) -> T {
    body(&mut value);
    value
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_sink_appends_in_order() {
        let mut out = String::new();
        out.append("a").append("b").append("c");
        assert_eq!(out, "abc");
    }

    #[test]
    fn test_with_returns_the_value() {
        let out = with(String::new(), |s| {
            s.append("hello");
        });
        assert_eq!(out, "hello");
    }

    #[test]
    fn test_with_without_side_effects_is_identity() {
        let out = with(String::from("seed"), |_| {});
        assert_eq!(out, "seed");
    }
}
