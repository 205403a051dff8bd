//! The `Const` value model.
//!
//! A [`Const`] is a value that appears in emitted declarations either as a
//! string literal or as a reference to another declared property. It has two
//! rendering views: [`as_field_part`](Const::as_field_part) for use inside a
//! declaration name and [`as_value`](Const::as_value) for use as an
//! expression.

use crate::error::{Error, Result};
use crate::naming::Conventions;

/// A literal or property-reference value used in emitted declarations.
///
/// The enum is non-exhaustive so the variant set can grow; the rendering
/// views reject any variant they do not know about with
/// [`Error::UnsupportedVariant`] instead of falling through silently.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Const {
    /// Literal text, quoted when rendered as a value.
    Literal(String),
    /// A reference to a declared property, rendered by name.
    Reference(String),
}

impl Const {
    /// Create a literal constant.
    pub fn literal(text: impl Into<String>) -> Self {
        Self::Literal(text.into())
    }

    /// Create a property-reference constant.
    pub fn reference(property_name: impl Into<String>) -> Self {
        Self::Reference(property_name.into())
    }

    /// Render for use inside a declaration name.
    ///
    /// Literals are humanized into an identifier-safe fragment; references
    /// yield the referenced property name verbatim.
    pub fn as_field_part(&self, conventions: &Conventions) -> Result<String> {
        match self {
            Self::Literal(text) => Ok((conventions.humanize)(text)),
            Self::Reference(property_name) => Ok(property_name.clone()),
            #[allow(unreachable_patterns)]
            other => Err(Error::UnsupportedVariant {
                variant: format!("{other:?}"),
            }),
        }
    }

    /// Render for use as an expression.
    ///
    /// Literals become a quoted string-literal token; references yield the
    /// bare property name.
    pub fn as_value(&self, conventions: &Conventions) -> Result<String> {
        match self {
            Self::Literal(text) => Ok((conventions.quote)(text)),
            Self::Reference(property_name) => Ok(property_name.clone()),
            #[allow(unreachable_patterns)]
            other => Err(Error::UnsupportedVariant {
                variant: format!("{other:?}"),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::naming::KOTLIN_CONVENTIONS;

    #[test]
    fn test_literal_as_field_part_is_humanized() {
        let c = Const::literal("text/html");
        assert_eq!(
            c.as_field_part(&KOTLIN_CONVENTIONS).unwrap(),
            "textHtml"
        );
    }

    #[test]
    fn test_literal_as_value_is_quoted() {
        let c = Const::literal("text/html");
        assert_eq!(c.as_value(&KOTLIN_CONVENTIONS).unwrap(), "\"text/html\"");
    }

    #[test]
    fn test_reference_renders_verbatim_in_both_views() {
        let c = Const::reference("defaultCharset");
        assert_eq!(
            c.as_field_part(&KOTLIN_CONVENTIONS).unwrap(),
            "defaultCharset"
        );
        assert_eq!(c.as_value(&KOTLIN_CONVENTIONS).unwrap(), "defaultCharset");
    }
}
