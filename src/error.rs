//! Error type for the emission core.

use thiserror::Error;

/// Result type for emission operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by the emission core.
///
/// The only failure mode is rendering a [`Const`](crate::Const) variant the
/// core does not know about. Everything else is total: malformed names or
/// types pass through as malformed output text.
#[derive(Debug, Error)]
pub enum Error {
    /// A `Const` variant outside the known set was handed to a rendering view.
    #[error("const variant {variant} is not supported")]
    UnsupportedVariant {
        /// Debug form of the offending value.
        variant: String,
    },
}
