//! Error types for stylesheet construction.

use thiserror::Error;

/// Errors produced when parsing a selector string.
///
/// Note that [`Stylesheet::rule`](crate::Stylesheet::rule) does not
/// surface these: an unsupported selector can never match anything, so the
/// builder discards it as inert. The error type exists for callers that
/// want to validate selectors up front via
/// [`Selector::parse`](crate::Selector::parse).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SelectorError {
    /// The selector is empty or whitespace-only.
    #[error("empty selector")]
    Empty,

    /// The selector does not match any supported shape (`*`, `element`,
    /// `.class`, `element.class`, `parent child`).
    #[error("unsupported selector: {0}")]
    Unsupported(String),
}
