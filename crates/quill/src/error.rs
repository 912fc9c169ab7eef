//! Error types for markup compilation.

use thiserror::Error;

/// Errors produced while compiling a markup fragment.
///
/// Malformed markup aborts the compile with no partial output. Unknown
/// elements, classes, and selectors are not errors; they simply resolve
/// to no style contribution.
#[derive(Debug, Error)]
pub enum CompileError {
    /// The tokenizer reported malformed markup: unbalanced or mismatched
    /// tags, invalid syntax, or an encoding problem.
    #[error("malformed markup: {0}")]
    Markup(#[from] quick_xml::Error),

    /// An element carried a malformed attribute.
    #[error("malformed attribute: {0}")]
    Attribute(#[from] quick_xml::events::attributes::AttrError),

    /// An unknown or invalid entity reference.
    #[error("invalid entity reference: {0}")]
    Entity(#[from] quick_xml::escape::EscapeError),
}
