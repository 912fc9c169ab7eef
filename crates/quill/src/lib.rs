//! Streaming markup-to-styled-runs compiler.
//!
//! This crate turns a lightweight markup fragment plus a
//! [`qss::Stylesheet`] into an ordered sequence of [`StyledRun`]s (text
//! spans carrying flat, renderer-agnostic attributes) and maps screen
//! points back to anchor metadata after layout.
//!
//! # Overview
//!
//! - [`MarkupCompiler`] stream-parses the fragment, maintains the
//!   document path stack, decides paragraph boundaries, and emits runs.
//!   Block elements (default `p`, `h1`, `h2`, `h3`) open paragraphs and
//!   append a paragraph-break run when they close; text outside any block
//!   element is dropped.
//! - Anchor elements (default `a`) have their attributes copied verbatim
//!   onto every run emitted inside them.
//! - [`AnchorLocator`] resolves a tap or click point against the layout
//!   engine's anchored rectangles: exact hit first, then the closest
//!   same-column region within tolerance.
//!
//! # Usage
//!
//! ```
//! use qss::{Rgba, StyleProperty, Stylesheet};
//! use quill::compile_markup;
//!
//! let sheet = Stylesheet::new()
//!     .rule("*", [StyleProperty::FontSize(12.0)])
//!     .rule("p", [StyleProperty::FontSize(14.0)])
//!     .rule("a", [StyleProperty::ForegroundColor(Rgba::rgb(255, 0, 0))]);
//!
//! let document = compile_markup(
//!     r#"<p>See <a href="https://example.com">the docs</a>.</p>"#,
//!     sheet,
//! )
//! .unwrap();
//!
//! assert_eq!(document.text(), "See the docs.\u{2029}");
//! let link = document.anchored_runs().next().unwrap();
//! assert_eq!(link.anchor_value("href"), Some("https://example.com"));
//! ```

pub mod compiler;
pub mod document;
pub mod error;
pub mod locator;
pub mod run;

pub use compiler::MarkupCompiler;
pub use document::StyledDocument;
pub use error::CompileError;
pub use locator::{AnchorHit, AnchorLocator, AnchorRegion, DEFAULT_TAP_TOLERANCE, Point, Rect};
pub use run::{AnchorMetadata, PARAGRAPH_SEPARATOR, StyledRun};

use qss::Stylesheet;

/// Compile `markup` against `stylesheet` in one call.
///
/// Convenience for the common single-document case; construct a
/// [`MarkupCompiler`] directly to compile several documents against one
/// stylesheet with warm caches.
pub fn compile_markup(
    markup: &str,
    stylesheet: Stylesheet,
) -> Result<StyledDocument, CompileError> {
    MarkupCompiler::new(stylesheet).compile(markup)
}
