//! # QSS - Quill Style Sheets
//!
//! A cascading stylesheet model and resolution engine for styled-text
//! compilation. A [`Stylesheet`] maps selectors to category-unique sets of
//! [`StyleProperty`] values; a [`CascadeResolver`] folds those rules along
//! a node's [`DocumentPath`] into one effective set; an
//! [`AttributeCompiler`] flattens the effective set into the
//! renderer-agnostic [`CompiledAttributes`] record.
//!
//! ## Quick Start
//!
//! ```rust
//! use qss::{AttributeCompiler, DocumentPath, StyleProperty, Stylesheet};
//!
//! let stylesheet = Stylesheet::new()
//!     .rule("*", [StyleProperty::FontSize(12.0)])
//!     .rule("p", [StyleProperty::FontSize(14.0)]);
//!
//! let mut compiler = AttributeCompiler::new(stylesheet);
//!
//! let mut path = DocumentPath::root();
//! path.push("p", "");
//! let attributes = compiler.compile(&path);
//! assert_eq!(attributes.font.as_ref().unwrap().size, 14.0);
//! ```
//!
//! ## Supported Selectors
//!
//! - Universal: `*`
//! - Element: `p`, `h1`
//! - Class: `.note`
//! - Element with class: `p.note`
//! - Two-level descendant: `h1 i` (immediate parent element only)
//!
//! Anything else (deeper combinators, pseudo-classes, and so on) is
//! inert: registered rules with such selectors can never match.
//!
//! ## Caching and Immutability
//!
//! Both the resolver and the attribute compiler memoize per path and
//! never invalidate. This is sound because a stylesheet cannot change
//! once a resolver owns it; mutating a stylesheet in place is the one
//! correctness hazard the API is shaped to prevent. Use a new resolver
//! per stylesheet, and discard instances across unrelated documents if
//! unbounded cache growth is a concern.
//!
//! ## Modules
//!
//! - [`stylesheet`]: rule construction
//! - [`selector`]: selector shapes and parsing
//! - [`cascade`]: document paths and cascade resolution
//! - [`attributes`]: flat attribute compilation
//! - [`types`]: property, color, font, and paragraph value types
//! - [`error`]: selector parse errors

pub mod attributes;
pub mod cascade;
pub mod error;
pub mod selector;
pub mod stylesheet;
pub mod types;

pub use attributes::{AttributeCompiler, CompiledAttributes};
pub use cascade::{CascadeResolver, DocumentPath, PathSegment, SYNTHETIC_ROOT};
pub use error::SelectorError;
pub use selector::Selector;
pub use stylesheet::Stylesheet;
pub use types::{
    FontFace, LineBreakMode, LineStyle, ParagraphStyle, Rgba, Shadow, StyleCategory,
    StyleProperty, StyleSet, TabStop, TextAlignment, WritingDirection,
};
