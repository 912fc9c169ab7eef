//! Facade crate for the quill workspace.
//!
//! Re-exports the two members so applications can depend on one crate:
//!
//! - [`qss`]: stylesheet model, cascade resolution, attribute compilation
//! - [`quill`]: streaming markup compilation and anchor hit-testing

pub use qss;
pub use quill;

pub use qss::{
    AttributeCompiler, CascadeResolver, CompiledAttributes, DocumentPath, StyleProperty,
    Stylesheet,
};
pub use quill::{
    AnchorLocator, AnchorRegion, MarkupCompiler, StyledDocument, StyledRun, compile_markup,
};
