//! Styled runs: the unit of compiled output.

use std::collections::HashMap;

use qss::CompiledAttributes;

/// Attribute map copied verbatim from an anchor element's markup
/// attributes, attached to every run produced inside that element.
///
/// No schema is enforced; whatever the markup carried (`href`, custom
/// keys) passes through. The copy is independent of the element's
/// lifetime.
pub type AnchorMetadata = HashMap<String, String>;

/// The paragraph separator character emitted after every block element.
pub const PARAGRAPH_SEPARATOR: char = '\u{2029}';

/// A contiguous span of text with fully compiled attributes and optional
/// anchor metadata.
///
/// Runs are immutable once appended to a
/// [`StyledDocument`](crate::StyledDocument); their concatenation in
/// emission order forms the compiled document.
#[derive(Clone, Debug, PartialEq)]
pub struct StyledRun {
    pub text: String,
    pub attributes: CompiledAttributes,
    /// Metadata of the enclosing anchor element, if any.
    pub anchor: Option<AnchorMetadata>,
}

impl StyledRun {
    pub fn new(text: impl Into<String>, attributes: CompiledAttributes) -> Self {
        Self {
            text: text.into(),
            attributes,
            anchor: None,
        }
    }

    pub fn with_anchor(
        text: impl Into<String>,
        attributes: CompiledAttributes,
        anchor: AnchorMetadata,
    ) -> Self {
        Self {
            text: text.into(),
            attributes,
            anchor: Some(anchor),
        }
    }

    /// True when this run is the break emitted after a block element.
    pub fn is_paragraph_break(&self) -> bool {
        self.text == "\u{2029}"
    }

    pub fn has_anchor(&self) -> bool {
        self.anchor.is_some()
    }

    /// An anchor metadata value by key.
    pub fn anchor_value(&self, key: &str) -> Option<&str> {
        self.anchor
            .as_ref()
            .and_then(|anchor| anchor.get(key))
            .map(String::as_str)
    }
}
