//! Streaming markup compilation.
//!
//! [`MarkupCompiler`] feeds SAX-style tokenizer events through an explicit
//! state machine: a growable [`DocumentPath`] stack mirroring the open
//! element chain, a sticky paragraph latch deciding whether text is
//! emitted, and an anchor capture slot. Every emitted character run asks
//! the owned [`AttributeCompiler`] for the attributes at the current path.

use std::collections::{BTreeSet, HashMap};

use once_cell::sync::Lazy;
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use qss::{AttributeCompiler, DocumentPath, SYNTHETIC_ROOT, Stylesheet};

use crate::document::StyledDocument;
use crate::error::CompileError;
use crate::run::{AnchorMetadata, PARAGRAPH_SEPARATOR, StyledRun};

/// Elements that open a paragraph unless the set is overridden.
static DEFAULT_BLOCK_ELEMENTS: Lazy<BTreeSet<String>> = Lazy::new(|| {
    ["p", "h1", "h2", "h3"]
        .iter()
        .map(|element| element.to_string())
        .collect()
});

/// Default element tag whose attributes are captured as anchor metadata.
const DEFAULT_ANCHOR_ELEMENT: &str = "a";

/// Compiles markup fragments into [`StyledDocument`]s.
///
/// Owns the attribute compiler (and through it the cascade caches), the
/// block-element predicate, and the anchor tag name. One compiler
/// instance serves one stylesheet; construct a new compiler for a
/// different sheet. Compiling several documents with one instance is fine
/// and reuses the caches.
///
/// # Examples
///
/// ```
/// use qss::{StyleProperty, Stylesheet};
/// use quill::MarkupCompiler;
///
/// let sheet = Stylesheet::new().rule("p", [StyleProperty::FontSize(14.0)]);
/// let mut compiler = MarkupCompiler::new(sheet);
///
/// let document = compiler.compile("<p>one</p><p>two</p>").unwrap();
/// assert_eq!(document.text(), "one\u{2029}two\u{2029}");
/// ```
pub struct MarkupCompiler {
    attributes: AttributeCompiler,
    block_elements: BTreeSet<String>,
    anchor_element: String,
}

impl MarkupCompiler {
    pub fn new(stylesheet: Stylesheet) -> Self {
        Self {
            attributes: AttributeCompiler::new(stylesheet),
            block_elements: DEFAULT_BLOCK_ELEMENTS.clone(),
            anchor_element: DEFAULT_ANCHOR_ELEMENT.to_string(),
        }
    }

    /// Replace the set of elements that open a paragraph.
    pub fn with_block_elements<I, S>(mut self, elements: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.block_elements = elements.into_iter().map(Into::into).collect();
        self
    }

    /// Replace the anchor tag whose attributes become run metadata.
    pub fn with_anchor_element(mut self, element: impl Into<String>) -> Self {
        self.anchor_element = element.into();
        self
    }

    /// Whether `element` opens a paragraph.
    pub fn is_block_element(&self, element: &str) -> bool {
        self.block_elements.contains(element)
    }

    /// Compile a markup fragment into a styled document.
    ///
    /// The fragment is wrapped in a synthetic root element first, so
    /// multi-rooted input parses. Malformed markup yields an error and no
    /// partial output.
    pub fn compile(&mut self, markup: &str) -> Result<StyledDocument, CompileError> {
        let wrapped = format!("<{SYNTHETIC_ROOT}>{markup}</{SYNTHETIC_ROOT}>");
        let mut reader = Reader::from_str(&wrapped);
        reader.config_mut().trim_text(false);
        // Mismatched end tags are parse failures, not recoverable events.
        reader.config_mut().check_end_names = true;

        let mut state = CompileState::default();
        loop {
            match reader.read_event() {
                Ok(Event::Start(e)) => self.handle_start(&mut state, &e)?,
                Ok(Event::Empty(e)) => {
                    // A self-closing element behaves as start immediately
                    // followed by end.
                    let name = name_of(e.name());
                    self.handle_start(&mut state, &e)?;
                    self.handle_end(&mut state, &name);
                }
                Ok(Event::End(e)) => {
                    let name = name_of(e.name());
                    self.handle_end(&mut state, &name);
                }
                Ok(Event::Text(e)) => {
                    let raw = String::from_utf8_lossy(&e);
                    let text = quick_xml::escape::unescape(&raw)?;
                    self.handle_text(&mut state, &text);
                }
                Ok(Event::CData(e)) => {
                    let text = String::from_utf8_lossy(&e);
                    self.handle_text(&mut state, &text);
                }
                Ok(Event::GeneralRef(e)) => {
                    let name = String::from_utf8_lossy(&e);
                    let reference = format!("&{name};");
                    let resolved = quick_xml::escape::unescape(&reference)?;
                    self.handle_text(&mut state, &resolved);
                }
                Ok(Event::Eof) => break,
                // Comments, processing instructions, doctype.
                Ok(_) => {}
                Err(err) => return Err(CompileError::Markup(err)),
            }
        }

        log::trace!(
            "compiled {} runs ({} anchored) from {} bytes of markup",
            state.document.len(),
            state.document.anchored_runs().count(),
            markup.len()
        );
        Ok(state.document)
    }

    fn handle_start(
        &mut self,
        state: &mut CompileState,
        element: &BytesStart<'_>,
    ) -> Result<(), CompileError> {
        let name = name_of(element.name());

        let mut attributes: AnchorMetadata = HashMap::new();
        for attribute in element.attributes() {
            let attribute = attribute?;
            let key = String::from_utf8_lossy(attribute.key.as_ref()).into_owned();
            let raw = String::from_utf8_lossy(&attribute.value);
            let value = quick_xml::escape::unescape(&raw)?.into_owned();
            attributes.insert(key, value);
        }

        // The latch is sticky: once any block element opens, nested
        // inline content stays captured until that block element closes.
        state.in_paragraph = state.in_paragraph || self.is_block_element(&name);

        let class = attributes.get("class").cloned().unwrap_or_default();
        state.path.push(name.clone(), class);

        if name == self.anchor_element {
            // Nested anchors silently replace the outer capture for
            // their duration.
            state.anchor = Some(attributes);
        }
        Ok(())
    }

    fn handle_text(&mut self, state: &mut CompileState, text: &str) {
        // Text outside any block element is dropped, e.g. whitespace at
        // the document root.
        if !state.in_paragraph || text.is_empty() {
            return;
        }
        let attributes = self.attributes.compile(&state.path);
        let run = match state.anchor.clone() {
            Some(anchor) => StyledRun::with_anchor(text, attributes, anchor),
            None => StyledRun::new(text, attributes),
        };
        state.document.push(run);
    }

    fn handle_end(&mut self, state: &mut CompileState, name: &str) {
        if self.is_block_element(name) {
            // The break inherits the closing block's own attributes: the
            // path still includes the element at this point.
            let attributes = self.attributes.compile(&state.path);
            state.document.push(StyledRun::new(
                PARAGRAPH_SEPARATOR.to_string(),
                attributes,
            ));
            state.in_paragraph = false;
        }
        if name == self.anchor_element {
            state.anchor = None;
        }
        state.path.pop();
    }
}

/// Per-compile parser state.
#[derive(Default)]
struct CompileState {
    /// Open element chain; the synthetic root's start event pushes the
    /// first segment.
    path: DocumentPath,
    /// Paragraph latch: unset until the first block element opens, so
    /// root-level text never reaches the output.
    in_paragraph: bool,
    anchor: Option<AnchorMetadata>,
    document: StyledDocument,
}

fn name_of(name: quick_xml::name::QName<'_>) -> String {
    String::from_utf8_lossy(name.as_ref()).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use qss::StyleProperty;

    #[test]
    fn default_block_elements() {
        let compiler = MarkupCompiler::new(Stylesheet::new());
        for element in ["p", "h1", "h2", "h3"] {
            assert!(compiler.is_block_element(element));
        }
        assert!(!compiler.is_block_element("i"));
        assert!(!compiler.is_block_element("a"));
    }

    #[test]
    fn block_elements_are_configurable() {
        let mut compiler = MarkupCompiler::new(Stylesheet::new()).with_block_elements(["div"]);
        assert!(compiler.is_block_element("div"));
        assert!(!compiler.is_block_element("p"));

        // `p` no longer opens a paragraph, so its text is dropped.
        let document = compiler.compile("<p>gone</p><div>kept</div>").unwrap();
        assert_eq!(document.text(), "kept\u{2029}");
    }

    #[test]
    fn anchor_element_is_configurable() {
        let sheet = Stylesheet::new().rule("p", [StyleProperty::FontSize(14.0)]);
        let mut compiler = MarkupCompiler::new(sheet).with_anchor_element("link");

        let document = compiler
            .compile(r#"<p><link target="t">x</link></p>"#)
            .unwrap();
        assert_eq!(document.runs()[0].anchor_value("target"), Some("t"));
    }

    #[test]
    fn self_closing_block_emits_a_break() {
        let mut compiler = MarkupCompiler::new(Stylesheet::new());
        let document = compiler.compile("<p/>").unwrap();
        assert_eq!(document.len(), 1);
        assert!(document.runs()[0].is_paragraph_break());
    }
}
