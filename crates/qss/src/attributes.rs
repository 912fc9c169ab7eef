//! Attribute compilation: effective style sets into flat renderer records.

use std::collections::HashMap;

use crate::cascade::{CascadeResolver, DocumentPath};
use crate::stylesheet::Stylesheet;
use crate::types::color::Rgba;
use crate::types::font::{DEFAULT_FONT_SIZE, FontFace};
use crate::types::paragraph::ParagraphStyle;
use crate::types::property::{StyleProperty, StyleSet};
use crate::types::text::{LineStyle, Shadow};

/// Flat, renderer-agnostic attribute record for one styled run.
///
/// Character-level attributes are individual optional fields. All
/// paragraph-level categories are aggregated into the single [`paragraph`]
/// descriptor, which is always present even when fully default. The font
/// descriptor is composed from the cascade's font-name and font-size
/// categories after the routing pass; when neither is present it stays
/// `None` and the renderer's default applies.
///
/// [`paragraph`]: CompiledAttributes::paragraph
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CompiledAttributes {
    pub foreground: Option<Rgba>,
    pub background: Option<Rgba>,
    pub ligatures: Option<bool>,
    pub kerning: Option<f32>,
    pub strikethrough_style: Option<LineStyle>,
    pub strikethrough_color: Option<Rgba>,
    pub underline_style: Option<LineStyle>,
    pub underline_color: Option<Rgba>,
    pub stroke_color: Option<Rgba>,
    pub stroke_width: Option<f32>,
    pub shadow: Option<Shadow>,
    pub baseline_offset: Option<f32>,
    /// Composed font descriptor, if the cascade supplied a name or size.
    pub font: Option<FontFace>,
    /// Aggregated paragraph descriptor; always present.
    pub paragraph: ParagraphStyle,
}

/// Compiles cascade results into [`CompiledAttributes`], memoized per
/// path.
///
/// Owns its [`CascadeResolver`]; both caches use the same path keys but
/// store different representations. As with the resolver, cache
/// correctness rests entirely on the stylesheet staying immutable for
/// this compiler's lifetime.
pub struct AttributeCompiler {
    resolver: CascadeResolver,
    cache: HashMap<DocumentPath, CompiledAttributes>,
}

impl AttributeCompiler {
    pub fn new(stylesheet: Stylesheet) -> Self {
        Self {
            resolver: CascadeResolver::new(stylesheet),
            cache: HashMap::new(),
        }
    }

    pub fn resolver(&self) -> &CascadeResolver {
        &self.resolver
    }

    /// Compiled attributes for `path`.
    ///
    /// A pure function of the path for a fixed stylesheet: structurally
    /// equal paths always yield equal records, regardless of cache state.
    ///
    /// # Panics
    ///
    /// Panics when `path` is empty, like
    /// [`CascadeResolver::resolve`].
    pub fn compile(&mut self, path: &DocumentPath) -> CompiledAttributes {
        if let Some(cached) = self.cache.get(path) {
            return cached.clone();
        }
        let styles = self.resolver.resolve(path);
        let attributes = compile_style_set(&styles);
        self.cache.insert(path.clone(), attributes.clone());
        attributes
    }
}

/// Routes every property of an effective style set into the flat record,
/// then composes the deferred font descriptor.
fn compile_style_set(styles: &StyleSet) -> CompiledAttributes {
    let mut attributes = CompiledAttributes::default();
    let mut font_name: Option<String> = None;
    let mut font_size: Option<f32> = None;

    for property in styles.iter() {
        match property {
            // Font name and size are captured separately here and put
            // back together below.
            StyleProperty::FontName(name) => font_name = Some(name.clone()),
            StyleProperty::FontSize(size) => font_size = Some(*size),

            StyleProperty::ForegroundColor(color) => attributes.foreground = Some(*color),
            StyleProperty::BackgroundColor(color) => attributes.background = Some(*color),
            StyleProperty::Ligatures(enabled) => attributes.ligatures = Some(*enabled),
            StyleProperty::Kerning(kerning) => attributes.kerning = Some(*kerning),
            StyleProperty::StrikethroughStyle(style) => {
                attributes.strikethrough_style = Some(*style)
            }
            StyleProperty::StrikethroughColor(color) => {
                attributes.strikethrough_color = Some(*color)
            }
            StyleProperty::UnderlineStyle(style) => attributes.underline_style = Some(*style),
            StyleProperty::UnderlineColor(color) => attributes.underline_color = Some(*color),
            StyleProperty::StrokeColor(color) => attributes.stroke_color = Some(*color),
            StyleProperty::StrokeWidth(width) => attributes.stroke_width = Some(*width),
            StyleProperty::Shadow(shadow) => attributes.shadow = Some(*shadow),
            StyleProperty::BaselineOffset(offset) => attributes.baseline_offset = Some(*offset),

            StyleProperty::LineSpacing(spacing) => attributes.paragraph.line_spacing = *spacing,
            StyleProperty::ParagraphSpacing(spacing) => {
                attributes.paragraph.paragraph_spacing = *spacing
            }
            StyleProperty::ParagraphSpacingBefore(spacing) => {
                attributes.paragraph.paragraph_spacing_before = *spacing
            }
            StyleProperty::Alignment(alignment) => attributes.paragraph.alignment = *alignment,
            StyleProperty::FirstLineHeadIndent(indent) => {
                attributes.paragraph.first_line_head_indent = *indent
            }
            StyleProperty::HeadIndent(indent) => attributes.paragraph.head_indent = *indent,
            StyleProperty::TailIndent(indent) => attributes.paragraph.tail_indent = *indent,
            StyleProperty::LineBreakMode(mode) => attributes.paragraph.line_break_mode = *mode,
            StyleProperty::MinimumLineHeight(height) => {
                attributes.paragraph.minimum_line_height = *height
            }
            StyleProperty::MaximumLineHeight(height) => {
                attributes.paragraph.maximum_line_height = *height
            }
            StyleProperty::LineHeightMultiple(multiple) => {
                attributes.paragraph.line_height_multiple = *multiple
            }
            StyleProperty::WritingDirection(direction) => {
                attributes.paragraph.writing_direction = *direction
            }
            StyleProperty::HyphenationFactor(factor) => {
                attributes.paragraph.hyphenation_factor = *factor
            }
            StyleProperty::DefaultTabInterval(interval) => {
                attributes.paragraph.default_tab_interval = *interval
            }
            StyleProperty::TabStops(stops) => attributes.paragraph.tab_stops = stops.clone(),
        }
    }

    attributes.font = match (font_name, font_size) {
        (Some(family), Some(size)) => Some(FontFace::new(family, size)),
        (Some(family), None) => Some(FontFace::new(family, DEFAULT_FONT_SIZE)),
        (None, Some(size)) => Some(FontFace::system(size)),
        (None, None) => None,
    };

    attributes
}
