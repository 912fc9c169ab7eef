//! Paragraph-level style aggregation.

/// Horizontal alignment of paragraph content.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TextAlignment {
    /// Alignment follows the resolved writing direction.
    #[default]
    Natural,
    Left,
    Center,
    Right,
    Justified,
}

/// How lines break when content exceeds the layout width.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LineBreakMode {
    #[default]
    WordWrap,
    CharWrap,
    Clip,
    TruncateHead,
    TruncateMiddle,
    TruncateTail,
}

/// Base writing direction for paragraph layout.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum WritingDirection {
    /// Direction inferred from content.
    #[default]
    Natural,
    LeftToRight,
    RightToLeft,
}

/// A single tab stop position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TabStop {
    /// Distance from the leading margin.
    pub location: f32,
    /// Alignment of text at this stop.
    pub alignment: TextAlignment,
}

/// Aggregated paragraph descriptor carried by every compiled attribute
/// record.
///
/// All paragraph-level style categories mutate one accumulator of this
/// type during attribute compilation; renderers expect exactly one
/// paragraph attribute per run, present even when every field is at its
/// default.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ParagraphStyle {
    /// Extra space between lines, in points.
    pub line_spacing: f32,
    /// Space after the paragraph.
    pub paragraph_spacing: f32,
    /// Space before the paragraph.
    pub paragraph_spacing_before: f32,
    pub alignment: TextAlignment,
    /// Indent of the first line, from the leading margin.
    pub first_line_head_indent: f32,
    /// Indent of all lines after the first.
    pub head_indent: f32,
    /// Trailing indent; negative values measure from the trailing margin.
    pub tail_indent: f32,
    pub line_break_mode: LineBreakMode,
    pub minimum_line_height: f32,
    /// Maximum line height; 0 means unbounded.
    pub maximum_line_height: f32,
    /// Multiplier applied to the natural line height; 0 means none.
    pub line_height_multiple: f32,
    pub writing_direction: WritingDirection,
    /// Hyphenation threshold from 0.0 (off) to 1.0.
    pub hyphenation_factor: f32,
    /// Tab interval used past the last explicit stop; 0 means default.
    pub default_tab_interval: f32,
    pub tab_stops: Vec<TabStop>,
}
