//! Character-level decoration types.

use bitflags::bitflags;

use crate::types::color::Rgba;

bitflags! {
    /// Line decoration style for underline and strikethrough attributes.
    ///
    /// Combines a thickness with an optional dash pattern:
    ///
    /// ```
    /// use qss::types::LineStyle;
    ///
    /// let style = LineStyle::DOUBLE | LineStyle::PATTERN_DASH_DOT_DOT;
    /// assert!(style.contains(LineStyle::DOUBLE));
    /// ```
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct LineStyle: u16 {
        /// Single line.
        const SINGLE               = 0b0_0000_0001;
        /// Thick line.
        const THICK                = 0b0_0000_0010;
        /// Double line.
        const DOUBLE               = 0b0_0000_0100;
        /// Dotted pattern.
        const PATTERN_DOT          = 0b0_0001_0000;
        /// Dashed pattern.
        const PATTERN_DASH         = 0b0_0010_0000;
        /// Dash-dot pattern.
        const PATTERN_DASH_DOT     = 0b0_0100_0000;
        /// Dash-dot-dot pattern.
        const PATTERN_DASH_DOT_DOT = 0b0_1000_0000;
        /// Draw the line under words only, skipping whitespace.
        const BY_WORD              = 0b1_0000_0000;
    }
}

/// A drop shadow descriptor for character runs.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Shadow {
    /// Horizontal offset.
    pub dx: f32,
    /// Vertical offset.
    pub dy: f32,
    /// Blur radius.
    pub blur: f32,
    /// Shadow color.
    pub color: Rgba,
}
