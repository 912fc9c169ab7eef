//! Style properties, category discriminants, and category-unique sets.

use std::collections::BTreeMap;

use crate::types::color::Rgba;
use crate::types::paragraph::{LineBreakMode, TabStop, TextAlignment, WritingDirection};
use crate::types::text::{LineStyle, Shadow};

/// A single style value attached to a stylesheet rule.
///
/// Every variant belongs to exactly one [`StyleCategory`]. Cascade
/// override identity keys off the category alone, never the payload:
/// inserting a `FontSize(14.0)` into a set already holding
/// `FontSize(12.0)` replaces it.
#[derive(Clone, Debug, PartialEq)]
pub enum StyleProperty {
    /// Font family name; composed with `FontSize` at attribute
    /// compilation time.
    FontName(String),
    /// Point size; composed with `FontName` at attribute compilation
    /// time.
    FontSize(f32),
    ForegroundColor(Rgba),
    BackgroundColor(Rgba),
    /// Whether ligatures are enabled.
    Ligatures(bool),
    /// Kerning adjustment in points.
    Kerning(f32),
    StrikethroughStyle(LineStyle),
    StrikethroughColor(Rgba),
    UnderlineStyle(LineStyle),
    UnderlineColor(Rgba),
    StrokeColor(Rgba),
    /// Stroke width as a percentage of the point size; negative values
    /// stroke and fill.
    StrokeWidth(f32),
    Shadow(Shadow),
    /// Vertical offset from the baseline, in points.
    BaselineOffset(f32),
    LineSpacing(f32),
    /// Space after the paragraph.
    ParagraphSpacing(f32),
    /// Space before the paragraph.
    ParagraphSpacingBefore(f32),
    Alignment(TextAlignment),
    FirstLineHeadIndent(f32),
    HeadIndent(f32),
    TailIndent(f32),
    LineBreakMode(LineBreakMode),
    MinimumLineHeight(f32),
    MaximumLineHeight(f32),
    LineHeightMultiple(f32),
    WritingDirection(WritingDirection),
    HyphenationFactor(f32),
    DefaultTabInterval(f32),
    TabStops(Vec<TabStop>),
}

impl StyleProperty {
    /// The category discriminant used for set membership and override
    /// identity.
    pub fn category(&self) -> StyleCategory {
        match self {
            StyleProperty::FontName(_) => StyleCategory::FontName,
            StyleProperty::FontSize(_) => StyleCategory::FontSize,
            StyleProperty::ForegroundColor(_) => StyleCategory::ForegroundColor,
            StyleProperty::BackgroundColor(_) => StyleCategory::BackgroundColor,
            StyleProperty::Ligatures(_) => StyleCategory::Ligatures,
            StyleProperty::Kerning(_) => StyleCategory::Kerning,
            StyleProperty::StrikethroughStyle(_) => StyleCategory::StrikethroughStyle,
            StyleProperty::StrikethroughColor(_) => StyleCategory::StrikethroughColor,
            StyleProperty::UnderlineStyle(_) => StyleCategory::UnderlineStyle,
            StyleProperty::UnderlineColor(_) => StyleCategory::UnderlineColor,
            StyleProperty::StrokeColor(_) => StyleCategory::StrokeColor,
            StyleProperty::StrokeWidth(_) => StyleCategory::StrokeWidth,
            StyleProperty::Shadow(_) => StyleCategory::Shadow,
            StyleProperty::BaselineOffset(_) => StyleCategory::BaselineOffset,
            StyleProperty::LineSpacing(_) => StyleCategory::LineSpacing,
            StyleProperty::ParagraphSpacing(_) => StyleCategory::ParagraphSpacing,
            StyleProperty::ParagraphSpacingBefore(_) => StyleCategory::ParagraphSpacingBefore,
            StyleProperty::Alignment(_) => StyleCategory::Alignment,
            StyleProperty::FirstLineHeadIndent(_) => StyleCategory::FirstLineHeadIndent,
            StyleProperty::HeadIndent(_) => StyleCategory::HeadIndent,
            StyleProperty::TailIndent(_) => StyleCategory::TailIndent,
            StyleProperty::LineBreakMode(_) => StyleCategory::LineBreakMode,
            StyleProperty::MinimumLineHeight(_) => StyleCategory::MinimumLineHeight,
            StyleProperty::MaximumLineHeight(_) => StyleCategory::MaximumLineHeight,
            StyleProperty::LineHeightMultiple(_) => StyleCategory::LineHeightMultiple,
            StyleProperty::WritingDirection(_) => StyleCategory::WritingDirection,
            StyleProperty::HyphenationFactor(_) => StyleCategory::HyphenationFactor,
            StyleProperty::DefaultTabInterval(_) => StyleCategory::DefaultTabInterval,
            StyleProperty::TabStops(_) => StyleCategory::TabStops,
        }
    }
}

/// Category discriminants, one per [`StyleProperty`] variant.
///
/// A fieldless enum cannot carry duplicate discriminants, which is the
/// uniqueness guarantee the cascade's override identity relies on. The
/// `Ord` derive fixes the iteration order of [`StyleSet`], keeping merge
/// results independent of insertion history.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StyleCategory {
    FontName,
    FontSize,
    ForegroundColor,
    BackgroundColor,
    Ligatures,
    Kerning,
    StrikethroughStyle,
    StrikethroughColor,
    UnderlineStyle,
    UnderlineColor,
    StrokeColor,
    StrokeWidth,
    Shadow,
    BaselineOffset,
    LineSpacing,
    ParagraphSpacing,
    ParagraphSpacingBefore,
    Alignment,
    FirstLineHeadIndent,
    HeadIndent,
    TailIndent,
    LineBreakMode,
    MinimumLineHeight,
    MaximumLineHeight,
    LineHeightMultiple,
    WritingDirection,
    HyphenationFactor,
    DefaultTabInterval,
    TabStops,
}

/// A collection of style properties holding at most one property per
/// category.
///
/// Inserting a property whose category is already present replaces the
/// old value. Iteration is in category order, which keeps cascade merges
/// deterministic regardless of how rules were written down.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StyleSet {
    properties: BTreeMap<StyleCategory, StyleProperty>,
}

impl StyleSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a property, replacing any existing property of the same
    /// category. Returns the replaced property, if any.
    pub fn insert(&mut self, property: StyleProperty) -> Option<StyleProperty> {
        self.properties.insert(property.category(), property)
    }

    /// Apply every property of `other` over this set, category by
    /// category.
    pub fn merge(&mut self, other: &StyleSet) {
        for property in other.iter() {
            self.insert(property.clone());
        }
    }

    /// The property stored for `category`, if any.
    pub fn get(&self, category: StyleCategory) -> Option<&StyleProperty> {
        self.properties.get(&category)
    }

    pub fn contains(&self, category: StyleCategory) -> bool {
        self.properties.contains_key(&category)
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Properties in category order.
    pub fn iter(&self) -> impl Iterator<Item = &StyleProperty> {
        self.properties.values()
    }

    /// Categories present in this set, in order.
    pub fn categories(&self) -> impl Iterator<Item = StyleCategory> + '_ {
        self.properties.keys().copied()
    }
}

impl FromIterator<StyleProperty> for StyleSet {
    fn from_iter<I: IntoIterator<Item = StyleProperty>>(iter: I) -> Self {
        let mut set = StyleSet::new();
        for property in iter {
            set.insert(property);
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn one_of_each() -> Vec<StyleProperty> {
        vec![
            StyleProperty::FontName("serif".to_string()),
            StyleProperty::FontSize(12.0),
            StyleProperty::ForegroundColor(Rgba::rgb(0, 0, 0)),
            StyleProperty::BackgroundColor(Rgba::rgb(255, 255, 255)),
            StyleProperty::Ligatures(true),
            StyleProperty::Kerning(1.0),
            StyleProperty::StrikethroughStyle(LineStyle::SINGLE),
            StyleProperty::StrikethroughColor(Rgba::rgb(1, 2, 3)),
            StyleProperty::UnderlineStyle(LineStyle::DOUBLE),
            StyleProperty::UnderlineColor(Rgba::rgb(3, 2, 1)),
            StyleProperty::StrokeColor(Rgba::rgb(9, 9, 9)),
            StyleProperty::StrokeWidth(-3.0),
            StyleProperty::Shadow(Shadow {
                dx: 1.0,
                dy: 1.0,
                blur: 2.0,
                color: Rgba::rgb(0, 0, 0),
            }),
            StyleProperty::BaselineOffset(2.0),
            StyleProperty::LineSpacing(4.0),
            StyleProperty::ParagraphSpacing(10.0),
            StyleProperty::ParagraphSpacingBefore(5.0),
            StyleProperty::Alignment(TextAlignment::Center),
            StyleProperty::FirstLineHeadIndent(20.0),
            StyleProperty::HeadIndent(10.0),
            StyleProperty::TailIndent(-10.0),
            StyleProperty::LineBreakMode(LineBreakMode::WordWrap),
            StyleProperty::MinimumLineHeight(12.0),
            StyleProperty::MaximumLineHeight(40.0),
            StyleProperty::LineHeightMultiple(1.2),
            StyleProperty::WritingDirection(WritingDirection::LeftToRight),
            StyleProperty::HyphenationFactor(0.9),
            StyleProperty::DefaultTabInterval(36.0),
            StyleProperty::TabStops(vec![TabStop {
                location: 36.0,
                alignment: TextAlignment::Left,
            }]),
        ]
    }

    #[test]
    fn every_variant_owns_a_distinct_category() {
        let properties = one_of_each();
        let mut categories: Vec<StyleCategory> =
            properties.iter().map(StyleProperty::category).collect();
        categories.sort();
        categories.dedup();
        assert_eq!(categories.len(), properties.len());
    }

    #[test]
    fn insert_replaces_same_category() {
        let mut set = StyleSet::new();
        assert!(set.insert(StyleProperty::FontSize(12.0)).is_none());
        let replaced = set.insert(StyleProperty::FontSize(14.0));
        assert_eq!(replaced, Some(StyleProperty::FontSize(12.0)));
        assert_eq!(set.len(), 1);
        assert_eq!(
            set.get(StyleCategory::FontSize),
            Some(&StyleProperty::FontSize(14.0))
        );
    }

    #[test]
    fn merge_overrides_by_category() {
        let mut base: StyleSet = [
            StyleProperty::FontSize(12.0),
            StyleProperty::Kerning(1.0),
        ]
        .into_iter()
        .collect();
        let overlay: StyleSet = [
            StyleProperty::FontSize(18.0),
            StyleProperty::ForegroundColor(Rgba::rgb(255, 0, 0)),
        ]
        .into_iter()
        .collect();

        base.merge(&overlay);

        assert_eq!(base.len(), 3);
        assert_eq!(
            base.get(StyleCategory::FontSize),
            Some(&StyleProperty::FontSize(18.0))
        );
        assert_eq!(
            base.get(StyleCategory::Kerning),
            Some(&StyleProperty::Kerning(1.0))
        );
    }

    #[test]
    fn set_never_holds_two_of_a_category() {
        let mut set = StyleSet::new();
        for property in one_of_each() {
            set.insert(property);
        }
        for property in one_of_each() {
            set.insert(property);
        }
        assert_eq!(set.len(), one_of_each().len());
    }
}
