//! Font descriptor and platform defaults.

/// Font family substituted when a cascade supplies a size but no family.
pub const DEFAULT_FONT_FAMILY: &str = "system-ui";

/// Point size substituted when a cascade supplies a family but no size.
pub const DEFAULT_FONT_SIZE: f32 = 14.0;

/// A concrete font choice composed from the cascade's font-name and
/// font-size categories.
///
/// Composition is deferred until attribute compilation so the two
/// categories can cascade independently: a rule may override only the size
/// while inheriting the family from a less specific rule.
#[derive(Clone, Debug, PartialEq)]
pub struct FontFace {
    /// Font family name, passed through to the renderer verbatim.
    pub family: String,
    /// Point size.
    pub size: f32,
}

impl FontFace {
    /// Create a font descriptor from a family name and size.
    pub fn new(family: impl Into<String>, size: f32) -> Self {
        Self {
            family: family.into(),
            size,
        }
    }

    /// The platform default face at the given size.
    pub fn system(size: f32) -> Self {
        Self::new(DEFAULT_FONT_FAMILY, size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_face_uses_default_family() {
        let face = FontFace::system(18.0);
        assert_eq!(face.family, DEFAULT_FONT_FAMILY);
        assert_eq!(face.size, 18.0);
    }
}
