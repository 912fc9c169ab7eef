//! Point-to-anchor reverse lookup.
//!
//! After an external layout engine rasterizes anchored runs into
//! bounding rectangles, [`AnchorLocator`] maps a tap or click point back
//! to the anchor metadata nearest to it.

use crate::run::AnchorMetadata;

/// A point in the layout engine's coordinate space.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned bounding rectangle.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn min_x(&self) -> f32 {
        self.x
    }

    pub fn max_x(&self) -> f32 {
        self.x + self.width
    }

    pub fn min_y(&self) -> f32 {
        self.y
    }

    pub fn max_y(&self) -> f32 {
        self.y + self.height
    }

    /// Vertical midpoint, the reference line for nearest-match distance.
    pub fn mid_y(&self) -> f32 {
        self.y + self.height / 2.0
    }

    /// Containment on the half-open extent: the left and top edges are
    /// inside, the right and bottom edges are not.
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.min_x()
            && point.x < self.max_x()
            && point.y >= self.min_y()
            && point.y < self.max_y()
    }
}

/// A rendered region carrying anchor metadata, supplied by the external
/// layout engine for every anchored run it rasterized.
#[derive(Clone, Debug, PartialEq)]
pub struct AnchorRegion {
    pub rect: Rect,
    pub metadata: AnchorMetadata,
}

impl AnchorRegion {
    pub fn new(rect: Rect, metadata: AnchorMetadata) -> Self {
        Self { rect, metadata }
    }
}

/// A successful lookup: the matched metadata plus its bounding rect, for
/// caller-side highlighting.
#[derive(Clone, Debug, PartialEq)]
pub struct AnchorHit<'a> {
    pub metadata: &'a AnchorMetadata,
    pub rect: Rect,
}

/// Vertical tolerance accepted between a point and the closest
/// same-column region.
pub const DEFAULT_TAP_TOLERANCE: f32 = 30.0;

/// Resolves a point against anchor regions in two tiers: an exact hit
/// wins immediately; otherwise the vertically closest region whose
/// horizontal span contains the point is accepted when its distance is
/// within tolerance.
///
/// The second tier compensates for line-height and leading gaps between
/// visual lines, so a tap slightly above or below a link's glyphs still
/// resolves.
#[derive(Clone, Copy, Debug)]
pub struct AnchorLocator {
    tolerance: f32,
}

impl Default for AnchorLocator {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TAP_TOLERANCE,
        }
    }
}

impl AnchorLocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the vertical tolerance for near misses.
    pub fn with_tolerance(mut self, tolerance: f32) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Find the anchor at or nearest to `point`.
    ///
    /// Returns `None` when no region contains the point and none is
    /// within tolerance; that is a normal no-match, not an error. When regions
    /// overlap, the first exact hit in iteration order wins.
    pub fn locate<'a>(&self, point: Point, regions: &'a [AnchorRegion]) -> Option<AnchorHit<'a>> {
        let mut closest: Option<(&'a AnchorRegion, f32)> = None;

        for region in regions {
            if region.rect.contains(point) {
                return Some(AnchorHit {
                    metadata: &region.metadata,
                    rect: region.rect,
                });
            }
            if point.x >= region.rect.min_x() && point.x <= region.rect.max_x() {
                let dy = (point.y - region.rect.mid_y()).abs();
                if closest.map_or(true, |(_, best)| dy < best) {
                    closest = Some((region, dy));
                }
            }
        }

        closest.and_then(|(region, dy)| {
            (dy < self.tolerance).then(|| AnchorHit {
                metadata: &region.metadata,
                rect: region.rect,
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn region(rect: Rect, href: &str) -> AnchorRegion {
        AnchorRegion::new(
            rect,
            [("href".to_string(), href.to_string())].into_iter().collect(),
        )
    }

    #[test]
    fn rect_containment_is_half_open() {
        let rect = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(rect.contains(Point::new(0.0, 0.0)));
        assert!(rect.contains(Point::new(9.9, 9.9)));
        assert!(!rect.contains(Point::new(10.0, 5.0)));
        assert!(!rect.contains(Point::new(5.0, 10.0)));
    }

    #[test]
    fn exact_hit_wins_over_a_closer_neighbor() {
        let regions = vec![
            region(Rect::new(0.0, 0.0, 100.0, 20.0), "first"),
            region(Rect::new(0.0, 22.0, 100.0, 20.0), "second"),
        ];
        let hit = AnchorLocator::new()
            .locate(Point::new(50.0, 25.0), &regions)
            .unwrap();
        assert_eq!(hit.metadata.get("href").unwrap(), "second");
        assert_eq!(hit.rect, regions[1].rect);
    }
}
