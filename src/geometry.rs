//! Pixel geometry primitives: Size and Rect.
//!
//! These are the coordinate types used throughout slicedoc for positioning
//! and sizing layers on artboards. All values are f64 pixels; grid track
//! widths are fractional, so integer coordinates would lose placement
//! precision.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Size
// ---------------------------------------------------------------------------

/// A 2D size in pixels (width x height).
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    /// A zero-sized size.
    pub const ZERO: Size = Size {
        width: 0.0,
        height: 0.0,
    };

    /// Create a new size.
    #[inline]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Whether both dimensions are strictly positive.
    #[inline]
    pub fn is_positive(self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }

    /// Convert to a [`Rect`] positioned at the origin.
    #[inline]
    pub const fn to_rect(self) -> Rect {
        Rect {
            x: 0.0,
            y: 0.0,
            width: self.width,
            height: self.height,
        }
    }
}

// ---------------------------------------------------------------------------
// Rect
// ---------------------------------------------------------------------------

/// A rectangle in pixel space defined by position and size.
///
/// This is the geometry attached to every compiled layer. `clamp_within` is
/// the bounds-invariant workhorse: every layer rect must satisfy
/// `0 <= x`, `0 <= y`, `x + width <= bounds.width`,
/// `y + height <= bounds.height`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    /// An empty rect at the origin.
    pub const EMPTY: Rect = Rect {
        x: 0.0,
        y: 0.0,
        width: 0.0,
        height: 0.0,
    };

    /// Create a new rect.
    #[inline]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// The right edge: `x + width`.
    #[inline]
    pub fn right(self) -> f64 {
        self.x + self.width
    }

    /// The bottom edge: `y + height`.
    #[inline]
    pub fn bottom(self) -> f64 {
        self.y + self.height
    }

    /// The dimensions as a [`Size`].
    #[inline]
    pub const fn size(self) -> Size {
        Size {
            width: self.width,
            height: self.height,
        }
    }

    /// Whether `other` is entirely contained within this rect.
    #[inline]
    pub fn contains_rect(self, other: Rect) -> bool {
        other.x >= self.x
            && other.y >= self.y
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }

    /// Whether `other` overlaps this rect (non-zero intersection area).
    #[inline]
    pub fn overlaps(self, other: Rect) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }

    /// Translate the rect by (dx, dy).
    #[inline]
    pub fn translate(self, dx: f64, dy: f64) -> Rect {
        Rect {
            x: self.x + dx,
            y: self.y + dy,
            width: self.width,
            height: self.height,
        }
    }

    /// Scale position and size uniformly by `factor`.
    #[inline]
    pub fn scale(self, factor: f64) -> Rect {
        Rect {
            x: self.x * factor,
            y: self.y * factor,
            width: self.width * factor,
            height: self.height * factor,
        }
    }

    /// Clamp this rect to lie within `bounds` (a size, treated as a rect at
    /// the origin).
    ///
    /// Extents are clamped first: larger than the bounds is reduced to the
    /// bounds extent, negative is raised to zero. Position is then clamped
    /// to be non-negative and pulled back so the rect fits. Returns the
    /// clamped rect and whether any coordinate changed.
    pub fn clamp_within(self, bounds: Size) -> (Rect, bool) {
        let mut r = self;

        if r.width > bounds.width {
            r.width = bounds.width;
        } else if r.width < 0.0 {
            r.width = 0.0;
        }
        if r.height > bounds.height {
            r.height = bounds.height;
        } else if r.height < 0.0 {
            r.height = 0.0;
        }
        if r.x < 0.0 {
            r.x = 0.0;
        }
        if r.y < 0.0 {
            r.y = 0.0;
        }
        if r.right() > bounds.width {
            r.x = bounds.width - r.width;
        }
        if r.bottom() > bounds.height {
            r.y = bounds.height - r.height;
        }

        (r, r != self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -----------------------------------------------------------------------
    // Size
    // -----------------------------------------------------------------------

    #[test]
    fn size_new_and_constants() {
        assert_eq!(
            Size::new(1440.0, 900.0),
            Size {
                width: 1440.0,
                height: 900.0
            }
        );
        assert_eq!(Size::default(), Size::ZERO);
    }

    #[test]
    fn size_is_positive() {
        assert!(Size::new(1.0, 1.0).is_positive());
        assert!(!Size::new(0.0, 1.0).is_positive());
        assert!(!Size::new(1.0, -2.0).is_positive());
        assert!(!Size::ZERO.is_positive());
    }

    #[test]
    fn size_to_rect() {
        assert_eq!(
            Size::new(375.0, 667.0).to_rect(),
            Rect::new(0.0, 0.0, 375.0, 667.0)
        );
    }

    // -----------------------------------------------------------------------
    // Rect — basic properties
    // -----------------------------------------------------------------------

    #[test]
    fn rect_edges() {
        let r = Rect::new(10.0, 20.0, 100.0, 50.0);
        assert_eq!(r.right(), 110.0);
        assert_eq!(r.bottom(), 70.0);
        assert_eq!(r.size(), Size::new(100.0, 50.0));
    }

    #[test]
    fn rect_contains_rect() {
        let outer = Rect::new(0.0, 0.0, 100.0, 100.0);
        let inner = Rect::new(10.0, 10.0, 20.0, 20.0);
        assert!(outer.contains_rect(inner));
        assert!(!inner.contains_rect(outer));
        assert!(outer.contains_rect(outer));
    }

    #[test]
    fn rect_overlaps() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(5.0, 5.0, 10.0, 10.0);
        let c = Rect::new(10.0, 0.0, 10.0, 10.0);
        assert!(a.overlaps(b));
        assert!(b.overlaps(a));
        // Edge-adjacent rects do not overlap.
        assert!(!a.overlaps(c));
    }

    #[test]
    fn rect_translate() {
        let r = Rect::new(5.0, 10.0, 20.0, 30.0);
        assert_eq!(r.translate(-5.0, 3.0), Rect::new(0.0, 13.0, 20.0, 30.0));
    }

    #[test]
    fn rect_scale() {
        let r = Rect::new(100.0, 200.0, 40.0, 80.0);
        assert_eq!(r.scale(0.5), Rect::new(50.0, 100.0, 20.0, 40.0));
        assert_eq!(r.scale(1.0), r);
    }

    // -----------------------------------------------------------------------
    // Rect — clamp_within
    // -----------------------------------------------------------------------

    #[test]
    fn clamp_inside_is_unchanged() {
        let r = Rect::new(10.0, 10.0, 50.0, 50.0);
        let (clamped, changed) = r.clamp_within(Size::new(100.0, 100.0));
        assert_eq!(clamped, r);
        assert!(!changed);
    }

    #[test]
    fn clamp_negative_position() {
        let r = Rect::new(-5.0, -10.0, 50.0, 50.0);
        let (clamped, changed) = r.clamp_within(Size::new(100.0, 100.0));
        assert_eq!(clamped, Rect::new(0.0, 0.0, 50.0, 50.0));
        assert!(changed);
    }

    #[test]
    fn clamp_overflowing_right_edge() {
        let r = Rect::new(80.0, 0.0, 50.0, 50.0);
        let (clamped, changed) = r.clamp_within(Size::new(100.0, 100.0));
        assert_eq!(clamped, Rect::new(50.0, 0.0, 50.0, 50.0));
        assert!(changed);
    }

    #[test]
    fn clamp_oversized_rect_shrinks() {
        let r = Rect::new(0.0, 0.0, 200.0, 300.0);
        let (clamped, changed) = r.clamp_within(Size::new(100.0, 100.0));
        assert_eq!(clamped, Rect::new(0.0, 0.0, 100.0, 100.0));
        assert!(changed);
    }

    #[test]
    fn clamp_negative_extents_raised_to_zero() {
        let r = Rect::new(10.0, 10.0, -6.0, -3.0);
        let (clamped, changed) = r.clamp_within(Size::new(100.0, 100.0));
        assert_eq!(clamped, Rect::new(10.0, 10.0, 0.0, 0.0));
        assert!(changed);
    }

    #[test]
    fn clamp_satisfies_bounds_invariant() {
        let bounds = Size::new(375.0, 667.0);
        let cases = [
            Rect::new(-20.0, 700.0, 100.0, 100.0),
            Rect::new(350.0, 650.0, 100.0, 100.0),
            Rect::new(0.0, 0.0, 1000.0, 1000.0),
        ];
        for r in cases {
            let (c, _) = r.clamp_within(bounds);
            assert!(c.x >= 0.0);
            assert!(c.y >= 0.0);
            assert!(c.right() <= bounds.width);
            assert!(c.bottom() <= bounds.height);
        }
    }
}
