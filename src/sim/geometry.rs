//! Axis-aligned rectangle geometry
//!
//! Everything solid in the play field is an axis-aligned rectangle, and every
//! moving body is tested through its bounding square.

use glam::Vec2;

/// An axis-aligned rectangle (top-left origin, y grows downward)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Bounding square of a disc
    #[inline]
    pub fn around(center: Vec2, radius: f32) -> Self {
        Self::new(center.x - radius, center.y - radius, radius * 2.0, radius * 2.0)
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.w / 2.0, self.y + self.h / 2.0)
    }

    /// Same rectangle shifted by `offset` (cell-local to world space)
    #[inline]
    pub fn translated(&self, offset: Vec2) -> Self {
        Self::new(self.x + offset.x, self.y + offset.y, self.w, self.h)
    }

    /// Closed-interval overlap: rectangles overlap unless one lies strictly
    /// to the left, right, above or below the other. Touching edges overlap.
    #[inline]
    pub fn overlaps(&self, other: &Rect) -> bool {
        !(other.x > self.right()
            || other.right() < self.x
            || other.y > self.bottom()
            || other.bottom() < self.y)
    }

    /// No shared interior along the x axis (touching counts as disjoint)
    #[inline]
    pub fn horizontally_disjoint(&self, other: &Rect) -> bool {
        self.right() <= other.x || self.x >= other.right()
    }

    /// No shared interior along the y axis (touching counts as disjoint)
    #[inline]
    pub fn vertically_disjoint(&self, other: &Rect) -> bool {
        self.bottom() <= other.y || self.y >= other.bottom()
    }

    /// True if `inner` lies entirely within this rectangle
    pub fn contains_rect(&self, inner: &Rect) -> bool {
        inner.x >= self.x
            && inner.y >= self.y
            && inner.right() <= self.right()
            && inner.bottom() <= self.bottom()
    }

    /// True if the point lies inside (edges inclusive)
    pub fn contains_point(&self, p: Vec2) -> bool {
        p.x >= self.x && p.x <= self.right() && p.y >= self.y && p.y <= self.bottom()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_overlap_basic() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(a.overlaps(&Rect::new(5.0, 5.0, 10.0, 10.0)));
        assert!(!a.overlaps(&Rect::new(20.0, 0.0, 5.0, 5.0)));
        assert!(!a.overlaps(&Rect::new(0.0, -20.0, 5.0, 5.0)));
    }

    #[test]
    fn test_touching_edges_overlap() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        // Shares the x = 10 edge
        assert!(a.overlaps(&Rect::new(10.0, 0.0, 5.0, 5.0)));
        // Shares only the corner
        assert!(a.overlaps(&Rect::new(10.0, 10.0, 5.0, 5.0)));
        // Just past the edge
        assert!(!a.overlaps(&Rect::new(10.01, 0.0, 5.0, 5.0)));
    }

    #[test]
    fn test_axis_disjoint() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let right = Rect::new(10.0, 2.0, 5.0, 5.0);
        assert!(a.horizontally_disjoint(&right));
        assert!(!a.vertically_disjoint(&right));

        let below = Rect::new(2.0, 12.0, 5.0, 5.0);
        assert!(!a.horizontally_disjoint(&below));
        assert!(a.vertically_disjoint(&below));
    }

    #[test]
    fn test_around_and_translate() {
        let r = Rect::around(Vec2::new(50.0, 40.0), 10.0);
        assert_eq!(r, Rect::new(40.0, 30.0, 20.0, 20.0));
        assert_eq!(r.center(), Vec2::new(50.0, 40.0));

        let moved = Rect::new(1.0, 2.0, 3.0, 4.0).translated(Vec2::new(10.0, 20.0));
        assert_eq!(moved, Rect::new(11.0, 22.0, 3.0, 4.0));
    }

    fn arb_rect() -> impl Strategy<Value = Rect> {
        (-100.0f32..100.0, -100.0f32..100.0, 0.0f32..50.0, 0.0f32..50.0)
            .prop_map(|(x, y, w, h)| Rect::new(x, y, w, h))
    }

    proptest! {
        #[test]
        fn overlap_is_symmetric(a in arb_rect(), b in arb_rect()) {
            prop_assert_eq!(a.overlaps(&b), b.overlaps(&a));
        }

        #[test]
        fn shared_point_implies_overlap(a in arb_rect(), b in arb_rect()) {
            let probe = a.center();
            if b.contains_point(probe) {
                prop_assert!(a.overlaps(&b));
            }
        }
    }
}
