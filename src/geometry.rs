//! Axis-aligned boxes in world space.
//!
//! World space is screen-style: x grows right and y grows down, so a box's
//! `top` is its smaller y. Overlap is strict; boxes that only share an edge
//! do not overlap, which lets a body rest exactly on a solid's top face.
use glam::Vec2;

/// Axis-aligned bounding box stored as its min and max corners.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Aabb {
    /// Top-left corner.
    pub min: Vec2,
    /// Bottom-right corner.
    pub max: Vec2,
}

impl Aabb {
    /// Creates a box from its top-left corner and size.
    ///
    /// # Examples
    /// ```
    /// use glam::Vec2;
    /// use tandem::geometry::Aabb;
    /// let b = Aabb::from_min_size(Vec2::new(24.0, 48.0), Vec2::splat(24.0));
    /// assert_eq!(b.right(), 48.0);
    /// assert_eq!(b.bottom(), 72.0);
    /// ```
    #[must_use]
    pub fn from_min_size(min: Vec2, size: Vec2) -> Self {
        Self {
            min,
            max: min + size,
        }
    }

    /// Left edge.
    #[must_use]
    pub const fn left(&self) -> f32 {
        self.min.x
    }

    /// Right edge.
    #[must_use]
    pub const fn right(&self) -> f32 {
        self.max.x
    }

    /// Top edge.
    #[must_use]
    pub const fn top(&self) -> f32 {
        self.min.y
    }

    /// Bottom edge.
    #[must_use]
    pub const fn bottom(&self) -> f32 {
        self.max.y
    }

    /// Width of the box.
    #[must_use]
    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    /// Height of the box.
    #[must_use]
    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    /// Horizontal centre.
    #[must_use]
    pub fn center_x(&self) -> f32 {
        (self.min.x + self.max.x) * 0.5
    }

    /// Returns `true` when the interiors of both boxes intersect.
    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.min.x < other.max.x
            && self.max.x > other.min.x
            && self.min.y < other.max.y
            && self.max.y > other.min.y
    }

    /// Grows the box by `amount` on every side along each axis.
    #[must_use]
    pub fn expand(&self, amount: Vec2) -> Self {
        Self {
            min: self.min - amount,
            max: self.max + amount,
        }
    }

    /// Extends the bottom edge downward by `depth`.
    #[must_use]
    pub fn extend_down(&self, depth: f32) -> Self {
        Self {
            min: self.min,
            max: Vec2::new(self.max.x, self.max.y + depth),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn tile(x: f32, y: f32) -> Aabb {
        Aabb::from_min_size(Vec2::new(x, y), Vec2::splat(24.0))
    }

    #[rstest]
    #[case::interior(tile(10.0, 10.0), true)]
    #[case::shared_edge_right(tile(24.0, 0.0), false)]
    #[case::shared_edge_below(tile(0.0, 24.0), false)]
    #[case::corner_touch(tile(24.0, 24.0), false)]
    #[case::disjoint(tile(100.0, 100.0), false)]
    fn overlap_is_strict(#[case] other: Aabb, #[case] expected: bool) {
        assert_eq!(tile(0.0, 0.0).overlaps(&other), expected);
        assert_eq!(other.overlaps(&tile(0.0, 0.0)), expected);
    }

    #[test]
    fn extend_down_reaches_touching_floor() {
        let body = Aabb::from_min_size(Vec2::ZERO, Vec2::splat(24.0));
        let floor = tile(0.0, 24.0);
        assert!(!body.overlaps(&floor));
        assert!(body.extend_down(1.0).overlaps(&floor));
    }

    #[test]
    fn expand_grows_both_sides() {
        let grown = tile(24.0, 24.0).expand(Vec2::new(24.0, 12.0));
        assert_eq!(grown.min, Vec2::new(0.0, 12.0));
        assert_eq!(grown.max, Vec2::new(72.0, 60.0));
    }
}
