//! Continuous world geometry.

use std::fmt;

/// A point in continuous world coordinates (pixels).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const ORIGIN: Self = Self { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Squared Euclidean distance, for threshold checks without a square root.
    #[inline]
    pub fn distance_squared(self, other: Point) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }

    #[inline]
    pub fn distance(self, other: Point) -> f32 {
        self.distance_squared(other).sqrt()
    }

    /// Heading in radians from `self` toward `other`.
    ///
    /// Returns `None` when both points coincide and no heading exists.
    #[inline]
    pub fn heading_to(self, other: Point) -> Option<f32> {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        if dx == 0.0 && dy == 0.0 {
            None
        } else {
            Some(dy.atan2(dx))
        }
    }

    /// Moves `distance` units along `heading`.
    #[inline]
    pub fn advance(self, heading: f32, distance: f32) -> Point {
        Point {
            x: self.x + distance * heading.cos(),
            y: self.y + distance * heading.sin(),
        }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.1}, {:.1})", self.x, self.y)
    }
}

/// Axis-aligned rectangle the world is drawn in.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WorldBounds {
    pub min: Point,
    pub max: Point,
}

impl WorldBounds {
    pub const fn new(min: Point, max: Point) -> Self {
        Self { min, max }
    }

    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    /// Shrinks the bounds by `margin` on every side.
    ///
    /// Returns `None` if nothing would remain.
    pub fn inset(&self, margin: f32) -> Option<WorldBounds> {
        let min = Point::new(self.min.x + margin, self.min.y + margin);
        let max = Point::new(self.max.x - margin, self.max.y - margin);
        (min.x <= max.x && min.y <= max.y).then_some(WorldBounds { min, max })
    }

    pub fn contains(&self, point: Point) -> bool {
        (self.min.x..=self.max.x).contains(&point.x) && (self.min.y..=self.max.y).contains(&point.y)
    }
}

/// Axis-aligned box used by collision and draw collaborators.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoundingBox {
    pub left: f32,
    pub bottom: f32,
    pub right: f32,
    pub top: f32,
}

impl BoundingBox {
    /// Square box of side `2 * half_extent` centred on `center`.
    pub fn around(center: Point, half_extent: f32) -> Self {
        Self {
            left: center.x - half_extent,
            bottom: center.y - half_extent,
            right: center.x + half_extent,
            top: center.y + half_extent,
        }
    }

    /// Overlap test; touching edges do not count.
    pub fn intersects(&self, other: &BoundingBox) -> bool {
        self.left < other.right
            && other.left < self.right
            && self.bottom < other.top
            && other.bottom < self.top
    }

    pub fn contains(&self, point: Point) -> bool {
        (self.left..=self.right).contains(&point.x) && (self.bottom..=self.top).contains(&point.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heading_undefined_for_coincident_points() {
        let p = Point::new(3.0, 4.0);
        assert_eq!(p.heading_to(p), None);
        let up = Point::ORIGIN.heading_to(Point::new(0.0, 5.0)).unwrap();
        assert!((up - std::f32::consts::FRAC_PI_2).abs() < 1e-6);
    }

    #[test]
    fn advance_follows_heading() {
        let moved = Point::ORIGIN.advance(0.0, 10.0);
        assert!((moved.x - 10.0).abs() < 1e-5);
        assert!(moved.y.abs() < 1e-5);
        assert_eq!(Point::ORIGIN.distance(Point::new(3.0, 4.0)), 5.0);
    }

    #[test]
    fn inset_rejects_oversized_margin() {
        let world = WorldBounds::new(Point::ORIGIN, Point::new(100.0, 60.0));
        let inner = world.inset(20.0).unwrap();
        assert_eq!(inner.min, Point::new(20.0, 20.0));
        assert_eq!(inner.max, Point::new(80.0, 40.0));
        assert!(world.inset(31.0).is_none());
    }

    #[test]
    fn boxes_overlap_only_when_interiors_meet() {
        let a = BoundingBox::around(Point::ORIGIN, 50.0);
        let b = BoundingBox::around(Point::new(90.0, 0.0), 50.0);
        let c = BoundingBox::around(Point::new(100.0, 0.0), 50.0);
        assert!(a.intersects(&b));
        assert!(!a.intersects(&c));
        assert!(a.contains(Point::new(-50.0, 50.0)));
    }
}
