//! Axis-aligned geometry primitives
//!
//! Everything that can be positioned or hit-tested is built from center +
//! size boxes. Edges are always derived from the center, never stored, so a
//! center move is the only mutation the rest of the sim needs.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned box defined by its center and full size
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub center: Vec2,
    pub size: Vec2,
}

impl Aabb {
    /// Both extents must be positive; enforced at construction rather than
    /// re-checked per frame.
    pub fn new(center: Vec2, size: Vec2) -> Self {
        assert!(size.x > 0.0 && size.y > 0.0, "degenerate box size {size}");
        Self { center, size }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.center.x - self.size.x / 2.0
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.center.x + self.size.x / 2.0
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.center.y - self.size.y / 2.0
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.center.y + self.size.y / 2.0
    }

    /// Move the box; edges are recomputed from the new center on demand
    #[inline]
    pub fn set_center(&mut self, center: Vec2) {
        self.center = center;
    }

    #[inline]
    pub fn translate_x(&mut self, dx: f32) {
        self.center.x += dx;
    }

    /// Strict-inequality AABB overlap test. Touching edges do not count.
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.bottom() < other.top()
            && self.top() > other.bottom()
    }
}

/// Free-function form of the overlap test
#[inline]
pub fn overlaps(a: &Aabb, b: &Aabb) -> bool {
    a.overlaps(b)
}

/// An isosceles triangle, apex up, described by its bounding center + size
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tri {
    pub center: Vec2,
    pub size: Vec2,
}

impl Tri {
    pub fn new(center: Vec2, size: Vec2) -> Self {
        assert!(size.x > 0.0 && size.y > 0.0, "degenerate tri size {size}");
        Self { center, size }
    }

    /// The triangle's bounding box (decorations never collide, so this is
    /// only used for layout)
    pub fn bounds(&self) -> Aabb {
        Aabb::new(self.center, self.size)
    }
}

/// Closed set of drawable shapes. The shape vocabulary is fixed and small,
/// so a tagged variant replaces a trait object and keeps the render
/// dispatch exhaustive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Shape {
    Rect(Aabb),
    Tri(Tri),
}

impl Shape {
    pub fn bounds(&self) -> Aabb {
        match self {
            Shape::Rect(r) => *r,
            Shape::Tri(t) => t.bounds(),
        }
    }
}
