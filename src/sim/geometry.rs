//! Axis-aligned rectangle geometry
//!
//! Every physical object in the game (player, barrels, boss, hammer,
//! platforms, ladders) is an axis-aligned box anchored at its top-left
//! corner. Screen coordinates: +x right, +y down.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned bounding box, top-left anchored
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Top-left corner
    pub pos: Vec2,
    /// Width and height
    pub size: Vec2,
}

impl Rect {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self { pos, size }
    }

    /// Build a rect from its center point (platforms and ladders are
    /// configured by center)
    pub fn from_center(center: Vec2, size: Vec2) -> Self {
        Self {
            pos: center - size / 2.0,
            size,
        }
    }

    pub fn left(&self) -> f32 {
        self.pos.x
    }

    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    pub fn top(&self) -> f32 {
        self.pos.y
    }

    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    pub fn center_x(&self) -> f32 {
        self.pos.x + self.size.x / 2.0
    }

    /// Strict overlap test (touching edges do not intersect)
    pub fn intersects(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }

    /// Inclusive horizontal span overlap (touching edges count)
    ///
    /// Landing and scoring checks use this looser test so an entity
    /// flush with a platform edge still counts as supported.
    pub fn overlaps_horizontally(&self, other: &Rect) -> bool {
        self.right() >= other.left() && self.left() <= other.right()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect(x: f32, y: f32, w: f32, h: f32) -> Rect {
        Rect::new(Vec2::new(x, y), Vec2::new(w, h))
    }

    #[test]
    fn test_intersects_overlapping() {
        let a = rect(0.0, 0.0, 10.0, 10.0);
        let b = rect(5.0, 5.0, 10.0, 10.0);
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
    }

    #[test]
    fn test_intersects_touching_edges_is_miss() {
        // An entity resting exactly on a platform top should not
        // register as intersecting it.
        let standing = rect(0.0, 0.0, 10.0, 10.0);
        let platform = rect(0.0, 10.0, 100.0, 5.0);
        assert!(!standing.intersects(&platform));
    }

    #[test]
    fn test_horizontal_overlap_inclusive() {
        let a = rect(0.0, 0.0, 10.0, 10.0);
        let b = rect(10.0, 50.0, 10.0, 10.0);
        // Flush edges still overlap horizontally
        assert!(a.overlaps_horizontally(&b));

        let c = rect(10.1, 50.0, 10.0, 10.0);
        assert!(!a.overlaps_horizontally(&c));
    }

    #[test]
    fn test_from_center() {
        let r = Rect::from_center(Vec2::new(100.0, 100.0), Vec2::new(20.0, 10.0));
        assert_eq!(r.left(), 90.0);
        assert_eq!(r.right(), 110.0);
        assert_eq!(r.top(), 95.0);
        assert_eq!(r.bottom(), 105.0);
    }
}
