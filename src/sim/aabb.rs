//! Axis-aligned boxes for sprite bodies
//!
//! Every physics body in the game is a box centred on its sprite position.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    pub fn from_center_size(center: Vec2, size: Vec2) -> Self {
        let half = size * 0.5;
        Self {
            min: center - half,
            max: center + half,
        }
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }

    /// Strict overlap; boxes that merely touch do not collide
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.min.x < other.max.x
            && self.max.x > other.min.x
            && self.min.y < other.max.y
            && self.max.y > other.min.y
    }

    /// Penetration depth on each axis (zero on an axis without overlap)
    pub fn overlap(&self, other: &Aabb) -> Vec2 {
        let x = (self.max.x.min(other.max.x) - self.min.x.max(other.min.x)).max(0.0);
        let y = (self.max.y.min(other.max.y) - self.min.y.max(other.min.y)).max(0.0);
        Vec2::new(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_center_size() {
        let b = Aabb::from_center_size(Vec2::new(10.0, 20.0), Vec2::new(4.0, 8.0));
        assert_eq!(b.min, Vec2::new(8.0, 16.0));
        assert_eq!(b.max, Vec2::new(12.0, 24.0));
        assert_eq!(b.center(), Vec2::new(10.0, 20.0));
        assert_eq!(b.size(), Vec2::new(4.0, 8.0));
    }

    #[test]
    fn test_touching_boxes_do_not_overlap() {
        let a = Aabb::new(Vec2::ZERO, Vec2::splat(10.0));
        let b = Aabb::new(Vec2::new(10.0, 0.0), Vec2::new(20.0, 10.0));
        assert!(!a.overlaps(&b));
        assert_eq!(a.overlap(&b).x, 0.0);
    }

    #[test]
    fn test_overlap_depth() {
        let a = Aabb::new(Vec2::ZERO, Vec2::splat(10.0));
        let b = Aabb::new(Vec2::new(7.0, 4.0), Vec2::new(17.0, 6.0));
        assert!(a.overlaps(&b));
        assert_eq!(a.overlap(&b), Vec2::new(3.0, 2.0));
    }
}
