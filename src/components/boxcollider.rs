use bevy_ecs::prelude::Component;
use glam::Vec2;

/// Axis-aligned trigger/collision volume laid out from an entity's
/// [`MapPosition`](super::mapposition::MapPosition).
#[derive(Debug, Clone, Copy, PartialEq, Component)]
pub struct BoxCollider {
    pub size: Vec2,
    pub offset: Vec2,
}

impl BoxCollider {
    /// Create a BoxCollider with given size
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            size: Vec2::new(width, height),
            offset: Vec2::ZERO,
        }
    }

    /// Modify BoxCollider with given size and offset
    pub fn with_offset(mut self, offset: Vec2) -> Self {
        self.offset = offset;
        self
    }

    /// Returns (min, max) of the collider AABB for a given entity position.
    /// Handles negative size by normalizing to proper min/max.
    pub fn aabb(&self, position: Vec2) -> (Vec2, Vec2) {
        let p0 = position + self.offset;
        let p1 = p0 + self.size;
        (p0.min(p1), p0.max(p1))
    }

    /// AABB vs AABB overlap test against another BoxCollider at a different entity position.
    ///
    /// Touching edges do not count as overlap.
    pub fn overlaps(&self, position: Vec2, other: &Self, other_position: Vec2) -> bool {
        let (min_a, max_a) = self.aabb(position);
        let (min_b, max_b) = other.aabb(other_position);
        min_a.x < max_b.x && max_a.x > min_b.x && min_a.y < max_b.y && max_a.y > min_b.y
    }

    /// Bottom edge of the box in world space; the "feet" of a character.
    pub fn bottom(&self, position: Vec2) -> f32 {
        self.aabb(position).1.y
    }

    /// Horizontal centre of the box in world space.
    pub fn center_x(&self, position: Vec2) -> f32 {
        let (min, max) = self.aabb(position);
        (min.x + max.x) * 0.5
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aabb_normalizes_negative_size() {
        let c = BoxCollider::new(-10.0, -20.0);
        let (min, max) = c.aabb(Vec2::new(100.0, 100.0));
        assert_eq!(min, Vec2::new(90.0, 80.0));
        assert_eq!(max, Vec2::new(100.0, 100.0));
    }

    #[test]
    fn test_overlaps_intersecting_boxes() {
        let a = BoxCollider::new(32.0, 32.0);
        let b = BoxCollider::new(32.0, 32.0);
        assert!(a.overlaps(Vec2::new(0.0, 0.0), &b, Vec2::new(16.0, 16.0)));
    }

    #[test]
    fn test_touching_edges_do_not_overlap() {
        let a = BoxCollider::new(32.0, 32.0);
        let b = BoxCollider::new(32.0, 32.0);
        assert!(!a.overlaps(Vec2::new(0.0, 0.0), &b, Vec2::new(32.0, 0.0)));
    }

    #[test]
    fn test_offset_shifts_box() {
        let a = BoxCollider::new(10.0, 10.0).with_offset(Vec2::new(50.0, 0.0));
        let b = BoxCollider::new(10.0, 10.0);
        assert!(!a.overlaps(Vec2::ZERO, &b, Vec2::ZERO));
        assert!(a.overlaps(Vec2::ZERO, &b, Vec2::new(55.0, 0.0)));
    }

    #[test]
    fn test_bottom_and_center() {
        let c = BoxCollider::new(32.0, 48.0);
        let pos = Vec2::new(10.0, 100.0);
        assert_eq!(c.bottom(pos), 148.0);
        assert_eq!(c.center_x(pos), 26.0);
    }
}
