//! Visited-sector bookkeeping for the sector spawn scheduler.
//!
//! The level is cut into fixed-width vertical slices ("sectors"). A sector
//! counts as visited the first time the player stands in it while grounded
//! and it lies further right than any sector seen so far. Each visited sector
//! gets exactly one spawn roll.

use bevy_ecs::prelude::Resource;
use rustc_hash::FxHashSet;

/// Sector index containing world x. Floors, so negative x maps to negative indices.
pub fn sector_index(x: f32, sector_width: f32) -> i32 {
    if sector_width <= 0.0 || !x.is_finite() {
        return 0;
    }
    (x / sector_width).floor() as i32
}

#[derive(Resource, Debug, Clone, Default)]
pub struct SectorRecord {
    visited: FxHashSet<i32>,
    highest: Option<i32>,
}

impl SectorRecord {
    /// Record a grounded visit to `index`. Returns true only when it is
    /// beyond every sector seen before, i.e. when a roll is due.
    pub fn try_advance(&mut self, index: i32) -> bool {
        if self.highest.is_some_and(|h| index <= h) {
            return false;
        }
        self.highest = Some(index);
        self.visited.insert(index)
    }

    pub fn is_visited(&self, index: i32) -> bool {
        self.visited.contains(&index)
    }

    pub fn highest(&self) -> Option<i32> {
        self.highest
    }

    pub fn visited_count(&self) -> usize {
        self.visited.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sector_index_floors() {
        assert_eq!(sector_index(0.0, 32.0), 0);
        assert_eq!(sector_index(31.9, 32.0), 0);
        assert_eq!(sector_index(32.0, 32.0), 1);
        assert_eq!(sector_index(-0.1, 32.0), -1);
    }

    #[test]
    fn test_sector_index_degenerate_width() {
        assert_eq!(sector_index(100.0, 0.0), 0);
        assert_eq!(sector_index(f32::NAN, 32.0), 0);
    }

    #[test]
    fn test_try_advance_only_forward() {
        let mut rec = SectorRecord::default();
        assert!(rec.try_advance(0));
        assert!(!rec.try_advance(0));
        assert!(rec.try_advance(3));
        assert!(!rec.try_advance(2));
        assert!(!rec.try_advance(3));
        assert!(rec.try_advance(4));
        assert_eq!(rec.highest(), Some(4));
        assert_eq!(rec.visited_count(), 3);
        assert!(!rec.is_visited(1));
        assert!(rec.is_visited(3));
    }
}
