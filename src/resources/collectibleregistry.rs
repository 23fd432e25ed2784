//! Index of collectible marker entities.
//!
//! Markers are spawned once at level load and never despawned. The registry
//! maps marker ids to entities and keeps the markers sorted by horizontal
//! centre, so the overlap tracker can fetch the ones near the player with a
//! binary search instead of walking the whole level.

use bevy_ecs::prelude::{Entity, Resource};
use rustc_hash::FxHashMap;
use smallvec::SmallVec;

#[derive(Debug, Clone, Copy)]
struct Slot {
    center_x: f32,
    width: f32,
    entity: Entity,
}

#[derive(Resource, Debug, Clone, Default)]
pub struct CollectibleRegistry {
    by_id: FxHashMap<u32, Entity>,
    by_x: Vec<Slot>,
    max_width: f32,
}

impl CollectibleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a marker. Returns false (and registers nothing) when `id` is
    /// already taken.
    pub fn insert(&mut self, id: u32, center_x: f32, width: f32, entity: Entity) -> bool {
        if self.by_id.contains_key(&id) {
            return false;
        }
        self.by_id.insert(id, entity);
        let at = self.by_x.partition_point(|s| s.center_x <= center_x);
        self.by_x.insert(
            at,
            Slot {
                center_x,
                width: width.abs(),
                entity,
            },
        );
        self.max_width = self.max_width.max(width.abs());
        true
    }

    pub fn get(&self, id: u32) -> Option<Entity> {
        self.by_id.get(&id).copied()
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }

    /// Markers whose centre lies within `widths` of their own width, plus
    /// `margin`, from `x`, in ascending x order.
    ///
    /// `widths` is never taken below one half, so with `margin` set to the
    /// player's half-width every marker the player overlaps is returned.
    pub fn near(&self, x: f32, widths: f32, margin: f32) -> SmallVec<[Entity; 8]> {
        let widths = widths.max(0.5);
        let margin = margin.max(0.0);
        let reach = self.max_width * widths + margin;
        let lo = self.by_x.partition_point(|s| s.center_x < x - reach);
        let hi = self.by_x.partition_point(|s| s.center_x <= x + reach);
        self.by_x[lo..hi]
            .iter()
            .filter(|s| (s.center_x - x).abs() <= s.width * widths + margin)
            .map(|s| s.entity)
            .collect()
    }
}
