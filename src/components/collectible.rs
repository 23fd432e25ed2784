//! Collectible marker and bulb components.
//!
//! A [`Collectible`] is a world-placed trigger region read from the level's
//! `bulbs` object layer. Its two flags only move forward:
//! - `overlapping` goes true while the player stands inside the region and
//!   false again on the tick the player leaves;
//! - `processed` goes true on that leaving tick and never changes again.
//!
//! A [`Bulb`] is the transient visual spawned when a marker fires or a sector
//! roll succeeds.

use bevy_ecs::prelude::Component;
use fastrand::Rng;

use crate::events::spawneffect::SpawnSource;

/// Which visual asset a marker shows when it fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    Fixed(u32),
    /// Pick uniformly from the palette when the effect spawns.
    Random,
}

impl Variant {
    /// Tiled convention: `-1` (or any negative value) means random.
    pub fn from_property(value: i64) -> Self {
        if value < 0 {
            Variant::Random
        } else {
            Variant::Fixed(value.min(u32::MAX as i64) as u32)
        }
    }

    /// `None` when a fixed variant has no asset in a palette of `palette_size`.
    pub fn checked(self, palette_size: u32) -> Option<Self> {
        match self {
            Variant::Fixed(v) if v >= palette_size.max(1) => None,
            other => Some(other),
        }
    }

    pub fn resolve(self, rng: &mut Rng, palette_size: u32) -> u32 {
        match self {
            Variant::Fixed(v) => v,
            Variant::Random => rng.u32(0..palette_size.max(1)),
        }
    }
}

#[derive(Component, Debug, Clone)]
pub struct Collectible {
    pub id: u32,
    pub variant: Variant,
    pub processed: bool,
    pub overlapping: bool,
}

impl Collectible {
    pub fn new(id: u32, variant: Variant) -> Self {
        Self {
            id,
            variant,
            processed: false,
            overlapping: false,
        }
    }

    /// Feed this tick's overlap test. Returns true exactly once: on the first
    /// tick the player is outside after having been inside.
    pub fn observe_overlap(&mut self, overlapping_now: bool) -> bool {
        if self.processed {
            return false;
        }
        if overlapping_now {
            self.overlapping = true;
            return false;
        }
        if self.overlapping {
            self.overlapping = false;
            self.processed = true;
            return true;
        }
        false
    }
}

/// Spawned collectible visual.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bulb {
    pub variant: u32,
    pub source: SpawnSource,
}
