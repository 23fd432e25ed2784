//! Collectible spawn effect events.
//!
//! Both the collectible overlap tracker (a marker was walked through) and the
//! sector spawn scheduler (a sector roll succeeded) trigger a
//! [`SpawnEffectEvent`]. The
//! [`spawn_effect_observer`](crate::systems::spawneffect::spawn_effect_observer)
//! turns it into a growing [`Bulb`](crate::components::collectible::Bulb).

use bevy_ecs::prelude::*;
use glam::Vec2;

/// Where a spawn request came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpawnSource {
    /// A level marker with this id fired.
    Marker { id: u32 },
    /// The first grounded visit of this sector won its roll.
    Sector { index: i32 },
}

#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct SpawnEffectEvent {
    pub source: SpawnSource,
    /// Anchor of the bulb in world space (bottom-centre of the visual).
    pub position: Vec2,
    /// Resolved palette index.
    pub variant: u32,
}
