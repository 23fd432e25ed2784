//! Sector spawn scheduler.
//!
//! The level is cut into vertical strips one tile wide. The first time the
//! grounded player's centre lands in a strip further right than any seen
//! before, one Bernoulli trial runs with the current
//! [`AmbientSpawnChance`]; a success requests a bulb at the strip's centre,
//! on the player's feet.
use bevy_ecs::prelude::*;
use glam::Vec2;
use log::{debug, trace};

use crate::components::boxcollider::BoxCollider;
use crate::components::mapposition::MapPosition;
use crate::components::player::Player;
use crate::events::spawneffect::{SpawnEffectEvent, SpawnSource};
use crate::resources::gameconfig::GameConfig;
use crate::resources::level::LevelBounds;
use crate::resources::rng::GameRng;
use crate::resources::sectors::{SectorRecord, sector_index};
use crate::resources::spawnchance::AmbientSpawnChance;

pub fn sector_spawn_system(
    player: Query<(&Player, &MapPosition, &BoxCollider)>,
    bounds: Res<LevelBounds>,
    chance: Res<AmbientSpawnChance>,
    config: Res<GameConfig>,
    mut record: ResMut<SectorRecord>,
    mut rng: ResMut<GameRng>,
    mut commands: Commands,
) {
    let Ok((player, position, collider)) = player.single() else {
        trace!("Sector spawn skipped: no single player");
        return;
    };
    if !player.grounded {
        return;
    }
    let width = bounds.tile_width;
    let index = sector_index(collider.center_x(position.pos), width);
    if !record.try_advance(index) {
        return;
    }

    let won = rng.chance(chance.0);
    debug!(
        "Sector {} first visit, chance {:.2}: {}",
        index,
        chance.0,
        if won { "spawn" } else { "no spawn" }
    );
    if !won {
        return;
    }
    let variant = rng.0.u32(0..config.palette_size.max(1));
    commands.trigger(SpawnEffectEvent {
        source: SpawnSource::Sector { index },
        position: Vec2::new(
            index as f32 * width + width * 0.5,
            collider.bottom(position.pos),
        ),
        variant,
    });
}
