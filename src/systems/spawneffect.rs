//! Transient bulb visuals.
//!
//! [`spawn_effect_observer`] answers every
//! [`SpawnEffectEvent`](crate::events::spawneffect::SpawnEffectEvent) by
//! spawning a [`Bulb`] that grows from nothing to full size. The bulb is one
//! tile square and stands on the event's anchor point.
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use glam::Vec2;
use log::debug;

use crate::components::collectible::Bulb;
use crate::components::group::Group;
use crate::components::mapposition::MapPosition;
use crate::components::scale::Scale;
use crate::components::sprite::Sprite;
use crate::components::tween::{Easing, TweenScale};
use crate::events::spawneffect::SpawnEffectEvent;
use crate::resources::gameconfig::GameConfig;
use crate::resources::level::LevelBounds;

/// Texture key for a bulb variant.
pub fn bulb_texture_key(variant: u32) -> String {
    format!("bulb_{variant}")
}

pub fn spawn_effect_observer(
    trigger: On<SpawnEffectEvent>,
    config: Res<GameConfig>,
    bounds: Res<LevelBounds>,
    mut commands: Commands,
) {
    let event = trigger.event();
    let size = bounds.tile_width;
    let top_left = event.position - Vec2::new(size * 0.5, size);
    let entity = commands
        .spawn((
            Group("bulb"),
            Bulb {
                variant: event.variant,
                source: event.source,
            },
            MapPosition { pos: top_left },
            Sprite::new(bulb_texture_key(event.variant), size, size),
            Scale::new(0.0, 0.0),
            TweenScale::new(Vec2::ZERO, Vec2::ONE, config.growth_duration)
                .with_easing(Easing::QuadOut),
        ))
        .id();
    debug!(
        "Bulb {:?} spawned from {:?} at {:?}",
        entity, event.source, event.position
    );
}
