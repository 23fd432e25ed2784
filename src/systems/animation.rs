//! Animation playback.
//!
//! [`animation`] advances the player's [`Animation`] using the frame count
//! and rate stored in [`AnimationStore`]. Layers of the composite character
//! are not advanced here; they receive a copy of the player's playback state
//! in [`composite_sync_system`](crate::systems::composite::composite_sync_system).
use bevy_ecs::prelude::*;
use log::trace;

use crate::components::animation::Animation;
use crate::components::player::Player;
use crate::resources::animationstore::{AnimationResource, AnimationStore};
use crate::resources::worldtime::WorldTime;

/// Advance one animation by `dt` seconds.
pub(crate) fn advance_animation(anim: &mut Animation, resource: &AnimationResource, dt: f32) {
    if resource.fps <= 0.0 || resource.frame_count == 0 {
        return;
    }
    anim.elapsed_time += dt;
    let frame_duration = 1.0 / resource.fps;
    while anim.elapsed_time >= frame_duration {
        anim.elapsed_time -= frame_duration;
        anim.frame_index += 1;
        if anim.frame_index >= resource.frame_count {
            if resource.looped {
                anim.frame_index = 0;
            } else {
                // hold the last frame
                anim.frame_index = resource.frame_count - 1;
                anim.elapsed_time = 0.0;
                break;
            }
        }
    }
}

pub fn animation(
    mut query: Query<&mut Animation, With<Player>>,
    animation_store: Res<AnimationStore>,
    time: Res<WorldTime>,
) {
    for mut anim in query.iter_mut() {
        let Some(resource) = animation_store.get(&anim.animation_key) else {
            trace!("No animation data for '{}'", anim.animation_key);
            continue;
        };
        advance_animation(&mut anim, resource, time.delta);
    }
}
