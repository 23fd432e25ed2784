//! Composite character fan-out.
//!
//! Copies the player's position, facing and full playback state onto every
//! layer listed in its [`CompositeCharacter`], so all layers show the same
//! frame of the same animation in the same place each tick.
use bevy_ecs::prelude::*;
use log::trace;

use crate::components::animation::Animation;
use crate::components::composite::{CharacterLayer, CompositeCharacter};
use crate::components::mapposition::MapPosition;
use crate::components::player::{Player, select_animation};
use crate::components::sprite::Sprite;

pub fn composite_sync_system(
    players: Query<(&Player, &MapPosition, &Animation, &CompositeCharacter)>,
    mut layers: Query<
        (&mut MapPosition, &mut Sprite, &mut Animation),
        (With<CharacterLayer>, Without<Player>),
    >,
) {
    for (player, position, animation, composite) in players.iter() {
        let selection = select_animation(player.state, player.facing);
        for &layer in composite.layers() {
            let Ok((mut layer_pos, mut sprite, mut layer_anim)) = layers.get_mut(layer) else {
                trace!("Composite layer {:?} missing", layer);
                continue;
            };
            layer_pos.pos = position.pos;
            sprite.flip_h = selection.flip_h;
            if *layer_anim != *animation {
                layer_anim.clone_from(animation);
            }
        }
    }
}
