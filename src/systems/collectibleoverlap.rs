//! Collectible overlap tracker.
//!
//! Each tick the markers near the player (a window of
//! [`GameConfig::proximity_widths`] marker widths plus the player's
//! half-width on each side, centre to centre) are tested against the
//! player's box. A marker the player overlaps is always inside the window. A marker that the player
//! has entered and then left fires its spawn effect once and becomes
//! processed. Markers outside the window keep whatever state they had.
use bevy_ecs::prelude::*;
use glam::Vec2;
use log::{debug, trace};

use crate::components::boxcollider::BoxCollider;
use crate::components::collectible::Collectible;
use crate::components::mapposition::MapPosition;
use crate::components::player::Player;
use crate::events::spawneffect::{SpawnEffectEvent, SpawnSource};
use crate::resources::collectibleregistry::CollectibleRegistry;
use crate::resources::gameconfig::GameConfig;
use crate::resources::rng::GameRng;

pub fn collectible_overlap_system(
    player: Query<(&MapPosition, &BoxCollider), With<Player>>,
    mut markers: Query<(&mut Collectible, &MapPosition, &BoxCollider), Without<Player>>,
    registry: Res<CollectibleRegistry>,
    config: Res<GameConfig>,
    mut rng: ResMut<GameRng>,
    mut commands: Commands,
) {
    let Ok((player_pos, player_box)) = player.single() else {
        trace!("Overlap tracking skipped: no single player");
        return;
    };
    let x = player_box.center_x(player_pos.pos);

    let half_width = player_box.size.x.abs() * 0.5;

    for entity in registry.near(x, config.proximity_widths, half_width) {
        let Ok((mut marker, marker_pos, marker_box)) = markers.get_mut(entity) else {
            continue;
        };
        if marker.processed {
            continue;
        }
        let inside = player_box.overlaps(player_pos.pos, marker_box, marker_pos.pos);
        if inside && !marker.overlapping {
            trace!("Player entered marker {}", marker.id);
        }
        if !marker.observe_overlap(inside) {
            continue;
        }
        let variant = marker.variant.resolve(&mut rng.0, config.palette_size);
        debug!("Marker {} left, spawning variant {}", marker.id, variant);
        commands.trigger(SpawnEffectEvent {
            source: SpawnSource::Marker { id: marker.id },
            position: Vec2::new(
                marker_box.center_x(marker_pos.pos),
                marker_box.bottom(marker_pos.pos),
            ),
            variant,
        });
    }
}
