//! Kinematic integrator.
//!
//! Stands in for the physics engine when the core runs headless: positions
//! advance by `velocity * delta` and the player is kept inside the level's
//! horizontal extent. Velocity is left untouched. Ground contact is not
//! computed here; it comes from [`GroundContact`](crate::resources::groundcontact::GroundContact).
use bevy_ecs::prelude::*;

use crate::components::boxcollider::BoxCollider;
use crate::components::mapposition::MapPosition;
use crate::components::player::Player;
use crate::components::rigidbody::RigidBody;
use crate::resources::level::LevelBounds;
use crate::resources::worldtime::WorldTime;

pub fn movement_system(
    mut query: Query<(&mut MapPosition, &RigidBody, Option<&BoxCollider>, Has<Player>)>,
    time: Res<WorldTime>,
    bounds: Option<Res<LevelBounds>>,
) {
    for (mut position, rigidbody, collider, is_player) in query.iter_mut() {
        if rigidbody.frozen {
            continue;
        }
        position.pos += rigidbody.velocity * time.delta;

        if !is_player {
            continue;
        }
        let width = collider.map(|c| c.size.x).unwrap_or(0.0);
        let x_max = bounds
            .as_ref()
            .and_then(|b| b.x_limit)
            .map(|limit| (limit - width).max(0.0));
        position.pos.x = match x_max {
            Some(max) => position.pos.x.clamp(0.0, max),
            None => position.pos.x.max(0.0),
        };
    }
}
