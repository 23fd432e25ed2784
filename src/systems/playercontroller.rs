//! Player motion controller.
//!
//! Turns the merged [`InputState`] and the physics collaborator's
//! [`GroundContact`] into the player's facing, velocity and Idle/Walk/Jump
//! state, and selects the animation every composite layer will show.
//!
//! Rules, evaluated once per tick:
//! - Right held sets `+V`, otherwise Left held sets `-V`. Both held: Right wins.
//! - With nothing held, a direction released this tick stops the player.
//! - Facing turns toward the resolved direction only on a tick where a
//!   direction intent changed, so a continuously held direction never flips.
//! - Up newly pressed while grounded and not already jumping applies the
//!   jump impulse once and latches `jumping`.
//! - The latch clears only when grounded with Up released.
use bevy_ecs::prelude::*;
use log::{debug, trace};

use crate::components::animation::Animation;
use crate::components::player::{Facing, MotionState, Player, select_animation};
use crate::components::rigidbody::RigidBody;
use crate::resources::gameconfig::GameConfig;
use crate::resources::groundcontact::GroundContact;
use crate::resources::input::InputState;

/// New facing after this tick's edges. Follows the same precedence as
/// [`resolve_vx`], so a release that hands control to the opposite held
/// direction turns the player as well.
pub(crate) fn resolve_facing(input: &InputState, facing: Facing) -> Facing {
    let edge = input.left.just_pressed()
        || input.left.just_released()
        || input.right.just_pressed()
        || input.right.just_released();
    if !edge {
        return facing;
    }
    let wanted = if input.right.active {
        Facing::Right
    } else if input.left.active {
        Facing::Left
    } else {
        return facing;
    };
    if wanted == facing.opposite() { wanted } else { facing }
}

/// Horizontal velocity for this tick; `current` is kept when nothing changed.
pub(crate) fn resolve_vx(input: &InputState, speed: f32, current: f32) -> f32 {
    if input.right.active {
        speed
    } else if input.left.active {
        -speed
    } else if input.right.just_released() || input.left.just_released() {
        0.0
    } else {
        current
    }
}

pub fn player_motion_controller(
    input: Res<InputState>,
    ground: Res<GroundContact>,
    config: Res<GameConfig>,
    mut query: Query<(&mut Player, &mut RigidBody, &mut Animation)>,
) {
    if ground.0.is_none() {
        trace!("No ground contact reported this tick, treating the player as airborne");
    }
    let grounded = ground.is_grounded();

    for (mut player, mut rigidbody, mut animation) in query.iter_mut() {
        player.grounded = grounded;

        let facing = resolve_facing(&input, player.facing);
        if facing != player.facing {
            debug!("Player facing {:?} -> {:?}", player.facing, facing);
            player.facing = facing;
        }

        let mut velocity = rigidbody.velocity;
        velocity.x = resolve_vx(&input, config.walk_speed, velocity.x);

        if player.jumping && grounded && !input.up.active {
            player.jumping = false;
        }
        if input.up.just_pressed() && grounded && !player.jumping {
            velocity.y = -config.jump_impulse;
            player.jumping = true;
            debug!("Player jump, impulse {}", config.jump_impulse);
        } else if grounded && !player.jumping {
            // resting on the ground
            velocity.y = 0.0;
        }
        rigidbody.set_velocity(velocity);

        player.state = if player.jumping {
            MotionState::Jump
        } else if velocity.x != 0.0 {
            MotionState::Walk
        } else {
            MotionState::Idle
        };

        let selection = select_animation(player.state, player.facing);
        animation.play(selection.key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::input::Intents;

    fn step(input: &mut InputState, intents: Intents) {
        input.begin_tick();
        input.apply(intents);
    }

    const NONE: Intents = Intents {
        up: false,
        left: false,
        right: false,
        down: false,
    };

    fn with(left: bool, right: bool) -> Intents {
        Intents { left, right, ..NONE }
    }

    #[test]
    fn test_both_held_right_wins() {
        let mut input = InputState::default();
        step(&mut input, with(true, true));
        assert_eq!(resolve_vx(&input, 256.0, 0.0), 256.0);
    }

    #[test]
    fn test_release_with_no_opposite_stops() {
        let mut input = InputState::default();
        step(&mut input, with(true, false));
        assert_eq!(resolve_vx(&input, 256.0, 0.0), -256.0);
        step(&mut input, NONE);
        assert_eq!(resolve_vx(&input, 256.0, -256.0), 0.0);
    }

    #[test]
    fn test_release_with_opposite_held_switches_direction() {
        let mut input = InputState::default();
        step(&mut input, with(true, true));
        step(&mut input, with(true, false));
        assert_eq!(resolve_vx(&input, 256.0, 256.0), -256.0);
    }

    #[test]
    fn test_no_input_keeps_velocity() {
        let mut input = InputState::default();
        step(&mut input, NONE);
        assert_eq!(resolve_vx(&input, 256.0, 12.0), 12.0);
    }

    #[test]
    fn test_facing_flips_on_opposite_edge_only() {
        let mut input = InputState::default();
        step(&mut input, with(true, false));
        assert_eq!(resolve_facing(&input, Facing::Right), Facing::Left);
        // held, not an edge
        step(&mut input, with(true, false));
        assert_eq!(resolve_facing(&input, Facing::Right), Facing::Right);
        step(&mut input, with(true, true));
        assert_eq!(resolve_facing(&input, Facing::Left), Facing::Right);
    }

    #[test]
    fn test_left_edge_while_right_held_does_not_flip() {
        let mut input = InputState::default();
        step(&mut input, with(false, true));
        step(&mut input, with(true, true));
        assert_eq!(resolve_facing(&input, Facing::Right), Facing::Right);
    }

    #[test]
    fn test_release_hands_facing_to_held_opposite() {
        let mut input = InputState::default();
        step(&mut input, with(false, true));
        step(&mut input, with(true, true));
        let facing = resolve_facing(&input, Facing::Right);
        step(&mut input, with(true, false));
        assert_eq!(resolve_facing(&input, facing), Facing::Left);
        assert_eq!(resolve_vx(&input, 256.0, 256.0), -256.0);
        // still held afterwards, no further flip
        step(&mut input, with(true, false));
        assert_eq!(resolve_facing(&input, Facing::Left), Facing::Left);
    }

    #[test]
    fn test_releasing_everything_keeps_facing() {
        let mut input = InputState::default();
        step(&mut input, with(true, false));
        step(&mut input, NONE);
        assert_eq!(resolve_facing(&input, Facing::Left), Facing::Left);
    }

    #[test]
    fn test_same_direction_edge_keeps_facing() {
        let mut input = InputState::default();
        step(&mut input, with(false, true));
        assert_eq!(resolve_facing(&input, Facing::Right), Facing::Right);
    }
}
