//! Player motion state.
//!
//! [`Player`] holds the discrete half of the player's state: facing, the
//! Idle/Walk/Jump machine, the jump latch and the ground-contact flag sampled
//! this tick. Position and velocity live in
//! [`MapPosition`](super::mapposition::MapPosition) and
//! [`RigidBody`](super::rigidbody::RigidBody) on the same entity. Only
//! [`player_motion_controller`](crate::systems::playercontroller::player_motion_controller)
//! writes any of them.

use bevy_ecs::prelude::Component;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    Left,
    #[default]
    Right,
}

impl Facing {
    pub fn opposite(self) -> Self {
        match self {
            Facing::Left => Facing::Right,
            Facing::Right => Facing::Left,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MotionState {
    #[default]
    Idle,
    Walk,
    Jump,
}

#[derive(Component, Debug, Clone, Copy, Default)]
pub struct Player {
    pub facing: Facing,
    pub state: MotionState,
    /// Set when the jump impulse is applied; cleared only when grounded with Up released.
    pub jumping: bool,
    /// Ground contact as seen this tick. Missing contact data reads as airborne.
    pub grounded: bool,
}

/// Animation choice shared by every layer of the composite character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimationSelection {
    pub key: &'static str,
    /// Sprites are authored facing right.
    pub flip_h: bool,
}

pub const ANIM_IDLE: &str = "idle";
pub const ANIM_WALK: &str = "walk";
pub const ANIM_JUMP: &str = "jump";

/// Pure mapping from motion state and facing to the animation to show.
pub fn select_animation(state: MotionState, facing: Facing) -> AnimationSelection {
    let key = match state {
        MotionState::Idle => ANIM_IDLE,
        MotionState::Walk => ANIM_WALK,
        MotionState::Jump => ANIM_JUMP,
    };
    AnimationSelection {
        key,
        flip_h: facing == Facing::Left,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_animation_keys() {
        assert_eq!(select_animation(MotionState::Idle, Facing::Right).key, "idle");
        assert_eq!(select_animation(MotionState::Walk, Facing::Right).key, "walk");
        assert_eq!(select_animation(MotionState::Jump, Facing::Left).key, "jump");
    }

    #[test]
    fn test_select_animation_flips_when_facing_left() {
        assert!(select_animation(MotionState::Walk, Facing::Left).flip_h);
        assert!(!select_animation(MotionState::Walk, Facing::Right).flip_h);
    }

    #[test]
    fn test_facing_opposite() {
        assert_eq!(Facing::Left.opposite(), Facing::Right);
        assert_eq!(Facing::Right.opposite(), Facing::Left);
    }
}
