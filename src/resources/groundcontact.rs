//! Ground contact reported by the physics collaborator.

use bevy_ecs::prelude::Resource;

/// Whether the player's body touches ground this tick.
///
/// `None` means the physics side has not reported for this tick; the motion
/// controller then treats the player as airborne so the jump latch cannot
/// get stuck on stale data.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GroundContact(pub Option<bool>);

impl GroundContact {
    pub fn is_grounded(&self) -> bool {
        self.0.unwrap_or(false)
    }
}
