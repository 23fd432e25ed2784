//! Kinematic body component.
//!
//! [`RigidBody`] carries the velocity the motion controller requests for an
//! entity. The physics collaborator (or the built-in kinematic
//! [`movement_system`](crate::systems::movement::movement_system)) integrates it into
//! [`MapPosition`](super::mapposition::MapPosition).
//!
//! The `frozen` flag lets a collaborator take over an entity's position
//! (cutscenes, respawn) without the integrator fighting it.

use bevy_ecs::prelude::Component;
use glam::Vec2;

/// Velocity in world units per second plus an integration switch.
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct RigidBody {
    /// Current velocity in world units per second. Negative y is up.
    pub velocity: Vec2,
    /// When true, the movement system skips this entity.
    pub frozen: bool,
}

impl RigidBody {
    /// Create a RigidBody with zero velocity.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the velocity of the RigidBody.
    pub fn set_velocity(&mut self, velocity: Vec2) {
        self.velocity = velocity;
    }

    /// Freeze the rigid body, preventing movement system from updating it.
    pub fn freeze(&mut self) {
        self.frozen = true;
    }

    /// Unfreeze the rigid body, allowing movement system to update it.
    pub fn unfreeze(&mut self) {
        self.frozen = false;
    }
}
