//! Screen-space position component.
//!
//! The [`ScreenPosition`] component stores an entity's position in screen
//! (pixel) coordinates. The poem text uses it so it stays put while the
//! camera follows the player.
//!
//! For world-space entities, see
//! [`MapPosition`](super::mapposition::MapPosition).

use bevy_ecs::prelude::Component;
use glam::Vec2;

/// Screen-space position (pivot) for an entity.
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct ScreenPosition {
    /// 2D coordinates in screen pixels.
    pub pos: Vec2,
}

impl ScreenPosition {
    /// Create a ScreenPosition from x and y.
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
        }
    }
}
