//! Opacity component for fading visuals.
//!
//! Renderers multiply the entity's alpha by [`Opacity::alpha`]. The poem text
//! and the night overlay layers start fully transparent and are driven by
//! [`TweenOpacity`](super::tween::TweenOpacity).

use bevy_ecs::prelude::Component;

#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct Opacity {
    /// 0.0 = invisible, 1.0 = opaque.
    pub alpha: f32,
}

impl Opacity {
    pub fn new(alpha: f32) -> Self {
        Self {
            alpha: alpha.clamp(0.0, 1.0),
        }
    }

    pub fn transparent() -> Self {
        Self::new(0.0)
    }
}

impl Default for Opacity {
    fn default() -> Self {
        Self::new(1.0)
    }
}
