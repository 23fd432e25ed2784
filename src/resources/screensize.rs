//! Screen size resource.
//!
//! Stores the internal render resolution in pixels. The narrative sequencer
//! reads it to centre the poem text.

use bevy_ecs::prelude::Resource;

/// Current screen size in pixels.
#[derive(Resource, Clone, Copy, Debug)]
pub struct ScreenSize {
    /// Width in pixels.
    pub w: i32,
    /// Height in pixels.
    pub h: i32,
}
