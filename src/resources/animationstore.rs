//! Animation resource registry.
//!
//! Stores the playback parameters for each animation key the player uses.
//! Every composite layer shares the same keys, so one entry drives the whole
//! stack; the texture for a layer comes from its own [`Sprite`] instead.
//!
//! [`Sprite`]: crate::components::sprite::Sprite

use bevy_ecs::prelude::Resource;
use rustc_hash::FxHashMap;

use crate::components::player::{ANIM_IDLE, ANIM_JUMP, ANIM_WALK};

/// Central registry of animation definitions keyed by string IDs.
#[derive(Resource, Debug, Clone)]
pub struct AnimationStore {
    pub animations: FxHashMap<String, AnimationResource>,
}

/// Immutable data describing a sprite-sheet animation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationResource {
    /// Number of frames in the animation.
    pub frame_count: usize,
    /// Frames per second playback speed.
    pub fps: f32,
    /// Whether the animation restarts after the last frame.
    pub looped: bool,
}

impl AnimationResource {
    pub fn new(frame_count: usize, fps: f32, looped: bool) -> Self {
        Self {
            frame_count,
            fps,
            looped,
        }
    }
}

impl AnimationStore {
    pub fn new() -> Self {
        Self {
            animations: FxHashMap::default(),
        }
    }

    pub fn insert(&mut self, key: impl Into<String>, resource: AnimationResource) {
        self.animations.insert(key.into(), resource);
    }

    pub fn get(&self, key: &str) -> Option<&AnimationResource> {
        self.animations.get(key)
    }
}

impl Default for AnimationStore {
    /// The player's idle, walk and jump cycles.
    fn default() -> Self {
        let mut store = Self::new();
        store.insert(ANIM_IDLE, AnimationResource::new(4, 6.0, true));
        store.insert(ANIM_WALK, AnimationResource::new(8, 12.0, true));
        store.insert(ANIM_JUMP, AnimationResource::new(4, 10.0, false));
        store
    }
}
