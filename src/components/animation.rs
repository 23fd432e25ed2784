use bevy_ecs::prelude::Component;
use serde::{Deserialize, Serialize};

/// Playback state of a named animation.
///
/// The player owns the authoritative copy; every composite layer receives an
/// identical clone each tick so all layers show the same frame.
#[derive(Debug, Clone, PartialEq, Component, Serialize, Deserialize)]
pub struct Animation {
    pub animation_key: String,
    pub frame_index: usize,
    pub elapsed_time: f32,
}

impl Animation {
    pub fn new(animation_key: impl Into<String>) -> Self {
        Self {
            animation_key: animation_key.into(),
            frame_index: 0,
            elapsed_time: 0.0,
        }
    }

    /// Switch to `key`, restarting playback only when the key changes.
    /// Returns true when a switch happened.
    pub fn play(&mut self, key: &str) -> bool {
        if self.animation_key == key {
            return false;
        }
        self.animation_key.clear();
        self.animation_key.push_str(key);
        self.frame_index = 0;
        self.elapsed_time = 0.0;
        true
    }
}
