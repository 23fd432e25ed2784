//! Per-frame directional intent resources.
//!
//! Device capture is done elsewhere; collaborators write already-normalized
//! booleans per source into [`InputSources`]. Once per tick,
//! [`update_input_state`](crate::systems::input::update_input_state) folds the
//! sources into [`InputState`], first moving the current values into the
//! `previous` snapshot so edge queries compare against the last tick.
use bevy_ecs::prelude::*;

/// The four directional intents of one source, or of all sources merged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Intents {
    pub up: bool,
    pub left: bool,
    pub right: bool,
    pub down: bool,
}

impl Intents {
    pub fn new(up: bool, left: bool, right: bool, down: bool) -> Self {
        Self {
            up,
            left,
            right,
            down,
        }
    }

    /// Logical OR of two sources.
    pub fn merge(self, other: Intents) -> Intents {
        Intents {
            up: self.up || other.up,
            left: self.left || other.left,
            right: self.right || other.right,
            down: self.down || other.down,
        }
    }
}

/// Input devices that can assert intents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputSource {
    Keyboard,
    Touch,
}

/// Raw intents as last reported by each source. A source that never reported
/// contributes nothing.
#[derive(Resource, Debug, Clone, Default)]
pub struct InputSources {
    keyboard: Intents,
    touch: Intents,
}

impl InputSources {
    pub fn set(&mut self, source: InputSource, intents: Intents) {
        match source {
            InputSource::Keyboard => self.keyboard = intents,
            InputSource::Touch => self.touch = intents,
        }
    }

    pub fn get(&self, source: InputSource) -> Intents {
        match source {
            InputSource::Keyboard => self.keyboard,
            InputSource::Touch => self.touch,
        }
    }

    pub fn merged(&self) -> Intents {
        self.keyboard.merge(self.touch)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
/// Boolean intent with the value it had on the previous tick.
pub struct BoolState {
    /// Whether the intent is asserted this tick.
    pub active: bool,
    /// Whether it was asserted on the previous tick.
    pub previous: bool,
}

impl BoolState {
    pub fn just_pressed(&self) -> bool {
        self.active && !self.previous
    }

    pub fn just_released(&self) -> bool {
        !self.active && self.previous
    }
}

/// Aggregated directional intents for the current tick.
#[derive(Resource, Debug, Clone, Copy, Default)]
pub struct InputState {
    pub up: BoolState,
    pub left: BoolState,
    pub right: BoolState,
    pub down: BoolState,
}

impl InputState {
    /// Move this tick's values into the previous snapshot. Called once per
    /// tick, before new values are applied.
    pub fn begin_tick(&mut self) {
        for state in [
            &mut self.up,
            &mut self.left,
            &mut self.right,
            &mut self.down,
        ] {
            state.previous = state.active;
        }
    }

    pub fn apply(&mut self, intents: Intents) {
        self.up.active = intents.up;
        self.left.active = intents.left;
        self.right.active = intents.right;
        self.down.active = intents.down;
    }

    pub fn current(&self) -> Intents {
        Intents::new(
            self.up.active,
            self.left.active,
            self.right.active,
            self.down.active,
        )
    }

    pub fn previous(&self) -> Intents {
        Intents::new(
            self.up.previous,
            self.left.previous,
            self.right.previous,
            self.down.previous,
        )
    }
}
