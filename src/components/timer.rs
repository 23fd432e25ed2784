//! One-shot timer carrying a deferred continuation.
//!
//! A [`Timer`] counts scaled world time. When it expires, the
//! [`update_timers`](crate::systems::time::update_timers) system removes it and
//! triggers a [`TimerEvent`](crate::events::timer::TimerEvent) carrying the
//! same `token` and [`Continuation`]. Inserting a new `Timer` on an entity
//! replaces (cancels) the pending one.

use bevy_ecs::prelude::Component;

/// What to do when a timer fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Continuation {
    /// Fade-out finished: show the poem line at this script index.
    ShowLine(usize),
    /// Fade-in of the current line finished.
    FadeInDone,
}

#[derive(Component, Debug, Clone)]
pub struct Timer {
    pub duration: f32,
    pub elapsed: f32,
    /// Identifies the request that scheduled this timer. Owners compare it
    /// against their latest token to discard superseded continuations.
    pub token: u64,
    pub continuation: Continuation,
}

impl Timer {
    pub fn new(duration: f32, token: u64, continuation: Continuation) -> Self {
        Timer {
            duration,
            elapsed: 0.0,
            token,
            continuation,
        }
    }

    pub fn finished(&self) -> bool {
        self.elapsed >= self.duration
    }
}
