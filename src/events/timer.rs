//! Timer expiration events.
//!
//! When a [`Timer`](crate::components::timer::Timer) component reaches its
//! duration, a [`TimerEvent`] is triggered. It always arrives on a later tick
//! than the one that inserted the timer, so continuations never run inside
//! the system that scheduled them.
//!
//! # Related
//!
//! - [`crate::components::timer::Timer`] – the timer component
//! - [`crate::systems::time::update_timers`] – the system that emits these events
//! - [`crate::systems::narrative::narrative_timer_observer`] – applies fade continuations

use bevy_ecs::prelude::*;

use crate::components::timer::Continuation;

/// Event emitted when a timer expires.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerEvent {
    /// The entity whose timer expired.
    pub entity: Entity,
    /// Token the timer was scheduled with.
    pub token: u64,
    /// What the owner asked to happen on expiry.
    pub continuation: Continuation,
}
