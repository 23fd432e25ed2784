//! Time update systems.
//!
//! - [`update_world_time`] advances the shared
//!   [`WorldTime`](crate::resources::worldtime::WorldTime) once per frame,
//!   applying `time_scale` to the provided delta.
//! - [`update_timers`] accumulates that delta on every
//!   [`Timer`](crate::components::timer::Timer) and fires a
//!   [`TimerEvent`](crate::events::timer::TimerEvent) when one expires.
use bevy_ecs::prelude::*;
use log::trace;

use crate::components::timer::Timer;
use crate::events::timer::TimerEvent;
use crate::resources::worldtime::WorldTime;

/// Update elapsed and delta seconds on the `WorldTime` resource.
///
/// `dt` is expected to be the unscaled frame delta in seconds. Negative or
/// non-finite deltas are treated as zero.
pub fn update_world_time(world: &mut World, dt: f32) {
    let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };
    let mut wt = world.resource_mut::<WorldTime>();
    let scaled_dt = dt * wt.time_scale;
    wt.elapsed += scaled_dt;
    wt.delta = scaled_dt;
    wt.frame_count += 1;
}

/// Advance one-shot timers and emit their continuations.
///
/// An expired timer is removed before its event is triggered, so the
/// observer may schedule a follow-up timer on the same entity.
pub fn update_timers(
    world_time: Res<WorldTime>,
    mut query: Query<(Entity, &mut Timer)>,
    mut commands: Commands,
) {
    for (entity, mut timer) in query.iter_mut() {
        timer.elapsed += world_time.delta;
        if timer.finished() {
            trace!(
                "Timer on {:?} expired (token {}, {:?})",
                entity, timer.token, timer.continuation
            );
            commands.entity(entity).remove::<Timer>();
            commands.trigger(TimerEvent {
                entity,
                token: timer.token,
                continuation: timer.continuation,
            });
        }
    }
}
