//! Tween animation systems.
//!
//! These systems update entity properties over time based on tween components:
//! - [`tween_opacity_system`] – animates [`Opacity`](crate::components::opacity::Opacity)
//! - [`tween_scale_system`] – animates [`Scale`](crate::components::scale::Scale)
//!
//! Each tween component specifies start/end values, duration and easing
//! function. Tweens play once; a finished tween stays on the entity with
//! `playing == false` until something replaces it.

use crate::components::opacity::Opacity;
use crate::components::scale::Scale;
use crate::components::tween::{Easing, TweenOpacity, TweenScale};
use crate::resources::worldtime::WorldTime;
use bevy_ecs::prelude::*;

/// Apply an easing function to a normalized time value.
///
/// The input `t` is clamped to [0.0, 1.0] and transformed according to the
/// easing curve.
pub(crate) fn ease(e: Easing, t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    match e {
        Easing::Linear => t,
        Easing::QuadIn => t * t,
        Easing::QuadOut => t * (2.0 - t),
        Easing::QuadInOut => {
            if t < 0.5 {
                2.0 * t * t
            } else {
                -1.0 + (4.0 - 2.0 * t) * t
            }
        }
        Easing::CubicOut => {
            let p = t - 1.0;
            p * p * p + 1.0
        }
    }
}

/// Linearly interpolate between two floats.
pub(crate) fn lerp_f32(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Advance tween time, stopping at `duration`.
pub(crate) fn advance(time: &mut f32, duration: f32, playing: &mut bool, dt: f32) {
    *time += dt;
    if *time >= duration {
        *time = duration;
        *playing = false;
    }
}

/// Normalized progress; a zero-length tween is complete immediately.
fn progress(time: f32, duration: f32) -> f32 {
    if duration <= 0.0 { 1.0 } else { time / duration }
}

/// Animate entity opacity based on [`TweenOpacity`] components.
pub fn tween_opacity_system(
    world_time: Res<WorldTime>,
    mut query: Query<(&mut Opacity, &mut TweenOpacity)>,
) {
    let dt = world_time.delta.max(0.0);
    for (mut opacity, mut tw) in query.iter_mut() {
        if !tw.playing {
            continue;
        }
        let duration = tw.duration;
        let mut t = tw.time;
        let mut playing = tw.playing;
        advance(&mut t, duration, &mut playing, dt);
        tw.time = t;
        tw.playing = playing;
        let k = ease(tw.easing, progress(tw.time, duration));
        opacity.alpha = lerp_f32(tw.from, tw.to, k).clamp(0.0, 1.0);
    }
}

/// Animate entity scales based on [`TweenScale`] components.
pub fn tween_scale_system(
    world_time: Res<WorldTime>,
    mut query: Query<(&mut Scale, &mut TweenScale)>,
) {
    let dt = world_time.delta.max(0.0);
    for (mut scale, mut tw) in query.iter_mut() {
        if !tw.playing {
            continue;
        }
        let duration = tw.duration;
        let mut t = tw.time;
        let mut playing = tw.playing;
        advance(&mut t, duration, &mut playing, dt);
        tw.time = t;
        tw.playing = playing;
        let k = ease(tw.easing, progress(tw.time, duration));
        scale.scale = tw.from.lerp(tw.to, k);
    }
}
