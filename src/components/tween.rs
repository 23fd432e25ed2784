//! Tween components for animated interpolation.
//!
//! This module provides one-shot tweens for the visuals the simulation core
//! drives directly:
//! - [`TweenOpacity`] – fade an [`Opacity`](super::opacity::Opacity) (poem text, night overlay)
//! - [`TweenScale`] – grow a [`Scale`](super::scale::Scale) (bulb spawn effect)
//!
//! Both play forward once and then stop with `playing == false`. Replacing a
//! tween component restarts it from the new `from` value.
//! See [`crate::systems::tween`] for the update systems.

use bevy_ecs::prelude::Component;
use glam::Vec2;

/// Easing functions for smooth interpolation.
///
/// These functions transform a linear `t` value (0.0 to 1.0) to create
/// different acceleration/deceleration curves.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Easing {
    /// Constant speed (no easing).
    Linear,
    /// Starts slow, accelerates (quadratic).
    QuadIn,
    /// Starts fast, decelerates (quadratic).
    QuadOut,
    /// Slow start and end (quadratic).
    QuadInOut,
    /// Starts fast, decelerates (cubic).
    CubicOut,
}

/// Animates an entity's [`Opacity`](super::opacity::Opacity) between two alphas.
#[derive(Component, Clone, Debug)]
pub struct TweenOpacity {
    /// Starting alpha.
    pub from: f32,
    /// Ending alpha.
    pub to: f32,
    /// Duration in seconds.
    pub duration: f32,
    /// Easing function to use.
    pub easing: Easing,
    /// Whether the tween is currently playing.
    pub playing: bool,
    /// Current time within the tween.
    pub time: f32,
}

impl TweenOpacity {
    pub fn new(from: f32, to: f32, duration: f32) -> Self {
        TweenOpacity {
            from,
            to,
            duration,
            easing: Easing::Linear,
            playing: true,
            time: 0.0,
        }
    }
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }
}

/// Animates an entity's [`Scale`](super::scale::Scale) between two values.
#[derive(Component, Clone, Debug)]
pub struct TweenScale {
    /// Starting scale.
    pub from: Vec2,
    /// Ending scale.
    pub to: Vec2,
    /// Duration in seconds.
    pub duration: f32,
    /// Easing function to use.
    pub easing: Easing,
    /// Whether the tween is currently playing.
    pub playing: bool,
    /// Current time within the tween.
    pub time: f32,
}

impl TweenScale {
    pub fn new(from: Vec2, to: Vec2, duration: f32) -> Self {
        TweenScale {
            from,
            to,
            duration,
            easing: Easing::Linear,
            playing: true,
            time: 0.0,
        }
    }
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tween_opacity_new() {
        let tw = TweenOpacity::new(1.0, 0.0, 0.8);
        assert_eq!(tw.from, 1.0);
        assert_eq!(tw.to, 0.0);
        assert_eq!(tw.duration, 0.8);
        assert_eq!(tw.easing, Easing::Linear);
        assert!(tw.playing);
        assert_eq!(tw.time, 0.0);
    }

    #[test]
    fn test_tween_scale_with_easing() {
        let tw = TweenScale::new(Vec2::ZERO, Vec2::ONE, 0.6).with_easing(Easing::CubicOut);
        assert_eq!(tw.easing, Easing::CubicOut);
        assert_eq!(tw.to, Vec2::ONE);
    }
}
