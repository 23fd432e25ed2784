//! ECS components for entities.
//!
//! This module groups all component types that can be attached to entities in
//! the simulation. Components hold data only; systems in
//! [`crate::systems`] advance them.
//!
//! Submodules overview:
//! - [`animation`] – playback state of the active animation
//! - [`boxcollider`] – axis-aligned rectangle for overlap tests
//! - [`collectible`] – world-placed markers and the bulbs they spawn
//! - [`composite`] – the player's synchronized visual layers
//! - [`dynamictext`] – screen text (the poem line)
//! - [`group`] – tag component for grouping entities by name
//! - [`mapposition`] – world-space position (top-left) for an entity
//! - [`nightoverlay`] – layers of the day/night transition
//! - [`opacity`] – alpha driven by fades
//! - [`player`] – player facing, motion state and jump latch
//! - [`rigidbody`] – kinematic velocity
//! - [`scale`] – 2D scale factor for sprites
//! - [`screenposition`] – screen-space position for UI elements
//! - [`sprite`] – texture key, size and horizontal flip
//! - [`timer`] – one-shot timer carrying a deferred continuation
//! - [`tween`] – one-shot opacity and scale interpolation

pub mod animation;
pub mod boxcollider;
pub mod collectible;
pub mod composite;
pub mod dynamictext;
pub mod group;
pub mod mapposition;
pub mod nightoverlay;
pub mod opacity;
pub mod player;
pub mod rigidbody;
pub mod scale;
pub mod screenposition;
pub mod sprite;
pub mod timer;
pub mod tween;
