//! Simulation systems.
//!
//! This module groups all ECS systems and observers that advance the
//! simulation. [`FrameOrchestrator`](crate::game::FrameOrchestrator) runs the
//! systems in the order listed here.
//!
//! Submodules overview
//! - [`time`] – update simulation time and delta, expire timers
//! - [`input`] – fold input sources into [`crate::resources::input::InputState`]
//! - [`playercontroller`] – facing, velocity and Idle/Walk/Jump for the player
//! - [`movement`] – integrate positions from rigid body velocities and time
//! - [`sectorspawn`] – one spawn trial per newly reached sector
//! - [`collectibleoverlap`] – marker enter/leave tracking and spawn effects
//! - [`narrative`] – poem line activation, text fades and nightfall
//! - [`animation`] – advance the player's animation playback
//! - [`composite`] – copy the player's visual state onto its layers
//! - [`tween`] – animate opacity and scale over time
//! - [`spawneffect`] – spawn growing bulbs for spawn requests

pub mod animation;
pub mod collectibleoverlap;
pub mod composite;
pub mod input;
pub mod movement;
pub mod narrative;
pub mod playercontroller;
pub mod sectorspawn;
pub mod spawneffect;
pub mod time;
pub mod tween;
