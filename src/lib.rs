//! Glimmerwood simulation core.
//!
//! This crate exposes the ECS components, resources, systems and events of a
//! side-scrolling platformer's per-frame simulation: input aggregation, the
//! player's motion state machine, sector-based bulb spawning, collectible
//! overlap tracking and the position-driven poem with its nightfall. Rendering,
//! audio and real physics are left to the host; [`game::FrameOrchestrator`]
//! drives the core headless.

pub mod components;
pub mod error;
pub mod events;
pub mod game;
pub mod resources;
pub mod systems;
