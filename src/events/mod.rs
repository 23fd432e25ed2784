//! Event types exchanged across systems.
//!
//! Events are triggered through `Commands` and handled by observers, which
//! keeps the per-tick systems free of rendering-side work.
//!
//! Submodules:
//! - [`narrative`] – poem line activation and the one-time nightfall
//! - [`spawneffect`] – requests for transient bulb visuals
//! - [`timer`] – deferred continuations from expired timers
pub mod narrative;
pub mod spawneffect;
pub mod timer;
