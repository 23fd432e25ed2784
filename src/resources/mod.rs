//! ECS resources made available to systems.
//!
//! This module groups the long-lived data injected into the ECS world and
//! accessed by systems during execution: input state, timing, level data,
//! narrative progress and tuning. Each submodule documents the semantics and
//! intended usage of its resource(s).
//!
//! Overview
//! - `animationstore` – playback parameters for the player's animations
//! - `collectibleregistry` – marker lookup by id and by horizontal position
//! - `gameconfig` – INI-backed tuning values
//! - `groundcontact` – grounded flag reported by the physics collaborator
//! - `input` – per-source intents and the merged per-tick input state
//! - `level` – Tiled map parsing and level bounds
//! - `narrative` – poem script and the text fade state machine
//! - `rng` – seedable random source for variants and spawn trials
//! - `screensize` – logical screen dimensions for text placement
//! - `sectors` – sector indexing and the visited-sector record
//! - `spawnchance` – ambient spawn chance set by the last poem line
//! - `worldtime` – simulation time and delta
pub mod animationstore;
pub mod collectibleregistry;
pub mod gameconfig;
pub mod groundcontact;
pub mod input;
pub mod level;
pub mod narrative;
pub mod rng;
pub mod screensize;
pub mod sectors;
pub mod spawnchance;
pub mod worldtime;
