//! Narrative progression events.
//!
//! - [`PoemLineActivated`] – a trigger line was crossed; its text is queued
//!   behind the current fade-out.
//! - [`NightfallEvent`] – every line has been crossed. Triggered exactly once
//!   per session; the night overlay observer starts the day/night fade.

use bevy_ecs::prelude::*;

#[derive(Event, Debug, Clone, PartialEq)]
pub struct PoemLineActivated {
    /// Index into [`NarrativeScript::lines`](crate::resources::narrative::NarrativeScript).
    pub index: usize,
    pub spawn_chance: f32,
}

#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct NightfallEvent;
