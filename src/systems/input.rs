//! Input aggregation system.
//!
//! Folds every reporting source in
//! [`InputSources`](crate::resources::input::InputSources) into the shared
//! [`InputState`](crate::resources::input::InputState). The previous-tick
//! snapshot is taken before the sources are read, so edge queries on
//! `InputState` compare this tick against the last one.
use bevy_ecs::prelude::*;

use crate::resources::input::{InputSources, InputState};

/// Snapshot last tick's intents, then apply the OR of all sources.
///
/// A missing `InputSources` resource reads as nothing pressed.
pub fn update_input_state(
    mut input: ResMut<InputState>,
    sources: Option<Res<InputSources>>,
) {
    input.begin_tick();
    let merged = sources.map(|s| s.merged()).unwrap_or_default();
    input.apply(merged);
}
