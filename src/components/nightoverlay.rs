use bevy_ecs::prelude::Component;

/// Marks one visual layer of the night set (sky tint, dark foliage, stars).
/// All of them fade in together when the poem is finished.
#[derive(Component, Debug, Clone)]
pub struct NightOverlay {
    pub layer: String,
}
