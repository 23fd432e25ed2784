use bevy_ecs::prelude::Resource;

/// Probability that a newly visited sector spawns a bulb.
///
/// Starts at the configured default and is replaced by each poem line's
/// `bulbSpawnChance` when that line activates.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct AmbientSpawnChance(pub f32);

impl AmbientSpawnChance {
    pub fn set(&mut self, chance: f32) {
        self.0 = chance.clamp(0.0, 1.0);
    }
}
