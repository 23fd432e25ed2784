//! World setup and the per-tick driver.
//!
//! [`setup_world`] turns a [`GameConfig`] and parsed [`LevelData`] into a
//! populated [`World`]: resources, observers, the composite player, the
//! collectible markers, the poem text and the night overlay layers.
//! [`FrameOrchestrator`] owns that world plus the update [`Schedule`] and
//! advances both once per [`FrameOrchestrator::tick`].
//!
//! # Example
//!
//! ```no_run
//! use glimmerwood::game::FrameOrchestrator;
//! use glimmerwood::resources::gameconfig::GameConfig;
//! use glimmerwood::resources::input::{InputSource, Intents};
//!
//! let json = std::fs::read_to_string("assets/levels/forest.tmj").unwrap();
//! let mut game = FrameOrchestrator::new(GameConfig::new(), &json).unwrap();
//! game.set_grounded(Some(true));
//! game.set_input(InputSource::Keyboard, Intents::new(false, false, true, false));
//! game.tick(1.0 / 60.0);
//! ```

use bevy_ecs::observer::Observer;
use bevy_ecs::prelude::*;
use glam::Vec2;
use log::{debug, info, warn};

use crate::components::animation::Animation;
use crate::components::boxcollider::BoxCollider;
use crate::components::collectible::{Collectible, Variant};
use crate::components::composite::{CharacterLayer, CompositeCharacter, LayerKind};
use crate::components::dynamictext::DynamicText;
use crate::components::group::Group;
use crate::components::mapposition::MapPosition;
use crate::components::nightoverlay::NightOverlay;
use crate::components::opacity::Opacity;
use crate::components::player::{ANIM_IDLE, Player};
use crate::components::rigidbody::RigidBody;
use crate::components::screenposition::ScreenPosition;
use crate::components::sprite::Sprite;
use crate::error::LevelResult;
use crate::resources::animationstore::AnimationStore;
use crate::resources::collectibleregistry::CollectibleRegistry;
use crate::resources::gameconfig::GameConfig;
use crate::resources::groundcontact::GroundContact;
use crate::resources::input::{InputSource, InputSources, InputState, Intents};
use crate::resources::level::LevelData;
use crate::resources::narrative::{NarrativeScript, NarrativeState};
use crate::resources::rng::GameRng;
use crate::resources::screensize::ScreenSize;
use crate::resources::sectors::SectorRecord;
use crate::resources::spawnchance::AmbientSpawnChance;
use crate::resources::worldtime::WorldTime;
use crate::systems::animation::animation;
use crate::systems::collectibleoverlap::collectible_overlap_system;
use crate::systems::composite::composite_sync_system;
use crate::systems::input::update_input_state;
use crate::systems::movement::movement_system;
use crate::systems::narrative::{narrative_sequencer, narrative_timer_observer, nightfall_observer};
use crate::systems::playercontroller::player_motion_controller;
use crate::systems::sectorspawn::sector_spawn_system;
use crate::systems::spawneffect::spawn_effect_observer;
use crate::systems::time::{update_timers, update_world_time};
use crate::systems::tween::{tween_opacity_system, tween_scale_system};

/// Layers stacked to draw the player, back to front.
pub const PLAYER_LAYERS: [LayerKind; 3] = [LayerKind::Body, LayerKind::Hair, LayerKind::Clothing];

/// Night overlay layers faded in together at nightfall.
pub const NIGHT_LAYERS: [&str; 3] = ["night_sky", "night_trees", "fireflies"];

const POEM_FONT_SIZE: f32 = 24.0;
/// Vertical placement of the poem text, as a fraction of screen height.
const POEM_TEXT_Y: f32 = 0.2;

/// Insert every resource and observer and spawn the level's entities.
/// Returns the player entity.
pub fn setup_world(world: &mut World, config: GameConfig, level: LevelData) -> Entity {
    let rng = if config.seed == 0 {
        GameRng::default()
    } else {
        GameRng::seeded(config.seed)
    };
    let screen = ScreenSize {
        w: config.screen_width as i32,
        h: config.screen_height as i32,
    };

    world.insert_resource(WorldTime::default().with_time_scale(1.0));
    world.insert_resource(InputSources::default());
    world.insert_resource(InputState::default());
    world.insert_resource(GroundContact::default());
    world.insert_resource(AnimationStore::default());
    world.insert_resource(SectorRecord::default());
    world.insert_resource(AmbientSpawnChance(config.default_spawn_chance));
    world.insert_resource(level.bounds);
    world.insert_resource(screen);
    world.insert_resource(rng);

    world.spawn(Observer::new(spawn_effect_observer));
    world.spawn(Observer::new(narrative_timer_observer));
    world.spawn(Observer::new(nightfall_observer));

    let player = spawn_player(world, &config);
    spawn_markers(world, &level, level.bounds.tile_width, config.palette_size);

    let text = world
        .spawn((
            Group("poem"),
            DynamicText::new("", POEM_FONT_SIZE),
            ScreenPosition::new(screen.w as f32 * 0.5, screen.h as f32 * POEM_TEXT_Y),
            Opacity::transparent(),
        ))
        .id();
    for layer in NIGHT_LAYERS {
        world.spawn((
            Group("night"),
            NightOverlay {
                layer: layer.to_string(),
            },
            Opacity::transparent(),
        ));
    }

    world.insert_resource(NarrativeScript::new(level.poem));
    world.insert_resource(NarrativeState::with_text_entity(text));
    world.insert_resource(config);
    player
}

fn spawn_player(world: &mut World, config: &GameConfig) -> Entity {
    let position = MapPosition::new(0.0, 0.0);
    let mut composite = CompositeCharacter::new();
    for kind in PLAYER_LAYERS {
        let layer = world
            .spawn((
                Group("player_layer"),
                position,
                Sprite::new(kind.texture_key(), config.player_width, config.player_height),
                Animation::new(ANIM_IDLE),
            ))
            .id();
        composite.push_layer(layer);
    }
    let player = world
        .spawn((
            Group("player"),
            Player::default(),
            position,
            RigidBody::new(),
            BoxCollider::new(config.player_width, config.player_height),
            Animation::new(ANIM_IDLE),
        ))
        .id();
    for (&layer, kind) in composite.layers().iter().zip(PLAYER_LAYERS) {
        world
            .entity_mut(layer)
            .insert(CharacterLayer { owner: player, kind });
    }
    world.entity_mut(player).insert(composite);
    player
}

fn spawn_markers(world: &mut World, level: &LevelData, tile_width: f32, palette_size: u32) {
    let mut registry = CollectibleRegistry::new();
    for placement in &level.collectibles {
        let variant = placement.variant.checked(palette_size).unwrap_or_else(|| {
            warn!(
                "Marker {}: variant {:?} is outside a palette of {}, using a random variant",
                placement.id, placement.variant, palette_size
            );
            Variant::Random
        });
        let mut size = placement.size;
        if size.x <= 0.0 || size.y <= 0.0 {
            debug!(
                "Marker {} has no area, using a {} unit square",
                placement.id, tile_width
            );
            size = Vec2::splat(tile_width);
        }
        let entity = world
            .spawn((
                Group("marker"),
                Collectible::new(placement.id, variant),
                MapPosition { pos: placement.position },
                BoxCollider::new(size.x, size.y),
            ))
            .id();
        if !registry.insert(placement.id, placement.position.x + size.x * 0.5, size.x, entity) {
            warn!("Marker id {} already registered, ignoring", placement.id);
            world.despawn(entity);
        }
    }
    info!("Spawned {} collectible markers", registry.len());
    world.insert_resource(registry);
}

/// Build the per-tick schedule in its fixed order.
pub fn build_schedule() -> Schedule {
    let mut update = Schedule::default();
    update.add_systems(
        (
            update_timers,
            update_input_state,
            player_motion_controller,
            movement_system,
            sector_spawn_system,
            collectible_overlap_system,
            narrative_sequencer,
            animation,
            composite_sync_system,
            tween_opacity_system,
            tween_scale_system,
        )
            .chain(),
    );
    update
}

/// Owns the simulation world and advances it one frame at a time.
pub struct FrameOrchestrator {
    world: World,
    schedule: Schedule,
    player: Entity,
}

impl FrameOrchestrator {
    /// Parse `level_json` and build a ready-to-tick world.
    pub fn new(config: GameConfig, level_json: &str) -> LevelResult<Self> {
        let level =
            LevelData::from_json(level_json, config.tile_scale, config.default_spawn_chance)?;
        Ok(Self::from_level(config, level))
    }

    /// Build from already parsed level data.
    pub fn from_level(config: GameConfig, level: LevelData) -> Self {
        let mut world = World::new();
        let player = setup_world(&mut world, config, level);
        Self {
            world,
            schedule: build_schedule(),
            player,
        }
    }

    /// Report one source's intents; they stay in effect until replaced.
    pub fn set_input(&mut self, source: InputSource, intents: Intents) {
        self.world.resource_mut::<InputSources>().set(source, intents);
    }

    /// Report the physics collaborator's ground contact; `None` reads as airborne.
    pub fn set_grounded(&mut self, grounded: Option<bool>) {
        self.world.resource_mut::<GroundContact>().0 = grounded;
    }

    /// Advance the simulation by `dt` seconds.
    pub fn tick(&mut self, dt: f32) {
        update_world_time(&mut self.world, dt);
        self.schedule.run(&mut self.world);
        self.world.clear_trackers();
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    pub fn player_entity(&self) -> Entity {
        self.player
    }

    /// Player position, top-left corner.
    pub fn player_position(&self) -> Option<Vec2> {
        self.world.get::<MapPosition>(self.player).map(|p| p.pos)
    }
}
