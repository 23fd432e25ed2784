//! Level and configuration loading from disk.

use std::io::Write;
use std::path::PathBuf;

use bevy_ecs::prelude::*;

use glimmerwood::components::collectible::{Collectible, Variant};
use glimmerwood::components::nightoverlay::NightOverlay;
use glimmerwood::error::LevelError;
use glimmerwood::game::FrameOrchestrator;
use glimmerwood::resources::collectibleregistry::CollectibleRegistry;
use glimmerwood::resources::gameconfig::GameConfig;
use glimmerwood::resources::level::{LevelBounds, LevelData};
use glimmerwood::resources::narrative::NarrativeScript;

fn forest_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("assets/levels/forest.tmj")
}

#[test]
fn test_sample_forest_level_loads() {
    let _ = env_logger::builder().is_test(true).try_init();
    let level = LevelData::load_from_file(forest_path(), 1.0, 0.2).unwrap();
    assert_eq!(level.collectibles.len(), 7);
    assert_eq!(level.poem.len(), 4);
    assert_eq!(level.bounds.x_limit, Some(120.0 * 32.0));
    assert_eq!(level.bounds.tile_width, 32.0);
    assert_eq!(level.collectibles[0].variant, Variant::Random);
    assert_eq!(level.collectibles[1].variant, Variant::Fixed(0));
    assert_eq!(level.poem[0].text, "under the canopy, a small light");
}

#[test]
fn test_tile_scale_applies_to_world_and_bounds() {
    let level = LevelData::load_from_file(forest_path(), 2.0, 0.2).unwrap();
    assert_eq!(level.bounds.tile_width, 64.0);
    assert_eq!(level.bounds.x_limit, Some(120.0 * 64.0));
    assert_eq!(level.collectibles[0].position.x, 640.0);
    assert_eq!(level.poem[0].trigger_x, 320.0);
}

#[test]
fn test_orchestrator_populates_world_from_level() {
    let json = std::fs::read_to_string(forest_path()).unwrap();
    let mut game = FrameOrchestrator::new(GameConfig::new(), &json).unwrap();

    assert_eq!(game.world().resource::<CollectibleRegistry>().len(), 7);
    assert_eq!(game.world().resource::<NarrativeScript>().lines().len(), 4);
    assert_eq!(
        game.world().resource::<LevelBounds>().x_limit,
        Some(3840.0)
    );

    let world = game.world_mut();
    let markers = world.query::<&Collectible>().iter(world).count();
    assert_eq!(markers, 7);
    let overlays = world.query::<&NightOverlay>().iter(world).count();
    assert_eq!(overlays, 3);
}

#[test]
fn test_variant_outside_palette_falls_back_to_random() {
    let json = r#"{ "width": 10, "height": 5, "tilewidth": 32, "layers": [
        { "name": "bulbs", "type": "objectgroup", "objects": [
            { "id": 1, "x": 64, "y": 0, "width": 32, "height": 32,
              "properties": [{ "name": "variant", "type": "int", "value": 7 }] },
            { "id": 2, "x": 160, "y": 0, "width": 32, "height": 32,
              "properties": [{ "name": "variant", "type": "int", "value": 2 }] }
        ] },
        { "name": "poem", "type": "objectgroup", "objects": [] } ] }"#;
    let mut game = FrameOrchestrator::new(GameConfig::new(), json).unwrap();

    let world = game.world_mut();
    let mut variants: Vec<(u32, Variant)> = world
        .query::<&Collectible>()
        .iter(world)
        .map(|c| (c.id, c.variant))
        .collect();
    variants.sort_by_key(|(id, _)| *id);
    assert_eq!(variants, vec![(1, Variant::Random), (2, Variant::Fixed(2))]);
}

#[test]
fn test_missing_poem_layer_fails_orchestrator() {
    let json = r#"{ "width": 10, "height": 5, "layers": [
        { "name": "bulbs", "type": "objectgroup", "objects": [] } ] }"#;
    match FrameOrchestrator::new(GameConfig::new(), json) {
        Err(LevelError::MissingLayer { name }) => assert_eq!(name, "poem"),
        Err(other) => panic!("unexpected error: {other}"),
        Ok(_) => panic!("level without a poem layer loaded"),
    }
}

#[test]
fn test_missing_level_file_is_io_error() {
    let err = LevelData::load_from_file("/definitely/not/here.tmj", 1.0, 0.2).unwrap_err();
    assert!(matches!(err, LevelError::Io { .. }));
    assert!(err.to_string().contains("here.tmj"));
}

#[test]
fn test_config_file_overrides_tuning() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        "[player]\nwalk_speed = 300\n\n[world]\nseed = 9\n\n[narrative]\ndefault_spawn_chance = 0.5"
    )
    .unwrap();

    let mut config = GameConfig::with_path(file.path());
    config.load_from_file().unwrap();
    assert_eq!(config.walk_speed, 300.0);
    assert_eq!(config.seed, 9);
    assert_eq!(config.default_spawn_chance, 0.5);
    // untouched keys keep defaults
    assert_eq!(config.jump_impulse, 520.0);
}

#[test]
fn test_shipped_config_matches_defaults() {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("config.ini");
    let mut config = GameConfig::with_path(path);
    config.load_from_file().unwrap();
    let defaults = GameConfig::new();
    assert_eq!(config.walk_speed, defaults.walk_speed);
    assert_eq!(config.palette_size, defaults.palette_size);
    assert_eq!(config.night_fade, defaults.night_fade);
    assert_eq!(config.screen_width, defaults.screen_width);
}
