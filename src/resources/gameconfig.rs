//! Game configuration resource.
//!
//! Tuning values for the simulation core loaded from an INI configuration
//! file. Defaults are safe to run with; the file only overrides.
//!
//! # Configuration File Format
//!
//! ```ini
//! [player]
//! walk_speed = 256.0
//! jump_impulse = 520.0
//! width = 32.0
//! height = 48.0
//!
//! [world]
//! tile_scale = 1.0
//! seed = 0
//!
//! [collectibles]
//! proximity_widths = 4.0
//! palette_size = 3
//! growth_duration = 0.6
//!
//! [narrative]
//! fade_out = 0.8
//! fade_in = 1.2
//! night_fade = 4.0
//! default_spawn_chance = 0.2
//!
//! [screen]
//! width = 640
//! height = 360
//! ```

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::{info, warn};
use std::path::PathBuf;

const DEFAULT_WALK_SPEED: f32 = 256.0;
const DEFAULT_JUMP_IMPULSE: f32 = 520.0;
const DEFAULT_PLAYER_WIDTH: f32 = 32.0;
const DEFAULT_PLAYER_HEIGHT: f32 = 48.0;
const DEFAULT_TILE_SCALE: f32 = 1.0;
const DEFAULT_SEED: u64 = 0;
const DEFAULT_PROXIMITY_WIDTHS: f32 = 4.0;
const DEFAULT_PALETTE_SIZE: u32 = 3;
const DEFAULT_GROWTH_DURATION: f32 = 0.6;
const DEFAULT_FADE_OUT: f32 = 0.8;
const DEFAULT_FADE_IN: f32 = 1.2;
const DEFAULT_NIGHT_FADE: f32 = 4.0;
pub const DEFAULT_SPAWN_CHANCE: f32 = 0.2;
const DEFAULT_SCREEN_WIDTH: u32 = 640;
const DEFAULT_SCREEN_HEIGHT: u32 = 360;
const DEFAULT_CONFIG_PATH: &str = "./config.ini";

/// Game configuration resource.
#[derive(Resource, Debug, Clone)]
pub struct GameConfig {
    /// Horizontal speed V in world units per second.
    pub walk_speed: f32,
    /// Upward velocity applied once per jump.
    pub jump_impulse: f32,
    pub player_width: f32,
    pub player_height: f32,
    /// Multiplier applied to every level coordinate.
    pub tile_scale: f32,
    /// RNG seed; 0 picks a nondeterministic one.
    pub seed: u64,
    /// Half-width of the overlap window, in marker widths.
    pub proximity_widths: f32,
    /// Number of bulb variants; random picks are in `0..palette_size`.
    pub palette_size: u32,
    pub growth_duration: f32,
    pub fade_out: f32,
    pub fade_in: f32,
    pub night_fade: f32,
    /// Ambient spawn chance before any poem line, and the fallback for a
    /// malformed `bulbSpawnChance`.
    pub default_spawn_chance: f32,
    pub screen_width: u32,
    pub screen_height: u32,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl GameConfig {
    /// Create a new configuration with safe default values.
    pub fn new() -> Self {
        Self {
            walk_speed: DEFAULT_WALK_SPEED,
            jump_impulse: DEFAULT_JUMP_IMPULSE,
            player_width: DEFAULT_PLAYER_WIDTH,
            player_height: DEFAULT_PLAYER_HEIGHT,
            tile_scale: DEFAULT_TILE_SCALE,
            seed: DEFAULT_SEED,
            proximity_widths: DEFAULT_PROXIMITY_WIDTHS,
            palette_size: DEFAULT_PALETTE_SIZE,
            growth_duration: DEFAULT_GROWTH_DURATION,
            fade_out: DEFAULT_FADE_OUT,
            fade_in: DEFAULT_FADE_IN,
            night_fade: DEFAULT_NIGHT_FADE,
            default_spawn_chance: DEFAULT_SPAWN_CHANCE,
            screen_width: DEFAULT_SCREEN_WIDTH,
            screen_height: DEFAULT_SCREEN_HEIGHT,
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current (default) values.
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;
        self.apply_ini(&config);

        info!(
            "Loaded config: speed={}, jump={}, scale={}, proximity={}, fades={}/{}/{}, chance={}",
            self.walk_speed,
            self.jump_impulse,
            self.tile_scale,
            self.proximity_widths,
            self.fade_out,
            self.fade_in,
            self.night_fade,
            self.default_spawn_chance
        );

        Ok(())
    }

    /// Load `path`, falling back to defaults (with a warning) when the file
    /// cannot be read.
    pub fn load_or_default(path: impl Into<PathBuf>) -> Self {
        let mut config = Self::with_path(path);
        if let Err(e) = config.load_from_file() {
            warn!("{}; using default configuration", e);
        }
        config
    }

    /// Parse configuration from INI text. Used for embedded defaults and tests.
    pub fn load_from_str(&mut self, text: &str) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .read(text.to_string())
            .map_err(|e| format!("Failed to parse config: {}", e))?;
        self.apply_ini(&config);
        Ok(())
    }

    fn apply_ini(&mut self, config: &Ini) {
        let float = |section: &str, key: &str| {
            config
                .getfloat(section, key)
                .ok()
                .flatten()
                .map(|v| v as f32)
        };

        // [player] section
        if let Some(v) = float("player", "walk_speed") {
            self.walk_speed = v;
        }
        if let Some(v) = float("player", "jump_impulse") {
            self.jump_impulse = v;
        }
        if let Some(v) = float("player", "width") {
            self.player_width = v;
        }
        if let Some(v) = float("player", "height") {
            self.player_height = v;
        }

        // [world] section
        if let Some(v) = float("world", "tile_scale") {
            self.tile_scale = v;
        }
        if let Some(v) = config.getuint("world", "seed").ok().flatten() {
            self.seed = v;
        }

        // [collectibles] section
        if let Some(v) = float("collectibles", "proximity_widths") {
            self.proximity_widths = v;
        }
        if let Some(v) = config.getuint("collectibles", "palette_size").ok().flatten() {
            self.palette_size = (v as u32).max(1);
        }
        if let Some(v) = float("collectibles", "growth_duration") {
            self.growth_duration = v;
        }

        // [narrative] section
        if let Some(v) = float("narrative", "fade_out") {
            self.fade_out = v;
        }
        if let Some(v) = float("narrative", "fade_in") {
            self.fade_in = v;
        }
        if let Some(v) = float("narrative", "night_fade") {
            self.night_fade = v;
        }
        if let Some(v) = float("narrative", "default_spawn_chance") {
            self.default_spawn_chance = v.clamp(0.0, 1.0);
        }

        // [screen] section
        if let Some(v) = config.getuint("screen", "width").ok().flatten() {
            self.screen_width = v as u32;
        }
        if let Some(v) = config.getuint("screen", "height").ok().flatten() {
            self.screen_height = v as u32;
        }
    }

    /// Save configuration to the INI file.
    ///
    /// Creates the file if it doesn't exist.
    pub fn save_to_file(&self) -> Result<(), String> {
        let mut config = Ini::new();

        config.set("player", "walk_speed", Some(self.walk_speed.to_string()));
        config.set("player", "jump_impulse", Some(self.jump_impulse.to_string()));
        config.set("player", "width", Some(self.player_width.to_string()));
        config.set("player", "height", Some(self.player_height.to_string()));

        config.set("world", "tile_scale", Some(self.tile_scale.to_string()));
        config.set("world", "seed", Some(self.seed.to_string()));

        config.set(
            "collectibles",
            "proximity_widths",
            Some(self.proximity_widths.to_string()),
        );
        config.set(
            "collectibles",
            "palette_size",
            Some(self.palette_size.to_string()),
        );
        config.set(
            "collectibles",
            "growth_duration",
            Some(self.growth_duration.to_string()),
        );

        config.set("narrative", "fade_out", Some(self.fade_out.to_string()));
        config.set("narrative", "fade_in", Some(self.fade_in.to_string()));
        config.set("narrative", "night_fade", Some(self.night_fade.to_string()));
        config.set(
            "narrative",
            "default_spawn_chance",
            Some(self.default_spawn_chance.to_string()),
        );

        config.set("screen", "width", Some(self.screen_width.to_string()));
        config.set("screen", "height", Some(self.screen_height.to_string()));

        config
            .write(&self.config_path)
            .map_err(|e| format!("Failed to save config file: {}", e))?;

        info!("Saved config to {:?}", self.config_path);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let c = GameConfig::new();
        assert_eq!(c.walk_speed, 256.0);
        assert_eq!(c.palette_size, 3);
        assert!((c.default_spawn_chance - 0.2).abs() < f32::EPSILON);
    }

    #[test]
    fn test_load_from_str_overrides_only_present_keys() {
        let mut c = GameConfig::new();
        c.load_from_str("[player]\nwalk_speed = 100.0\n[narrative]\nfade_in = 2.5\n")
            .unwrap();
        assert_eq!(c.walk_speed, 100.0);
        assert_eq!(c.fade_in, 2.5);
        assert_eq!(c.jump_impulse, 520.0);
        assert_eq!(c.fade_out, 0.8);
    }

    #[test]
    fn test_non_numeric_value_keeps_default() {
        let mut c = GameConfig::new();
        c.load_from_str("[player]\nwalk_speed = fast\n").unwrap();
        assert_eq!(c.walk_speed, 256.0);
    }

    #[test]
    fn test_spawn_chance_is_clamped() {
        let mut c = GameConfig::new();
        c.load_from_str("[narrative]\ndefault_spawn_chance = 3.0\n")
            .unwrap();
        assert_eq!(c.default_spawn_chance, 1.0);
    }

    #[test]
    fn test_missing_file_is_error() {
        let mut c = GameConfig::with_path("/nonexistent/glimmerwood/config.ini");
        assert!(c.load_from_file().is_err());
        assert_eq!(c.walk_speed, 256.0);
    }

    #[test]
    fn test_load_or_default_survives_missing_file() {
        let c = GameConfig::load_or_default("/nonexistent/glimmerwood/config.ini");
        assert_eq!(c.fade_out, 0.8);
    }

    #[test]
    fn test_save_then_load_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.ini");
        let mut c = GameConfig::with_path(&path);
        c.walk_speed = 300.0;
        c.seed = 1234;
        c.save_to_file().unwrap();

        let mut loaded = GameConfig::with_path(&path);
        loaded.load_from_file().unwrap();
        assert_eq!(loaded.walk_speed, 300.0);
        assert_eq!(loaded.seed, 1234);
    }
}
