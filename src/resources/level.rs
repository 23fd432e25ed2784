//! Level data parsed from a Tiled JSON map.
//!
//! Only the parts the simulation core consumes are read:
//! - map size and tile size, for [`LevelBounds`];
//! - the `bulbs` object layer, one [`CollectiblePlacement`] per object;
//! - the `poem` object layer, one [`PoemLine`] per object.
//!
//! Both object layers are required. Custom properties are Tiled
//! `{ "name", "type", "value" }` triples; a missing or malformed property is
//! logged and replaced by its documented default instead of failing the load.
//!
//! # Example
//!
//! ```json
//! {
//!   "width": 120, "height": 12, "tilewidth": 32, "tileheight": 32,
//!   "layers": [
//!     { "name": "bulbs", "type": "objectgroup", "objects": [
//!       { "id": 3, "x": 320, "y": 320, "width": 32, "height": 32,
//!         "properties": [{ "name": "variant", "type": "int", "value": -1 }] }
//!     ]},
//!     { "name": "poem", "type": "objectgroup", "objects": [
//!       { "id": 9, "x": 100, "y": 0,
//!         "properties": [
//!           { "name": "text", "type": "string", "value": "the lanterns wake" },
//!           { "name": "bulbSpawnChance", "type": "float", "value": 0.35 }
//!         ] }
//!     ]}
//!   ]
//! }
//! ```

use std::path::Path;

use bevy_ecs::prelude::Resource;
use glam::Vec2;
use log::{info, warn};
use rustc_hash::FxHashSet;
use serde::Deserialize;
use serde_json::Value;

use crate::components::collectible::Variant;
use crate::error::{LevelError, LevelResult};
use crate::resources::narrative::PoemLine;

pub const COLLECTIBLE_LAYER: &str = "bulbs";
pub const NARRATIVE_LAYER: &str = "poem";
pub const VARIANT_PROPERTY: &str = "variant";
pub const TEXT_PROPERTY: &str = "text";
pub const SPAWN_CHANCE_PROPERTY: &str = "bulbSpawnChance";

const DEFAULT_TILE_SIZE: u32 = 32;

fn default_tile_size() -> u32 {
    DEFAULT_TILE_SIZE
}

#[derive(Debug, Deserialize)]
struct TiledMap {
    #[serde(default)]
    width: u32,
    #[serde(default)]
    height: u32,
    #[serde(default = "default_tile_size")]
    tilewidth: u32,
    #[serde(default = "default_tile_size")]
    tileheight: u32,
    #[serde(default)]
    layers: Vec<TiledLayer>,
}

#[derive(Debug, Deserialize)]
struct TiledLayer {
    name: String,
    #[serde(rename = "type", default)]
    kind: String,
    #[serde(default)]
    objects: Vec<TiledObject>,
    /// Children of a `group` layer.
    #[serde(default)]
    layers: Vec<TiledLayer>,
}

#[derive(Debug, Deserialize)]
struct TiledObject {
    #[serde(default)]
    id: u32,
    x: f32,
    y: f32,
    #[serde(default)]
    width: f32,
    #[serde(default)]
    height: f32,
    #[serde(default)]
    properties: Vec<TiledProperty>,
}

#[derive(Debug, Deserialize)]
struct TiledProperty {
    name: String,
    #[serde(default)]
    value: Value,
}

impl TiledObject {
    fn property(&self, name: &str) -> Option<&Value> {
        self.properties
            .iter()
            .find(|p| p.name == name)
            .map(|p| &p.value)
    }
}

fn find_object_layer<'a>(layers: &'a [TiledLayer], name: &str) -> Option<&'a TiledLayer> {
    for layer in layers {
        if layer.name == name && layer.kind == "objectgroup" {
            return Some(layer);
        }
        if layer.kind == "group" {
            if let Some(found) = find_object_layer(&layer.layers, name) {
                return Some(found);
            }
        }
    }
    None
}

/// World extents of the loaded level, in scaled world units.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct LevelBounds {
    /// Right edge of the level; `None` when the map does not declare a width.
    pub x_limit: Option<f32>,
    pub y_limit: Option<f32>,
    /// Scaled tile width; also the sector width.
    pub tile_width: f32,
}

impl Default for LevelBounds {
    fn default() -> Self {
        Self {
            x_limit: None,
            y_limit: None,
            tile_width: DEFAULT_TILE_SIZE as f32,
        }
    }
}

/// One placed collectible marker.
#[derive(Debug, Clone, PartialEq)]
pub struct CollectiblePlacement {
    pub id: u32,
    /// Top-left corner in world units.
    pub position: Vec2,
    pub size: Vec2,
    pub variant: Variant,
}

#[derive(Debug, Clone)]
pub struct LevelData {
    pub bounds: LevelBounds,
    pub collectibles: Vec<CollectiblePlacement>,
    pub poem: Vec<PoemLine>,
}

impl LevelData {
    /// Parse a Tiled JSON document.
    ///
    /// `tile_scale` multiplies every coordinate. `default_spawn_chance`
    /// replaces a missing or malformed `bulbSpawnChance`.
    pub fn from_json(json: &str, tile_scale: f32, default_spawn_chance: f32) -> LevelResult<Self> {
        let map: TiledMap = serde_json::from_str(json)?;

        let bulbs = find_object_layer(&map.layers, COLLECTIBLE_LAYER).ok_or(
            LevelError::MissingLayer {
                name: COLLECTIBLE_LAYER,
            },
        )?;
        let poem = find_object_layer(&map.layers, NARRATIVE_LAYER).ok_or(
            LevelError::MissingLayer {
                name: NARRATIVE_LAYER,
            },
        )?;

        let tile_width = map.tilewidth as f32 * tile_scale;
        let bounds = LevelBounds {
            x_limit: (map.width > 0).then(|| map.width as f32 * tile_width),
            y_limit: (map.height > 0).then(|| map.height as f32 * map.tileheight as f32 * tile_scale),
            tile_width,
        };

        let mut seen = FxHashSet::default();
        let mut collectibles = Vec::with_capacity(bulbs.objects.len());
        for object in &bulbs.objects {
            if !seen.insert(object.id) {
                warn!(
                    "Collectible id {} appears more than once; keeping the first placement",
                    object.id
                );
                continue;
            }
            collectibles.push(CollectiblePlacement {
                id: object.id,
                position: Vec2::new(object.x, object.y) * tile_scale,
                size: Vec2::new(object.width, object.height) * tile_scale,
                variant: parse_variant(object),
            });
        }

        let lines: Vec<PoemLine> = poem
            .objects
            .iter()
            .map(|object| {
                PoemLine::new(
                    object.x * tile_scale,
                    parse_text(object),
                    parse_spawn_chance(object, default_spawn_chance),
                )
            })
            .collect();

        info!(
            "Level parsed: {} collectibles, {} poem lines, x_limit={:?}",
            collectibles.len(),
            lines.len(),
            bounds.x_limit
        );

        Ok(LevelData {
            bounds,
            collectibles,
            poem: lines,
        })
    }

    /// Read and parse a Tiled JSON file.
    pub fn load_from_file(
        path: impl AsRef<Path>,
        tile_scale: f32,
        default_spawn_chance: f32,
    ) -> LevelResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| LevelError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json, tile_scale, default_spawn_chance)
    }
}

fn parse_variant(object: &TiledObject) -> Variant {
    let raw = match object.property(VARIANT_PROPERTY) {
        Some(Value::Number(n)) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
        Some(Value::String(s)) => s.trim().parse::<i64>().ok(),
        _ => None,
    };
    match raw {
        Some(v) => Variant::from_property(v),
        None => {
            warn!(
                "Collectible {}: missing or malformed '{}', using a random variant",
                object.id, VARIANT_PROPERTY
            );
            Variant::Random
        }
    }
}

fn parse_text(object: &TiledObject) -> String {
    match object.property(TEXT_PROPERTY) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        _ => {
            warn!(
                "Poem line {}: missing '{}', showing an empty line",
                object.id, TEXT_PROPERTY
            );
            String::new()
        }
    }
}

fn parse_spawn_chance(object: &TiledObject, default: f32) -> f32 {
    let raw = match object.property(SPAWN_CHANCE_PROPERTY) {
        None => return default,
        Some(Value::Number(n)) => n.as_f64().map(|f| f as f32),
        Some(Value::String(s)) => s.trim().parse::<f32>().ok(),
        Some(_) => None,
    };
    match raw {
        Some(v) if v.is_finite() => {
            if !(0.0..=1.0).contains(&v) {
                warn!(
                    "Poem line {}: '{}' = {} outside [0, 1], clamping",
                    object.id, SPAWN_CHANCE_PROPERTY, v
                );
            }
            v.clamp(0.0, 1.0)
        }
        _ => {
            warn!(
                "Poem line {}: malformed '{}', using {}",
                object.id, SPAWN_CHANCE_PROPERTY, default
            );
            default
        }
    }
}
