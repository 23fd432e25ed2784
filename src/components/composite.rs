//! Composite (multi-layer) character components.
//!
//! The player is drawn as a stack of co-moving sprites: a base body plus
//! optional hair and clothing layers. [`CompositeCharacter`] lives on the
//! player entity and lists the layer entities in draw order; each layer
//! entity carries a [`CharacterLayer`] pointing back at its owner.
//!
//! Layers never hold state of their own. The
//! [`composite_sync_system`](crate::systems::composite::composite_sync_system)
//! copies position, facing and animation playback from the owner to every
//! layer once per tick.

use arrayvec::ArrayVec;
use bevy_ecs::prelude::{Component, Entity};

/// Upper bound on visual layers per character.
pub const MAX_LAYERS: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayerKind {
    Body,
    Hair,
    Clothing,
}

impl LayerKind {
    /// Texture key prefix the renderer resolves animation frames against.
    pub fn texture_key(self) -> &'static str {
        match self {
            LayerKind::Body => "player_body",
            LayerKind::Hair => "player_hair",
            LayerKind::Clothing => "player_clothing",
        }
    }
}

#[derive(Component, Debug, Clone, Default)]
pub struct CompositeCharacter {
    layers: ArrayVec<Entity, MAX_LAYERS>,
}

impl CompositeCharacter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a layer on top of the existing ones. Returns false when the
    /// character already has [`MAX_LAYERS`] layers.
    pub fn push_layer(&mut self, layer: Entity) -> bool {
        self.layers.try_push(layer).is_ok()
    }

    /// Layers in draw order, body first.
    pub fn layers(&self) -> &[Entity] {
        &self.layers
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }
}

#[derive(Component, Debug, Clone, Copy)]
pub struct CharacterLayer {
    pub owner: Entity,
    pub kind: LayerKind,
}
