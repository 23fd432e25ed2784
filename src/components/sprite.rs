use bevy_ecs::prelude::Component;

/// Sprite is identified by a texture key and its size in world units.
/// `flip_h` mirrors the texture horizontally; sprites are authored facing right.
#[derive(Component, Clone, Debug, PartialEq)]
pub struct Sprite {
    pub tex_key: String,
    pub width: f32,
    pub height: f32,
    pub flip_h: bool,
}

impl Sprite {
    pub fn new(tex_key: impl Into<String>, width: f32, height: f32) -> Self {
        Self {
            tex_key: tex_key.into(),
            width,
            height,
            flip_h: false,
        }
    }
}
