use bevy_ecs::prelude::Component;

#[derive(Component, Clone, Debug, Default)]
/// Text drawn in screen space, horizontally centred on its
/// [`ScreenPosition`](super::screenposition::ScreenPosition).
pub struct DynamicText {
    /// The text content to render.
    pub content: String,
    /// Font size in screen pixels.
    pub font_size: f32,
}

impl DynamicText {
    /// Creates a new DynamicText component.
    pub fn new(content: impl Into<String>, font_size: f32) -> Self {
        Self {
            content: content.into(),
            font_size,
        }
    }
    /// Updates the text content.
    pub fn set_content(&mut self, new_content: impl Into<String>) {
        self.content = new_content.into();
    }
}
