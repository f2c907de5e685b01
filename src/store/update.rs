//! Bulk updates merged into the editor state.

use super::EditorState;
use crate::background::ImageHandle;
use crate::types::{AvailableSticker, CanvasSize, StickerElement, TextElement};
use std::sync::Arc;

/// A partial state. Every field left as `None` keeps its current value;
/// every supplied field replaces it, including empty collections.
///
/// # Example
/// ```ignore
/// store.update(
///     EditorUpdate::new()
///         .with_current_text_input("hello")
///         .with_max_z_index(4),
/// );
/// ```
#[derive(Clone, Debug, Default)]
pub struct EditorUpdate {
    pub stickers: Option<Vec<StickerElement>>,
    pub available_stickers: Option<Vec<AvailableSticker>>,
    pub text_elements: Option<Vec<TextElement>>,
    pub current_text_input: Option<String>,
    /// `Some(None)` clears the background image
    pub bg_image: Option<Option<ImageHandle>>,
    pub canvas_size: Option<CanvasSize>,
    pub max_z_index: Option<i32>,
}

impl EditorUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_stickers(mut self, stickers: Vec<StickerElement>) -> Self {
        self.stickers = Some(stickers);
        self
    }

    pub fn with_available_stickers(mut self, stickers: Vec<AvailableSticker>) -> Self {
        self.available_stickers = Some(stickers);
        self
    }

    pub fn with_text_elements(mut self, elements: Vec<TextElement>) -> Self {
        self.text_elements = Some(elements);
        self
    }

    pub fn with_current_text_input(mut self, text: impl Into<String>) -> Self {
        self.current_text_input = Some(text.into());
        self
    }

    pub fn with_bg_image(mut self, image: Option<ImageHandle>) -> Self {
        self.bg_image = Some(image);
        self
    }

    pub fn with_canvas_size(mut self, size: CanvasSize) -> Self {
        self.canvas_size = Some(size);
        self
    }

    pub fn with_max_z_index(mut self, z_index: i32) -> Self {
        self.max_z_index = Some(z_index);
        self
    }

    /// True if no field is supplied.
    pub fn is_empty(&self) -> bool {
        self.stickers.is_none()
            && self.available_stickers.is_none()
            && self.text_elements.is_none()
            && self.current_text_input.is_none()
            && self.bg_image.is_none()
            && self.canvas_size.is_none()
            && self.max_z_index.is_none()
    }

    pub(crate) fn apply_to(self, state: &mut EditorState) {
        if let Some(stickers) = self.stickers {
            state.stickers = Arc::new(stickers);
        }
        if let Some(stickers) = self.available_stickers {
            state.available_stickers = Arc::new(stickers);
        }
        if let Some(elements) = self.text_elements {
            state.text_elements = Arc::new(elements);
        }
        if let Some(text) = self.current_text_input {
            state.current_text_input = text;
        }
        if let Some(image) = self.bg_image {
            state.bg_image = image;
        }
        if let Some(size) = self.canvas_size {
            state.canvas_size = size;
        }
        if let Some(z_index) = self.max_z_index {
            state.max_z_index = z_index;
        }
    }
}
