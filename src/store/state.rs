//! Editor state - the full state snapshot and its tracked subset.

use crate::background::ImageHandle;
use crate::types::{AvailableSticker, CanvasSize, StickerElement, TextElement};
use serde::Serialize;
use std::sync::Arc;

/// Complete state of an editing session.
///
/// Collections are shared behind `Arc`, so cloning the state (for history or
/// for a consumer holding on to an older version) is cheap, and a field that
/// an operation does not touch keeps pointing at the same allocation.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EditorState {
    pub(crate) stickers: Arc<Vec<StickerElement>>,
    pub(crate) available_stickers: Arc<Vec<AvailableSticker>>,
    pub(crate) text_elements: Arc<Vec<TextElement>>,
    pub(crate) current_text_input: String,
    #[serde(rename = "bgImageObj")]
    pub(crate) bg_image: Option<ImageHandle>,
    pub(crate) canvas_size: CanvasSize,
    pub(crate) max_z_index: i32,
}

impl EditorState {
    pub(crate) fn new(available_stickers: Vec<AvailableSticker>, canvas_size: CanvasSize) -> Self {
        Self {
            stickers: Arc::new(Vec::new()),
            available_stickers: Arc::new(available_stickers),
            text_elements: Arc::new(Vec::new()),
            current_text_input: String::new(),
            bg_image: None,
            canvas_size,
            max_z_index: 0,
        }
    }

    pub fn stickers(&self) -> &[StickerElement] {
        &self.stickers
    }

    pub fn available_stickers(&self) -> &[AvailableSticker] {
        &self.available_stickers
    }

    pub fn text_elements(&self) -> &[TextElement] {
        &self.text_elements
    }

    pub fn current_text_input(&self) -> &str {
        &self.current_text_input
    }

    pub fn bg_image(&self) -> Option<&ImageHandle> {
        self.bg_image.as_ref()
    }

    pub fn canvas_size(&self) -> CanvasSize {
        self.canvas_size
    }

    pub fn max_z_index(&self) -> i32 {
        self.max_z_index
    }

    pub fn sticker(&self, id: &str) -> Option<&StickerElement> {
        self.stickers.iter().find(|s| s.id == id)
    }

    pub fn text_element(&self, id: &str) -> Option<&TextElement> {
        self.text_elements.iter().find(|t| t.id == id)
    }

    pub fn selected_stickers(&self) -> impl Iterator<Item = &StickerElement> {
        self.stickers.iter().filter(|s| s.is_selected)
    }

    /// Capture the fields that participate in undo/redo.
    pub fn tracked(&self) -> TrackedSnapshot {
        TrackedSnapshot {
            stickers: Arc::clone(&self.stickers),
            text_elements: Arc::clone(&self.text_elements),
            max_z_index: self.max_z_index,
            bg_image: self.bg_image.clone(),
        }
    }

    pub(crate) fn restore(&mut self, snapshot: TrackedSnapshot) {
        self.stickers = snapshot.stickers;
        self.text_elements = snapshot.text_elements;
        self.max_z_index = snapshot.max_z_index;
        self.bg_image = snapshot.bg_image;
    }
}

/// Immutable capture of the tracked fields at one point in time.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackedSnapshot {
    stickers: Arc<Vec<StickerElement>>,
    text_elements: Arc<Vec<TextElement>>,
    max_z_index: i32,
    #[serde(rename = "bgImageObj")]
    bg_image: Option<ImageHandle>,
}

impl TrackedSnapshot {
    pub fn stickers(&self) -> &[StickerElement] {
        &self.stickers
    }

    pub fn text_elements(&self) -> &[TextElement] {
        &self.text_elements
    }

    pub fn max_z_index(&self) -> i32 {
        self.max_z_index
    }

    pub fn bg_image(&self) -> Option<&ImageHandle> {
        self.bg_image.as_ref()
    }
}

/// Structural equality. Shared collections short-circuit on pointer
/// identity; the background image compares by handle identity.
impl PartialEq for TrackedSnapshot {
    fn eq(&self, other: &Self) -> bool {
        self.max_z_index == other.max_z_index
            && self.bg_image == other.bg_image
            && (Arc::ptr_eq(&self.stickers, &other.stickers) || self.stickers == other.stickers)
            && (Arc::ptr_eq(&self.text_elements, &other.text_elements)
                || self.text_elements == other.text_elements)
    }
}
