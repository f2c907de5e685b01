//! Core types for the sticker canvas.
//!
//! This module defines the elements placed on the canvas (stickers and text),
//! the sticker catalog entries offered by the palette, and the canvas size.
//! Field names serialize in camelCase to match the web client's JSON shape.

use crate::constants::{
    DEFAULT_CANVAS_HEIGHT, DEFAULT_CANVAS_WIDTH, DEFAULT_FONT_FAMILY, DEFAULT_FONT_SIZE,
    DEFAULT_STICKER_SIZE, DEFAULT_TEXT_COLOR,
};
use crate::error::ParseElementKindError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifier of a canvas element. Unique within its collection.
pub type ElementId = String;

/// Generate a fresh element id (UUID v4).
pub fn new_element_id() -> ElementId {
    uuid::Uuid::new_v4().to_string()
}

// ============================================================================
// Element Kinds
// ============================================================================

/// Which collection an element lives in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    Text,
    Sticker,
}

impl ElementKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ElementKind::Text => "text",
            ElementKind::Sticker => "sticker",
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ElementKind {
    type Err = ParseElementKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(ElementKind::Text),
            "sticker" => Ok(ElementKind::Sticker),
            other => Err(ParseElementKindError(other.to_string())),
        }
    }
}

/// Behavior shared by everything that can be stacked on the canvas.
pub trait CanvasElement {
    fn id(&self) -> &str;
    fn z_index(&self) -> i32;
    fn set_z_index(&mut self, z_index: i32);
}

// ============================================================================
// Stickers
// ============================================================================

/// A sticker placed on the canvas.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StickerElement {
    /// Unique identifier for this sticker
    pub id: ElementId,
    /// Source image reference (URL or asset path)
    pub src: String,
    /// Position on the canvas (x, y)
    pub position: (f32, f32),
    /// Size on the canvas (width, height)
    pub size: (f32, f32),
    /// Rotation in degrees
    pub rotation: f32,
    /// Stacking order; higher renders on top
    pub z_index: i32,
    /// Whether the sticker is currently selected
    pub is_selected: bool,
}

impl StickerElement {
    /// Create an unselected sticker with a fresh id at the origin.
    pub fn new(src: impl Into<String>) -> Self {
        Self {
            id: new_element_id(),
            src: src.into(),
            position: (0.0, 0.0),
            size: DEFAULT_STICKER_SIZE,
            rotation: 0.0,
            z_index: 0,
            is_selected: false,
        }
    }

    pub fn with_id(mut self, id: impl Into<ElementId>) -> Self {
        self.id = id.into();
        self
    }

    pub fn with_position(mut self, x: f32, y: f32) -> Self {
        self.position = (x, y);
        self
    }

    pub fn with_size(mut self, width: f32, height: f32) -> Self {
        self.size = (width, height);
        self
    }

    pub fn with_rotation(mut self, degrees: f32) -> Self {
        self.rotation = degrees;
        self
    }

    pub fn with_z_index(mut self, z_index: i32) -> Self {
        self.z_index = z_index;
        self
    }

    pub fn selected(mut self, is_selected: bool) -> Self {
        self.is_selected = is_selected;
        self
    }
}

impl CanvasElement for StickerElement {
    fn id(&self) -> &str {
        &self.id
    }

    fn z_index(&self) -> i32 {
        self.z_index
    }

    fn set_z_index(&mut self, z_index: i32) {
        self.z_index = z_index;
    }
}

// ============================================================================
// Text
// ============================================================================

/// Horizontal alignment of a text element
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

/// Style attributes of a text element.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextStyle {
    pub font_family: String,
    pub font_size: f32,
    /// CSS color string
    pub color: String,
    pub bold: bool,
    pub italic: bool,
    pub align: TextAlign,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            font_family: DEFAULT_FONT_FAMILY.to_string(),
            font_size: DEFAULT_FONT_SIZE,
            color: DEFAULT_TEXT_COLOR.to_string(),
            bold: false,
            italic: false,
            align: TextAlign::default(),
        }
    }
}

/// A text element placed on the canvas.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextElement {
    /// Unique identifier for this text element
    pub id: ElementId,
    /// Text content
    pub text: String,
    pub style: TextStyle,
    /// Position on the canvas (x, y)
    pub position: (f32, f32),
    /// Stacking order; higher renders on top
    pub z_index: i32,
}

impl TextElement {
    /// Create a text element with a fresh id and default style.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            id: new_element_id(),
            text: text.into(),
            style: TextStyle::default(),
            position: (0.0, 0.0),
            z_index: 0,
        }
    }

    pub fn with_id(mut self, id: impl Into<ElementId>) -> Self {
        self.id = id.into();
        self
    }

    pub fn with_style(mut self, style: TextStyle) -> Self {
        self.style = style;
        self
    }

    pub fn with_position(mut self, x: f32, y: f32) -> Self {
        self.position = (x, y);
        self
    }

    pub fn with_z_index(mut self, z_index: i32) -> Self {
        self.z_index = z_index;
        self
    }
}

impl CanvasElement for TextElement {
    fn id(&self) -> &str {
        &self.id
    }

    fn z_index(&self) -> i32 {
        self.z_index
    }

    fn set_z_index(&mut self, z_index: i32) {
        self.z_index = z_index;
    }
}

// ============================================================================
// Catalog & Canvas
// ============================================================================

/// A sticker asset offered in the palette. Not an instance on the canvas.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailableSticker {
    pub name: String,
    pub src: String,
}

impl AvailableSticker {
    pub fn new(name: impl Into<String>, src: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            src: src.into(),
        }
    }

    /// Create a canvas sticker instance from this catalog entry.
    pub fn instantiate(&self) -> StickerElement {
        StickerElement::new(self.src.clone())
    }
}

/// Logical drawing surface dimensions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CanvasSize {
    pub width: u32,
    pub height: u32,
}

impl CanvasSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl Default for CanvasSize {
    fn default() -> Self {
        Self {
            width: DEFAULT_CANVAS_WIDTH,
            height: DEFAULT_CANVAS_HEIGHT,
        }
    }
}

/// Set `z_index` on the element matching `id`.
///
/// Returns `None` when no element matches, leaving the collection untouched.
pub(crate) fn with_raised<T>(elements: &[T], id: &str, z_index: i32) -> Option<Vec<T>>
where
    T: CanvasElement + Clone,
{
    if !elements.iter().any(|el| el.id() == id) {
        return None;
    }
    Some(
        elements
            .iter()
            .map(|el| {
                let mut el = el.clone();
                if el.id() == id {
                    el.set_z_index(z_index);
                }
                el
            })
            .collect(),
    )
}
