//! Editor-wide constants.
//!
//! Centralizes default values for the canvas, elements and history so the
//! store and config layers agree on them.

use crate::types::AvailableSticker;
use once_cell::sync::Lazy;

// ============================================================================
// Canvas Defaults
// ============================================================================

/// Default logical canvas width
pub const DEFAULT_CANVAS_WIDTH: u32 = 1024;

/// Default logical canvas height
pub const DEFAULT_CANVAS_HEIGHT: u32 = 700;

// ============================================================================
// Element Defaults
// ============================================================================

/// Size given to newly created stickers (width, height)
pub const DEFAULT_STICKER_SIZE: (f32, f32) = (100.0, 100.0);

/// Default font family for text elements
pub const DEFAULT_FONT_FAMILY: &str = "Arial";

/// Default font size for text elements
pub const DEFAULT_FONT_SIZE: f32 = 24.0;

/// Default text color
pub const DEFAULT_TEXT_COLOR: &str = "#000000";

// ============================================================================
// History
// ============================================================================

/// Maximum undo steps kept in history
pub const MAX_HISTORY_STATES: usize = 50;

// ============================================================================
// Sticker Catalog
// ============================================================================

/// Stickers offered in the palette before the user extends the catalog.
pub static DEFAULT_STICKER_CATALOG: Lazy<Vec<AvailableSticker>> = Lazy::new(|| {
    [
        ("Sticker ", "/sticker.svg"),
        ("Sticker s", "/s.svg"),
        ("Sticker 1", "/1.svg"),
        ("Sticker 2", "/2.svg"),
        ("Sticker 3", "/3.svg"),
        ("Sticker 4", "/4.svg"),
        ("Sticker 5", "/5.svg"),
        ("Sticker 6", "/6.svg"),
    ]
    .into_iter()
    .map(|(name, src)| AvailableSticker::new(name, src))
    .collect()
});
