//! Stickerboard - client-side state for a sticker and text canvas editor.
//!
//! The crate centers on [`EditorStore`]: an explicitly constructed, observable
//! container for canvas elements, canvas settings and a bounded undo/redo
//! history. Rendering, asset loading and persistence live outside; they read
//! the store and call its operations.
//!
//! ```ignore
//! use stickerboard::{EditorStore, ElementKind, StickerElement};
//!
//! let mut store = EditorStore::new();
//! store.subscribe(|state| println!("{} stickers", state.stickers().len()));
//!
//! let sticker = StickerElement::new("/star.svg");
//! let id = sticker.id.clone();
//! store.update_stickers(|prev| [prev, &[sticker]].concat());
//! store.bring_to_front(&id, ElementKind::Sticker);
//! store.undo();
//! ```

pub mod background;
pub mod config;
pub mod constants;
pub mod error;
pub mod history;
pub mod logging;
pub mod store;
pub mod types;

pub use background::ImageHandle;
pub use config::EditorConfig;
pub use error::{ConfigError, ConfigResult, ParseElementKindError};
pub use store::{EditorState, EditorStore, EditorUpdate, SelectorOptions, SubscriptionId};
pub use types::{
    AvailableSticker, CanvasElement, CanvasSize, ElementId, ElementKind, StickerElement,
    TextElement, TextStyle, new_element_id,
};
