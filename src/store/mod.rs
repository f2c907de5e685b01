//! Editor state store.
//!
//! This module is organized into several submodules:
//! - `state` - `EditorState` and the `TrackedSnapshot` kept in history
//! - `update` - `EditorUpdate` partial state for bulk merges
//! - `subscriptions` - listener registry and selector subscriptions
//! - `editor_store` - `EditorStore`, the mutation and undo/redo surface
//!
//! Tracked fields (`stickers`, `text_elements`, `max_z_index`, `bg_image`)
//! participate in undo/redo; the sticker catalog, the text input buffer and
//! the canvas size do not.

mod editor_store;
mod state;
mod subscriptions;
mod update;

pub use editor_store::EditorStore;
pub use state::{EditorState, TrackedSnapshot};
pub use subscriptions::{Listener, SelectorOptions, SubscriptionId};
pub use update::EditorUpdate;
