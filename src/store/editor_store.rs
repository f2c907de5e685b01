//! The editor store - owns the state, its history and its listeners.

use super::subscriptions::{Subscribers, selector_listener};
use super::{EditorState, EditorUpdate, SelectorOptions, SubscriptionId, TrackedSnapshot};
use crate::background::ImageHandle;
use crate::config::EditorConfig;
use crate::history::History;
use crate::types::{
    AvailableSticker, CanvasSize, ElementKind, StickerElement, TextElement, with_raised,
};
use anyhow::Context;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, trace};

/// Single source of truth for canvas contents and the editing session.
///
/// Every mutation runs synchronously: the state changes, the tracked subset
/// is offered to the history, then every listener is called with the new
/// state. Listeners only get `&EditorState`, so they cannot mutate the store
/// from inside a notification.
pub struct EditorStore {
    state: EditorState,
    history: History<TrackedSnapshot>,
    subscribers: Subscribers,
}

impl Default for EditorStore {
    fn default() -> Self {
        Self::new()
    }
}

impl EditorStore {
    /// Create a store with the default catalog, canvas size and history limit.
    pub fn new() -> Self {
        Self::with_config(EditorConfig::default())
    }

    pub fn with_config(config: EditorConfig) -> Self {
        debug!(
            history_limit = config.history_limit,
            canvas_width = config.canvas_size.width,
            canvas_height = config.canvas_size.height,
            catalog = config.available_stickers.len(),
            "Creating editor store"
        );
        Self {
            state: EditorState::new(config.available_stickers, config.canvas_size),
            history: History::new(config.history_limit),
            subscribers: Subscribers::default(),
        }
    }

    /// Load and validate a JSON config file, then build a store from it.
    pub fn from_config_path(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let config = EditorConfig::load(path)
            .with_context(|| format!("Failed to load editor config from {}", path.display()))?;
        Ok(Self::with_config(config))
    }

    // ========================================================================
    // Read access
    // ========================================================================

    pub fn state(&self) -> &EditorState {
        &self.state
    }

    pub fn tracked(&self) -> TrackedSnapshot {
        self.state.tracked()
    }

    // ========================================================================
    // Mutations
    // ========================================================================

    /// Apply `mutate`, record the tracked subset and notify listeners.
    fn commit(&mut self, operation: &'static str, mutate: impl FnOnce(&mut EditorState)) {
        let before = self.state.tracked();
        mutate(&mut self.state);
        let after = self.state.tracked();

        if self.history.record(&before, &after) {
            debug!(
                operation,
                history_len = self.history.len(),
                "Recorded history state"
            );
        }

        self.subscribers.notify(&self.state);
    }

    pub fn set_stickers(&mut self, stickers: Vec<StickerElement>) {
        self.commit("set_stickers", |state| state.stickers = Arc::new(stickers));
    }

    /// Replace the stickers with a function of the current ones.
    pub fn update_stickers(&mut self, f: impl FnOnce(&[StickerElement]) -> Vec<StickerElement>) {
        self.commit("update_stickers", |state| {
            state.stickers = Arc::new(f(state.stickers.as_slice()));
        });
    }

    pub fn set_available_stickers(&mut self, stickers: Vec<AvailableSticker>) {
        self.commit("set_available_stickers", |state| {
            state.available_stickers = Arc::new(stickers);
        });
    }

    pub fn update_available_stickers(
        &mut self,
        f: impl FnOnce(&[AvailableSticker]) -> Vec<AvailableSticker>,
    ) {
        self.commit("update_available_stickers", |state| {
            state.available_stickers = Arc::new(f(state.available_stickers.as_slice()));
        });
    }

    pub fn set_text_elements(&mut self, elements: Vec<TextElement>) {
        self.commit("set_text_elements", |state| {
            state.text_elements = Arc::new(elements);
        });
    }

    pub fn update_text_elements(&mut self, f: impl FnOnce(&[TextElement]) -> Vec<TextElement>) {
        self.commit("update_text_elements", |state| {
            state.text_elements = Arc::new(f(state.text_elements.as_slice()));
        });
    }

    pub fn set_current_text_input(&mut self, text: impl Into<String>) {
        let text = text.into();
        self.commit("set_current_text_input", |state| state.current_text_input = text);
    }

    pub fn set_bg_image(&mut self, image: Option<ImageHandle>) {
        self.commit("set_bg_image", |state| state.bg_image = image);
    }

    pub fn set_canvas_size(&mut self, size: CanvasSize) {
        self.commit("set_canvas_size", |state| state.canvas_size = size);
    }

    pub fn set_max_z_index(&mut self, z_index: i32) {
        self.commit("set_max_z_index", |state| state.max_z_index = z_index);
    }

    /// Give an element the next stacking order and return it.
    ///
    /// The counter advances even when no element of `kind` has `element_id`.
    /// It saturates at `i32::MAX`: once there, every call returns `i32::MAX`
    /// and the raised element ties with the previous front element.
    pub fn bring_to_front(&mut self, element_id: &str, kind: ElementKind) -> i32 {
        let z_index = self.state.max_z_index.saturating_add(1);

        self.commit("bring_to_front", |state| {
            let hit = match kind {
                ElementKind::Text => with_raised(state.text_elements.as_slice(), element_id, z_index)
                    .map(|elements| state.text_elements = Arc::new(elements))
                    .is_some(),
                ElementKind::Sticker => with_raised(state.stickers.as_slice(), element_id, z_index)
                    .map(|stickers| state.stickers = Arc::new(stickers))
                    .is_some(),
            };
            if !hit {
                trace!(element_id, %kind, "No element to bring to front");
            }
            state.max_z_index = z_index;
        });

        z_index
    }

    /// Deselect every sticker.
    pub fn clear_selected_stickers(&mut self) {
        self.commit("clear_selected_stickers", |state| {
            let stickers = state
                .stickers
                .iter()
                .map(|sticker| StickerElement {
                    is_selected: false,
                    ..sticker.clone()
                })
                .collect();
            state.stickers = Arc::new(stickers);
        });
    }

    /// Merge a partial state; absent fields keep their value.
    pub fn update(&mut self, update: EditorUpdate) {
        self.commit("update", |state| update.apply_to(state));
    }

    // ========================================================================
    // History
    // ========================================================================

    /// Step back one history entry. Returns `false` at the oldest entry.
    pub fn undo(&mut self) -> bool {
        self.undo_steps(1) == 1
    }

    /// Step forward one history entry. Returns `false` at the newest entry.
    pub fn redo(&mut self) -> bool {
        self.redo_steps(1) == 1
    }

    /// Step back up to `steps` entries, returning how many were taken.
    pub fn undo_steps(&mut self, steps: usize) -> usize {
        let mut taken = 0;
        while taken < steps && self.history.undo().is_some() {
            taken += 1;
        }
        if taken == 0 {
            debug!("Nothing to undo");
        }
        self.travelled(taken)
    }

    /// Step forward up to `steps` entries, returning how many were taken.
    pub fn redo_steps(&mut self, steps: usize) -> usize {
        let mut taken = 0;
        while taken < steps && self.history.redo().is_some() {
            taken += 1;
        }
        if taken == 0 {
            debug!("Nothing to redo");
        }
        self.travelled(taken)
    }

    fn travelled(&mut self, taken: usize) -> usize {
        if taken > 0 {
            if let Some(snapshot) = self.history.current().cloned() {
                self.state.restore(snapshot);
                trace!(
                    taken,
                    index = self.history.current_index(),
                    "Restored history state"
                );
                self.subscribers.notify(&self.state);
            }
        }
        taken
    }

    /// Discard all history, keeping the current state.
    pub fn clear_history(&mut self) {
        debug!(discarded = self.history.len(), "Clearing history");
        self.history.clear();
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    pub fn past_len(&self) -> usize {
        self.history.past_len()
    }

    pub fn future_len(&self) -> usize {
        self.history.future_len()
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    pub fn history_limit(&self) -> usize {
        self.history.limit()
    }

    pub fn current_history_index(&self) -> usize {
        self.history.current_index()
    }

    /// Stop recording history. Mutations still apply and notify.
    pub fn pause_history(&mut self) {
        self.history.pause();
    }

    pub fn resume_history(&mut self) {
        self.history.resume();
    }

    pub fn is_history_tracking(&self) -> bool {
        self.history.is_tracking()
    }

    // ========================================================================
    // Subscriptions
    // ========================================================================

    /// Call `listener` with the full state after every change.
    pub fn subscribe(&mut self, listener: impl FnMut(&EditorState) + 'static) -> SubscriptionId {
        self.subscribers.add(Box::new(listener))
    }

    /// Call `listener(selected, previous)` whenever `selector`'s output changes.
    pub fn subscribe_with_selector<T, S, L>(&mut self, selector: S, listener: L) -> SubscriptionId
    where
        T: PartialEq + 'static,
        S: Fn(&EditorState) -> T + 'static,
        L: FnMut(&T, &T) + 'static,
    {
        self.subscribe_with_selector_opts(selector, listener, SelectorOptions::default())
    }

    pub fn subscribe_with_selector_opts<T, S, L>(
        &mut self,
        selector: S,
        mut listener: L,
        options: SelectorOptions,
    ) -> SubscriptionId
    where
        T: PartialEq + 'static,
        S: Fn(&EditorState) -> T + 'static,
        L: FnMut(&T, &T) + 'static,
    {
        let initial = selector(&self.state);
        if options.fire_immediately {
            listener(&initial, &initial);
        }
        self.subscribers.add(selector_listener(selector, listener, initial))
    }

    /// Remove a listener. Returns `false` if it was already gone.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.subscribers.remove(id)
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }
}
