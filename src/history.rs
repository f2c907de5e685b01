//! Bounded undo/redo history.
//!
//! `History` keeps a list of snapshots and a cursor pointing at the entry that
//! matches the present state. Entries before the cursor can be undone to,
//! entries after it can be redone to.
//!
//! - Recording a transition whose two snapshots are equal is a no-op.
//! - Recording after an undo drops the redo branch.
//! - At most `limit` past entries are kept besides the present one; the
//!   oldest entry is evicted first.
//! - A recorded change also stores the state it started from whenever that
//!   state is not the entry at the cursor (fresh or cleared history, or edits
//!   made while paused), so the change can always be undone.

use std::collections::VecDeque;
use tracing::{debug, trace};

pub struct History<T> {
    entries: VecDeque<T>,
    cursor: usize,
    limit: usize,
    tracking: bool,
}

impl<T: Clone + PartialEq> History<T> {
    /// Create an empty history allowing at most `limit` undo steps.
    pub fn new(limit: usize) -> Self {
        let limit = limit.max(1);
        Self {
            entries: VecDeque::with_capacity(limit),
            cursor: 0,
            limit,
            tracking: true,
        }
    }

    /// Record the transition `before -> after`.
    ///
    /// When `before` is not the entry at the cursor (the state moved while
    /// tracking was paused), `before` is pushed first so the next undo lands
    /// on it. Returns `true` if `after` was pushed.
    pub fn record(&mut self, before: &T, after: &T) -> bool {
        if !self.tracking {
            return false;
        }

        if before == after {
            trace!(len = self.entries.len(), "History unchanged, snapshot discarded");
            return false;
        }

        if self.entries.get(self.cursor) != Some(before) {
            self.push(before.clone());
        }
        self.push(after.clone());
        true
    }

    /// Drop the redo branch, append `value` and evict beyond the limit.
    fn push(&mut self, value: T) {
        let pruned = self.entries.len().saturating_sub(self.cursor + 1);
        if pruned > 0 {
            self.entries.truncate(self.cursor + 1);
            trace!(pruned, "Dropped redo branch");
        }

        self.entries.push_back(value);
        while self.entries.len() > self.limit + 1 {
            self.entries.pop_front();
            debug!(limit = self.limit, "History full, evicted oldest state");
        }
        self.cursor = self.entries.len() - 1;
    }

    /// Step back one entry, returning the state to restore.
    pub fn undo(&mut self) -> Option<&T> {
        if !self.can_undo() {
            return None;
        }
        self.cursor -= 1;
        self.entries.get(self.cursor)
    }

    /// Step forward one entry, returning the state to restore.
    pub fn redo(&mut self) -> Option<&T> {
        if !self.can_redo() {
            return None;
        }
        self.cursor += 1;
        self.entries.get(self.cursor)
    }

    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_redo(&self) -> bool {
        self.cursor + 1 < self.entries.len()
    }

    /// Number of states that can be undone to
    pub fn past_len(&self) -> usize {
        self.cursor
    }

    /// Number of states that can be redone to
    pub fn future_len(&self) -> usize {
        self.entries.len().saturating_sub(self.cursor + 1)
    }

    /// Total retained states, including the present one (at most `limit + 1`)
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Position of the present state in the retained list
    pub fn current_index(&self) -> usize {
        self.cursor
    }

    /// The entry at the cursor, if anything has been recorded
    pub fn current(&self) -> Option<&T> {
        self.entries.get(self.cursor)
    }

    /// Discard every retained state.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.cursor = 0;
    }

    /// Stop recording until `resume` is called.
    pub fn pause(&mut self) {
        self.tracking = false;
    }

    pub fn resume(&mut self) {
        self.tracking = true;
    }

    pub fn is_tracking(&self) -> bool {
        self.tracking
    }
}
