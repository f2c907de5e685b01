//! Change listeners registered on the store.

use super::EditorState;
use tracing::trace;

/// Boxed callback invoked with the full state after every change.
pub type Listener = Box<dyn FnMut(&EditorState)>;

/// Handle returned by `subscribe`, used to unsubscribe.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Options for selector subscriptions
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SelectorOptions {
    /// Call the listener once right away with `(current, current)`
    pub fire_immediately: bool,
}

#[derive(Default)]
pub(crate) struct Subscribers {
    next_id: u64,
    listeners: Vec<(SubscriptionId, Listener)>,
}

impl Subscribers {
    pub(crate) fn add(&mut self, listener: Listener) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, listener));
        trace!(?id, count = self.listeners.len(), "Listener subscribed");
        id
    }

    pub(crate) fn remove(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(other, _)| *other != id);
        let removed = self.listeners.len() != before;
        if removed {
            trace!(?id, count = self.listeners.len(), "Listener unsubscribed");
        }
        removed
    }

    pub(crate) fn notify(&mut self, state: &EditorState) {
        for (_, listener) in self.listeners.iter_mut() {
            listener(state);
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.listeners.len()
    }
}

/// Wrap a selector and listener into a plain listener that only fires when
/// the selected value changes.
pub(crate) fn selector_listener<T, S, L>(
    selector: S,
    mut listener: L,
    initial: T,
) -> Listener
where
    T: PartialEq + 'static,
    S: Fn(&EditorState) -> T + 'static,
    L: FnMut(&T, &T) + 'static,
{
    let mut previous = initial;
    Box::new(move |state: &EditorState| {
        let next = selector(state);
        if next != previous {
            listener(&next, &previous);
            previous = next;
        }
    })
}
