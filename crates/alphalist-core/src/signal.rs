//! Signal/slot system for Alphalist.
//!
//! Signals are how the list shell tells the outside world that something
//! happened: the section sequence was rebuilt, a letter was pressed, a scroll
//! command was issued. Connected slots (callbacks) are invoked in response.
//!
//! # Key Types
//!
//! - [`Signal<Args>`] - The signal type for emitting notifications
//! - [`ConnectionId`] - Handle for removing a slot again
//!
//! # Threading
//!
//! The list runs on the UI thread and every slot is invoked directly, in the
//! emitting call, in connection order. There is no queued delivery.
//!
//! # Example
//!
//! ```
//! use alphalist_core::Signal;
//!
//! let sections_changed = Signal::<usize>::new();
//!
//! let conn_id = sections_changed.connect(|count| {
//!     println!("now showing {} sections", count);
//! });
//!
//! sections_changed.emit(3);
//! sections_changed.disconnect(conn_id);
//! ```

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;
use slotmap::{new_key_type, SlotMap};

use crate::logging::targets;

new_key_type! {
    /// Handle returned by [`Signal::connect`]; pass it to
    /// [`Signal::disconnect`] to remove the slot.
    pub struct ConnectionId;
}

type Slot<Args> = Arc<dyn Fn(&Args) + Send + Sync>;

/// A notification source with any number of connected slots.
///
/// Slots receive `&Args`. Use `()` when there is nothing to carry.
pub struct Signal<Args> {
    connections: Mutex<SlotMap<ConnectionId, Slot<Args>>>,
    blocked: AtomicBool,
}

impl<Args: 'static> Default for Signal<Args> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Args: 'static> Signal<Args> {
    /// Creates a signal with no slots.
    pub fn new() -> Self {
        Self {
            connections: Mutex::new(SlotMap::with_key()),
            blocked: AtomicBool::new(false),
        }
    }

    /// Adds a slot, called on every later emit until disconnected.
    pub fn connect<F>(&self, slot: F) -> ConnectionId
    where
        F: Fn(&Args) + Send + Sync + 'static,
    {
        let mut connections = self.connections.lock();
        let id = connections.insert(Arc::new(slot));
        crate::alphalist_trace!(connection_count = connections.len(), "slot connected");
        id
    }

    /// Removes one slot.
    ///
    /// Returns `true` if the connection was found and removed.
    pub fn disconnect(&self, id: ConnectionId) -> bool {
        self.connections.lock().remove(id).is_some()
    }

    /// Removes every slot.
    pub fn disconnect_all(&self) {
        let mut connections = self.connections.lock();
        crate::alphalist_debug!(connection_count = connections.len(), "disconnecting all slots");
        connections.clear();
    }

    /// Number of connected slots.
    pub fn connection_count(&self) -> usize {
        self.connections.lock().len()
    }

    /// Suppresses or resumes emission.
    ///
    /// While blocked, calls to `emit()` do nothing. Useful while applying a
    /// batch of configuration changes.
    pub fn set_blocked(&self, blocked: bool) {
        self.blocked.store(blocked, Ordering::SeqCst);
    }

    /// Whether emission is suppressed.
    pub fn is_blocked(&self) -> bool {
        self.blocked.load(Ordering::SeqCst)
    }

    /// Emit the signal, invoking all connected slots in connection order.
    ///
    /// The slot list is snapshotted before invocation, so a slot may connect
    /// or disconnect on this same signal without deadlocking.
    pub fn emit(&self, args: Args) {
        if self.is_blocked() {
            tracing::trace!(target: targets::SIGNAL, "signal blocked, skipping emit");
            return;
        }

        let slots: Vec<Slot<Args>> = self.connections.lock().values().cloned().collect();
        tracing::trace!(target: targets::SIGNAL, connection_count = slots.len(), "emitting signal");

        for slot in slots {
            slot(&args);
        }
    }
}

impl<Args> std::fmt::Debug for Signal<Args> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Signal")
            .field("connections", &self.connections.lock().len())
            .field("blocked", &self.blocked.load(Ordering::SeqCst))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recorder<T: Clone + Send + 'static>(signal: &Signal<T>) -> (ConnectionId, Arc<Mutex<Vec<T>>>) {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let id = signal.connect(move |value: &T| sink.lock().push(value.clone()));
        (id, seen)
    }

    #[test]
    fn test_emit_reaches_slots_in_order() {
        let letter_pressed = Signal::<char>::new();
        let (_, first) = recorder(&letter_pressed);
        let (_, second) = recorder(&letter_pressed);

        letter_pressed.emit('B');
        letter_pressed.emit('#');

        assert_eq!(*first.lock(), vec!['B', '#']);
        assert_eq!(*second.lock(), vec!['B', '#']);
        assert_eq!(letter_pressed.connection_count(), 2);
    }

    #[test]
    fn test_disconnected_slot_stops_receiving() {
        let sections_changed = Signal::<usize>::new();
        let (id, seen) = recorder(&sections_changed);

        sections_changed.emit(3);
        assert!(sections_changed.disconnect(id));
        assert!(!sections_changed.disconnect(id));
        sections_changed.emit(4);

        assert_eq!(*seen.lock(), vec![3]);
    }

    #[test]
    fn test_blocked_signal_drops_emits() {
        let sections_changed = Signal::<usize>::new();
        let (_, seen) = recorder(&sections_changed);

        sections_changed.set_blocked(true);
        assert!(sections_changed.is_blocked());
        sections_changed.emit(1);
        sections_changed.set_blocked(false);
        sections_changed.emit(2);

        assert_eq!(*seen.lock(), vec![2]);
    }

    #[test]
    fn test_slot_may_connect_during_emit() {
        let signal = Arc::new(Signal::<()>::new());
        let inner = Arc::clone(&signal);
        signal.connect(move |_| {
            inner.connect(|_| {});
        });

        signal.emit(());
        assert_eq!(signal.connection_count(), 2);

        signal.disconnect_all();
        assert_eq!(signal.connection_count(), 0);
    }
}
