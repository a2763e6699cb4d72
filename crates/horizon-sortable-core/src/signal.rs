//! Signal/slot system for Horizon Sortable.
//!
//! Signals are how the sort engine reports what it is doing: a before-sort
//! hook, an after-sort hook, and the resolved `(column, order)` pair that the
//! presentation layer listens to. Connected slots (callbacks) are invoked
//! synchronously, in connection order, on the emitting thread.
//!
//! # Key Types
//!
//! - [`Signal<Args>`] - The signal type for emitting notifications
//! - [`ConnectionId`] - Unique identifier returned when connecting a slot
//!
//! # Example
//!
//! ```
//! use horizon_sortable_core::Signal;
//!
//! let column_sorted = Signal::<usize>::new();
//!
//! let conn_id = column_sorted.connect(|column| {
//!     println!("Sorted by column {}", column);
//! });
//!
//! column_sorted.emit(2);
//! column_sorted.disconnect(conn_id);
//! ```

use std::sync::Arc;

use parking_lot::Mutex;
use slotmap::{new_key_type, SlotMap};

use crate::logging::targets;

new_key_type! {
    /// A unique identifier for a signal-slot connection.
    ///
    /// Use this ID to disconnect a specific connection via [`Signal::disconnect`].
    pub struct ConnectionId;
}

type Slot<Args> = Arc<dyn Fn(&Args) + Send + Sync>;

/// A type-safe signal that can have multiple connected slots.
///
/// # Type Parameter
///
/// - `Args`: The argument type passed to connected slots. Use `()` for signals
///   with no arguments, or a tuple like `(usize, SortOrder)` for several.
///
/// # Re-entrancy
///
/// The connection list is snapshotted before slots run, so a slot may connect
/// or disconnect on the same signal. A slot that emits the same signal again
/// recurses.
pub struct Signal<Args> {
    connections: Mutex<SlotMap<ConnectionId, Slot<Args>>>,
}

impl<Args> Default for Signal<Args> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Args> Signal<Args> {
    /// Create a new signal with no connections.
    pub fn new() -> Self {
        Self {
            connections: Mutex::new(SlotMap::with_key()),
        }
    }

    /// Connect a slot (closure) to this signal.
    ///
    /// Returns a `ConnectionId` that can be used to disconnect the slot later.
    pub fn connect<F>(&self, slot: F) -> ConnectionId
    where
        F: Fn(&Args) + Send + Sync + 'static,
    {
        self.connections.lock().insert(Arc::new(slot))
    }

    /// Disconnect a specific slot by its connection ID.
    ///
    /// Returns `true` if the connection was found and removed.
    pub fn disconnect(&self, id: ConnectionId) -> bool {
        self.connections.lock().remove(id).is_some()
    }

    /// Disconnect all slots from this signal.
    pub fn disconnect_all(&self) {
        self.connections.lock().clear();
    }

    /// Get the number of connected slots.
    pub fn connection_count(&self) -> usize {
        self.connections.lock().len()
    }

    /// Emit the signal, invoking every connected slot with `args`.
    #[tracing::instrument(skip_all, target = "horizon_sortable_core::signal", level = "trace")]
    pub fn emit(&self, args: Args) {
        let slots: Vec<Slot<Args>> = self.connections.lock().values().cloned().collect();
        tracing::trace!(target: targets::SIGNAL, connection_count = slots.len(), "emitting signal");

        for slot in slots {
            slot(&args);
        }
    }
}

static_assertions::assert_impl_all!(Signal<usize>: Send, Sync);
static_assertions::assert_impl_all!(Signal<(usize, String)>: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_signal_connect_emit() {
        let signal = Signal::<i32>::new();
        let received = Arc::new(Mutex::new(Vec::new()));

        let received_clone = received.clone();
        signal.connect(move |&value| {
            received_clone.lock().push(value);
        });

        signal.emit(42);
        signal.emit(100);

        assert_eq!(*received.lock(), vec![42, 100]);
    }

    #[test]
    fn test_signal_disconnect() {
        let signal = Signal::<i32>::new();
        let received = Arc::new(Mutex::new(Vec::new()));

        let received_clone = received.clone();
        let conn_id = signal.connect(move |&value| {
            received_clone.lock().push(value);
        });

        signal.emit(1);
        assert!(signal.disconnect(conn_id));
        assert!(!signal.disconnect(conn_id));
        signal.emit(2);

        assert_eq!(*received.lock(), vec![1]);
    }

    #[test]
    fn test_slots_run_in_connection_order() {
        let signal = Signal::<()>::new();
        let order = Arc::new(Mutex::new(Vec::new()));

        for tag in ["first", "second", "third"] {
            let order = order.clone();
            signal.connect(move |_| order.lock().push(tag));
        }

        signal.emit(());
        assert_eq!(*order.lock(), vec!["first", "second", "third"]);
    }

    #[test]
    fn test_disconnect_all() {
        let signal = Signal::<()>::new();
        for _ in 0..5 {
            signal.connect(|_| {});
        }

        assert_eq!(signal.connection_count(), 5);
        signal.disconnect_all();
        assert_eq!(signal.connection_count(), 0);
    }

    #[test]
    fn test_slot_may_disconnect_during_emit() {
        let signal = Arc::new(Signal::<()>::new());
        let calls = Arc::new(Mutex::new(0));

        let signal_clone = signal.clone();
        let calls_clone = calls.clone();
        signal.connect(move |_| {
            *calls_clone.lock() += 1;
            signal_clone.disconnect_all();
        });

        signal.emit(());
        signal.emit(());
        assert_eq!(*calls.lock(), 1);
    }

    #[test]
    fn test_signal_with_tuple_args() {
        let signal = Signal::<(String, usize)>::new();
        let received = Arc::new(Mutex::new(None));

        let received_clone = received.clone();
        signal.connect(move |args| {
            *received_clone.lock() = Some(args.clone());
        });

        signal.emit(("name".to_string(), 3));
        assert_eq!(*received.lock(), Some(("name".to_string(), 3)));
    }

    #[test]
    fn test_emit_from_other_thread() {
        let signal = Arc::new(Signal::<usize>::new());
        let received = Arc::new(Mutex::new(Vec::new()));

        let received_clone = received.clone();
        signal.connect(move |&value| {
            received_clone.lock().push(value);
        });

        let signal_clone = signal.clone();
        std::thread::spawn(move || signal_clone.emit(7))
            .join()
            .unwrap();

        assert_eq!(*received.lock(), vec![7]);
    }
}
