//! Signal/slot system for Horizon Tabular.
//!
//! This module provides a small, type-safe observer mechanism. Models emit
//! signals when their state changes, and connected slots (callbacks) are
//! invoked in response.
//!
//! # Key Types
//!
//! - [`Signal<Args>`] - The signal type for emitting notifications
//! - [`ConnectionId`] - Unique identifier returned when connecting a slot
//!
//! # Delivery
//!
//! Emission is synchronous: every connected slot runs on the emitting thread
//! before [`Signal::emit`] returns, in the order the slots were connected.
//! No internal lock is held while slots run, so a slot may freely query the
//! object that emitted the signal or connect and disconnect other slots.
//! Connection changes made during an emission take effect on the next one.
//!
//! # Example
//!
//! ```
//! use horizon_tabular_core::Signal;
//!
//! // A payload-less reset notification
//! let reset = Signal::<()>::new();
//!
//! let conn_id = reset.connect(|_| {
//!     println!("rows replaced, re-query row count");
//! });
//!
//! reset.emit(());
//! reset.disconnect(conn_id);
//! ```

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;
use slotmap::{new_key_type, SlotMap};

use crate::error::{Result, SignalError};
use crate::logging::targets;

new_key_type! {
    /// A unique identifier for a signal-slot connection.
    ///
    /// Use this ID to disconnect a specific connection via [`Signal::disconnect`].
    /// The ID remains valid until the connection is explicitly disconnected or
    /// the signal is dropped.
    pub struct ConnectionId;
}

type Slot<Args> = Arc<dyn Fn(&Args) + Send + Sync>;

/// Internal storage for a single connection.
struct Connection<Args> {
    slot: Slot<Args>,
    /// Monotonic registration number; slotmap iteration order is not stable
    /// across removals, so delivery order is derived from this.
    sequence: u64,
}

/// A type-safe signal that can have multiple connected slots.
///
/// # Type Parameter
///
/// - `Args`: The argument type passed to connected slots. Use `()` for signals
///   with no arguments, or a tuple like `(usize, SortOrder)` for several.
///
/// # Thread Safety
///
/// `Signal<Args>` is `Send + Sync`. Slots always run on the emitting thread.
pub struct Signal<Args> {
    /// All active connections.
    connections: Mutex<SlotMap<ConnectionId, Connection<Args>>>,
    /// Whether signal emission is temporarily blocked.
    blocked: AtomicBool,
    /// Next registration number.
    next_sequence: AtomicU64,
}

impl<Args: 'static> Default for Signal<Args> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Args: 'static> Signal<Args> {
    /// Create a new signal with no connections.
    pub fn new() -> Self {
        Self {
            connections: Mutex::new(SlotMap::with_key()),
            blocked: AtomicBool::new(false),
            next_sequence: AtomicU64::new(0),
        }
    }

    /// Connect a slot (closure) to this signal.
    ///
    /// Returns a `ConnectionId` that can be used to disconnect the slot later.
    ///
    /// # Example
    ///
    /// ```
    /// use horizon_tabular_core::Signal;
    ///
    /// let signal = Signal::<usize>::new();
    /// let id = signal.connect(|row| println!("row {} changed", row));
    /// signal.emit(3);
    /// ```
    pub fn connect<F>(&self, slot: F) -> ConnectionId
    where
        F: Fn(&Args) + Send + Sync + 'static,
    {
        let sequence = self.next_sequence.fetch_add(1, Ordering::Relaxed);
        let connection = Connection {
            slot: Arc::new(slot),
            sequence,
        };
        self.connections.lock().insert(connection)
    }

    /// Disconnect a specific slot by its connection ID.
    ///
    /// Returns `true` if the connection was found and removed, `false` otherwise.
    pub fn disconnect(&self, id: ConnectionId) -> bool {
        self.connections.lock().remove(id).is_some()
    }

    /// Disconnect a specific slot, failing if the ID is unknown.
    pub fn try_disconnect(&self, id: ConnectionId) -> Result<()> {
        if self.disconnect(id) {
            Ok(())
        } else {
            Err(SignalError::InvalidConnection)
        }
    }

    /// Disconnect all slots from this signal.
    pub fn disconnect_all(&self) {
        self.connections.lock().clear();
    }

    /// Get the number of connected slots.
    pub fn connection_count(&self) -> usize {
        self.connections.lock().len()
    }

    /// Block signal emission temporarily.
    ///
    /// While blocked, calls to `emit()` do nothing.
    pub fn set_blocked(&self, blocked: bool) {
        self.blocked.store(blocked, Ordering::SeqCst);
    }

    /// Check if signal emission is currently blocked.
    pub fn is_blocked(&self) -> bool {
        self.blocked.load(Ordering::SeqCst)
    }

    /// Emit the signal, invoking all connected slots in registration order.
    ///
    /// If the signal is blocked, this does nothing.
    #[tracing::instrument(skip_all, target = "horizon_tabular_core::signal", level = "trace")]
    pub fn emit(&self, args: Args) {
        if self.is_blocked() {
            tracing::trace!(target: targets::SIGNAL, "signal blocked, skipping emit");
            return;
        }

        let mut slots: Vec<(u64, Slot<Args>)> = {
            let connections = self.connections.lock();
            connections
                .values()
                .map(|conn| (conn.sequence, conn.slot.clone()))
                .collect()
        };
        slots.sort_unstable_by_key(|(sequence, _)| *sequence);

        tracing::trace!(target: targets::SIGNAL, connection_count = slots.len(), "emitting signal");

        for (_, slot) in slots {
            slot(&args);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

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
        signal.emit(2);

        assert_eq!(*received.lock(), vec![1]);
        assert!(!signal.disconnect(conn_id));
        assert_eq!(
            signal.try_disconnect(conn_id),
            Err(SignalError::InvalidConnection)
        );
    }

    #[test]
    fn test_signal_blocked() {
        let signal = Signal::<i32>::new();
        let received = Arc::new(Mutex::new(Vec::new()));

        let received_clone = received.clone();
        signal.connect(move |&value| {
            received_clone.lock().push(value);
        });

        signal.emit(1);
        signal.set_blocked(true);
        signal.emit(2);
        signal.set_blocked(false);
        signal.emit(3);

        assert_eq!(*received.lock(), vec![1, 3]);
    }

    #[test]
    fn test_registration_order_survives_slot_reuse() {
        let signal = Signal::<()>::new();
        let order = Arc::new(Mutex::new(Vec::new()));

        let mut ids = Vec::new();
        for name in ["a", "b", "c"] {
            let order = order.clone();
            ids.push(signal.connect(move |_| order.lock().push(name)));
        }

        // Frees slot 0; the next insert reuses it but must still run last.
        signal.disconnect(ids[0]);
        let order_clone = order.clone();
        signal.connect(move |_| order_clone.lock().push("d"));

        signal.emit(());
        assert_eq!(*order.lock(), vec!["b", "c", "d"]);
    }

    #[test]
    fn test_slot_may_reenter_signal() {
        let signal = Arc::new(Signal::<()>::new());
        let count = Arc::new(Mutex::new(0));

        let inner_signal = signal.clone();
        let inner_count = count.clone();
        signal.connect(move |_| {
            *inner_count.lock() += 1;
            // Reading connection state from inside a slot must not deadlock.
            assert_eq!(inner_signal.connection_count(), 1);
        });

        signal.emit(());
        assert_eq!(*count.lock(), 1);
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
    fn test_signal_with_multiple_args() {
        let signal = Signal::<(String, i32)>::new();
        let received = Arc::new(Mutex::new(None));

        let received_clone = received.clone();
        signal.connect(move |args| {
            *received_clone.lock() = Some(args.clone());
        });

        signal.emit(("hello".to_string(), 42));

        assert_eq!(received.lock().clone(), Some(("hello".to_string(), 42)));
    }

    #[test]
    fn test_emit_from_other_thread() {
        let signal = Arc::new(Signal::<i32>::new());
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
