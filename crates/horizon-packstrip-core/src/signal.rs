//! Signal/slot system for Horizon Packstrip.
//!
//! Signals are how a strip tells the outside world that something happened:
//! a section was focused, an item was selected, the leading section changed.
//! Each component owns its signals; there is no shared broadcast object.
//!
//! # Key Types
//!
//! - [`Signal<Args>`] - The signal type for emitting notifications
//! - [`ConnectionId`] - Unique identifier returned when connecting a slot
//! - [`ConnectionGuard`] - RAII guard that disconnects when dropped
//!
//! # Example
//!
//! ```
//! use horizon_packstrip_core::Signal;
//!
//! let section_focused = Signal::<Option<usize>>::new();
//!
//! let conn_id = section_focused.connect(|section| {
//!     println!("Focused section: {:?}", section);
//! });
//!
//! section_focused.emit(Some(3));
//! section_focused.disconnect(conn_id);
//! ```

use std::fmt;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Weak};

use parking_lot::Mutex;
use slotmap::{new_key_type, SlotMap};

use crate::logging::targets;

new_key_type! {
    /// A unique identifier for a signal-slot connection.
    ///
    /// Use this ID to disconnect a specific connection via [`Signal::disconnect`].
    /// The ID remains valid until the connection is explicitly disconnected or
    /// the signal is dropped.
    pub struct ConnectionId;
}

/// A connected slot.
type Slot<Args> = Arc<dyn Fn(&Args) + Send + Sync>;

/// A slot together with its connection sequence number.
///
/// Slot keys are reused after a disconnect, so emission order comes from
/// `seq`, never from the table's iteration order.
struct Connection<Args> {
    seq: u64,
    slot: Slot<Args>,
}

/// Connection table shared between a signal and its scoped guards.
type SlotTable<Args> = Mutex<SlotMap<ConnectionId, Connection<Args>>>;

/// A type-safe signal that can have multiple connected slots.
///
/// When a signal is emitted, every connected slot is invoked synchronously,
/// in connection order, with a reference to the provided arguments.
///
/// # Type Parameter
///
/// - `Args`: The argument type passed to connected slots. Use `()` for signals
///   with no arguments, or a tuple for multiple arguments.
///
/// # Reentrancy
///
/// The connection table is not locked while slots run, so a slot may connect
/// or disconnect slots on the signal that is currently emitting. Such changes
/// take effect from the next emission.
pub struct Signal<Args> {
    /// All active connections.
    connections: Arc<SlotTable<Args>>,
    /// Sequence number handed to the next connection.
    next_seq: AtomicU64,
    /// Whether signal emission is temporarily blocked.
    blocked: AtomicBool,
}

impl<Args: 'static> Default for Signal<Args> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Args> fmt::Debug for Signal<Args> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Signal")
            .field("connections", &self.connections.lock().len())
            .field("blocked", &self.blocked.load(Ordering::SeqCst))
            .finish()
    }
}

impl<Args: 'static> Signal<Args> {
    /// Create a new signal with no connections.
    pub fn new() -> Self {
        Self {
            connections: Arc::new(Mutex::new(SlotMap::with_key())),
            next_seq: AtomicU64::new(0),
            blocked: AtomicBool::new(false),
        }
    }

    /// Connect a slot (closure) to this signal.
    ///
    /// Returns a `ConnectionId` that can be used to disconnect the slot later.
    ///
    /// # Example
    ///
    /// ```
    /// use horizon_packstrip_core::Signal;
    ///
    /// let signal = Signal::<String>::new();
    /// let id = signal.connect(|s| println!("Got: {}", s));
    /// signal.emit("Hello".to_string());
    /// ```
    pub fn connect<F>(&self, slot: F) -> ConnectionId
    where
        F: Fn(&Args) + Send + Sync + 'static,
    {
        let seq = self.next_seq.fetch_add(1, Ordering::Relaxed);
        self.connections.lock().insert(Connection {
            seq,
            slot: Arc::new(slot),
        })
    }

    /// Connect a slot that is disconnected automatically when the returned
    /// guard is dropped.
    ///
    /// The guard only holds a weak reference to the connection table, so it
    /// may safely outlive the signal.
    ///
    /// ```
    /// use horizon_packstrip_core::Signal;
    /// use std::sync::atomic::{AtomicUsize, Ordering};
    /// use std::sync::Arc;
    ///
    /// let signal = Signal::<usize>::new();
    /// let total = Arc::new(AtomicUsize::new(0));
    /// {
    ///     let total = total.clone();
    ///     let _guard = signal.connect_scoped(move |&n| {
    ///         total.fetch_add(n, Ordering::SeqCst);
    ///     });
    ///     signal.emit(42);
    /// }
    /// signal.emit(43);
    /// assert_eq!(total.load(Ordering::SeqCst), 42);
    /// ```
    pub fn connect_scoped<F>(&self, slot: F) -> ConnectionGuard<Args>
    where
        F: Fn(&Args) + Send + Sync + 'static,
    {
        let id = self.connect(slot);
        ConnectionGuard {
            connections: Arc::downgrade(&self.connections),
            id,
        }
    }

    /// Disconnect a specific slot by its connection ID.
    ///
    /// Returns `true` if the connection was found and removed, `false` otherwise.
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

    /// Emit the signal, invoking all connected slots in connection order.
    pub fn emit(&self, args: Args) {
        if self.is_blocked() {
            tracing::trace!(target: targets::SIGNAL, "signal blocked, skipping emit");
            return;
        }

        let mut ordered: Vec<(u64, Slot<Args>)> = self
            .connections
            .lock()
            .values()
            .map(|connection| (connection.seq, connection.slot.clone()))
            .collect();
        ordered.sort_unstable_by_key(|&(seq, _)| seq);
        let slots: Vec<Slot<Args>> = ordered.into_iter().map(|(_, slot)| slot).collect();
        tracing::trace!(target: targets::SIGNAL, connection_count = slots.len(), "emitting signal");

        for slot in slots {
            slot(&args);
        }
    }
}

/// A guard that disconnects its slot when dropped.
///
/// Returned by [`Signal::connect_scoped`]. Tie the guard to the lifetime of
/// whatever owns the observing code and the connection goes away with it.
pub struct ConnectionGuard<Args> {
    connections: Weak<SlotTable<Args>>,
    id: ConnectionId,
}

impl<Args> ConnectionGuard<Args> {
    /// The ID of the guarded connection.
    pub fn id(&self) -> ConnectionId {
        self.id
    }
}

impl<Args> fmt::Debug for ConnectionGuard<Args> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConnectionGuard").field("id", &self.id).finish()
    }
}

impl<Args> Drop for ConnectionGuard<Args> {
    fn drop(&mut self) {
        if let Some(connections) = self.connections.upgrade() {
            connections.lock().remove(self.id);
        }
    }
}
