//! Change notification for faderkit widgets.
//!
//! A [`Signal`] carries one kind of notification (for widgets, a value change)
//! to any number of listeners. Listeners are closures. Whatever a closure
//! captures is the caller's "user data": faderkit never owns, inspects or
//! frees it.
//!
//! Listeners run synchronously on the emitting thread in the order they were
//! connected. Nothing is queued.
//!
//! # Example
//!
//! ```
//! use faderkit_core::Signal;
//!
//! let cutoff_changed = Signal::<f32>::new();
//!
//! let listener = cutoff_changed.connect(|cutoff| {
//!     println!("cutoff now {cutoff:.2}");
//! });
//!
//! cutoff_changed.emit(0.5);
//! cutoff_changed.disconnect(listener);
//! ```

use std::sync::Arc;

use parking_lot::Mutex;
use slotmap::{SlotMap, new_key_type};

use crate::logging::targets;

new_key_type! {
    /// Handle to one listener of a [`Signal`].
    ///
    /// Stale handles are harmless: disconnecting one twice returns `false`.
    pub struct ConnectionId;
}

type Listener<Args> = Arc<dyn Fn(&Args) + Send + Sync>;

/// A notification source with any number of listeners.
///
/// `Args` is the payload handed to every listener by reference.
///
/// `Signal` is `Send + Sync`, so a widget that owns one can live on whichever
/// thread runs the event loop.
pub struct Signal<Args> {
    listeners: Mutex<SlotMap<ConnectionId, Listener<Args>>>,
}

impl<Args: 'static> Default for Signal<Args> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Args: 'static> Signal<Args> {
    /// A signal nobody listens to yet.
    pub fn new() -> Self {
        Self {
            listeners: Mutex::new(SlotMap::with_key()),
        }
    }

    /// Add a listener.
    pub fn connect<F>(&self, listener: F) -> ConnectionId
    where
        F: Fn(&Args) + Send + Sync + 'static,
    {
        let id = self.listeners.lock().insert(Arc::new(listener));
        tracing::trace!(target: targets::SIGNAL, ?id, "listener connected");
        id
    }

    /// Remove one listener. Returns `false` if it was already gone.
    pub fn disconnect(&self, id: ConnectionId) -> bool {
        self.listeners.lock().remove(id).is_some()
    }

    /// Remove every listener.
    pub fn disconnect_all(&self) {
        self.listeners.lock().clear();
    }

    /// Whether `id` still names a connected listener.
    pub fn is_connected(&self, id: ConnectionId) -> bool {
        self.listeners.lock().contains_key(id)
    }

    /// Number of listeners.
    pub fn connection_count(&self) -> usize {
        self.listeners.lock().len()
    }

    /// Call every listener with `args` and return how many were called.
    ///
    /// The listener list is snapshotted first. A listener may therefore
    /// connect or disconnect on this signal; the change applies from the
    /// next emission on.
    pub fn emit(&self, args: Args) -> usize {
        let snapshot: Vec<Listener<Args>> = self.listeners.lock().values().cloned().collect();
        tracing::trace!(target: targets::SIGNAL, listeners = snapshot.len(), "emit");
        for listener in &snapshot {
            listener(&args);
        }
        snapshot.len()
    }
}

impl<Args> std::fmt::Debug for Signal<Args> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Signal")
            .field("listeners", &self.listeners.lock().len())
            .finish()
    }
}

static_assertions::assert_impl_all!(Signal<f32>: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn recorder(signal: &Signal<f32>) -> Arc<Mutex<Vec<f32>>> {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        signal.connect(move |&level| sink.lock().push(level));
        seen
    }

    #[test]
    fn test_listeners_run_in_connection_order() {
        let signal = Signal::<f32>::new();
        let order = Arc::new(Mutex::new(Vec::new()));
        for tag in ["meter", "automation"] {
            let order = order.clone();
            signal.connect(move |_| order.lock().push(tag));
        }

        assert_eq!(signal.emit(0.8), 2);
        assert_eq!(*order.lock(), ["meter", "automation"]);
    }

    #[test]
    fn test_disconnected_listener_is_skipped() {
        let signal = Signal::<f32>::new();
        let kept = recorder(&signal);
        let dropped = Arc::new(AtomicUsize::new(0));
        let dropped_clone = dropped.clone();
        let id = signal.connect(move |_| {
            dropped_clone.fetch_add(1, Ordering::SeqCst);
        });

        signal.emit(0.1);
        assert!(signal.disconnect(id));
        assert!(!signal.is_connected(id));
        assert!(!signal.disconnect(id));
        signal.emit(0.2);

        assert_eq!(*kept.lock(), [0.1, 0.2]);
        assert_eq!(dropped.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_no_listeners() {
        let signal = Signal::<f32>::default();
        assert_eq!(signal.emit(1.0), 0);
        assert_eq!(signal.connection_count(), 0);
    }

    #[test]
    fn test_listener_may_disconnect_all_while_emitting() {
        let signal = Arc::new(Signal::<f32>::new());
        let calls = Arc::new(AtomicUsize::new(0));

        let inner = signal.clone();
        let calls_clone = calls.clone();
        signal.connect(move |_| {
            calls_clone.fetch_add(1, Ordering::SeqCst);
            inner.disconnect_all();
        });

        signal.emit(0.0);
        signal.emit(0.0);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }
}
