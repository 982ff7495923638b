/*!
 * Notification Channels
 *
 * Minimal signal/slot channel with a blockable emission state
 */

use crate::core::guard::SignalBlocker;
use parking_lot::Mutex;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use tracing::trace;

/// Host primitive for suppressing an object's outbound notifications
pub trait SuppressNotifications {
    /// Set the blocked state, returning the previous one
    fn block_notifications(&self, blocked: bool) -> bool;

    /// Whether notifications are currently blocked
    fn notifications_blocked(&self) -> bool;
}

/// Suppress notifications from `object` until the returned token is dropped
///
/// Dropping the token restores the state that existed before this call.
pub fn suppress_notifications<O>(object: &O) -> SignalBlocker<'_, O>
where
    O: SuppressNotifications + ?Sized,
{
    SignalBlocker::new(object)
}

/// Identifies a receiver connected to an [`Emitter`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ConnectionId(u64);

type Receiver<T> = Arc<dyn Fn(&T) + Send + Sync>;

/// Notification channel delivering `T` to connected receivers
///
/// # Example
///
/// ```rust
/// use scoped_guards::host::{suppress_notifications, Emitter};
///
/// let changed = Emitter::<u32>::new();
/// changed.connect(|v| println!("changed to {v}"));
///
/// assert_eq!(changed.emit(&1), 1);
/// {
///     let _quiet = suppress_notifications(&changed);
///     assert_eq!(changed.emit(&2), 0);
/// }
/// assert_eq!(changed.emit(&3), 1);
/// ```
pub struct Emitter<T> {
    receivers: Mutex<Vec<(ConnectionId, Receiver<T>)>>,
    blocked: AtomicBool,
    next_id: AtomicU64,
}

impl<T> Emitter<T> {
    pub fn new() -> Self {
        Self {
            receivers: Mutex::new(Vec::new()),
            blocked: AtomicBool::new(false),
            next_id: AtomicU64::new(0),
        }
    }

    /// Connect a receiver
    pub fn connect<F>(&self, receiver: F) -> ConnectionId
    where
        F: Fn(&T) + Send + Sync + 'static,
    {
        let id = ConnectionId(self.next_id.fetch_add(1, Ordering::Relaxed));
        self.receivers.lock().push((id, Arc::new(receiver)));
        id
    }

    /// Connect a receiver and invoke it once right away with `initial`
    ///
    /// The immediate call is a direct invocation and ignores the blocked state.
    pub fn attach<F>(&self, initial: &T, receiver: F) -> ConnectionId
    where
        F: Fn(&T) + Send + Sync + 'static,
    {
        receiver(initial);
        self.connect(receiver)
    }

    /// Disconnect a receiver, returning whether it was connected
    pub fn disconnect(&self, id: ConnectionId) -> bool {
        let mut receivers = self.receivers.lock();
        let before = receivers.len();
        receivers.retain(|(rid, _)| *rid != id);
        receivers.len() != before
    }

    /// Number of connected receivers
    pub fn receiver_count(&self) -> usize {
        self.receivers.lock().len()
    }

    /// Deliver `value` to every receiver, in connection order
    ///
    /// Returns the number of receivers invoked (zero while blocked).
    pub fn emit(&self, value: &T) -> usize {
        if self.blocked.load(Ordering::Acquire) {
            trace!("emission suppressed");
            return 0;
        }

        // Snapshot so receivers may connect/disconnect while being called
        let receivers: Vec<Receiver<T>> = self
            .receivers
            .lock()
            .iter()
            .map(|(_, r)| r.clone())
            .collect();

        for receiver in &receivers {
            receiver(value);
        }
        receivers.len()
    }
}

impl<T> Default for Emitter<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> std::fmt::Debug for Emitter<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Emitter")
            .field("receivers", &self.receiver_count())
            .field("blocked", &self.notifications_blocked())
            .finish()
    }
}

impl<T> SuppressNotifications for Emitter<T> {
    fn block_notifications(&self, blocked: bool) -> bool {
        self.blocked.swap(blocked, Ordering::AcqRel)
    }

    fn notifications_blocked(&self) -> bool {
        self.blocked.load(Ordering::Acquire)
    }
}
