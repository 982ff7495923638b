/*!
 * Signal Blockers
 *
 * Suppress an object's notifications for the duration of a scope
 */

use super::traits::{Guard, GuardDrop};
use super::GuardMetadata;
use crate::host::SuppressNotifications;

/// Blocks notifications from an object until dropped
///
/// Drop restores the blocked state the object had right before the guard was
/// created, so nested blockers on the same object unwind correctly.
///
/// # Example
///
/// ```rust
/// use scoped_guards::core::guard::SignalBlocker;
/// use scoped_guards::host::{Emitter, SuppressNotifications};
///
/// let emitter = Emitter::<()>::new();
/// {
///     let _outer = SignalBlocker::new(&emitter);
///     {
///         let _inner = SignalBlocker::new(&emitter);
///     }
///     // Inner blocker restored "blocked", not "unblocked"
///     assert!(emitter.notifications_blocked());
/// }
/// assert!(!emitter.notifications_blocked());
/// ```
pub struct SignalBlocker<'a, O: SuppressNotifications + ?Sized> {
    object: Option<&'a O>,
    previous: bool,
    inhibited: bool,
    metadata: GuardMetadata,
}

impl<'a, O: SuppressNotifications + ?Sized> SignalBlocker<'a, O> {
    /// Block notifications from `object`
    pub fn new(object: &'a O) -> Self {
        let previous = object.block_notifications(true);
        Self {
            object: Some(object),
            previous,
            inhibited: false,
            metadata: GuardMetadata::new("signal_blocker"),
        }
    }

    /// Restore the previous state early
    ///
    /// Drop does nothing afterwards unless [`reblock`](Self::reblock) is called.
    pub fn unblock(&mut self) {
        if let Some(object) = self.object {
            object.block_notifications(self.previous);
        }
        self.inhibited = true;
    }

    /// Block again after [`unblock`](Self::unblock)
    ///
    /// The state captured at construction is still the one restored on drop.
    pub fn reblock(&mut self) {
        if let Some(object) = self.object {
            object.block_notifications(true);
        }
        self.inhibited = false;
    }

    /// Consume the guard without touching the object's blocked state
    pub fn dismiss(mut self) {
        self.object = None;
    }

    /// State restored on drop
    #[inline]
    pub fn previous(&self) -> bool {
        self.previous
    }
}

impl<O: SuppressNotifications + ?Sized> Guard for SignalBlocker<'_, O> {
    fn resource_type(&self) -> &'static str {
        "signal_blocker"
    }

    fn metadata(&self) -> &GuardMetadata {
        &self.metadata
    }
}

impl<O: SuppressNotifications + ?Sized> GuardDrop for SignalBlocker<'_, O> {
    fn on_drop(&mut self) {
        match self.object.take() {
            Some(object) if !self.inhibited => {
                object.block_notifications(self.previous);
                self.trace_drop("restored");
            }
            Some(_) => self.trace_drop("unblocked"),
            None => self.trace_drop("dismissed"),
        }
    }
}

impl<O: SuppressNotifications + ?Sized> Drop for SignalBlocker<'_, O> {
    fn drop(&mut self) {
        self.on_drop();
    }
}
