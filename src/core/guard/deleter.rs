/*!
 * Deferred-Deletion Guards
 *
 * Clear an object slot on scope exit and hand the object to its
 * deferred-deletion scheduler
 */

use super::traits::{Guard, GuardDrop};
use super::GuardMetadata;
use crate::host::{DeletionScheduler, Teardown};
use std::sync::Arc;

/// Types that support deferred deletion
///
/// This is the capability a [`DeleteGuard`] requires of its pointee. Guarding
/// a type without it does not compile:
///
/// ```compile_fail
/// use scoped_guards::core::guard::DeleteGuard;
///
/// struct Plain;
/// let mut slot = Some(Box::new(Plain));
/// let _guard = DeleteGuard::new(&mut slot);
/// ```
pub trait DeleteLater: Teardown + Sized + 'static {
    /// Scheduler owning this object's teardown
    ///
    /// Hold a handle from [`DeletionQueue::scheduler`](crate::host::DeletionQueue::scheduler)
    /// and clone it here; it does not keep the queue alive.
    fn scheduler(&self) -> Arc<dyn DeletionScheduler>;

    /// Queue this object for deferred teardown
    fn delete_later(self: Box<Self>) {
        let scheduler = self.scheduler();
        scheduler.schedule_deferred_destroy(self);
    }
}

/// Clears a slot and schedules deletion of its object on drop
///
/// Unless preserved, dropping the guard takes the object out of the slot
/// (leaving `None`) and calls [`DeleteLater::delete_later`] on it, exactly
/// once. A preserved guard leaves the slot untouched.
///
/// # Example
///
/// ```rust
/// use scoped_guards::core::guard::{DeleteGuard, DeleteLater};
/// use scoped_guards::host::{DeletionQueue, DeletionScheduler, Teardown};
/// use std::sync::Arc;
///
/// struct Dialog {
///     scheduler: Arc<dyn DeletionScheduler>,
/// }
///
/// impl Teardown for Dialog {}
///
/// impl DeleteLater for Dialog {
///     fn scheduler(&self) -> Arc<dyn DeletionScheduler> {
///         self.scheduler.clone()
///     }
/// }
///
/// let queue = DeletionQueue::new();
/// let mut dialog = Some(Box::new(Dialog {
///     scheduler: queue.scheduler(),
/// }));
/// {
///     let _guard = DeleteGuard::new(&mut dialog);
///     // Use the dialog...
/// }
/// assert!(dialog.is_none());
/// assert_eq!(queue.pending(), 1);
/// ```
pub struct DeleteGuard<'a, T: DeleteLater> {
    slot: &'a mut Option<Box<T>>,
    preserve: bool,
    metadata: GuardMetadata,
}

impl<'a, T: DeleteLater> DeleteGuard<'a, T> {
    /// Guard `slot`; the guard starts out not preserved
    #[inline]
    pub fn new(slot: &'a mut Option<Box<T>>) -> Self {
        Self {
            slot,
            preserve: false,
            metadata: GuardMetadata::new("delete"),
        }
    }

    /// Cancel both the clearing and the scheduled deletion
    #[inline]
    pub fn preserve(&mut self) {
        self.preserve = true;
    }

    #[inline]
    pub fn set_preserve(&mut self, preserve: bool) {
        self.preserve = preserve;
    }

    #[inline]
    pub fn is_preserved(&self) -> bool {
        self.preserve
    }

    /// Borrow the guarded object, if any
    #[inline]
    pub fn get(&self) -> Option<&T> {
        self.slot.as_deref()
    }

    #[inline]
    pub fn get_mut(&mut self) -> Option<&mut T> {
        self.slot.as_deref_mut()
    }

    /// Direct access to the slot
    ///
    /// The drop action applies to whatever the slot holds at drop time.
    #[inline]
    pub fn slot_mut(&mut self) -> &mut Option<Box<T>> {
        &mut *self.slot
    }
}

impl<T: DeleteLater> Guard for DeleteGuard<'_, T> {
    fn resource_type(&self) -> &'static str {
        "delete"
    }

    fn metadata(&self) -> &GuardMetadata {
        &self.metadata
    }
}

impl<T: DeleteLater> GuardDrop for DeleteGuard<'_, T> {
    fn on_drop(&mut self) {
        if self.preserve {
            self.trace_drop("preserved");
            return;
        }

        if let Some(object) = self.slot.take() {
            object.delete_later();
            self.trace_drop("scheduled");
        } else {
            self.trace_drop("empty");
        }
    }
}

impl<T: DeleteLater> Drop for DeleteGuard<'_, T> {
    fn drop(&mut self) {
        self.on_drop();
    }
}
