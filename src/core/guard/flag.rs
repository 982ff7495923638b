/*!
 * Flag Guards
 *
 * Set a boolean for the duration of a scope
 */

use super::traits::{Guard, GuardDrop};
use super::GuardMetadata;
use std::cell::Cell;
use std::sync::atomic::{AtomicBool, Ordering};

/// A boolean location a [`BoolSetter`] can write to
pub trait Flag {
    fn load(&self) -> bool;
    fn store(&mut self, value: bool);
}

impl Flag for &mut bool {
    #[inline]
    fn load(&self) -> bool {
        **self
    }

    #[inline]
    fn store(&mut self, value: bool) {
        **self = value;
    }
}

impl Flag for &Cell<bool> {
    #[inline]
    fn load(&self) -> bool {
        self.get()
    }

    #[inline]
    fn store(&mut self, value: bool) {
        self.set(value);
    }
}

impl Flag for &AtomicBool {
    #[inline]
    fn load(&self) -> bool {
        AtomicBool::load(self, Ordering::Acquire)
    }

    #[inline]
    fn store(&mut self, value: bool) {
        AtomicBool::store(self, value, Ordering::Release);
    }
}

/// Sets a flag to `VALUE` on construction and to `!VALUE` on drop
///
/// This is a one-shot toggle, not save/restore: whatever the flag held before
/// the guard, or was set to inside the scope, drop always writes `!VALUE`.
///
/// # Example
///
/// ```rust
/// use scoped_guards::core::guard::SetTrue;
/// use std::cell::Cell;
///
/// let loading = Cell::new(false);
/// {
///     let _loading = SetTrue::new(&loading);
///     assert!(loading.get());
/// }
/// assert!(!loading.get());
/// ```
pub struct BoolSetter<F: Flag, const VALUE: bool> {
    flag: F,
    metadata: GuardMetadata,
}

/// Sets the flag for the scope, clears it on exit
pub type SetTrue<F> = BoolSetter<F, true>;

/// Clears the flag for the scope, sets it on exit
pub type SetFalse<F> = BoolSetter<F, false>;

impl<F: Flag, const VALUE: bool> BoolSetter<F, VALUE> {
    /// Value held by the flag while the guard is live
    pub const ACTIVE: bool = VALUE;

    /// Write `VALUE` into `flag` immediately
    #[inline]
    pub fn new(mut flag: F) -> Self {
        flag.store(VALUE);
        Self {
            flag,
            metadata: GuardMetadata::new("flag"),
        }
    }

    /// Current value of the flag
    #[inline]
    pub fn get(&self) -> bool {
        self.flag.load()
    }
}

impl<F: Flag, const VALUE: bool> Guard for BoolSetter<F, VALUE> {
    fn resource_type(&self) -> &'static str {
        "flag"
    }

    fn metadata(&self) -> &GuardMetadata {
        &self.metadata
    }
}

impl<F: Flag, const VALUE: bool> GuardDrop for BoolSetter<F, VALUE> {
    fn on_drop(&mut self) {
        self.flag.store(!VALUE);
        self.trace_drop(if VALUE { "cleared" } else { "set" });
    }
}

impl<F: Flag, const VALUE: bool> Drop for BoolSetter<F, VALUE> {
    fn drop(&mut self) {
        self.on_drop();
    }
}
