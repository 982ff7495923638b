/*!
 * RAII Scope Guards
 *
 * Small guards whose only job is a side effect on drop.
 *
 * ## Guard Types
 *
 * - **DeleteGuard**: Clears a slot and hands its object to a deferred-deletion scheduler
 * - **BoolSetter**: Sets a flag for a scope, writes the opposite value on exit
 * - **SignalBlocker**: Suppresses an object's notifications for a scope
 * - **PointerSetter**: Writes the last assigned value to a destination on exit
 *
 * Every action runs from `Drop`, so it fires on normal exit, early return,
 * `?` propagation and panic unwinding alike.
 *
 * ## Example
 *
 * ```rust
 * use scoped_guards::core::guard::{PointerSetter, SetTrue};
 *
 * fn classify(n: i32, out: Option<&mut &'static str>, busy: &mut bool) {
 *     let _busy = SetTrue::new(busy);
 *     let mut result = PointerSetter::new(out);
 *     if n < 0 {
 *         result.set("negative");
 *         return;
 *     }
 *     if n > 0 {
 *         result.set("positive");
 *     }
 * }
 *
 * let mut label = "untouched";
 * let mut busy = false;
 * classify(-4, Some(&mut label), &mut busy);
 * assert_eq!(label, "negative");
 * assert!(!busy);
 *
 * classify(0, Some(&mut label), &mut busy);
 * assert_eq!(label, "negative");
 * ```
 */

mod blocker;
mod deleter;
mod flag;
mod setter;
mod traits;

pub use blocker::SignalBlocker;
pub use deleter::{DeleteGuard, DeleteLater};
pub use flag::{BoolSetter, Flag, SetFalse, SetTrue};
pub use setter::PointerSetter;
pub use traits::{Guard, GuardDrop};

use std::time::Instant;

/// Guard metadata for observability
#[derive(Debug, Clone, Copy)]
pub struct GuardMetadata {
    pub resource_type: &'static str,
    pub creation_time: Instant,
}

impl GuardMetadata {
    #[inline]
    pub fn new(resource_type: &'static str) -> Self {
        Self {
            resource_type,
            creation_time: Instant::now(),
        }
    }

    #[inline]
    pub fn lifetime_micros(&self) -> u64 {
        self.creation_time.elapsed().as_micros() as u64
    }
}
