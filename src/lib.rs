/*!
 * Scoped Guards
 *
 * Scope-bound guards that tie a block's lifetime to a deferred side effect:
 * deferred deletion, flag toggling, notification suppression and value
 * write-back. Each action runs from `Drop`, on every exit path.
 */

pub mod core;
pub mod host;
pub mod monitoring;

// Re-exports
pub use crate::core::errors::{HostError, HostResult};
pub use crate::core::guard::{
    BoolSetter, DeleteGuard, DeleteLater, Flag, Guard, GuardDrop, GuardMetadata, PointerSetter,
    SetFalse, SetTrue, SignalBlocker,
};
pub use host::{
    suppress_notifications, ConnectionId, DeletionConfig, DeletionQueue, DeletionScheduler,
    Emitter, SuppressNotifications, Teardown, WeakDeletionQueue,
};
pub use monitoring::{init_tracing, try_init_tracing};
