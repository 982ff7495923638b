/*!
 * Host Framework Primitives
 *
 * The guards rely on two services from the surrounding framework: deferred
 * deletion and notification suppression. The traits here are the seam; the
 * concrete types are reference implementations an embedding runtime may
 * replace with its own.
 */

pub mod config;
pub mod deletion;
pub mod notify;

pub use config::DeletionConfig;
pub use deletion::{DeletionQueue, DeletionScheduler, Teardown, WeakDeletionQueue};
pub use notify::{suppress_notifications, ConnectionId, Emitter, SuppressNotifications};
