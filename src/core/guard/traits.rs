/*!
 * Guard Traits
 *
 * Core abstractions shared by the scope guards
 */

use super::GuardMetadata;

/// Core guard trait
///
/// Guards expose what they guard for logging and debugging. There is no
/// manual release: the side effect belongs to `Drop`.
pub trait Guard {
    /// Resource type name for logging/debugging
    fn resource_type(&self) -> &'static str;

    /// Get guard metadata
    fn metadata(&self) -> &GuardMetadata;
}

/// Guards that perform their action on drop
///
/// Separates Drop logic for better testability and observability
pub trait GuardDrop: Guard {
    /// Perform the scope-exit action
    ///
    /// # Panics
    ///
    /// Must NOT panic. Drop can run during unwinding.
    fn on_drop(&mut self);

    /// Emit the drop trace event
    fn trace_drop(&self, action: &'static str) {
        tracing::trace!(
            guard = self.resource_type(),
            action,
            lifetime_us = self.metadata().lifetime_micros(),
            "scope guard fired"
        );
    }
}
