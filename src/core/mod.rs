/*!
 * Core Module
 * Scope guards and error handling
 */

pub mod errors;
pub mod guard;

// Re-export for convenience
pub use errors::*;
pub use guard::{
    BoolSetter, DeleteGuard, DeleteLater, Flag, Guard, GuardDrop, GuardMetadata, PointerSetter,
    SetFalse, SetTrue, SignalBlocker,
};
