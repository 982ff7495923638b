/*!
 * Write-Back Guards
 *
 * Capture a value during a scope and commit it to a destination on exit
 */

use super::traits::{Guard, GuardDrop};
use super::GuardMetadata;

/// Writes the last assigned value to a destination on drop
///
/// Nothing is written when no value was assigned or when there is no
/// destination. Gives a function with many exit paths a single write-back
/// point for an optional output parameter.
///
/// # Example
///
/// ```rust
/// use scoped_guards::core::guard::PointerSetter;
///
/// fn parse_port(input: &str, out: Option<&mut u16>) -> bool {
///     let mut port = PointerSetter::new(out);
///     let Ok(value) = input.parse::<u16>() else {
///         return false;
///     };
///     if value == 0 {
///         return false;
///     }
///     port.set(value);
///     true
/// }
///
/// let mut port = 8080;
/// assert!(!parse_port("nope", Some(&mut port)));
/// assert_eq!(port, 8080);
/// assert!(parse_port("443", Some(&mut port)));
/// assert_eq!(port, 443);
/// assert!(parse_port("22", None));
/// ```
pub struct PointerSetter<'a, T> {
    value: Option<T>,
    destination: Option<&'a mut T>,
    metadata: GuardMetadata,
}

impl<'a, T> PointerSetter<'a, T> {
    /// Guard an optional destination; `None` is checked on drop, not here
    #[inline]
    pub fn new(destination: Option<&'a mut T>) -> Self {
        Self {
            value: None,
            destination,
            metadata: GuardMetadata::new("pointer_setter"),
        }
    }

    /// Guard a destination that is known to exist
    #[inline]
    pub fn to(destination: &'a mut T) -> Self {
        Self::new(Some(destination))
    }

    /// Guard with no destination; assignments are accepted and discarded
    #[inline]
    pub fn null() -> Self {
        Self::new(None)
    }

    /// Capture `value`, replacing any earlier capture
    #[inline]
    pub fn set(&mut self, value: T) -> &T {
        self.value.insert(value)
    }

    /// Currently captured value
    #[inline]
    pub fn value(&self) -> Option<&T> {
        self.value.as_ref()
    }

    #[inline]
    pub fn has_value(&self) -> bool {
        self.value.is_some()
    }

    #[inline]
    pub fn has_destination(&self) -> bool {
        self.destination.is_some()
    }
}

impl<'a, T> From<&'a mut T> for PointerSetter<'a, T> {
    fn from(destination: &'a mut T) -> Self {
        Self::to(destination)
    }
}

impl<'a, T> From<Option<&'a mut T>> for PointerSetter<'a, T> {
    fn from(destination: Option<&'a mut T>) -> Self {
        Self::new(destination)
    }
}

impl<T> Guard for PointerSetter<'_, T> {
    fn resource_type(&self) -> &'static str {
        "pointer_setter"
    }

    fn metadata(&self) -> &GuardMetadata {
        &self.metadata
    }
}

impl<T> GuardDrop for PointerSetter<'_, T> {
    fn on_drop(&mut self) {
        match (self.destination.take(), self.value.take()) {
            (Some(destination), Some(value)) => {
                *destination = value;
                self.trace_drop("written");
            }
            _ => self.trace_drop("skipped"),
        }
    }
}

impl<T> Drop for PointerSetter<'_, T> {
    fn drop(&mut self) {
        self.on_drop();
    }
}
