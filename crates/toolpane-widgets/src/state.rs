//! Waiting-state wrapper around a widget's typed payload.

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

/// Placeholder text shown until the first structured content arrives.
pub const WAITING_MESSAGE: &str = "Waiting for data from tool...";

/// A widget's data slot: empty until the tool delivers, then typed.
///
/// Widgets render the waiting placeholder out of `Waiting` and their
/// full view out of `Ready`; there is no third state. A malformed
/// payload never regresses the slot.
#[derive(Debug, Clone, PartialEq)]
pub enum WidgetState<T> {
    /// No structured content received yet.
    Waiting,
    /// The latest payload the tool delivered.
    Ready(T),
}

impl<T> Default for WidgetState<T> {
    fn default() -> Self {
        Self::Waiting
    }
}

impl<T: DeserializeOwned> WidgetState<T> {
    /// Absorb one structured-content payload.
    ///
    /// Returns true when the payload matched the widget's shape. On a
    /// mismatch the previous state is kept, so the widget goes on
    /// showing what it had (or the waiting placeholder).
    pub fn absorb(&mut self, payload: Value) -> bool {
        match serde_json::from_value::<T>(payload) {
            Ok(data) => {
                *self = Self::Ready(data);
                true
            }
            Err(e) => {
                debug!(error = %e, "Discarding payload that does not match the widget shape");
                false
            }
        }
    }
}

impl<T> WidgetState<T> {
    /// The payload, if one has arrived.
    pub fn data(&self) -> Option<&T> {
        match self {
            Self::Ready(data) => Some(data),
            Self::Waiting => None,
        }
    }

    /// True until the first successful absorb.
    pub fn is_waiting(&self) -> bool {
        matches!(self, Self::Waiting)
    }
}
