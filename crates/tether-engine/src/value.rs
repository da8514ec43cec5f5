//! Borrowed views over engine-held values.
//!
//! The full JS-value marshaling layer lives with the embedder; the debug
//! seam only needs a way to inspect a value the engine is currently holding
//! live. [`DebugValue`] is that minimal surface, and [`ExecutionState`] /
//! [`EventData`] are the wrappers a relay hands to host callbacks.

use std::fmt;

/// A value the engine holds live for the duration of a debug callback.
///
/// Implementations are provided by the embedder's value layer. The trait is
/// deliberately small: debug consumers inspect, they do not mutate.
pub trait DebugValue: fmt::Debug {
    /// Snapshot the value as JSON for host-side inspection.
    fn to_json(&self) -> serde_json::Value;
}

/// Non-owning view of the engine's execution state during one event.
///
/// Borrowed from the engine's event structure; neither copies the underlying
/// handle nor extends its lifetime. The borrow ends with the listener call,
/// so these cannot be stashed in longer-lived structures.
pub struct ExecutionState<'a> {
    inner: &'a dyn DebugValue,
}

impl<'a> ExecutionState<'a> {
    /// Wrap a borrowed execution-state handle.
    pub fn new(inner: &'a dyn DebugValue) -> Self {
        Self { inner }
    }

    /// Snapshot the execution state as JSON.
    pub fn to_json(&self) -> serde_json::Value {
        self.inner.to_json()
    }

    /// The underlying engine handle.
    pub fn raw(&self) -> &'a dyn DebugValue {
        self.inner
    }
}

impl fmt::Debug for ExecutionState<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ExecutionState").field(&self.inner).finish()
    }
}

/// Non-owning view of an event's data payload. Same borrow rules as
/// [`ExecutionState`].
pub struct EventData<'a> {
    inner: &'a dyn DebugValue,
}

impl<'a> EventData<'a> {
    /// Wrap a borrowed event-data handle.
    pub fn new(inner: &'a dyn DebugValue) -> Self {
        Self { inner }
    }

    /// Snapshot the event data as JSON.
    pub fn to_json(&self) -> serde_json::Value {
        self.inner.to_json()
    }

    /// The underlying engine handle.
    pub fn raw(&self) -> &'a dyn DebugValue {
        self.inner
    }
}

impl fmt::Debug for EventData<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("EventData").field(&self.inner).finish()
    }
}
