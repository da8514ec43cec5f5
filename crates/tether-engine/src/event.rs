//! Debug event kinds and the per-event payload surface.

use serde::{Deserialize, Serialize};

use crate::value::DebugValue;

/// Kind of a debug event raised by the engine.
///
/// The discriminants returned by [`wire_value`](Self::wire_value) match the
/// engine's own event enumeration; the gaps in the numbering belong to
/// internal event kinds the engine does not surface to listeners.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DebugEventKind {
    /// Execution stopped at a breakpoint or an explicit break request.
    Break,
    /// An uncaught exception is being reported.
    Exception,
    /// A script finished compiling.
    AfterCompile,
    /// A script failed to compile.
    CompileError,
    /// An async task lifecycle event.
    AsyncTaskEvent,
}

impl DebugEventKind {
    /// Every kind, in wire-value order.
    pub const ALL: [DebugEventKind; 5] = [
        DebugEventKind::Break,
        DebugEventKind::Exception,
        DebugEventKind::AfterCompile,
        DebugEventKind::CompileError,
        DebugEventKind::AsyncTaskEvent,
    ];

    /// The engine's numeric discriminant for this kind.
    pub fn wire_value(self) -> u8 {
        match self {
            DebugEventKind::Break => 1,
            DebugEventKind::Exception => 2,
            DebugEventKind::AfterCompile => 5,
            DebugEventKind::CompileError => 6,
            DebugEventKind::AsyncTaskEvent => 7,
        }
    }

    /// Decode an engine discriminant. Returns `None` for event kinds the
    /// engine does not surface to listeners.
    pub fn from_wire(value: u8) -> Option<Self> {
        match value {
            1 => Some(DebugEventKind::Break),
            2 => Some(DebugEventKind::Exception),
            5 => Some(DebugEventKind::AfterCompile),
            6 => Some(DebugEventKind::CompileError),
            7 => Some(DebugEventKind::AsyncTaskEvent),
            _ => None,
        }
    }
}

/// The payload of a single debug event, as handed to a registered listener.
///
/// The execution-state and event-data handles are borrowed from the engine's
/// event structure and are valid only for the duration of the listener call.
/// Nothing here extends their lifetime.
pub struct EventDetails<'a> {
    kind: DebugEventKind,
    execution_state: &'a dyn DebugValue,
    event_data: &'a dyn DebugValue,
}

impl<'a> EventDetails<'a> {
    /// Assemble the details for one listener invocation.
    pub fn new(
        kind: DebugEventKind,
        execution_state: &'a dyn DebugValue,
        event_data: &'a dyn DebugValue,
    ) -> Self {
        Self {
            kind,
            execution_state,
            event_data,
        }
    }

    /// The kind of event that fired.
    pub fn kind(&self) -> DebugEventKind {
        self.kind
    }

    /// The engine's execution state at the moment of the event.
    pub fn execution_state(&self) -> &'a dyn DebugValue {
        self.execution_state
    }

    /// Event-specific data (break location, exception value, script info).
    pub fn event_data(&self) -> &'a dyn DebugValue {
        self.event_data
    }
}
