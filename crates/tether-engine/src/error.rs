//! Error type for engine-side debug operations.

/// Errors surfaced by an engine's debugging facility.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("context allocation failed: {0}")]
    ContextAllocation(String),

    #[error("hook registration rejected: {0}")]
    Registration(String),

    #[error("internal debugger module unavailable: {0}")]
    DebuggerUnavailable(String),

    #[error("command queue closed")]
    CommandQueueClosed,

    #[error("JavaScript error: {0}")]
    JavaScript(String),
}
