//! Error type for bridge operations.

use tether_engine::EngineError;

/// Errors surfaced by the debug bridge.
///
/// Every variant wraps an engine-side failure caught at the call site; none
/// of them is retried automatically. A `ContextSetup` failure during
/// construction is fatal for debugging: without its context no bridge
/// exists.
#[derive(Debug, thiserror::Error)]
pub enum BridgeError {
    #[error("debug context setup failed: {0}")]
    ContextSetup(#[source] EngineError),

    #[error("hook registration failed: {0}")]
    Registration(#[source] EngineError),

    #[error("command send failed: {0}")]
    Send(#[source] EngineError),
}
