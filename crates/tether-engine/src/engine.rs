//! The `DebugEngine` trait: what the bridge consumes from an engine.

use crate::context::ContextHandle;
use crate::error::EngineError;
use crate::event::EventDetails;
use crate::message::{ClientData, DebugMessage};

/// Result alias for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;

/// Listener invoked on each debug event, on the engine's own thread.
pub type DebugEventListener = Box<dyn FnMut(&EventDetails<'_>) + Send>;

/// Handler invoked for each protocol message from the engine's message pump.
pub type DebugMessageHandler = Box<dyn FnMut(&DebugMessage) + Send>;

/// The engine's native debugging facility, as consumed by the bridge.
///
/// An embedder implements this over its engine's debug API. The listener
/// and handler slots are global to the engine instance: installing a new
/// one replaces the previous registration, and `None` unregisters.
///
/// Listener and handler invocations happen on engine-owned threads; the
/// engine serializes its own calls, so implementations do not need to
/// guard against concurrent invocations of the same hook.
pub trait DebugEngine: Send + Sync + 'static {
    /// Install or remove the global debug-event listener.
    fn set_event_listener(&self, listener: Option<DebugEventListener>) -> EngineResult<()>;

    /// Install or remove the global debug-message handler.
    fn set_message_handler(&self, handler: Option<DebugMessageHandler>) -> EngineResult<()>;

    /// Mint a fresh execution context from an empty global template.
    fn new_context(&self) -> EngineResult<ContextHandle>;

    /// Set the context's security token to the engine's undefined sentinel,
    /// lifting same-origin-style isolation for access from other contexts.
    fn set_security_token_undefined(&self, context: &ContextHandle) -> EngineResult<()>;

    /// Load the engine's internal debugger module into the context, bind it
    /// under `global_name`, and relax the internal debugger context's
    /// security token likewise.
    fn install_debug_module(&self, context: &ContextHandle, global_name: &str) -> EngineResult<()>;

    /// Request an interrupt at the next statement boundary.
    fn debug_break(&self);

    /// Cancel a pending break request.
    fn cancel_debug_break(&self);

    /// Queue a serialized protocol command. The attachment, if any, is
    /// echoed back on the corresponding response message.
    fn send_command(&self, payload: &[u8], client_data: Option<ClientData>) -> EngineResult<()>;
}
