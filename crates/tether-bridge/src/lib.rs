//! Debugger bridge between an embedded JavaScript engine and its host.
//!
//! [`DebugBridge`] attaches to an engine's native debugging facility (the
//! [`tether_engine::DebugEngine`] seam), owns a dedicated debug execution
//! context, and marshals debug events and protocol messages from the
//! engine's threads into host-registered callbacks.
//!
//! # Architecture
//!
//! - The bridge is constructed explicitly by the embedding application and
//!   detaches from the engine when dropped
//! - `set_enabled(true)` installs closure-based event/message hooks with
//!   the engine; `set_enabled(false)` removes them again
//! - Hook invocations run on engine threads; the relay gates on the enabled
//!   flag, takes the host's reentry lock ([`HostLock`]), and contains any
//!   callback panic so nothing unwinds into engine frames
//! - Callback invocation is synchronous: the engine thread blocks until the
//!   host callback returns

mod bridge;
mod error;
mod lock;
mod relay;

#[cfg(test)]
mod test_engine;

pub use bridge::{DebugBridge, EventCallback, MessageCallback, DEBUG_GLOBAL_NAME};
pub use error::BridgeError;
pub use lock::{HostLock, HostLockGuard};

pub use tether_engine::{
    ClientData, ContextHandle, DebugEngine, DebugEventKind, DebugEventListener, DebugMessage,
    DebugMessageHandler, DebugValue, EngineError, EngineResult, EventData, EventDetails,
    ExecutionState, HostObject,
};
