//! Engine-facing debug interface for the tether debugger bridge.
//!
//! This crate defines the contract between an embedded JavaScript engine's
//! native debugging facility and the host-side bridge that consumes it.
//! It carries no engine of its own: an embedder implements [`DebugEngine`]
//! over its engine's debug API, and `tether-bridge` drives that trait.
//!
//! # Architecture
//!
//! - [`DebugEngine`] is the seam: closure-based listener/handler
//!   registration, context minting, break control, and outbound command
//!   dispatch
//! - [`EventDetails`] / [`DebugMessage`] are the two payload surfaces the
//!   engine delivers through registered hooks
//! - [`ExecutionState`] / [`EventData`] are thin non-owning views over
//!   engine-held values, valid only for a single listener invocation
//! - [`ClientData`] carries an opaque host object through the engine's
//!   message round trip

mod context;
mod engine;
mod error;
mod event;
mod message;
mod value;

pub use context::ContextHandle;
pub use engine::{DebugEngine, DebugEventListener, DebugMessageHandler, EngineResult};
pub use error::EngineError;
pub use event::{DebugEventKind, EventDetails};
pub use message::{ClientData, DebugMessage, HostObject};
pub use value::{DebugValue, EventData, ExecutionState};
