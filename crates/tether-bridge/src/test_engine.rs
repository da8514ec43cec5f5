//! Scripted in-memory engine for exercising the bridge.
//!
//! Counts every registration call, captures outbound commands, and lets
//! tests drive events and messages through whatever hooks are currently
//! installed, including from a dedicated "engine" thread.

use std::sync::atomic::{AtomicBool, AtomicU64, AtomicUsize, Ordering};

use parking_lot::Mutex;

use tether_engine::{
    ClientData, ContextHandle, DebugEngine, DebugEventKind, DebugEventListener, DebugMessage,
    DebugMessageHandler, DebugValue, EngineError, EngineResult, EventDetails,
};

#[derive(Debug)]
pub(crate) struct Snapshot(pub(crate) serde_json::Value);

impl DebugValue for Snapshot {
    fn to_json(&self) -> serde_json::Value {
        self.0.clone()
    }
}

#[derive(Default)]
pub(crate) struct ScriptedEngine {
    listener: Mutex<Option<DebugEventListener>>,
    handler: Mutex<Option<DebugMessageHandler>>,
    next_context_id: AtomicU64,

    pub(crate) listener_installs: AtomicUsize,
    pub(crate) listener_removals: AtomicUsize,
    pub(crate) handler_installs: AtomicUsize,
    pub(crate) handler_removals: AtomicUsize,
    pub(crate) break_requests: AtomicUsize,
    pub(crate) cancel_requests: AtomicUsize,

    pub(crate) relaxed_contexts: Mutex<Vec<u64>>,
    pub(crate) installed_debug_modules: Mutex<Vec<(u64, String)>>,
    pub(crate) sent_commands: Mutex<Vec<DebugMessage>>,

    pub(crate) fail_context_creation: AtomicBool,
    pub(crate) fail_handler_install: AtomicBool,
}

impl ScriptedEngine {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Raise a debug event through the installed listener, if any.
    pub(crate) fn raise_event(&self, kind: DebugEventKind) {
        let state = Snapshot(serde_json::json!({"frames": []}));
        let data = Snapshot(serde_json::json!({"kind": kind.wire_value()}));
        if let Some(listener) = self.listener.lock().as_mut() {
            listener(&EventDetails::new(kind, &state, &data));
        }
    }

    /// Deliver a protocol message through the installed handler, if any.
    pub(crate) fn post_message(&self, message: &DebugMessage) {
        if let Some(handler) = self.handler.lock().as_mut() {
            handler(message);
        }
    }

    /// Echo the most recently sent command back as a response message,
    /// attachment included. This is the engine-side half of the client-data
    /// round trip.
    pub(crate) fn echo_last_command(&self) {
        let last = self.sent_commands.lock().last().cloned();
        if let Some(message) = last {
            self.post_message(&message);
        }
    }

    pub(crate) fn has_listener(&self) -> bool {
        self.listener.lock().is_some()
    }

    pub(crate) fn has_handler(&self) -> bool {
        self.handler.lock().is_some()
    }
}

impl DebugEngine for ScriptedEngine {
    fn set_event_listener(&self, listener: Option<DebugEventListener>) -> EngineResult<()> {
        match listener {
            Some(listener) => {
                self.listener_installs.fetch_add(1, Ordering::SeqCst);
                *self.listener.lock() = Some(listener);
            }
            None => {
                self.listener_removals.fetch_add(1, Ordering::SeqCst);
                *self.listener.lock() = None;
            }
        }
        Ok(())
    }

    fn set_message_handler(&self, handler: Option<DebugMessageHandler>) -> EngineResult<()> {
        match handler {
            Some(handler) => {
                if self.fail_handler_install.load(Ordering::SeqCst) {
                    return Err(EngineError::Registration(
                        "message pump unavailable".to_string(),
                    ));
                }
                self.handler_installs.fetch_add(1, Ordering::SeqCst);
                *self.handler.lock() = Some(handler);
            }
            None => {
                self.handler_removals.fetch_add(1, Ordering::SeqCst);
                *self.handler.lock() = None;
            }
        }
        Ok(())
    }

    fn new_context(&self) -> EngineResult<ContextHandle> {
        if self.fail_context_creation.load(Ordering::SeqCst) {
            return Err(EngineError::ContextAllocation("out of memory".to_string()));
        }
        let id = self.next_context_id.fetch_add(1, Ordering::SeqCst) + 1;
        Ok(ContextHandle::new(id))
    }

    fn set_security_token_undefined(&self, context: &ContextHandle) -> EngineResult<()> {
        self.relaxed_contexts.lock().push(context.id());
        Ok(())
    }

    fn install_debug_module(&self, context: &ContextHandle, global_name: &str) -> EngineResult<()> {
        self.installed_debug_modules
            .lock()
            .push((context.id(), global_name.to_string()));
        Ok(())
    }

    fn debug_break(&self) {
        self.break_requests.fetch_add(1, Ordering::SeqCst);
    }

    fn cancel_debug_break(&self) {
        self.cancel_requests.fetch_add(1, Ordering::SeqCst);
    }

    fn send_command(&self, payload: &[u8], client_data: Option<ClientData>) -> EngineResult<()> {
        self.sent_commands
            .lock()
            .push(DebugMessage::new(payload.to_vec(), client_data));
        Ok(())
    }
}
