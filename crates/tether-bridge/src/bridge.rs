//! The debug bridge: context ownership, enable/disable control, and the
//! host-facing control surface.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;

use tether_engine::{
    ClientData, ContextHandle, DebugEngine, DebugEventKind, DebugEventListener,
    DebugMessageHandler, EventData, ExecutionState, HostObject,
};

use crate::error::BridgeError;
use crate::lock::HostLock;
use crate::relay;

/// Global property under which the engine's internal debugger module is
/// bound inside the debug context (`debugger` feature).
pub const DEBUG_GLOBAL_NAME: &str = "$debug";

/// Host callback invoked for each debug event while the bridge is enabled.
///
/// The execution-state and event-data views borrow engine handles and are
/// valid only for the duration of the call.
pub type EventCallback =
    Box<dyn FnMut(DebugEventKind, &ExecutionState<'_>, &EventData<'_>) + Send>;

/// Host callback invoked for each protocol message while the bridge is
/// enabled. Receives the decoded JSON text and the host object attached to
/// the triggering command, if any.
pub type MessageCallback = Box<dyn FnMut(&str, Option<HostObject>) + Send>;

/// State shared between the bridge and the hook closures it registers.
///
/// `enabled` is read on engine threads without the reentry lock held, so it
/// uses acquire/release ordering. The callback slots are mutated from host
/// call sites and invoked from engine threads, hence the mutexes.
pub(crate) struct BridgeShared {
    pub(crate) enabled: AtomicBool,
    pub(crate) on_event: Mutex<Option<EventCallback>>,
    pub(crate) on_message: Mutex<Option<MessageCallback>>,
    pub(crate) host: HostLock,
}

impl BridgeShared {
    pub(crate) fn new(host: HostLock) -> Self {
        Self {
            enabled: AtomicBool::new(false),
            on_event: Mutex::new(None),
            on_message: Mutex::new(None),
            host,
        }
    }
}

/// Bridge between an embedded JavaScript engine's debugging facility and
/// host-registered callbacks.
///
/// Constructed explicitly by the embedding application and dropped when
/// debugging ends; dropping detaches the engine hooks. The engine's
/// listener and handler slots are global to the engine instance, so at most
/// one bridge should be attached to an engine at a time; attaching a
/// second replaces the first's hooks.
pub struct DebugBridge {
    engine: Arc<dyn DebugEngine>,
    shared: Arc<BridgeShared>,
    debug_context: ContextHandle,
    eval_context: ContextHandle,
}

impl DebugBridge {
    /// Attach to an engine: create the bridge's dedicated debug and eval
    /// contexts, relax their security tokens to the undefined sentinel so
    /// trusted host code can reach them from any context, and (with the
    /// `debugger` feature) install the engine's internal debugger module
    /// under [`DEBUG_GLOBAL_NAME`].
    ///
    /// A failure here is fatal for debugging: no bridge exists and nothing
    /// is retried.
    pub fn new(engine: Arc<dyn DebugEngine>, host: HostLock) -> Result<Self, BridgeError> {
        let debug_context = engine.new_context().map_err(BridgeError::ContextSetup)?;
        engine
            .set_security_token_undefined(&debug_context)
            .map_err(BridgeError::ContextSetup)?;

        let eval_context = engine.new_context().map_err(BridgeError::ContextSetup)?;
        engine
            .set_security_token_undefined(&eval_context)
            .map_err(BridgeError::ContextSetup)?;

        #[cfg(feature = "debugger")]
        engine
            .install_debug_module(&debug_context, DEBUG_GLOBAL_NAME)
            .map_err(BridgeError::ContextSetup)?;

        tracing::debug!(
            "[debug_bridge] attached; debug ctx {}, eval ctx {}",
            debug_context.id(),
            eval_context.id()
        );

        Ok(Self {
            engine,
            shared: Arc::new(BridgeShared::new(host)),
            debug_context,
            eval_context,
        })
    }

    /// Whether debug event and message delivery is currently enabled.
    pub fn enabled(&self) -> bool {
        self.shared.enabled.load(Ordering::Acquire)
    }

    /// Enable or disable delivery. Idempotent: requesting the current state
    /// is a no-op.
    ///
    /// Enabling registers the bridge's event listener and message handler
    /// with the engine; the flag flips only after both registrations
    /// succeed, and a half-done registration is rolled back on failure.
    /// Disabling clears the flag first (engine threads stop delivering
    /// immediately) and then unregisters both hooks; if unregistration
    /// fails, the flag stays cleared and the relay's flag gate keeps
    /// suppressing deliveries.
    pub fn set_enabled(&self, enable: bool) -> Result<(), BridgeError> {
        if self.shared.enabled.load(Ordering::Acquire) == enable {
            return Ok(());
        }

        if enable {
            self.install_hooks()?;
            self.shared.enabled.store(true, Ordering::Release);
            tracing::debug!("[debug_bridge] enabled");
        } else {
            self.shared.enabled.store(false, Ordering::Release);
            self.remove_hooks()?;
            tracing::debug!("[debug_bridge] disabled");
        }

        Ok(())
    }

    /// Register (or clear) the debug-event callback.
    pub fn set_event_callback(&self, callback: Option<EventCallback>) {
        *self.shared.on_event.lock() = callback;
    }

    /// Register (or clear) the debug-message callback.
    pub fn set_message_callback(&self, callback: Option<MessageCallback>) {
        *self.shared.on_message.lock() = callback;
    }

    /// A new strong reference to the bridge's debug context.
    pub fn debug_context(&self) -> ContextHandle {
        self.debug_context.clone()
    }

    /// A new strong reference to the bridge's evaluation context.
    pub fn eval_context(&self) -> ContextHandle {
        self.eval_context.clone()
    }

    /// Ask the engine to interrupt at the next statement boundary.
    pub fn debug_break(&self) {
        self.engine.debug_break();
    }

    /// Cancel a pending break request. Does not cancel an in-flight
    /// callback invocation.
    pub fn cancel_debug_break(&self) {
        self.engine.cancel_debug_break();
    }

    /// Queue a serialized protocol command for the engine. The optional
    /// host object rides along as a client-data attachment and comes back
    /// with the corresponding response message.
    pub fn send_command(
        &self,
        json: &str,
        client_data: Option<HostObject>,
    ) -> Result<(), BridgeError> {
        let attachment = client_data.map(ClientData::new);
        self.engine
            .send_command(json.as_bytes(), attachment)
            .map_err(BridgeError::Send)
    }

    fn install_hooks(&self) -> Result<(), BridgeError> {
        let shared = Arc::clone(&self.shared);
        let listener: DebugEventListener =
            Box::new(move |details| relay::on_debug_event(&shared, details));
        self.engine
            .set_event_listener(Some(listener))
            .map_err(BridgeError::Registration)?;

        let shared = Arc::clone(&self.shared);
        let handler: DebugMessageHandler =
            Box::new(move |message| relay::on_debug_message(&shared, message));
        if let Err(err) = self.engine.set_message_handler(Some(handler)) {
            // Roll the listener back so a half-registered bridge never
            // outlives this call.
            if let Err(rollback) = self.engine.set_event_listener(None) {
                tracing::warn!("[debug_bridge] listener rollback failed: {rollback}");
            }
            return Err(BridgeError::Registration(err));
        }

        Ok(())
    }

    fn remove_hooks(&self) -> Result<(), BridgeError> {
        // Attempt both removals even if the first fails.
        let listener = self.engine.set_event_listener(None);
        let handler = self.engine.set_message_handler(None);
        listener.map_err(BridgeError::Registration)?;
        handler.map_err(BridgeError::Registration)?;
        Ok(())
    }
}

impl Drop for DebugBridge {
    fn drop(&mut self) {
        if self.shared.enabled.swap(false, Ordering::AcqRel) {
            if let Err(err) = self.remove_hooks() {
                tracing::warn!("[debug_bridge] detach during drop failed: {err}");
            }
        }
        tracing::debug!("[debug_bridge] detached");
    }
}

impl std::fmt::Debug for DebugBridge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DebugBridge")
            .field("enabled", &self.enabled())
            .field("debug_context", &self.debug_context)
            .field("eval_context", &self.eval_context)
            .finish_non_exhaustive()
    }
}
