//! Demo of attaching a debug bridge to a toy engine.
//!
//! Run with: cargo run -p tether-bridge --example attach

use std::sync::Arc;

use parking_lot::Mutex;

use tether_bridge::{
    ClientData, ContextHandle, DebugBridge, DebugEngine, DebugEventKind, DebugEventListener,
    DebugMessage, DebugMessageHandler, DebugValue, EngineResult, EventDetails, HostLock,
    HostObject,
};

/// Minimal engine: keeps the registered hooks and lets us pump events and
/// messages through them from an "engine" thread.
#[derive(Default)]
struct ToyEngine {
    listener: Mutex<Option<DebugEventListener>>,
    handler: Mutex<Option<DebugMessageHandler>>,
    contexts: Mutex<u64>,
}

#[derive(Debug)]
struct Snapshot(serde_json::Value);

impl DebugValue for Snapshot {
    fn to_json(&self) -> serde_json::Value {
        self.0.clone()
    }
}

impl ToyEngine {
    fn raise_event(&self, kind: DebugEventKind, script: &str) {
        let state = Snapshot(serde_json::json!({ "frames": [] }));
        let data = Snapshot(serde_json::json!({ "script": script }));
        if let Some(listener) = self.listener.lock().as_mut() {
            listener(&EventDetails::new(kind, &state, &data));
        }
    }

    fn post_message(&self, json: &str, client_data: Option<ClientData>) {
        if let Some(handler) = self.handler.lock().as_mut() {
            handler(&DebugMessage::new(json.as_bytes().to_vec(), client_data));
        }
    }
}

impl DebugEngine for ToyEngine {
    fn set_event_listener(&self, listener: Option<DebugEventListener>) -> EngineResult<()> {
        *self.listener.lock() = listener;
        Ok(())
    }

    fn set_message_handler(&self, handler: Option<DebugMessageHandler>) -> EngineResult<()> {
        *self.handler.lock() = handler;
        Ok(())
    }

    fn new_context(&self) -> EngineResult<ContextHandle> {
        let mut next = self.contexts.lock();
        *next += 1;
        Ok(ContextHandle::new(*next))
    }

    fn set_security_token_undefined(&self, _context: &ContextHandle) -> EngineResult<()> {
        Ok(())
    }

    fn install_debug_module(&self, _context: &ContextHandle, _global_name: &str) -> EngineResult<()> {
        Ok(())
    }

    fn debug_break(&self) {}

    fn cancel_debug_break(&self) {}

    fn send_command(&self, payload: &[u8], client_data: Option<ClientData>) -> EngineResult<()> {
        // A real engine would parse and answer; the toy echoes immediately.
        let json = String::from_utf8_lossy(payload).into_owned();
        self.post_message(&json, client_data);
        Ok(())
    }
}

fn main() {
    tracing_subscriber::fmt().with_env_filter("debug").init();

    let engine = Arc::new(ToyEngine::default());
    let bridge = DebugBridge::new(engine.clone(), HostLock::new()).expect("attach failed");

    bridge.set_event_callback(Some(Box::new(|kind, state, data| {
        println!(
            "event: {:?} state={} data={}",
            kind,
            state.to_json(),
            data.to_json()
        );
    })));
    bridge.set_message_callback(Some(Box::new(|json, client_data: Option<HostObject>| {
        println!("message: {} (client data attached: {})", json, client_data.is_some());
    })));

    bridge.set_enabled(true).expect("enable failed");

    // Engine-side activity happens on its own thread.
    let engine_thread = {
        let engine = Arc::clone(&engine);
        std::thread::spawn(move || {
            engine.raise_event(DebugEventKind::AfterCompile, "app.js");
            engine.raise_event(DebugEventKind::Break, "app.js");
        })
    };
    engine_thread.join().unwrap();

    // Outbound command; the toy engine echoes the attachment straight back.
    let pending: HostObject = Arc::new(String::from("eval #1"));
    bridge
        .send_command("{\"command\":\"evaluate\",\"expression\":\"1+1\"}", Some(pending))
        .expect("send failed");

    bridge.set_enabled(false).expect("disable failed");
    engine.raise_event(DebugEventKind::Break, "app.js");

    println!("debug context id: {}", bridge.debug_context().id());
}
