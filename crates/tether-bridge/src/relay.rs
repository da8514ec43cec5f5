//! Engine → host relay paths.
//!
//! These run on engine threads, inside engine internals, at arbitrary
//! points. The hard rules: check the enabled flag before doing any work,
//! take the host reentry lock before touching host state, and never let a
//! host panic unwind into engine frames.

use std::any::Any;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::atomic::Ordering;

use tether_engine::{DebugMessage, EventData, EventDetails, ExecutionState};

use crate::bridge::BridgeShared;

/// Debug-event relay. Invoked synchronously by the engine for every debug
/// event while a listener is registered.
pub(crate) fn on_debug_event(shared: &BridgeShared, details: &EventDetails<'_>) {
    // Lock-free gate: when disabled, no host reentry, no wrapper
    // construction.
    if !shared.enabled.load(Ordering::Acquire) {
        return;
    }

    let mut slot = shared.on_event.lock();
    let Some(callback) = slot.as_mut() else {
        return;
    };

    // Holding the slot lock across the invocation keeps deliveries from
    // ever interleaving; the host lock serializes us against the rest of
    // the host runtime.
    let _host = shared.host.lock();

    let state = ExecutionState::new(details.execution_state());
    let data = EventData::new(details.event_data());

    let kind = details.kind();
    if let Err(payload) = catch_unwind(AssertUnwindSafe(|| callback(kind, &state, &data))) {
        report_callback_panic("event", &payload);
    }
}

/// Debug-message relay. Invoked by the engine's message pump, potentially
/// on a different thread than script execution.
pub(crate) fn on_debug_message(shared: &BridgeShared, message: &DebugMessage) {
    if !shared.enabled.load(Ordering::Acquire) {
        return;
    }

    let mut slot = shared.on_message.lock();
    let Some(callback) = slot.as_mut() else {
        // No handler: skip payload decoding entirely.
        return;
    };

    let json = message.payload_text().into_owned();
    let client_data = message.client_data().map(|attachment| attachment.data());

    let _host = shared.host.lock();

    if let Err(payload) = catch_unwind(AssertUnwindSafe(move || callback(&json, client_data))) {
        report_callback_panic("message", &payload);
    }
}

/// Host error channel for contained callback panics. The event is lost but
/// reported; the callback stays registered and the next delivery proceeds.
fn report_callback_panic(which: &str, payload: &(dyn Any + Send)) {
    let text = if let Some(s) = payload.downcast_ref::<&'static str>() {
        s
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.as_str()
    } else {
        "non-string panic payload"
    };
    tracing::error!("[debug_bridge] {which} callback panicked: {text}");
}
