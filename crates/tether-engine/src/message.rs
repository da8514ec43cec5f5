//! Protocol messages and the client-data attachment mechanism.

use std::any::Any;
use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

/// Opaque host-side object carried through the engine's message round trip.
pub type HostObject = Arc<dyn Any + Send + Sync>;

/// Engine-visible attachment whose sole field is a host object reference.
///
/// The host attaches one to an outbound command; the engine echoes it back
/// on the corresponding response message. Its lifetime belongs to the
/// engine's message-posting machinery, not to the bridge.
#[derive(Clone)]
pub struct ClientData {
    data: HostObject,
}

impl ClientData {
    /// Wrap a host object for attachment to an outbound command.
    pub fn new(data: HostObject) -> Self {
        Self { data }
    }

    /// The attached host object. Cloning the `Arc` preserves identity.
    pub fn data(&self) -> HostObject {
        Arc::clone(&self.data)
    }
}

impl fmt::Debug for ClientData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientData").finish_non_exhaustive()
    }
}

/// A protocol message delivered by the engine's message pump.
///
/// The payload is a length-delimited byte blob of engine-protocol JSON; it
/// is never NUL-terminated and may contain embedded NUL bytes.
#[derive(Debug, Clone)]
pub struct DebugMessage {
    payload: Vec<u8>,
    client_data: Option<ClientData>,
}

impl DebugMessage {
    /// Build a message from its serialized payload and optional attachment.
    pub fn new(payload: impl Into<Vec<u8>>, client_data: Option<ClientData>) -> Self {
        Self {
            payload: payload.into(),
            client_data,
        }
    }

    /// The raw serialized payload.
    pub fn payload(&self) -> &[u8] {
        &self.payload
    }

    /// Decode the payload as UTF-8 text over its explicit length. Invalid
    /// sequences are replaced rather than rejected; embedded NULs survive.
    pub fn payload_text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.payload)
    }

    /// The client-data attachment echoed from the triggering command, if any.
    pub fn client_data(&self) -> Option<&ClientData> {
        self.client_data.as_ref()
    }
}
