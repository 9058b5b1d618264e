use crate::Result as WsErrorResult;

use relay_core::NotificationPayload;

use axum::extract::ws::{Message, Utf8Bytes};

/// A notification serialized once, ready to be written to every client
#[derive(Debug, Clone)]
pub struct BroadcastMessage {
    text: Utf8Bytes,
}

impl BroadcastMessage {
    #[track_caller]
    pub fn from_payload(payload: &NotificationPayload) -> WsErrorResult<Self> {
        let json = serde_json::to_string(payload)?;
        Ok(Self {
            text: Utf8Bytes::from(json),
        })
    }

    pub fn as_str(&self) -> &str {
        self.text.as_str()
    }

    /// Text frame sharing the serialized buffer
    pub fn to_message(&self) -> Message {
        Message::Text(self.text.clone())
    }
}
