use serde::Serialize;

pub const NO_ACTIVE_CLIENTS: &str = "no active websocket clients";

/// Outcome of `POST /send`
#[derive(Debug, Serialize, PartialEq, Eq)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SendNotificationResponse {
    /// At least one client was connected when the request arrived
    Delivered {
        #[serde(rename = "connectedClients")]
        connected_clients: usize,
        delivered: usize,
    },
    /// Nobody was connected; the notification is gone
    MessageLost {
        reason: &'static str,
        #[serde(rename = "connectedClients")]
        connected_clients: usize,
    },
}

impl SendNotificationResponse {
    /// Classify a broadcast by the connection count seen before it ran
    pub fn from_counts(connected_clients: usize, delivered: usize) -> Self {
        if connected_clients == 0 {
            Self::MessageLost {
                reason: NO_ACTIVE_CLIENTS,
                connected_clients: 0,
            }
        } else {
            Self::Delivered {
                connected_clients,
                delivered,
            }
        }
    }
}
