use crate::{BroadcastMessage, ConnectionRegistry, Metrics, Result as WsErrorResult};

use relay_core::NotificationPayload;

use log::{debug, info};
use tokio::sync::mpsc::error::TrySendError;

/// Fans a notification out to every connection in the registry.
///
/// Delivery is best-effort: each write is a non-blocking `try_send` onto the
/// connection's outgoing buffer, and nothing waits for the client.
#[derive(Clone)]
pub struct NotificationBroadcaster {
    registry: ConnectionRegistry,
    metrics: Metrics,
}

impl NotificationBroadcaster {
    pub fn new(registry: ConnectionRegistry, metrics: Metrics) -> Self {
        Self { registry, metrics }
    }

    /// Broadcast a payload, returning how many connections it was written to.
    ///
    /// Connections found closed are skipped and dropped from the registry.
    /// Connections with a full buffer are skipped for this message only.
    pub async fn broadcast(&self, payload: &NotificationPayload) -> WsErrorResult<usize> {
        let message = BroadcastMessage::from_payload(payload)?;
        let connections = self.registry.snapshot().await;

        info!(
            "Broadcasting notification to {} connection(s)",
            connections.len()
        );
        debug!("Broadcast payload: {}", message.as_str());

        let mut delivered = 0;
        let mut closed = Vec::new();

        for connection in &connections {
            if !connection.is_open() {
                closed.push(connection.connection_id);
                continue;
            }

            match connection.sender.try_send(message.to_message()) {
                Ok(()) => delivered += 1,
                Err(TrySendError::Full(_)) => {
                    debug!(
                        "Send buffer full for connection {}, skipping",
                        connection.connection_id
                    );
                }
                Err(TrySendError::Closed(_)) => {
                    closed.push(connection.connection_id);
                }
            }
        }

        for connection_id in closed {
            self.registry.unregister(connection_id).await;
        }

        self.metrics.broadcast_completed(connections.len(), delivered);
        info!("Notification delivered to {delivered} client(s)");

        Ok(delivered)
    }
}
