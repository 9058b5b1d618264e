use crate::{
    ConnectionId, ConnectionRegistry, Metrics, Result as WsErrorResult, ShutdownGuard, WsError,
    display_addr,
};

use std::net::SocketAddr;
use std::panic::Location;

use axum::extract::ws::{Message, WebSocket};
use error_location::ErrorLocation;
use futures::{SinkExt, StreamExt};
use tokio::sync::mpsc;

/// Manages a single WebSocket connection.
///
/// The relay only pushes; anything the client sends other than close is
/// ignored.
pub struct WebSocketConnection {
    connection_id: ConnectionId,
    remote_addr: Option<SocketAddr>,
    registry: ConnectionRegistry,
    metrics: Metrics,
    sender: mpsc::Sender<Message>,
}

impl WebSocketConnection {
    pub fn new(
        connection_id: ConnectionId,
        remote_addr: Option<SocketAddr>,
        registry: ConnectionRegistry,
        metrics: Metrics,
        sender: mpsc::Sender<Message>,
    ) -> Self {
        Self {
            connection_id,
            remote_addr,
            registry,
            metrics,
            sender,
        }
    }

    /// Handle the WebSocket connection lifecycle.
    ///
    /// `outbound` is the receiving end of the sender held by the registry;
    /// it is drained onto the socket until every sender is gone.
    pub async fn handle(
        self,
        socket: WebSocket,
        mut outbound: mpsc::Receiver<Message>,
        mut shutdown_guard: ShutdownGuard,
    ) -> WsErrorResult<()> {
        log::info!(
            "WebSocket connection {} established from {}",
            self.connection_id,
            display_addr(self.remote_addr)
        );

        self.metrics.connection_established();

        let (mut ws_sender, mut ws_receiver) = socket.split();

        // Writer task: a failed write drops `outbound`, which marks the
        // connection closed for the next broadcast.
        let send_task = tokio::spawn(async move {
            while let Some(msg) = outbound.recv().await {
                if ws_sender.send(msg).await.is_err() {
                    break;
                }
            }
        });

        let mut shutting_down = false;

        let result = loop {
            tokio::select! {
                msg = ws_receiver.next() => {
                    match msg {
                        Some(Ok(Message::Close(_))) => {
                            log::info!("Received close frame from connection {}", self.connection_id);
                            break Ok(());
                        }
                        Some(Ok(msg)) => self.handle_client_message(msg),
                        Some(Err(e)) => {
                            log::warn!(
                                "WebSocket error on connection {}: {}",
                                self.connection_id,
                                e
                            );
                            break Err(WsError::ConnectionClosed {
                                reason: format!("WebSocket error: {}", e),
                                location: ErrorLocation::from(Location::caller()),
                            });
                        }
                        None => {
                            log::info!("Connection {} closed by client", self.connection_id);
                            break Ok(());
                        }
                    }
                }

                _ = shutdown_guard.wait() => {
                    log::info!("Shutting down connection {} gracefully", self.connection_id);
                    shutting_down = true;
                    break Ok(());
                }
            }
        };

        // Cleanup: once unregistered, our sender is the last one that outlives
        // in-flight broadcasts, so dropping it ends the writer task.
        self.registry.unregister(self.connection_id).await;
        if shutting_down {
            let _ = self.sender.try_send(Message::Close(None));
        }
        drop(self.sender);
        let _ = send_task.await;

        self.metrics
            .connection_closed(if result.is_ok() { "normal" } else { "error" });

        log::info!(
            "WebSocket connection {} closed ({})",
            self.connection_id,
            display_addr(self.remote_addr)
        );

        result
    }

    /// Handle a message from the client
    fn handle_client_message(&self, msg: Message) {
        match msg {
            Message::Text(text) => {
                log::debug!(
                    "Ignoring text message ({} bytes) from connection {}",
                    text.as_str().len(),
                    self.connection_id
                );
                self.metrics.message_received("text");
            }
            Message::Binary(data) => {
                log::debug!(
                    "Ignoring binary message ({} bytes) from connection {}",
                    data.len(),
                    self.connection_id
                );
                self.metrics.message_received("binary");
            }
            // The transport answers pings itself
            Message::Ping(_) | Message::Pong(_) | Message::Close(_) => {}
        }
    }
}
