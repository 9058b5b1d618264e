use crate::{
    ConnectionConfig, ConnectionId, ConnectionRegistry, Metrics, NotificationBroadcaster,
    ShutdownCoordinator, WebSocketConnection, create_connection_span,
};

use std::net::SocketAddr;

use axum::{
    extract::{
        ConnectInfo, State,
        ws::{Message, WebSocket, WebSocketUpgrade},
    },
    http::Extensions,
    response::Response,
};
use log::{error, warn};
use tokio::sync::mpsc;
use tracing::Instrument;

/// Shared application state for WebSocket and HTTP handlers
#[derive(Clone)]
pub struct AppState {
    pub registry: ConnectionRegistry,
    pub broadcaster: NotificationBroadcaster,
    pub metrics: Metrics,
    pub shutdown: ShutdownCoordinator,
    pub config: ConnectionConfig,
}

impl AppState {
    /// Build state whose broadcaster fans out over its own registry
    pub fn new(config: ConnectionConfig, shutdown: ShutdownCoordinator) -> Self {
        let registry = ConnectionRegistry::new();
        let metrics = Metrics::new();
        let broadcaster = NotificationBroadcaster::new(registry.clone(), metrics.clone());

        Self {
            registry,
            broadcaster,
            metrics,
            shutdown,
            config,
        }
    }
}

/// WebSocket upgrade handler
pub async fn handler(
    State(state): State<AppState>,
    extensions: Extensions,
    ws: WebSocketUpgrade,
) -> Response {
    upgrade(state, ws, remote_addr(&extensions)).await
}

/// Peer address, when the server was started with connect info
pub fn remote_addr(extensions: &Extensions) -> Option<SocketAddr> {
    extensions
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| *addr)
}

/// Register the connection and complete the upgrade.
///
/// Registration happens before the 101 response goes out, so a client is
/// counted as soon as its handshake completes. Broadcasts that arrive before
/// the socket task starts wait in the connection's buffer.
pub async fn upgrade(
    state: AppState,
    ws: WebSocketUpgrade,
    remote_addr: Option<SocketAddr>,
) -> Response {
    let (sender, receiver) = mpsc::channel::<Message>(state.config.send_buffer_size.max(1));

    let connection_id = state.registry.register(remote_addr, sender.clone()).await;

    let registry = state.registry.clone();
    ws.on_failed_upgrade(move |e| {
        warn!("WebSocket upgrade failed for connection {connection_id}: {e}");
        tokio::spawn(async move { registry.unregister(connection_id).await });
    })
    .on_upgrade(move |socket| {
        let span = create_connection_span(connection_id, remote_addr);
        handle_socket(socket, connection_id, remote_addr, sender, receiver, state)
            .instrument(span)
    })
}

/// Handle WebSocket connection after upgrade
async fn handle_socket(
    socket: WebSocket,
    connection_id: ConnectionId,
    remote_addr: Option<SocketAddr>,
    sender: mpsc::Sender<Message>,
    receiver: mpsc::Receiver<Message>,
    state: AppState,
) {
    let shutdown_guard = state.shutdown.subscribe_guard();

    let connection = WebSocketConnection::new(
        connection_id,
        remote_addr,
        state.registry,
        state.metrics,
        sender,
    );

    if let Err(e) = connection.handle(socket, receiver, shutdown_guard).await {
        error!("Connection {connection_id} error: {e}");
    }
}
