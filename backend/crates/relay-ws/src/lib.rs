pub mod app_state;
pub mod broadcast_message;
pub mod connection_config;
pub mod connection_id;
pub mod connection_info;
pub mod connection_registry;
pub mod error;
pub mod metrics;
pub mod notification_broadcaster;
pub mod shutdown_coordinator;
pub mod shutdown_guard;
pub mod web_socket_connection;

pub use app_state::{AppState, handler, remote_addr, upgrade};
pub use broadcast_message::BroadcastMessage;
pub use connection_config::ConnectionConfig;
pub use connection_id::ConnectionId;
pub use connection_info::ConnectionInfo;
pub use connection_registry::ConnectionRegistry;
pub use error::{Result, WsError};
pub use metrics::Metrics;
pub use notification_broadcaster::NotificationBroadcaster;
pub use shutdown_coordinator::ShutdownCoordinator;
pub use shutdown_guard::ShutdownGuard;
pub use web_socket_connection::WebSocketConnection;

#[cfg(test)]
mod tests;

use std::net::SocketAddr;

use tracing::info_span;

/// Create a tracing span for one WebSocket connection.
/// All log entries emitted while the connection is served carry these fields.
pub fn create_connection_span(
    connection_id: ConnectionId,
    remote_addr: Option<SocketAddr>,
) -> tracing::Span {
    info_span!(
        "ws_connection",
        connection_id = %connection_id,
        remote_addr = %display_addr(remote_addr),
    )
}

/// Render an optional peer address for log lines
pub fn display_addr(remote_addr: Option<SocketAddr>) -> String {
    remote_addr
        .map(|addr| addr.to_string())
        .unwrap_or_else(|| "unknown".to_string())
}
