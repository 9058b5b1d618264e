use crate::ConnectionId;

use std::net::SocketAddr;

use axum::extract::ws::Message;
use chrono::DateTime;
use tokio::sync::mpsc;

/// Information about an active connection
#[derive(Debug, Clone)]
pub struct ConnectionInfo {
    pub connection_id: ConnectionId,
    pub remote_addr: Option<SocketAddr>,
    pub connected_at: DateTime<chrono::Utc>,
    /// Feeds the connection's socket writer task
    pub sender: mpsc::Sender<Message>,
}

impl ConnectionInfo {
    /// A connection is open until its writer task drops the receiving end
    pub fn is_open(&self) -> bool {
        !self.sender.is_closed()
    }
}
