use crate::{ConnectionId, ConnectionInfo, display_addr};

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::ws::Message;
use log::info;
use tokio::sync::{RwLock, mpsc};

/// Registry for tracking active WebSocket connections
pub struct ConnectionRegistry {
    inner: Arc<RwLock<RegistryInner>>,
}

struct RegistryInner {
    /// All active connections by connection_id
    connections: HashMap<ConnectionId, ConnectionInfo>,
}

impl ConnectionRegistry {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(RegistryInner {
                connections: HashMap::new(),
            })),
        }
    }

    /// Register a new connection
    pub async fn register(
        &self,
        remote_addr: Option<SocketAddr>,
        sender: mpsc::Sender<Message>,
    ) -> ConnectionId {
        let mut inner = self.inner.write().await;

        let connection_id = ConnectionId::new();
        let info = ConnectionInfo {
            connection_id,
            remote_addr,
            connected_at: chrono::Utc::now(),
            sender,
        };

        inner.connections.insert(connection_id, info);
        info!(
            "Client connected from {} as {connection_id} ({} total)",
            display_addr(remote_addr),
            inner.connections.len()
        );

        connection_id
    }

    /// Unregister a connection. Unknown ids are ignored.
    pub async fn unregister(&self, connection_id: ConnectionId) {
        let mut inner = self.inner.write().await;

        if let Some(info) = inner.connections.remove(&connection_id) {
            let session = chrono::Utc::now() - info.connected_at;
            info!(
                "Client disconnected: {} ({connection_id}, connected {}s, {} total remaining)",
                display_addr(info.remote_addr),
                session.num_seconds(),
                inner.connections.len()
            );
        }
    }

    /// Get information about a specific connection
    pub async fn get(&self, connection_id: ConnectionId) -> Option<ConnectionInfo> {
        let inner = self.inner.read().await;
        inner.connections.get(&connection_id).cloned()
    }

    /// Get total connection count
    pub async fn total_count(&self) -> usize {
        let inner = self.inner.read().await;
        inner.connections.len()
    }

    /// Copy of every registered connection, taken under a single read lock
    pub async fn snapshot(&self) -> Vec<ConnectionInfo> {
        let inner = self.inner.read().await;
        inner.connections.values().cloned().collect()
    }
}

impl Default for ConnectionRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for ConnectionRegistry {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}
