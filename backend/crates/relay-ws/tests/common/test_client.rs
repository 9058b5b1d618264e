#![allow(dead_code)]

use axum_test::{TestServer, TestWebSocket, WsMessage};
use tokio::time::{Duration, timeout};

/// WebSocket test client wrapper
pub struct WsTestClient {
    ws: TestWebSocket,
}

impl WsTestClient {
    /// Connect to the WebSocket endpoint
    pub async fn connect(server: &TestServer) -> Self {
        let ws = server
            .get_websocket("/ws")
            .await
            .into_websocket()
            .await;

        Self { ws }
    }

    /// Receive text message
    pub async fn receive_text(&mut self) -> String {
        self.ws.receive_text().await
    }

    /// Receive a text message and parse it as JSON
    pub async fn receive_json(&mut self) -> serde_json::Value {
        let text = self.receive_text().await;
        serde_json::from_str(&text).expect("Server pushed invalid JSON")
    }

    /// True if nothing arrives within `wait`
    pub async fn receives_nothing_within(&mut self, wait: Duration) -> bool {
        timeout(wait, self.ws.receive_text()).await.is_err()
    }

    /// Send text message (ignored by the relay)
    pub async fn send_text(&mut self, text: impl std::fmt::Display) {
        self.ws.send_text(text).await;
    }

    /// Send a ping frame
    pub async fn send_ping(&mut self, payload: &[u8]) {
        self.ws.send_message(WsMessage::Ping(payload.to_vec().into())).await;
    }

    /// Next frame of any kind, or None if nothing arrives within `wait`
    pub async fn next_frame_within(&mut self, wait: Duration) -> Option<WsMessage> {
        timeout(wait, self.ws.receive_message()).await.ok()
    }

    /// Close the WebSocket connection
    pub async fn close(self) {
        self.ws.close().await;
    }
}

/// Connect several clients to the same server
pub async fn connect_clients(server: &TestServer, count: usize) -> Vec<WsTestClient> {
    let mut clients = Vec::with_capacity(count);
    for _ in 0..count {
        clients.push(WsTestClient::connect(server).await);
    }
    clients
}
