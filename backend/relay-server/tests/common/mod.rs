#![allow(dead_code)]

use relay_server::build_router;
use relay_ws::{AppState, ConnectionConfig, ShutdownCoordinator};

use axum_test::{TestServer, TestWebSocket};

/// Test server with access to AppState for testing
pub struct TestServerWithState {
    pub server: TestServer,
    pub app_state: AppState,
}

/// Create a TestServer running the full relay router
pub fn create_test_server() -> TestServerWithState {
    let app_state = AppState::new(ConnectionConfig::default(), ShutdownCoordinator::new());
    let server = TestServer::builder()
        .http_transport()
        .build(build_router(app_state.clone()))
        .expect("Failed to create test server");

    TestServerWithState { server, app_state }
}

/// Connect a WebSocket client at `path`
pub async fn connect_client(server: &TestServer, path: &str) -> TestWebSocket {
    server.get_websocket(path).await.into_websocket().await
}
