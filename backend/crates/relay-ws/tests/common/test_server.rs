#![allow(dead_code)]

use relay_ws::{AppState, ConnectionConfig, ShutdownCoordinator};

use axum::{Router, routing::get};
use axum_test::TestServer;

/// Configuration for test server instances
#[derive(Debug, Clone)]
pub struct TestServerConfig {
    pub send_buffer_size: usize,
}

impl Default for TestServerConfig {
    fn default() -> Self {
        Self {
            send_buffer_size: ConnectionConfig::default().send_buffer_size,
        }
    }
}

impl TestServerConfig {
    /// Tiny per-connection buffer (for slow-client tests)
    pub fn with_small_buffer() -> Self {
        Self {
            send_buffer_size: 1,
        }
    }
}

/// Test server with access to AppState for testing
pub struct TestServerWithState {
    pub server: TestServer,
    pub app_state: AppState,
}

/// Create a TestServer with default configuration
pub fn create_test_server() -> TestServerWithState {
    create_test_server_with_config(TestServerConfig::default())
}

/// Create a TestServer with custom configuration
pub fn create_test_server_with_config(config: TestServerConfig) -> TestServerWithState {
    let (app, app_state) = create_app(config);
    let server = TestServer::builder()
        .http_transport()
        .build(app)
        .expect("Failed to create test server");

    TestServerWithState { server, app_state }
}

/// Build the Axum Router with AppState
fn create_app(config: TestServerConfig) -> (Router, AppState) {
    let connection_config = ConnectionConfig {
        send_buffer_size: config.send_buffer_size,
    };
    let app_state = AppState::new(connection_config, ShutdownCoordinator::new());

    let router = Router::new()
        .route("/ws", get(relay_ws::handler))
        .with_state(app_state.clone());

    (router, app_state)
}
