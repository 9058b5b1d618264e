use crate::{admin, send_notification};

use relay_ws::AppState;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::cors::{Any, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Admin form (and WebSocket upgrade at the root)
        .route("/", get(admin::index))
        // WebSocket endpoint
        .route("/ws", get(relay_ws::handler))
        // Broadcast API
        .route("/send", post(send_notification))
        .with_state(state)
        // CORS middleware (scripts on other origins may call /send)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
