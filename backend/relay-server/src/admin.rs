//! Admin page for sending notifications by hand.

use relay_ws::AppState;

use axum::{
    extract::{
        State,
        ws::{WebSocketUpgrade, rejection::WebSocketUpgradeRejection},
    },
    http::Extensions,
    response::{Html, IntoResponse, Response},
};

/// Static admin form; posts to `/send`
pub const ADMIN_PAGE: &str = include_str!("../assets/admin.html");

/// GET / - admin form, or a WebSocket upgrade when the client asks for one.
///
/// Clients connect to the server root, so both share the HTTP port.
pub async fn index(
    State(state): State<AppState>,
    extensions: Extensions,
    ws: Result<WebSocketUpgrade, WebSocketUpgradeRejection>,
) -> Response {
    match ws {
        Ok(ws) => relay_ws::upgrade(state, ws, relay_ws::remote_addr(&extensions)).await,
        Err(_) => Html(ADMIN_PAGE).into_response(),
    }
}
