use crate::{ApiResult, NotificationBody, SendNotificationResponse};

use relay_ws::AppState;

use axum::{Json, extract::State};
use log::info;

/// POST /send - broadcast a notification to every connected client
pub async fn send_notification(
    State(state): State<AppState>,
    NotificationBody(request): NotificationBody,
) -> ApiResult<Json<SendNotificationResponse>> {
    info!("POST /send payload received: {request:?}");

    let payload = request.into_payload()?;

    let connected_clients = state.registry.total_count().await;
    info!("Connected clients: {connected_clients}");

    let delivered = state.broadcaster.broadcast(&payload).await?;

    let response = SendNotificationResponse::from_counts(connected_clients, delivered);
    match response {
        SendNotificationResponse::MessageLost { .. } => {
            info!("Message lost (no clients connected)");
        }
        SendNotificationResponse::Delivered { .. } => {
            info!("Message delivered to {delivered}/{connected_clients} client(s)");
        }
    }

    Ok(Json(response))
}
