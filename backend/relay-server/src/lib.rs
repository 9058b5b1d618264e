pub mod admin;
pub mod api;
pub mod error;
pub mod logger;
pub mod routes;


pub use api::{
    error::{ApiError, ApiErrorResponse, Result as ApiResult},
    extractors::notification_body::NotificationBody,
    notifications::{
        notifications::send_notification,
        send_notification_request::SendNotificationRequest,
        send_notification_response::SendNotificationResponse,
    },
};

pub use crate::routes::build_router;
