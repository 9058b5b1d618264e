#[allow(clippy::module_inception)]
pub mod notifications;
pub mod send_notification_request;
pub mod send_notification_response;
