pub mod error;
pub mod models;

#[cfg(test)]
mod tests;

pub use error::{CoreError, Result};
pub use models::action_type::ActionType;
pub use models::notification_payload::NotificationPayload;
