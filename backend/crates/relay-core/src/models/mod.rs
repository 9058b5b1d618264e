pub mod action_type;
pub mod notification_payload;
