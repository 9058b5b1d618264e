mod action_type;
mod notification_payload;
