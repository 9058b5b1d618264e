pub mod notification_body;
