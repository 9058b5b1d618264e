use crate::{ActionType, CoreError, Result as CoreErrorResult};

use std::panic::Location;

use error_location::ErrorLocation;
use serde::Serialize;

/// A notification pushed verbatim to every connected client.
///
/// Field order is part of the wire format: clients receive
/// `{"title","body","image_url","action_type","action_value"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NotificationPayload {
    title: String,
    body: String,
    image_url: String,
    action_type: ActionType,
    action_value: String,
}

impl NotificationPayload {
    /// Build a payload with the required fields and defaults for the rest.
    ///
    /// Both `title` and `body` must be non-empty.
    #[track_caller]
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> CoreErrorResult<Self> {
        let title = title.into();
        let body = body.into();

        for (field, value) in [("title", &title), ("body", &body)] {
            if value.is_empty() {
                return Err(CoreError::Validation {
                    message: format!("{field} is required"),
                    field: Some(field.to_string()),
                    location: ErrorLocation::from(Location::caller()),
                });
            }
        }

        Ok(Self {
            title,
            body,
            image_url: String::new(),
            action_type: ActionType::default(),
            action_value: String::new(),
        })
    }

    pub fn with_image_url(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = image_url.into();
        self
    }

    pub fn with_action(mut self, action_type: ActionType, action_value: impl Into<String>) -> Self {
        self.action_type = action_type;
        self.action_value = action_value.into();
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn image_url(&self) -> &str {
        &self.image_url
    }

    pub fn action_type(&self) -> &ActionType {
        &self.action_type
    }

    pub fn action_value(&self) -> &str {
        &self.action_value
    }
}
