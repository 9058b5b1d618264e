use crate::ApiResult;

use relay_core::{ActionType, NotificationPayload};

use serde::Deserialize;

/// Body of `POST /send`.
///
/// Every field is optional at the JSON level; absent, null and empty
/// strings are all treated as "not provided".
#[derive(Debug, Default, Deserialize)]
pub struct SendNotificationRequest {
    #[serde(default)]
    pub title: Option<String>,

    #[serde(default)]
    pub body: Option<String>,

    #[serde(default)]
    pub image_url: Option<String>,

    /// "report", "url" or "none" (default); other values pass through
    #[serde(default)]
    pub action_type: Option<String>,

    #[serde(default)]
    pub action_value: Option<String>,
}

impl SendNotificationRequest {
    /// Validate required fields and fill in defaults for the rest
    #[track_caller]
    pub fn into_payload(self) -> ApiResult<NotificationPayload> {
        let payload = NotificationPayload::new(
            self.title.unwrap_or_default(),
            self.body.unwrap_or_default(),
        )?;

        let action_type = self
            .action_type
            .as_deref()
            .map(ActionType::from)
            .unwrap_or_default();

        Ok(payload
            .with_image_url(self.image_url.unwrap_or_default())
            .with_action(action_type, self.action_value.unwrap_or_default()))
    }
}
