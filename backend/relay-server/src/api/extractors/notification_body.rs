//! Lenient body extractor for `POST /send`

use crate::{ApiError, SendNotificationRequest};

use std::future::Future;

use axum::{
    Json,
    body::Bytes,
    extract::{FromRequest, Request},
    http::header,
};

/// The `/send` request body.
///
/// Bodies without a JSON content type, and empty or whitespace-only JSON
/// bodies, read as `{}` and then fail the required-field check like any
/// other incomplete request. Only a non-empty malformed JSON body surfaces
/// the parser's message.
pub struct NotificationBody(pub SendNotificationRequest);

impl<S> FromRequest<S> for NotificationBody
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request(
        req: Request,
        state: &S,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            let is_json = has_json_content_type(&req);

            let bytes = Bytes::from_request(req, state)
                .await
                .map_err(|rejection| ApiError::invalid_request(rejection.body_text()))?;

            if !is_json || bytes.iter().all(u8::is_ascii_whitespace) {
                log::debug!("Empty or non-JSON body on /send, reading as {{}}");
                return Ok(NotificationBody(SendNotificationRequest::default()));
            }

            let Json(request) = Json::<SendNotificationRequest>::from_bytes(&bytes)?;
            Ok(NotificationBody(request))
        }
    }
}

/// `application/json` or any `+json` media type, parameters ignored
fn has_json_content_type(req: &Request) -> bool {
    req.headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(';').next())
        .map(|mime| {
            let mime = mime.trim().to_ascii_lowercase();
            mime == "application/json" || mime.ends_with("+json")
        })
        .unwrap_or(false)
}
