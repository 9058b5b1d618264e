use crate::{ActionType, CoreError, NotificationPayload};

#[test]
fn given_title_and_body_when_new_then_optional_fields_default() {
    // When
    let payload = NotificationPayload::new("T", "B").unwrap();

    // Then
    assert_eq!(payload.title(), "T");
    assert_eq!(payload.body(), "B");
    assert_eq!(payload.image_url(), "");
    assert_eq!(payload.action_type(), &ActionType::None);
    assert_eq!(payload.action_value(), "");
}

#[test]
fn given_empty_title_when_new_then_validation_error() {
    let result = NotificationPayload::new("", "B");

    assert!(matches!(
        result,
        Err(CoreError::Validation { field: Some(ref f), .. }) if f == "title"
    ));
}

#[test]
fn given_empty_body_when_new_then_validation_error() {
    let result = NotificationPayload::new("T", "");

    assert!(matches!(
        result,
        Err(CoreError::Validation { field: Some(ref f), .. }) if f == "body"
    ));
}

#[test]
fn given_defaults_when_serialized_then_matches_wire_format() {
    // Given
    let payload = NotificationPayload::new("T", "B").unwrap();

    // When
    let json = serde_json::to_string(&payload).unwrap();

    // Then
    assert_eq!(
        json,
        r#"{"title":"T","body":"B","image_url":"","action_type":"none","action_value":""}"#
    );
}

#[test]
fn given_action_and_image_when_serialized_then_fields_carried() {
    // Given
    let payload = NotificationPayload::new("GST update", "New returns available")
        .unwrap()
        .with_image_url("https://example.com/promo.jpg")
        .with_action(ActionType::Report, "Balance Sheet");

    // When
    let value = serde_json::to_value(&payload).unwrap();

    // Then
    assert_eq!(value["image_url"], "https://example.com/promo.jpg");
    assert_eq!(value["action_type"], "report");
    assert_eq!(value["action_value"], "Balance Sheet");
}

#[test]
fn given_unrecognised_action_when_serialized_then_value_relayed_verbatim() {
    // Given
    let payload = NotificationPayload::new("T", "B")
        .unwrap()
        .with_action(ActionType::from("popup"), "promo-42");

    // When
    let json = serde_json::to_string(&payload).unwrap();

    // Then
    assert_eq!(
        json,
        r#"{"title":"T","body":"B","image_url":"","action_type":"popup","action_value":"promo-42"}"#
    );
}
