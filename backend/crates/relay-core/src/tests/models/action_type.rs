use crate::ActionType;

#[test]
fn test_action_type_as_str() {
    assert_eq!(ActionType::Report.as_str(), "report");
    assert_eq!(ActionType::Url.as_str(), "url");
    assert_eq!(ActionType::None.as_str(), "none");
    assert_eq!(ActionType::Other("popup".into()).as_str(), "popup");
}

#[test]
fn test_action_type_from_known_names() {
    assert_eq!(ActionType::from("report"), ActionType::Report);
    assert_eq!(ActionType::from("url"), ActionType::Url);
    assert_eq!(ActionType::from("none"), ActionType::None);
}

#[test]
fn given_empty_string_when_converted_then_none() {
    assert_eq!(ActionType::from(""), ActionType::None);
}

#[test]
fn given_unknown_name_when_converted_then_kept_as_is() {
    // Case is not normalised; the client sees exactly what was sent
    assert_eq!(ActionType::from("REPORT"), ActionType::Other("REPORT".into()));
    assert_eq!(ActionType::from("popup"), ActionType::Other("popup".into()));
}

#[test]
fn test_action_type_default() {
    assert_eq!(ActionType::default(), ActionType::None);
}

#[test]
fn test_action_type_serializes_as_plain_string() {
    assert_eq!(serde_json::to_string(&ActionType::Url).unwrap(), "\"url\"");
    assert_eq!(
        serde_json::to_string(&ActionType::Other("deep_link".into())).unwrap(),
        "\"deep_link\""
    );
}
