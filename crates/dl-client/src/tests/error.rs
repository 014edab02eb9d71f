use crate::{ClientError, normalize_messages};

use serde_json::json;

#[test]
fn given_string_message_when_normalized_then_single_entry() {
    let body = json!({ "error": { "message": "Invalid username/password", "status": 401 } });
    assert_eq!(
        normalize_messages(&body),
        Some(vec!["Invalid username/password".to_string()])
    );
}

#[test]
fn given_array_message_when_normalized_then_all_entries_in_order() {
    let body = json!({
        "error": {
            "message": ["instance requires property \"email\"", "password too short"]
        }
    });
    assert_eq!(
        normalize_messages(&body),
        Some(vec![
            "instance requires property \"email\"".to_string(),
            "password too short".to_string()
        ])
    );
}

#[test]
fn given_no_error_key_when_normalized_then_none() {
    assert_eq!(normalize_messages(&json!({ "detail": "nope" })), None);
}

#[test]
fn given_empty_array_when_normalized_then_none() {
    assert_eq!(normalize_messages(&json!({ "error": { "message": [] } })), None);
}

#[test]
fn given_null_message_when_normalized_then_none() {
    assert_eq!(normalize_messages(&json!({ "error": { "message": null } })), None);
}

#[test]
fn given_api_error_when_messages_then_verbatim() {
    let err = ClientError::api_error(400, vec!["a".to_string(), "b".to_string()]);
    assert_eq!(err.messages(), vec!["a", "b"]);
    assert_eq!(err.status(), Some(400));
    assert!(!err.is_not_found());
}

#[test]
fn given_401_or_403_when_checked_then_unauthorized() {
    assert!(ClientError::api_error(401, vec![]).is_unauthorized());
    assert!(ClientError::api_error(403, vec![]).is_unauthorized());
    assert!(!ClientError::api_error(404, vec![]).is_unauthorized());
    assert!(ClientError::api_error(404, vec![]).is_not_found());
}

#[test]
fn given_json_error_when_messages_then_single_generic_entry() {
    let source = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
    let err = ClientError::from_json(source);
    let messages = err.messages();
    assert_eq!(messages.len(), 1);
    assert!(messages[0].starts_with("Unexpected response from the server"));
    assert_eq!(err.status(), None);
}
