use crate::ProfileUpdate;

fn update() -> ProfileUpdate {
    ProfileUpdate {
        first_name: "Alice".into(),
        last_name: "Liddell".into(),
        email: "alice@example.com".into(),
        ..Default::default()
    }
}

#[test]
fn given_mismatched_passwords_when_validate_then_error() {
    let mut data = ProfileUpdate {
        password: Some("secret-one".into()),
        confirm_password: Some("secret-two".into()),
        ..update()
    };

    let err = data.validate().unwrap_err();

    assert_eq!(err.display_message(), "Passwords do not match.");
}

#[test]
fn given_matching_passwords_when_validate_then_ok() {
    let mut data = ProfileUpdate {
        password: Some("secret".into()),
        confirm_password: Some("secret".into()),
        ..update()
    };

    assert!(data.validate().is_ok());
    assert_eq!(data.password.as_deref(), Some("secret"));
}

#[test]
fn given_empty_password_when_validate_then_password_dropped() {
    let mut data = ProfileUpdate {
        password: Some(String::new()),
        ..update()
    };

    assert!(data.validate().is_ok());
    assert!(data.password.is_none());
}

#[test]
fn test_confirm_password_never_serialized() {
    let data = ProfileUpdate {
        password: Some("secret".into()),
        confirm_password: Some("secret".into()),
        ..update()
    };

    let json = serde_json::to_value(&data).unwrap();

    assert_eq!(json["firstName"], "Alice");
    assert_eq!(json["password"], "secret");
    assert!(json.get("confirmPassword").is_none());
    assert!(json.get("birthDate").is_none());
}

#[test]
fn test_debug_redacts_password() {
    let data = ProfileUpdate {
        password: Some("hunter2".into()),
        ..update()
    };
    assert!(!format!("{data:?}").contains("hunter2"));
}
