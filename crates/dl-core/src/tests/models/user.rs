use crate::{User, UserStatus};

#[test]
fn given_api_user_json_when_deserialize_then_maps_camel_case_fields() {
    let json = r#"{
        "username": "alice",
        "firstName": "Alice",
        "lastName": "Liddell",
        "email": "alice@example.com",
        "birthDate": "1990-05-04",
        "isActive": true,
        "isVerified": false,
        "status": "admin"
    }"#;

    let user: User = serde_json::from_str(json).unwrap();

    assert_eq!(user.username, "alice");
    assert_eq!(user.first_name, "Alice");
    assert_eq!(user.birth_date.as_deref(), Some("1990-05-04"));
    assert!(user.is_active);
    assert!(!user.is_verified);
    assert_eq!(user.status, UserStatus::Admin);
    assert!(user.is_admin());
    assert_eq!(user.full_name(), "Alice Liddell");
}

#[test]
fn given_missing_status_when_deserialize_then_defaults_to_user() {
    let json = r#"{"username": "bob"}"#;

    let user: User = serde_json::from_str(json).unwrap();

    assert_eq!(user.status, UserStatus::User);
    assert!(!user.is_admin());
    assert!(user.id.is_none());
}

#[test]
fn given_unknown_status_when_deserialize_then_fails() {
    let json = r#"{"username": "mallory", "status": "root"}"#;

    assert!(serde_json::from_str::<User>(json).is_err());
}
