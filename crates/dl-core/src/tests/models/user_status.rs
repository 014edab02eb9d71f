use crate::UserStatus;

use std::str::FromStr;

#[test]
fn test_user_status_as_str() {
    assert_eq!(UserStatus::User.as_str(), "user");
    assert_eq!(UserStatus::Admin.as_str(), "admin");
}

#[test]
fn test_user_status_from_str() {
    assert_eq!(UserStatus::from_str("user").unwrap(), UserStatus::User);
    assert_eq!(UserStatus::from_str("admin").unwrap(), UserStatus::Admin);
    assert!(UserStatus::from_str("superuser").is_err());
}

#[test]
fn test_user_status_default() {
    assert_eq!(UserStatus::default(), UserStatus::User);
}
