
use dl_core::{User, UserStatus};

pub(crate) fn user(username: &str, status: UserStatus) -> User {
    User {
        id: Some(1),
        username: username.to_string(),
        first_name: "Test".to_string(),
        last_name: "User".to_string(),
        email: format!("{username}@example.com"),
        birth_date: None,
        is_active: true,
        is_verified: true,
        status,
    }
}
