use serde::Serialize;

/// Body of `POST auth/token`
#[derive(Clone, Serialize)]
pub struct LoginData {
    pub username: String,
    pub password: String,
}

impl LoginData {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl std::fmt::Debug for LoginData {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginData")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}
