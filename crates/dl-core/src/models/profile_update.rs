use crate::{CoreError, Result as CoreErrorResult};

use serde::Serialize;

/// Editable profile fields sent with `PUT users/:username`.
///
/// `confirm_password` never leaves the client; it only guards `password`.
#[derive(Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip)]
    pub confirm_password: Option<String>,
}

impl ProfileUpdate {
    /// Checks the new password against its confirmation.
    ///
    /// An empty new password means "keep the current one" and is dropped.
    #[track_caller]
    pub fn validate(&mut self) -> CoreErrorResult<()> {
        if self.password.as_deref().is_some_and(str::is_empty) {
            self.password = None;
        }

        if let Some(password) = &self.password
            && self.confirm_password.as_deref() != Some(password.as_str())
        {
            return Err(CoreError::validation("Passwords do not match."));
        }

        if self.email.trim().is_empty() {
            return Err(CoreError::validation("Email is required."));
        }

        Ok(())
    }
}

impl std::fmt::Debug for ProfileUpdate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProfileUpdate")
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("email", &self.email)
            .field("birth_date", &self.birth_date)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}
