use crate::{AuthError, Result as AuthErrorResult};

use std::panic::Location;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Claims carried by storefront credentials
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject username
    pub username: String,
    /// Role claim ("user" / "admin"); informational only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Expiration timestamp (Unix)
    pub exp: i64,
    /// Issued at timestamp (Unix)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iat: Option<i64>,
}

impl Claims {
    /// Validate claims after decoding
    #[track_caller]
    pub fn validate(&self) -> AuthErrorResult<()> {
        if self.username.trim().is_empty() {
            return Err(AuthError::InvalidClaim {
                claim: "username".to_string(),
                message: "username cannot be empty".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }
        if self.username.contains('/') {
            return Err(AuthError::InvalidClaim {
                claim: "username".to_string(),
                message: "username cannot contain '/'".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(())
    }
}
