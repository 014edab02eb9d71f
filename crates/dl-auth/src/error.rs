use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Credential expired {location}")]
    TokenExpired { location: ErrorLocation },

    #[error("Credential decode failed: {source} {location}")]
    JwtDecode {
        #[source]
        source: jsonwebtoken::errors::Error,
        location: ErrorLocation,
    },

    #[error("Invalid claim '{claim}': {message} {location}")]
    InvalidClaim {
        claim: String,
        message: String,
        location: ErrorLocation,
    },
}

impl AuthError {
    /// Short machine-readable code, used in log lines
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::TokenExpired { .. } => "TOKEN_EXPIRED",
            Self::JwtDecode { .. } => "JWT_DECODE_FAILED",
            Self::InvalidClaim { .. } => "INVALID_CLAIM",
        }
    }
}

pub type Result<T> = std::result::Result<T, AuthError>;
