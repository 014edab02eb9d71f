use std::panic::Location;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Validation error: {message} {location}")]
    Validation {
        message: String,
        location: ErrorLocation,
    },

    #[error("Invalid user status: {value} {location}")]
    InvalidUserStatus {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid price: {value} {location}")]
    InvalidPrice {
        value: String,
        location: ErrorLocation,
    },
}

impl CoreError {
    /// Create a validation error at the caller's location
    #[track_caller]
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Message suitable for inline display, without the source location
    pub fn display_message(&self) -> String {
        match self {
            Self::Validation { message, .. } => message.clone(),
            Self::InvalidUserStatus { value, .. } => format!("Invalid user status: {value}"),
            Self::InvalidPrice { value, .. } => format!("Invalid price: {value}"),
        }
    }
}

pub type Result<T> = StdResult<T, CoreError>;
