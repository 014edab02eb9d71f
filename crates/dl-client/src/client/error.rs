use std::panic::Location;

use error_location::ErrorLocation;
use serde_json::Value;
use thiserror::Error;

/// Errors that can occur during API calls
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("HTTP request error: {message} {location}")]
    Http {
        message: String,
        location: ErrorLocation,
        #[source]
        source: reqwest::Error,
    },

    #[error("API error ({status}): {} {location}", .messages.join("; "))]
    Api {
        status: u16,
        messages: Vec<String>,
        location: ErrorLocation,
    },

    #[error("Invalid API URL '{url}': {message} {location}")]
    InvalidUrl {
        url: String,
        message: String,
        location: ErrorLocation,
    },

    #[error("JSON parse error: {message} {location}")]
    Json {
        message: String,
        location: ErrorLocation,
        #[source]
        source: serde_json::Error,
    },
}

impl ClientError {
    /// Convert reqwest error with context
    #[track_caller]
    pub fn from_reqwest(err: reqwest::Error) -> Self {
        ClientError::Http {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    /// Convert JSON error with context
    #[track_caller]
    pub fn from_json(err: serde_json::Error) -> Self {
        ClientError::Json {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    #[track_caller]
    pub fn invalid_url(url: &str, message: impl Into<String>) -> Self {
        ClientError::InvalidUrl {
            url: url.to_string(),
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Create an API error with location
    #[track_caller]
    pub fn api_error(status: u16, messages: Vec<String>) -> Self {
        ClientError::Api {
            status,
            messages,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Messages fit for inline display, always at least one.
    ///
    /// API failures carry the server's own messages verbatim.
    pub fn messages(&self) -> Vec<String> {
        match self {
            Self::Api { messages, .. } => messages.clone(),
            Self::Http { message, .. } => vec![format!("Unable to reach the server: {message}")],
            Self::InvalidUrl { url, .. } => vec![format!("Invalid server address: {url}")],
            Self::Json { message, .. } => {
                vec![format!("Unexpected response from the server: {message}")]
            }
        }
    }

    /// HTTP status of an API failure
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self.status(), Some(401 | 403))
    }
}

/// Extract `error.message` from an error body as a list.
///
/// The API sends either a single string or an array of validation messages.
/// Returns `None` when the body carries no usable message.
pub fn normalize_messages(body: &Value) -> Option<Vec<String>> {
    let message = body.get("error")?.get("message")?;

    let messages: Vec<String> = match message {
        Value::String(s) => vec![s.clone()],
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            })
            .collect(),
        Value::Null => return None,
        other => vec![other.to_string()],
    };

    if messages.is_empty() {
        None
    } else {
        Some(messages)
    }
}

impl From<reqwest::Error> for ClientError {
    #[track_caller]
    fn from(err: reqwest::Error) -> Self {
        ClientError::from_reqwest(err)
    }
}

impl From<serde_json::Error> for ClientError {
    #[track_caller]
    fn from(err: serde_json::Error) -> Self {
        ClientError::from_json(err)
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;
