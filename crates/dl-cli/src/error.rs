use std::panic::Location;

use dl_config::ConfigError;
use dl_session::SessionError;
use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("{source}")]
    Config {
        #[from]
        source: ConfigError,
    },

    #[error("{source}")]
    Session {
        #[from]
        source: SessionError,
    },

    #[error("Access to {path} denied, redirected to {redirect} {location}")]
    Forbidden {
        path: String,
        redirect: String,
        location: ErrorLocation,
    },

    #[error("{} {location}", .messages.join("; "))]
    Rejected {
        messages: Vec<String>,
        location: ErrorLocation,
    },

    #[error("Invalid argument: {message} {location}")]
    InvalidArgument {
        message: String,
        location: ErrorLocation,
    },

    #[error("Logger error: {message} {location}")]
    Logger {
        message: String,
        location: ErrorLocation,
    },

    #[error("JSON error: {source} {location}")]
    Json {
        #[source]
        source: serde_json::Error,
        location: ErrorLocation,
    },
}

impl CliError {
    #[track_caller]
    pub fn forbidden(path: impl Into<String>, redirect: impl Into<String>) -> Self {
        Self::Forbidden {
            path: path.into(),
            redirect: redirect.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn rejected(messages: Vec<String>) -> Self {
        Self::Rejected {
            messages,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn logger(message: impl Into<String>) -> Self {
        Self::Logger {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Lines to print on stderr
    pub fn messages(&self) -> Vec<String> {
        match self {
            Self::Session { source } => source.messages(),
            Self::Rejected { messages, .. } => messages.clone(),
            Self::Forbidden { path, redirect, .. } => {
                vec![format!("Access to {path} denied (redirect: {redirect})")]
            }
            Self::InvalidArgument { message, .. } | Self::Logger { message, .. } => {
                vec![message.clone()]
            }
            other => vec![other.to_string()],
        }
    }
}

impl From<serde_json::Error> for CliError {
    #[track_caller]
    fn from(source: serde_json::Error) -> Self {
        Self::Json {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, CliError>;
