use crate::{ConfigError, ConfigErrorResult, DEFAULT_STORAGE_FILE, DEFAULT_STORAGE_KEY};

use std::path::Path;

use serde::Deserialize;

/// Durable credential storage settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Storage file, relative to the config directory
    pub storage_file: String,
    /// Key under which the credential is kept inside the storage file
    pub storage_key: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            storage_file: String::from(DEFAULT_STORAGE_FILE),
            storage_key: String::from(DEFAULT_STORAGE_KEY),
        }
    }
}

impl SessionConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.storage_key.trim().is_empty() {
            return Err(ConfigError::session("session.storage_key cannot be empty"));
        }

        let path = Path::new(&self.storage_file);
        if self.storage_file.is_empty() || path.is_absolute() || self.storage_file.contains("..") {
            return Err(ConfigError::session(
                "session.storage_file must be relative and cannot contain '..'",
            ));
        }

        Ok(())
    }
}
