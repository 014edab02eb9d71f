mod api_config;
mod config;
mod error;
mod log_level;
mod logging_config;
mod routing_config;
mod session_config;

#[cfg(test)]
mod tests;

pub use api_config::ApiConfig;
pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use routing_config::RoutingConfig;
pub use session_config::SessionConfig;

const CONFIG_DIR_ENV: &str = "DL_CONFIG_DIR";
const DEFAULT_CONFIG_DIR_NAME: &str = ".deadeye";
const CONFIG_FILE_NAME: &str = "config.toml";

const DEFAULT_API_BASE_URL: &str = "http://localhost:3001";

const DEFAULT_STORAGE_FILE: &str = "storage.json";
const DEFAULT_STORAGE_KEY: &str = "deadeyeLaserWorks-token";

const DEFAULT_ADMIN_DENIED_REDIRECT: &str = "/";
const DEFAULT_UNAUTHENTICATED_REDIRECT: &str = "/homepage";

const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
const DEFAULT_LOG_COLORED: bool = true;
