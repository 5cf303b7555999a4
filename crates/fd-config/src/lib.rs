mod api_config;
mod config;
mod error;
mod log_level;
mod logging_config;
mod storage_config;

#[cfg(test)]
mod tests;

pub use api_config::ApiConfig;
pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use storage_config::StorageConfig;

const CONFIG_DIR_ENV: &str = "FD_CONFIG_DIR";
const DEFAULT_CONFIG_DIR_NAME: &str = ".fibro";
const CONFIG_FILE_NAME: &str = "config.toml";
const DEFAULT_API_BASE_URL: &str = "http://localhost:8000/api";
const DEFAULT_SESSION_FILE: &str = "session.json";
const DEFAULT_LOG_LEVEL_STRING: &str = "warn";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Warn;
const DEFAULT_LOG_COLORED: bool = true;
