use crate::{ConfigError, ConfigErrorResult, DEFAULT_SESSION_FILE};

use std::path::Path;

use serde::Deserialize;

/// Durable storage for the bearer credential and identity snapshot
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// File name relative to the config directory
    pub session_file: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            session_file: DEFAULT_SESSION_FILE.to_string(),
        }
    }
}

impl StorageConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.session_file.trim().is_empty() {
            return Err(ConfigError::storage("storage.session_file cannot be empty"));
        }

        // Keep the credential file inside the config dir
        if Path::new(&self.session_file).is_absolute() || self.session_file.contains("..") {
            return Err(ConfigError::storage(
                "storage.session_file must be relative and cannot contain '..'",
            ));
        }

        Ok(())
    }
}
