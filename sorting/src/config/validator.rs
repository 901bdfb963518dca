use crate::config::types::SortingConfig;
use crate::error::{Result, SortingError};
use crate::traits::ConfigValidator;

/// Largest accepted value for `api.max_body_bytes` (10 MiB)
pub const MAX_BODY_LIMIT: usize = 10 * 1024 * 1024;

const VALID_LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Configuration validator implementation
pub struct ConfigValidatorImpl;

impl ConfigValidator for ConfigValidatorImpl {
    type Config = SortingConfig;

    fn validate(&self, config: &SortingConfig) -> Result<()> {
        if config.server.host.trim().is_empty() {
            return Err(SortingError::invalid_config("server.host must not be empty"));
        }

        let base_path = &config.api.base_path;
        if !base_path.starts_with('/') || base_path.ends_with('/') {
            return Err(SortingError::invalid_config(format!(
                "Invalid api.base_path '{}'. It must start with '/' and must not end with '/'",
                base_path
            )));
        }

        if config.api.max_body_bytes == 0 || config.api.max_body_bytes > MAX_BODY_LIMIT {
            return Err(SortingError::invalid_config(format!(
                "api.max_body_bytes must be between 1 and {}",
                MAX_BODY_LIMIT
            )));
        }

        let level = config.logging.level.to_lowercase();
        if !VALID_LOG_LEVELS.contains(&level.as_str()) {
            return Err(SortingError::invalid_config(format!(
                "Invalid logging.level '{}'. Valid levels: {}",
                config.logging.level,
                VALID_LOG_LEVELS.join(", ")
            )));
        }

        Ok(())
    }
}

impl ConfigValidatorImpl {
    /// Create a new validator
    pub fn new() -> Self {
        Self
    }
}

impl Default for ConfigValidatorImpl {
    fn default() -> Self {
        Self::new()
    }
}

impl SortingConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        ConfigValidatorImpl::new().validate(self)
    }
}
