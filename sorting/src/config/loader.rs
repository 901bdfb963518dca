use crate::config::types::SortingConfig;
use crate::error::{Result, SortingError};
use std::path::Path;

/// Configuration loader trait
pub trait ConfigLoader {
    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<SortingConfig>;
    fn load_or_default<P: AsRef<Path>>(path: P) -> Result<SortingConfig>;
}

/// Default configuration loader implementation
pub struct DefaultConfigLoader;

impl ConfigLoader for DefaultConfigLoader {
    /// Load configuration from a TOML file
    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<SortingConfig> {
        let content = std::fs::read_to_string(&path).map_err(|_| SortingError::ConfigNotFound {
            path: path.as_ref().to_path_buf(),
        })?;

        let config: SortingConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load configuration, falling back to defaults when the file does not exist
    fn load_or_default<P: AsRef<Path>>(path: P) -> Result<SortingConfig> {
        let path_ref = path.as_ref();

        if !path_ref.exists() {
            return Ok(SortingConfig::default());
        }

        let content = std::fs::read_to_string(path_ref).map_err(SortingError::Io)?;

        toml::from_str(&content).map_err(|e| {
            SortingError::invalid_config(format!(
                "Failed to parse TOML in {}: {}",
                path_ref.display(),
                e
            ))
        })
    }
}

// Convenience functions maintaining the API
impl SortingConfig {
    /// Load configuration from a TOML file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        DefaultConfigLoader::load_from_file(path)
    }

    /// Load configuration, falling back to defaults when the file does not exist
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        DefaultConfigLoader::load_or_default(path)
    }
}
