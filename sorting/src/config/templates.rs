use crate::error::{Result, SortingError};
use std::fs;
use std::path::Path;

/// Generate default package-sorter.toml template with comments
pub fn generate_default_config_template() -> String {
    r#"# Package Sorter Configuration
# Every section and key is optional; the values below are the defaults.

[server]
# Address the HTTP listener binds to
host = "127.0.0.1"
port = 8080

[api]
# Prefix for every route: POST {base_path}/sort, GET {base_path}/health
base_path = "/api"
# Largest request body accepted, in bytes
max_body_bytes = 65536

[logging]
# trace, debug, info, warn or error (RUST_LOG overrides this when set)
level = "info"
# pretty, compact or json
format = "pretty"
"#
    .to_string()
}

/// Write the default configuration template.
///
/// Returns `false` when the file already exists and `force` is not set.
pub fn ensure_config_file_exists<P: AsRef<Path>>(path: P, force: bool) -> Result<bool> {
    let path = path.as_ref();

    if path.exists() && !force {
        return Ok(false);
    }

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    fs::write(path, generate_default_config_template()).map_err(|e| {
        SortingError::invalid_config(format!(
            "Failed to write configuration to {}: {}",
            path.display(),
            e
        ))
    })?;

    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SortingConfig;
    use tempfile::TempDir;

    #[test]
    fn test_template_parses_to_defaults() {
        let config: SortingConfig = toml::from_str(&generate_default_config_template()).unwrap();
        assert_eq!(config, SortingConfig::default());
    }

    #[test]
    fn test_existing_file_is_kept_unless_forced() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("package-sorter.toml");

        assert!(ensure_config_file_exists(&path, false).unwrap());
        fs::write(&path, "[server]\nport = 1234\n").unwrap();

        assert!(!ensure_config_file_exists(&path, false).unwrap());
        assert!(fs::read_to_string(&path).unwrap().contains("1234"));

        assert!(ensure_config_file_exists(&path, true).unwrap());
        assert!(fs::read_to_string(&path).unwrap().contains("8080"));
    }
}
