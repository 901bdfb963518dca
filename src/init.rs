use crate::error::{CliError, Result};
use crate::ui;
use dialoguer::{theme::ColorfulTheme, Confirm};
use package_sorting::config::ensure_config_file_exists;
use std::path::Path;

pub fn execute(config: String, force: bool) -> Result<()> {
    let path = Path::new(&config);
    ui::section_header("Package Sorter Configuration Setup");

    let overwrite = if force || !path.exists() {
        force
    } else {
        ui::warning_message(&format!("{} already exists", path.display()));
        Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt("Would you like to replace it with the default configuration?")
            .default(false)
            .interact()
            .map_err(|e| CliError::Other(format!("Failed to get user confirmation: {}", e)))?
    };

    if ensure_config_file_exists(path, overwrite)? {
        ui::success_message(&format!("Configuration written to {}", path.display()));
        ui::info_message(&format!(
            "Edit {} to change the listen address, base path or logging",
            path.display()
        ));
    } else {
        ui::info_message(&format!("Keeping existing {}", path.display()));
    }

    Ok(())
}
