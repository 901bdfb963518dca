use crate::error::{CliError, Result, ResultExt};
use crate::ui;
use package_sorting::logging::init_logging;
use package_sorting::{SortingConfig, SortingServer};
use std::path::Path;
use tokio::runtime::Runtime;
use tracing::warn;

#[derive(Debug, Clone)]
pub struct ServeArgs {
    pub config_path: String,
    pub host: Option<String>,
    pub port: Option<u16>,
    pub log_level: Option<String>,
}

pub fn execute(args: ServeArgs) -> Result<()> {
    let rt = Runtime::new()
        .map_err(|e| CliError::Other(format!("Failed to create async runtime: {}", e)))?;

    rt.block_on(execute_async(args))
}

async fn execute_async(args: ServeArgs) -> Result<()> {
    let config_path = Path::new(&args.config_path);

    ui::status_message("Loading configuration");
    if !config_path.exists() {
        ui::warning_message(&format!(
            "{} not found, using default settings",
            config_path.display()
        ));
    }

    let config = apply_overrides(
        SortingConfig::load_or_default(config_path)
            .with_context(|| format!("Loading {}", config_path.display()))?,
        &args,
    );
    config.validate()?;

    init_logging(&config.logging)?;

    let server = SortingServer::bind(&config).await?;
    let address = server.local_addr()?;
    ui::success_message(&format!("Package sorting API listening on http://{}", address));
    ui::info_message(&format!(
        "POST http://{}{}/sort  |  GET http://{}{}/health",
        address, config.api.base_path, address, config.api.base_path
    ));
    ui::info_message("Press Ctrl-C to stop");

    server.run_until(shutdown_signal()).await?;
    Ok(())
}

/// Command-line flags take precedence over file values
fn apply_overrides(mut config: SortingConfig, args: &ServeArgs) -> SortingConfig {
    if let Some(host) = &args.host {
        config.server.host = host.clone();
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }
    if let Some(level) = &args.log_level {
        config.logging.level = level.clone();
    }
    config
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "failed to listen for Ctrl-C, shutting down");
    }
}
