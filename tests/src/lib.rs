//! Helpers for running the real sorting server in end-to-end tests

use package_sorting::{SortingConfig, SortingServer};
use std::fs;
use tempfile::TempDir;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

/// A server running on an ephemeral local port, stopped on drop
pub struct TestServer {
    pub base_url: String,
    shutdown: Option<oneshot::Sender<()>>,
    handle: Option<JoinHandle<package_sorting::Result<()>>>,
}

impl TestServer {
    /// Start a server with the given configuration, forcing an ephemeral port
    pub async fn start(mut config: SortingConfig) -> Self {
        config.server.host = "127.0.0.1".to_string();
        config.server.port = 0;

        let server = SortingServer::bind(&config).await.unwrap();
        let address = server.local_addr().unwrap();
        let (shutdown, signal) = oneshot::channel::<()>();

        let handle = tokio::spawn(server.run_until(async move {
            let _ = signal.await;
        }));

        Self {
            base_url: format!("http://{}{}", address, config.api.base_path),
            shutdown: Some(shutdown),
            handle: Some(handle),
        }
    }

    /// Start a server from a TOML configuration file written to a temp dir
    pub async fn from_toml(content: &str) -> (Self, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("package-sorter.toml");
        fs::write(&path, content).unwrap();

        let config = SortingConfig::load_from_file(&path).unwrap();
        (Self::start(config).await, temp_dir)
    }

    pub fn url(&self, route: &str) -> String {
        format!("{}{}", self.base_url, route)
    }

    /// Stop the server and wait for it to drain
    pub async fn stop(mut self) -> package_sorting::Result<()> {
        if let Some(shutdown) = self.shutdown.take() {
            let _ = shutdown.send(());
        }
        match self.handle.take() {
            Some(handle) => handle.await.unwrap(),
            None => Ok(()),
        }
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        if let Some(shutdown) = self.shutdown.take() {
            let _ = shutdown.send(());
        }
    }
}
