use crate::config::SortingConfig;
use crate::error::{Result, SortingError};
use crate::http::{build_router, AppState};
use axum::Router;
use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

/// A bound, not yet running, sorting service
pub struct SortingServer {
    listener: TcpListener,
    router: Router,
}

impl SortingServer {
    /// Validate the configuration and bind the listener
    pub async fn bind(config: &SortingConfig) -> Result<Self> {
        config.validate()?;

        let address = config.server.bind_address();
        let listener = TcpListener::bind(&address).await.map_err(|e| {
            SortingError::server(format!("Failed to bind {}: {}", address, e))
        })?;

        let state = Arc::new(AppState::new(&config.api));
        Ok(Self {
            listener,
            router: build_router(state),
        })
    }

    /// Address actually bound (resolves port 0)
    pub fn local_addr(&self) -> Result<SocketAddr> {
        Ok(self.listener.local_addr()?)
    }

    /// Serve until `shutdown` resolves, then drain in-flight requests
    pub async fn run_until<F>(self, shutdown: F) -> Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let address = self.local_addr()?;
        info!(%address, "package sorting API listening");

        axum::serve(self.listener, self.router)
            .with_graceful_shutdown(shutdown)
            .await
            .map_err(|e| SortingError::server(format!("Server terminated: {}", e)))?;

        info!("package sorting API stopped");
        Ok(())
    }
}
