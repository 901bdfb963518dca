//! Package Sorting - bulky/heavy shipment classification service
//!
//! This crate classifies packages as STANDARD, SPECIAL or REJECTED from their
//! dimensions and mass, validates the input that reaches the classifier, and
//! serves both behind an HTTP API with a uniform error envelope.

// Core modules
pub mod config;
pub mod error;
pub mod traits;
pub mod types;

// Main functionality modules
pub mod analysis;
pub mod classifier;
pub mod validation;

// Service modules
pub mod http;
pub mod logging;
pub mod server;

// Re-export main types for convenience
pub use analysis::{DefaultErrorNormalizer, ErrorKind, ErrorReport};
pub use classifier::{assess, classify, classify_package, Assessment};
pub use config::{SortingConfig, DEFAULT_CONFIG_FILE};
pub use error::{MalformedInput, RequestError, Result, SortingError, TargetType};
pub use http::{build_router, AppState, HEALTH_MESSAGE};
pub use server::SortingServer;
pub use traits::{ConfigValidator, ErrorNormalizer, InputValidator};
pub use types::{Category, MeasurementField, PackageMeasurement, RawPackageInput, SortResponse};
pub use validation::{validate, MeasurementValidator, Violations};

use std::future::Future;

/// Bind and serve the sorting API with the given configuration until `shutdown` resolves
pub async fn run_server<F>(config: SortingConfig, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let server = SortingServer::bind(&config).await?;
    server.run_until(shutdown).await
}
