use crate::analysis::ErrorReport;
use crate::error::{RequestError, Result};
use crate::types::{PackageMeasurement, RawPackageInput};
use crate::validation::Violations;

/// Trait for request input validation
pub trait InputValidator: Send + Sync {
    /// Check every field and bind a measurement, or report all violations
    fn validate(&self, raw: &RawPackageInput) -> std::result::Result<PackageMeasurement, Violations>;
}

/// Trait for turning request failures into the uniform error envelope
pub trait ErrorNormalizer: Send + Sync {
    /// Build the error report for a failure on the given request path
    fn normalize(&self, error: &RequestError, path: &str) -> ErrorReport;
}

/// Trait for configuration validation
pub trait ConfigValidator: Send + Sync {
    type Config;

    /// Validate configuration
    fn validate(&self, config: &Self::Config) -> Result<()>;
}
