//! HTTP boundary built on axum
//!
//! Binds request data, runs validation and classification, and renders
//! every failure through the configured error normalizer.

pub mod extract;
pub mod handlers;
pub mod middleware;
pub mod response;
pub mod router;

pub use handlers::HEALTH_MESSAGE;
pub use router::{build_router, with_middleware, AppState};
