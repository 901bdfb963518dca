use crate::analysis::{DefaultErrorNormalizer, ErrorReport};
use crate::config::ApiConfig;
use crate::error::RequestError;
use crate::http::handlers::{health, sort_from_body, sort_from_query};
use crate::http::middleware::{catch_panics, trace_requests};
use crate::traits::{ErrorNormalizer, InputValidator};
use crate::validation::MeasurementValidator;
use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::{middleware, Router};
use std::sync::Arc;

/// Immutable state shared by every request
pub struct AppState {
    pub validator: Arc<dyn InputValidator>,
    pub normalizer: Arc<dyn ErrorNormalizer>,
    pub base_path: String,
    pub max_body_bytes: usize,
}

impl AppState {
    /// State with the default validator and normalizer
    pub fn new(api: &ApiConfig) -> Self {
        Self {
            validator: Arc::new(MeasurementValidator::new()),
            normalizer: Arc::new(DefaultErrorNormalizer::new()),
            base_path: api.base_path.clone(),
            max_body_bytes: api.max_body_bytes,
        }
    }

    /// Replace the error normalizer
    pub fn with_normalizer(mut self, normalizer: Arc<dyn ErrorNormalizer>) -> Self {
        self.normalizer = normalizer;
        self
    }

    /// Normalize a failure for the given request path
    pub fn reject(&self, error: &RequestError, path: &str) -> ErrorReport {
        self.normalizer.normalize(error, path)
    }
}

/// Build the service router: sort and health routes under the base path
pub fn build_router(state: Arc<AppState>) -> Router {
    let base = state.base_path.clone();
    let routes = Router::new()
        .route(
            &format!("{}/sort", base),
            post(sort_from_body).get(sort_from_query),
        )
        .route(&format!("{}/health", base), get(health))
        .layer(DefaultBodyLimit::max(state.max_body_bytes));

    with_middleware(routes, state)
}

/// Attach panic recovery and request tracing to a set of routes
pub fn with_middleware(routes: Router<Arc<AppState>>, state: Arc<AppState>) -> Router {
    routes
        .layer(middleware::from_fn_with_state(state.clone(), catch_panics))
        .layer(middleware::from_fn(trace_requests))
        .with_state(state)
}
