//! Shared helpers for driving the router in-process
#![allow(dead_code)]

use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use package_sorting::config::ApiConfig;
use package_sorting::{build_router, AppState, ErrorReport};
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

pub const SORT_PATH: &str = "/api/sort";

/// Router with default configuration
pub fn test_router() -> Router {
    router_with(ApiConfig::default())
}

pub fn router_with(api: ApiConfig) -> Router {
    build_router(Arc::new(AppState::new(&api)))
}

/// Send a request and collect status and body
pub async fn send(router: Router, request: Request<Body>) -> (StatusCode, Vec<u8>) {
    let response = router.oneshot(request).await.unwrap();
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, body.to_vec())
}

/// POST a raw body to the sort endpoint of the default router
pub async fn post_sort(body: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(Method::POST)
        .uri(SORT_PATH)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    let (status, bytes) = send(test_router(), request).await;
    (status, serde_json::from_slice(&bytes).unwrap())
}

/// GET a URI from the default router, returning the body as text
pub async fn get(uri: &str) -> (StatusCode, String) {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    let (status, bytes) = send(test_router(), request).await;
    (status, String::from_utf8(bytes).unwrap())
}

/// Parse an error envelope
pub fn error_report(body: &Value) -> ErrorReport {
    serde_json::from_value(body.clone()).unwrap()
}
