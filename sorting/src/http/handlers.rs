use crate::analysis::ErrorReport;
use crate::classifier::classify_package;
use crate::error::{MalformedInput, RequestError};
use crate::http::extract::{parse_json_body, parse_query};
use crate::http::router::AppState;
use crate::types::{RawPackageInput, SortResponse};
use axum::body::Bytes;
use axum::extract::rejection::{BytesRejection, FailedToBufferBody};
use axum::extract::State;
use axum::http::Uri;
use axum::Json;
use std::sync::Arc;
use tracing::debug;

/// Fixed health check body
pub const HEALTH_MESSAGE: &str = "Package Sorting API is running";

type HandlerResult = Result<Json<SortResponse>, ErrorReport>;

/// `POST {base}/sort`: classify the package described by the JSON body
pub async fn sort_from_body(
    State(state): State<Arc<AppState>>,
    uri: Uri,
    body: Result<Bytes, BytesRejection>,
) -> HandlerResult {
    let path = uri.path().to_owned();
    let body = body.map_err(|rejection| state.reject(&body_failure(rejection), &path))?;

    let raw = parse_json_body(&body).map_err(|e| state.reject(&e, &path))?;
    classify_raw(&state, &raw, &path)
}

/// `GET {base}/sort?width=..&height=..&length=..&mass=..`
pub async fn sort_from_query(State(state): State<Arc<AppState>>, uri: Uri) -> HandlerResult {
    let path = uri.path().to_owned();
    let raw = parse_query(&uri).map_err(|e| state.reject(&e, &path))?;
    classify_raw(&state, &raw, &path)
}

/// `GET {base}/health`
pub async fn health() -> &'static str {
    HEALTH_MESSAGE
}

fn classify_raw(state: &AppState, raw: &RawPackageInput, path: &str) -> HandlerResult {
    let measurement = state
        .validator
        .validate(raw)
        .map_err(|violations| state.reject(&violations.into(), path))?;

    let category = classify_package(&measurement);
    debug!(
        width = measurement.width(),
        height = measurement.height(),
        length = measurement.length(),
        mass = measurement.mass(),
        %category,
        "package classified"
    );

    Ok(Json(SortResponse::new(category)))
}

/// Over-limit bodies are the caller's fault whether or not a length was declared
fn body_failure(rejection: BytesRejection) -> RequestError {
    match rejection {
        BytesRejection::FailedToBufferBody(FailedToBufferBody::LengthLimitError(e)) => {
            MalformedInput::other(e.body_text()).into()
        }
        other => RequestError::internal(format!(
            "failed to read request body: {}",
            other.body_text()
        )),
    }
}
