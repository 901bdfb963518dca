//! Maps request failures onto the four error kinds callers see
//! No framework concerns - returns structured data only

use crate::error::{MalformedInput, RequestError, TargetType};
use crate::traits::ErrorNormalizer;
use serde::{Deserialize, Serialize};
use tracing::{error, warn};

/// Message returned for every internal fault
pub const INTERNAL_ERROR_MESSAGE: &str =
    "An unexpected error occurred. Please contact support if the problem persists.";

const MISSING_BODY_MESSAGE: &str = "Request body is required";
const INVALID_JSON_MESSAGE: &str = "Invalid JSON format. Please check your request structure.";
const INVALID_BODY_MESSAGE: &str = "Invalid request body";

/// The fixed set of error kinds exposed to callers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    ValidationFailed,
    InvalidRequest,
    InvalidInput,
    InternalServerError,
}

impl ErrorKind {
    pub fn status(&self) -> u16 {
        match self {
            ErrorKind::InternalServerError => 500,
            _ => 400,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ErrorKind::ValidationFailed => "Validation Failed",
            ErrorKind::InvalidRequest => "Invalid Request",
            ErrorKind::InvalidInput => "Invalid Input",
            ErrorKind::InternalServerError => "Internal Server Error",
        }
    }

    /// Kind a request error is reported as
    pub fn of(error: &RequestError) -> Self {
        match error {
            RequestError::Validation(_) => ErrorKind::ValidationFailed,
            RequestError::Malformed(_) => ErrorKind::InvalidRequest,
            RequestError::ParameterConversion { .. } => ErrorKind::InvalidInput,
            RequestError::Internal { .. } => ErrorKind::InternalServerError,
        }
    }
}

/// Uniform error envelope returned for every failed request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorReport {
    pub status: u16,
    pub error: String,
    pub messages: Vec<String>,
    pub path: String,
}

impl ErrorReport {
    pub fn new<P: Into<String>>(kind: ErrorKind, messages: Vec<String>, path: P) -> Self {
        Self {
            status: kind.status(),
            error: kind.label().to_string(),
            messages,
            path: path.into(),
        }
    }
}

/// Default normalizer producing the documented messages
pub struct DefaultErrorNormalizer;

impl DefaultErrorNormalizer {
    pub fn new() -> Self {
        Self
    }

    fn messages(error: &RequestError) -> Vec<String> {
        match error {
            RequestError::Validation(violations) => violations.messages(),
            RequestError::Malformed(malformed) => vec![invalid_request_message(malformed)],
            RequestError::ParameterConversion { name, value } => {
                vec![format!("Invalid value for parameter '{}': {}", name, value)]
            }
            RequestError::Internal { .. } => vec![INTERNAL_ERROR_MESSAGE.to_string()],
        }
    }
}

impl Default for DefaultErrorNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

impl ErrorNormalizer for DefaultErrorNormalizer {
    fn normalize(&self, error: &RequestError, path: &str) -> ErrorReport {
        let kind = ErrorKind::of(error);

        match error {
            RequestError::Internal { detail } => {
                error!(path, detail = %detail, "unhandled fault while processing request");
            }
            _ => warn!(path, kind = kind.label(), cause = %error, "request rejected"),
        }

        ErrorReport::new(kind, Self::messages(error), path)
    }
}

/// Single user-facing message for a payload that could not be bound
fn invalid_request_message(malformed: &MalformedInput) -> String {
    match malformed {
        MalformedInput::FieldConversion {
            path,
            value,
            target,
        } => {
            let field = path.last().map(String::as_str).unwrap_or("unknown");
            let expected = describe_target_type(target);
            match value {
                Some(value) => format!(
                    "Invalid value '{}' for field '{}'. Expected a valid {}.",
                    value, field, expected
                ),
                None => format!(
                    "Invalid value for field '{}'. Expected a valid {}.",
                    field, expected
                ),
            }
        }
        MalformedInput::MissingBody => MISSING_BODY_MESSAGE.to_string(),
        MalformedInput::Syntax { .. } => INVALID_JSON_MESSAGE.to_string(),
        MalformedInput::Other { .. } => INVALID_BODY_MESSAGE.to_string(),
    }
}

/// Friendly description of the type a value was expected to be
pub fn describe_target_type(target: &TargetType) -> String {
    match target {
        TargetType::Decimal => "number (e.g., 10.5, 150.0)".to_string(),
        TargetType::Integer => "whole number (e.g., 10, 150)".to_string(),
        TargetType::Text => "text".to_string(),
        TargetType::Boolean => "true or false".to_string(),
        TargetType::Other(name) => name.to_lowercase(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::RawPackageInput;
    use crate::validation::validate;

    fn normalize(error: RequestError) -> ErrorReport {
        DefaultErrorNormalizer::new().normalize(&error, "/api/sort")
    }

    #[test]
    fn test_validation_failure_lists_every_violation() {
        let violations = validate(&RawPackageInput::default()).unwrap_err();
        let report = normalize(RequestError::Validation(violations));

        assert_eq!(report.status, 400);
        assert_eq!(report.error, "Validation Failed");
        assert_eq!(report.messages.len(), 4);
        assert_eq!(report.messages[0], "Width cannot be null");
        assert_eq!(report.messages[3], "Mass cannot be null");
        assert_eq!(report.path, "/api/sort");
    }

    #[test]
    fn test_text_value_is_quoted() {
        let report = normalize(
            MalformedInput::field_conversion("width", Some("not-a-number".into()), TargetType::Decimal)
                .into(),
        );

        assert_eq!(report.status, 400);
        assert_eq!(report.error, "Invalid Request");
        assert_eq!(
            report.messages,
            vec!["Invalid value 'not-a-number' for field 'width'. Expected a valid number (e.g., 10.5, 150.0)."]
        );
    }

    #[test]
    fn test_non_text_value_is_omitted() {
        let report = normalize(
            MalformedInput::field_conversion("mass", None, TargetType::Decimal).into(),
        );
        assert_eq!(
            report.messages,
            vec!["Invalid value for field 'mass'. Expected a valid number (e.g., 10.5, 150.0)."]
        );
    }

    #[test]
    fn test_field_name_uses_last_path_segment() {
        let report = normalize(RequestError::Malformed(MalformedInput::FieldConversion {
            path: vec!["package".into(), "dimensions".into(), "height".into()],
            value: Some("tall".into()),
            target: TargetType::Integer,
        }));
        assert_eq!(
            report.messages,
            vec!["Invalid value 'tall' for field 'height'. Expected a valid whole number (e.g., 10, 150)."]
        );

        let report = normalize(RequestError::Malformed(MalformedInput::FieldConversion {
            path: Vec::new(),
            value: None,
            target: TargetType::Boolean,
        }));
        assert_eq!(
            report.messages,
            vec!["Invalid value for field 'unknown'. Expected a valid true or false."]
        );
    }

    #[test]
    fn test_type_descriptions() {
        assert_eq!(describe_target_type(&TargetType::Decimal), "number (e.g., 10.5, 150.0)");
        assert_eq!(describe_target_type(&TargetType::Integer), "whole number (e.g., 10, 150)");
        assert_eq!(describe_target_type(&TargetType::Text), "text");
        assert_eq!(describe_target_type(&TargetType::Boolean), "true or false");
        assert_eq!(describe_target_type(&TargetType::Other("LocalDate".into())), "localdate");
    }

    #[test]
    fn test_body_level_messages() {
        assert_eq!(
            normalize(MalformedInput::MissingBody.into()).messages,
            vec!["Request body is required"]
        );
        assert_eq!(
            normalize(MalformedInput::syntax("expected value at line 1 column 2").into()).messages,
            vec!["Invalid JSON format. Please check your request structure."]
        );
        assert_eq!(
            normalize(MalformedInput::other("payload too large").into()).messages,
            vec!["Invalid request body"]
        );
    }

    #[test]
    fn test_parameter_conversion() {
        let report = normalize(RequestError::parameter("height", "tall"));
        assert_eq!(report.status, 400);
        assert_eq!(report.error, "Invalid Input");
        assert_eq!(report.messages, vec!["Invalid value for parameter 'height': tall"]);
    }

    #[test]
    fn test_internal_fault_hides_detail() {
        let report = normalize(RequestError::internal("connection pool exhausted at db.rs:42"));

        assert_eq!(report.status, 500);
        assert_eq!(report.error, "Internal Server Error");
        assert_eq!(report.messages, vec![INTERNAL_ERROR_MESSAGE]);
        assert!(!serde_json::to_string(&report).unwrap().contains("db.rs"));
    }

    #[test]
    fn test_envelope_shape() {
        let report = normalize(RequestError::parameter("mass", "x"));
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "status": 400,
                "error": "Invalid Input",
                "messages": ["Invalid value for parameter 'mass': x"],
                "path": "/api/sort",
            })
        );
    }
}
