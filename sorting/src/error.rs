use crate::validation::Violations;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for package sorting operations
pub type Result<T> = std::result::Result<T, SortingError>;

/// Errors raised outside request handling: configuration, logging and server startup
#[derive(Debug, Error)]
pub enum SortingError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Configuration file not found: {path}")]
    ConfigNotFound { path: PathBuf },

    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    #[error("Logging initialization failed: {message}")]
    Logging { message: String },

    #[error("Server error: {message}")]
    Server { message: String },
}

impl SortingError {
    /// Create a new invalid configuration error
    pub fn invalid_config<S: Into<String>>(message: S) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Create a new logging initialization error
    pub fn logging<S: Into<String>>(message: S) -> Self {
        Self::Logging {
            message: message.into(),
        }
    }

    /// Create a new server error
    pub fn server<S: Into<String>>(message: S) -> Self {
        Self::Server {
            message: message.into(),
        }
    }
}

/// Every way a single classification request can fail.
///
/// The boundary produces one of these from its own parse and validate steps;
/// the error normalizer turns it into the uniform error envelope.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RequestError {
    #[error("validation failed: {0}")]
    Validation(Violations),

    #[error("malformed input: {0}")]
    Malformed(MalformedInput),

    #[error("invalid value for parameter '{name}': {value}")]
    ParameterConversion { name: String, value: String },

    #[error("internal fault: {detail}")]
    Internal { detail: String },
}

impl RequestError {
    /// Create a parameter conversion failure
    pub fn parameter<N: Into<String>, V: Into<String>>(name: N, value: V) -> Self {
        Self::ParameterConversion {
            name: name.into(),
            value: value.into(),
        }
    }

    /// Create an internal fault; the detail is logged, never returned to callers
    pub fn internal<S: Into<String>>(detail: S) -> Self {
        Self::Internal {
            detail: detail.into(),
        }
    }
}

impl From<Violations> for RequestError {
    fn from(violations: Violations) -> Self {
        Self::Validation(violations)
    }
}

impl From<MalformedInput> for RequestError {
    fn from(malformed: MalformedInput) -> Self {
        Self::Malformed(malformed)
    }
}

/// Why a payload could not be bound to the expected structure
#[derive(Debug, Clone, PartialEq)]
pub enum MalformedInput {
    /// A field held a value that cannot be converted to its target type
    FieldConversion {
        /// Structural path to the offending value, outermost first
        path: Vec<String>,
        /// The offending value when it was text, `None` otherwise
        value: Option<String>,
        target: TargetType,
    },
    /// No body was sent
    MissingBody,
    /// The body is not syntactically valid JSON or has the wrong shape
    Syntax { detail: String },
    /// Anything else that prevented binding
    Other { detail: String },
}

impl MalformedInput {
    /// Create a field conversion failure for a single top-level field
    pub fn field_conversion<S: Into<String>>(
        field: S,
        value: Option<String>,
        target: TargetType,
    ) -> Self {
        Self::FieldConversion {
            path: vec![field.into()],
            value,
            target,
        }
    }

    pub fn syntax<S: Into<String>>(detail: S) -> Self {
        Self::Syntax {
            detail: detail.into(),
        }
    }

    pub fn other<S: Into<String>>(detail: S) -> Self {
        Self::Other {
            detail: detail.into(),
        }
    }
}

impl fmt::Display for MalformedInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FieldConversion {
                path,
                value,
                target,
            } => {
                let path = if path.is_empty() {
                    "<root>".to_string()
                } else {
                    path.join(".")
                };
                match value {
                    Some(value) => write!(f, "cannot convert '{value}' at {path} to {target}"),
                    None => write!(f, "cannot convert value at {path} to {target}"),
                }
            }
            Self::MissingBody => f.write_str("request body is missing"),
            Self::Syntax { detail } => write!(f, "syntax error: {detail}"),
            Self::Other { detail } => f.write_str(detail),
        }
    }
}

/// Type a field was expected to convert into
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TargetType {
    Decimal,
    Integer,
    Text,
    Boolean,
    Other(String),
}

impl fmt::Display for TargetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TargetType::Decimal => f.write_str("decimal"),
            TargetType::Integer => f.write_str("integer"),
            TargetType::Text => f.write_str("text"),
            TargetType::Boolean => f.write_str("boolean"),
            TargetType::Other(name) => f.write_str(name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_types() {
        let error = SortingError::invalid_config("port must be non-zero");
        assert!(error.to_string().contains("Invalid configuration"));

        let error = SortingError::ConfigNotFound {
            path: PathBuf::from("missing.toml"),
        };
        assert!(error.to_string().contains("missing.toml"));
    }

    #[test]
    fn test_request_error_display() {
        let error = RequestError::parameter("width", "abc");
        assert_eq!(error.to_string(), "invalid value for parameter 'width': abc");

        let error: RequestError =
            MalformedInput::field_conversion("mass", Some("heavy".into()), TargetType::Decimal)
                .into();
        assert_eq!(
            error.to_string(),
            "malformed input: cannot convert 'heavy' at mass to decimal"
        );
    }
}
