//! Binding raw request data to [`RawPackageInput`].
//!
//! Only binding happens here: absent and null fields become `None` and are
//! left for the validator to report. Values of the wrong type stop binding
//! immediately with a [`RequestError`].
//!
//! Numbers are read from their literal text, so a JSON number or numeric
//! string outside the f64 range becomes an infinity instead of an error.

use crate::error::{MalformedInput, RequestError, TargetType};
use crate::types::{MeasurementField, RawPackageInput};
use axum::extract::Query;
use axum::http::Uri;
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::{Map, Value};

/// Decimal and exponent forms, plus the spelled-out infinities and NaN
static DECIMAL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:-?(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?|-?Infinity|NaN)$")
        .expect("Failed to compile decimal regex")
});

/// Parse decimal text, rejecting spellings such as `inf` or `+5`
pub fn parse_decimal(text: &str) -> Option<f64> {
    let text = text.trim();
    if !DECIMAL_PATTERN.is_match(text) {
        return None;
    }
    text.parse().ok()
}

/// Bind a JSON request body
pub fn parse_json_body(body: &[u8]) -> Result<RawPackageInput, RequestError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Err(MalformedInput::MissingBody.into());
    }

    let value: Value = serde_json::from_slice(body).map_err(|e| {
        if e.is_syntax() || e.is_eof() {
            MalformedInput::syntax(e.to_string())
        } else {
            MalformedInput::other(e.to_string())
        }
    })?;

    // A literal null is treated the same as no body at all
    let object = match value {
        Value::Object(object) => object,
        Value::Null => return Err(MalformedInput::MissingBody.into()),
        other => {
            return Err(MalformedInput::syntax(format!(
                "expected a JSON object, found {}",
                json_type_name(&other)
            ))
            .into())
        }
    };

    let mut raw = RawPackageInput::default();
    for field in MeasurementField::ALL {
        raw.set(field, decimal_field(&object, field)?);
    }
    Ok(raw)
}

/// Bind query parameters; the first occurrence of a repeated parameter wins
pub fn parse_query(uri: &Uri) -> Result<RawPackageInput, RequestError> {
    let Query(pairs) = Query::<Vec<(String, String)>>::try_from_uri(uri)
        .map_err(|e| MalformedInput::other(e.body_text()))?;

    let mut raw = RawPackageInput::default();
    for field in MeasurementField::ALL {
        let Some((_, value)) = pairs.iter().find(|(name, _)| name == field.name()) else {
            continue;
        };
        let parsed = parse_decimal(value)
            .ok_or_else(|| RequestError::parameter(field.name(), value.as_str()))?;
        raw.set(field, Some(parsed));
    }
    Ok(raw)
}

fn decimal_field(
    object: &Map<String, Value>,
    field: MeasurementField,
) -> Result<Option<f64>, RequestError> {
    let conversion_failure = |value: Option<String>| {
        RequestError::from(MalformedInput::field_conversion(
            field.name(),
            value,
            TargetType::Decimal,
        ))
    };

    match object.get(field.name()) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Number(number)) => parse_decimal(&number.to_string())
            .map(Some)
            .ok_or_else(|| conversion_failure(None)),
        // Numeric text is coerced; empty text binds as null
        Some(Value::String(text)) => {
            if text.trim().is_empty() {
                return Ok(None);
            }
            parse_decimal(text)
                .map(Some)
                .ok_or_else(|| conversion_failure(Some(text.clone())))
        }
        Some(Value::Bool(_)) | Some(Value::Array(_)) | Some(Value::Object(_)) => {
            Err(conversion_failure(None))
        }
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
