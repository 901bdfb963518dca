//! Input validation for package measurements
//!
//! Checks presence and positivity of every field and reports all violations
//! at once, in field declaration order.

pub mod request_validator;

pub use request_validator::{validate, MeasurementValidator, Violation, ViolationKind, Violations};
