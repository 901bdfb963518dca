use crate::traits::InputValidator;
use crate::types::{MeasurementField, PackageMeasurement, RawPackageInput};
use std::fmt;

/// Constraint a field failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViolationKind {
    /// Absent or null
    Missing,
    /// Zero, negative or not a number
    NotPositive,
}

/// A single field-level constraint violation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Violation {
    pub field: MeasurementField,
    pub kind: ViolationKind,
}

impl Violation {
    /// Human-readable message for this violation
    pub fn message(&self) -> String {
        match self.kind {
            ViolationKind::Missing => format!("{} cannot be null", self.field.label()),
            ViolationKind::NotPositive => format!("{} must be positive", self.field.label()),
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

/// Non-empty, ordered list of violations
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violations(Vec<Violation>);

impl Violations {
    pub fn iter(&self) -> impl Iterator<Item = &Violation> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// One message per violation, in field order
    pub fn messages(&self) -> Vec<String> {
        self.0.iter().map(Violation::message).collect()
    }
}

impl fmt::Display for Violations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.messages().join("; "))
    }
}

/// Default validator: every field present and strictly positive
pub struct MeasurementValidator;

impl MeasurementValidator {
    pub fn new() -> Self {
        Self
    }
}

impl Default for MeasurementValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl InputValidator for MeasurementValidator {
    fn validate(&self, raw: &RawPackageInput) -> Result<PackageMeasurement, Violations> {
        let mut violations = Vec::new();
        let mut values = [0.0_f64; 4];

        for (slot, field) in values.iter_mut().zip(MeasurementField::ALL) {
            match raw.get(field) {
                // NaN fails the comparison; +inf passes and is classified as bulky
                Some(value) if value > 0.0 => *slot = value,
                Some(_) => violations.push(Violation {
                    field,
                    kind: ViolationKind::NotPositive,
                }),
                None => violations.push(Violation {
                    field,
                    kind: ViolationKind::Missing,
                }),
            }
        }

        if !violations.is_empty() {
            return Err(Violations(violations));
        }

        let [width, height, length, mass] = values;
        Ok(PackageMeasurement::new_unchecked(width, height, length, mass))
    }
}

/// Validate raw input with the default validator
pub fn validate(raw: &RawPackageInput) -> Result<PackageMeasurement, Violations> {
    MeasurementValidator::new().validate(raw)
}
