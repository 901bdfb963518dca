use serde::{Deserialize, Serialize};
use std::fmt;

/// Handling category assigned to a package
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Category {
    /// Neither bulky nor heavy
    Standard,
    /// Exactly one of bulky or heavy
    Special,
    /// Both bulky and heavy
    Rejected,
}

impl Category {
    /// Wire label of the category
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Standard => "STANDARD",
            Category::Special => "SPECIAL",
            Category::Rejected => "REJECTED",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The four measured fields of a package, in declaration order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MeasurementField {
    Width,
    Height,
    Length,
    Mass,
}

impl MeasurementField {
    /// All fields in the order they are validated and reported
    pub const ALL: [MeasurementField; 4] = [
        MeasurementField::Width,
        MeasurementField::Height,
        MeasurementField::Length,
        MeasurementField::Mass,
    ];

    /// JSON key / query parameter name
    pub fn name(&self) -> &'static str {
        match self {
            MeasurementField::Width => "width",
            MeasurementField::Height => "height",
            MeasurementField::Length => "length",
            MeasurementField::Mass => "mass",
        }
    }

    /// Capitalized label used in human-readable messages
    pub fn label(&self) -> &'static str {
        match self {
            MeasurementField::Width => "Width",
            MeasurementField::Height => "Height",
            MeasurementField::Length => "Length",
            MeasurementField::Mass => "Mass",
        }
    }
}

impl fmt::Display for MeasurementField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Unvalidated package input as bound from a request body or query string.
///
/// A field is `None` when it was absent or explicitly null.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RawPackageInput {
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub length: Option<f64>,
    pub mass: Option<f64>,
}

impl RawPackageInput {
    /// Create a fully populated input
    pub fn new(width: f64, height: f64, length: f64, mass: f64) -> Self {
        Self {
            width: Some(width),
            height: Some(height),
            length: Some(length),
            mass: Some(mass),
        }
    }

    /// Read a field by name
    pub fn get(&self, field: MeasurementField) -> Option<f64> {
        match field {
            MeasurementField::Width => self.width,
            MeasurementField::Height => self.height,
            MeasurementField::Length => self.length,
            MeasurementField::Mass => self.mass,
        }
    }

    /// Set a field by name
    pub fn set(&mut self, field: MeasurementField, value: Option<f64>) {
        match field {
            MeasurementField::Width => self.width = value,
            MeasurementField::Height => self.height = value,
            MeasurementField::Length => self.length = value,
            MeasurementField::Mass => self.mass = value,
        }
    }
}

/// A validated package: every measurement is present and strictly positive.
///
/// Only the validator constructs values of this type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PackageMeasurement {
    width: f64,
    height: f64,
    length: f64,
    mass: f64,
}

impl PackageMeasurement {
    pub(crate) fn new_unchecked(width: f64, height: f64, length: f64, mass: f64) -> Self {
        Self {
            width,
            height,
            length,
            mass,
        }
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn length(&self) -> f64 {
        self.length
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }
}

/// Successful classification response body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SortResponse {
    pub category: Category,
}

impl SortResponse {
    pub fn new(category: Category) -> Self {
        Self { category }
    }
}
