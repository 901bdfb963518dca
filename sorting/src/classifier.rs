//! Bulky/heavy package classification.
//!
//! Pure functions over already validated measurements. All thresholds are
//! inclusive: a value exactly at a threshold triggers the condition.

use crate::types::{Category, PackageMeasurement};

/// Any single dimension at or above this is bulky
pub const DIMENSION_THRESHOLD: f64 = 150.0;

/// A volume at or above this is bulky
pub const VOLUME_THRESHOLD: f64 = 1_000_000.0;

/// A mass at or above this is heavy
pub const MASS_THRESHOLD: f64 = 20.0;

/// Intermediate findings behind a classification
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Assessment {
    pub bulky: bool,
    pub heavy: bool,
    pub volume: f64,
}

impl Assessment {
    /// Category implied by the bulky/heavy findings
    pub fn category(&self) -> Category {
        match (self.bulky, self.heavy) {
            (true, true) => Category::Rejected,
            (true, false) | (false, true) => Category::Special,
            (false, false) => Category::Standard,
        }
    }
}

/// Assess a package without collapsing the findings into a category
pub fn assess(width: f64, height: f64, length: f64, mass: f64) -> Assessment {
    let volume = width * height * length;
    Assessment {
        bulky: is_bulky(width, height, length),
        heavy: is_heavy(mass),
        volume,
    }
}

/// Classify a package from its raw measurements
pub fn classify(width: f64, height: f64, length: f64, mass: f64) -> Category {
    assess(width, height, length, mass).category()
}

/// Classify a validated package
pub fn classify_package(measurement: &PackageMeasurement) -> Category {
    classify(
        measurement.width(),
        measurement.height(),
        measurement.length(),
        measurement.mass(),
    )
}

pub fn is_bulky(width: f64, height: f64, length: f64) -> bool {
    if width >= DIMENSION_THRESHOLD
        || height >= DIMENSION_THRESHOLD
        || length >= DIMENSION_THRESHOLD
    {
        return true;
    }

    width * height * length >= VOLUME_THRESHOLD
}

pub fn is_heavy(mass: f64) -> bool {
    mass >= MASS_THRESHOLD
}
