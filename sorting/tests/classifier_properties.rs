//! Property tests for the classification rules

use package_sorting::classifier::{is_bulky, DIMENSION_THRESHOLD, MASS_THRESHOLD};
use package_sorting::{classify, validate, Category, RawPackageInput};
use proptest::prelude::*;

/// Dimensions below 100 keep every dimension and the volume under threshold
fn small_dimension() -> impl Strategy<Value = f64> {
    0.01f64..99.99
}

fn light_mass() -> impl Strategy<Value = f64> {
    0.01f64..19.99
}

fn heavy_mass() -> impl Strategy<Value = f64> {
    MASS_THRESHOLD..10_000.0
}

fn oversized_dimension() -> impl Strategy<Value = f64> {
    DIMENSION_THRESHOLD..100_000.0
}

proptest! {
    #[test]
    fn small_and_light_is_standard(
        w in small_dimension(),
        h in small_dimension(),
        l in small_dimension(),
        m in light_mass(),
    ) {
        prop_assert_eq!(classify(w, h, l, m), Category::Standard);
    }

    #[test]
    fn heavy_only_is_special(
        w in small_dimension(),
        h in small_dimension(),
        l in small_dimension(),
        m in heavy_mass(),
    ) {
        prop_assert_eq!(classify(w, h, l, m), Category::Special);
    }

    #[test]
    fn oversized_only_is_special(
        big in oversized_dimension(),
        h in small_dimension(),
        l in small_dimension(),
        m in light_mass(),
    ) {
        prop_assert_eq!(classify(big, h, l, m), Category::Special);
    }

    #[test]
    fn oversized_and_heavy_is_rejected(
        big in oversized_dimension(),
        h in small_dimension(),
        l in small_dimension(),
        m in heavy_mass(),
    ) {
        prop_assert_eq!(classify(h, l, big, m), Category::Rejected);
    }

    #[test]
    fn bulkiness_ignores_dimension_order(
        w in 0.01f64..500.0,
        h in 0.01f64..500.0,
        l in 0.01f64..500.0,
    ) {
        let expected = is_bulky(w, h, l);
        prop_assert_eq!(is_bulky(w, l, h), expected);
        prop_assert_eq!(is_bulky(h, w, l), expected);
        prop_assert_eq!(is_bulky(h, l, w), expected);
        prop_assert_eq!(is_bulky(l, w, h), expected);
        prop_assert_eq!(is_bulky(l, h, w), expected);
    }

    #[test]
    fn non_positive_values_never_validate(
        value in -1_000.0f64..=0.0,
        index in 0usize..4,
    ) {
        let mut values = [1.0, 1.0, 1.0, 1.0];
        values[index] = value;
        let raw = RawPackageInput::new(values[0], values[1], values[2], values[3]);

        let violations = validate(&raw).unwrap_err();
        prop_assert_eq!(violations.len(), 1);
        prop_assert!(violations.messages()[0].ends_with("must be positive"));
    }
}

#[test]
fn threshold_exactness() {
    assert_eq!(classify(150.0, 1.0, 1.0, 1.0), Category::Special);
    assert_eq!(classify(149.99, 1.0, 1.0, 1.0), Category::Standard);
    assert_eq!(classify(100.0, 100.0, 100.0, 1.0), Category::Special);
    assert_eq!(classify(99.9, 100.0, 100.0, 1.0), Category::Standard);
    assert_eq!(classify(1.0, 1.0, 1.0, 20.0), Category::Special);
    assert_eq!(classify(1.0, 1.0, 1.0, 19.99), Category::Standard);
}
