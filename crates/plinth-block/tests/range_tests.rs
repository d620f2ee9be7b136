//! Tests for inclusive ranges: construction, clamping and combination.

use plinth_block::{LayoutError, Range};
use quickcheck::TestResult;
use quickcheck_macros::quickcheck;

fn range(lower: f64, upper: f64) -> Range {
    Range::new(lower, upper).expect("valid range")
}

// ========== construction ==========

#[test]
fn test_new_rejects_inverted_bounds() {
    assert_eq!(
        Range::new(5.0, 1.0),
        Err(LayoutError::InconsistentRange {
            lower: 5.0,
            upper: 1.0
        })
    );
}

#[test]
fn test_new_rejects_nan_bounds() {
    assert!(matches!(
        Range::new(f64::NAN, 1.0),
        Err(LayoutError::InvalidArgument { .. })
    ));
    assert!(matches!(
        Range::new(0.0, f64::NAN),
        Err(LayoutError::InvalidArgument { .. })
    ));
}

#[test]
fn test_new_rejects_infinite_lower_bound() {
    assert!(matches!(
        Range::new(f64::NEG_INFINITY, 5.0),
        Err(LayoutError::InvalidArgument { .. })
    ));
    assert!(Range::at_least(f64::INFINITY).is_err());
}

#[test]
fn test_degenerate_and_default_ranges() {
    let r = range(3.0, 3.0);
    assert_eq!(r.length(), 0.0);
    assert_eq!(Range::default(), range(0.0, 0.0));
}

#[test]
fn test_at_least_is_unbounded() {
    let r = Range::at_least(10.0).unwrap();
    assert!(!r.is_bounded());
    assert_eq!(r.length(), f64::INFINITY);
    assert!(r.contains(1e300));
    assert!(!r.contains(9.0));
}

// ========== clamp ==========

#[test]
fn test_clamp_below_inside_above() {
    let r = range(10.0, 20.0);
    assert_eq!(r.clamp(5.0), 10.0);
    assert_eq!(r.clamp(15.0), 15.0);
    assert_eq!(r.clamp(25.0), 20.0);
}

#[test]
fn test_clamp_infinities() {
    let bounded = range(10.0, 20.0);
    assert_eq!(bounded.clamp(f64::INFINITY), 20.0);
    assert_eq!(bounded.clamp(f64::NEG_INFINITY), 10.0);

    let open = Range::at_least(10.0).unwrap();
    assert_eq!(open.clamp(f64::INFINITY), f64::INFINITY);
    assert_eq!(open.clamp(1e9), 1e9);
}

#[quickcheck]
fn prop_clamp_is_idempotent(a: f64, b: f64, x: f64, bounded: bool) -> TestResult {
    if !a.is_finite() || !b.is_finite() || x.is_nan() {
        return TestResult::discard();
    }
    let r = if bounded {
        range(a.min(b), a.max(b))
    } else {
        Range::at_least(a.min(b)).unwrap()
    };
    let once = r.clamp(x);
    TestResult::from_bool(r.clamp(once) == once && r.contains(once))
}

// ========== combine ==========

#[test]
fn test_combine_absent_is_identity() {
    let r = range(1.0, 2.0);
    assert_eq!(Range::combine(None, Some(r)), Some(r));
    assert_eq!(Range::combine(Some(r), None), Some(r));
    assert_eq!(Range::combine(None, None), None);
}

#[test]
fn test_combine_spans_both() {
    let combined = Range::combine(Some(range(1.0, 4.0)), Some(range(3.0, 9.0)));
    assert_eq!(combined, Some(range(1.0, 9.0)));
}

#[test]
fn test_combine_infinite_upper_dominates() {
    let combined = Range::combine(Some(range(1.0, 4.0)), Some(Range::at_least(2.0).unwrap()));
    assert_eq!(combined, Some(Range::at_least(1.0).unwrap()));
}

// ========== helpers ==========

#[test]
fn test_intersects() {
    let r = range(0.0, 10.0);
    assert!(r.intersects(&range(10.0, 20.0)));
    assert!(r.intersects(&range(2.0, 3.0)));
    assert!(!r.intersects(&range(10.5, 20.0)));
}

#[test]
fn test_central_value() {
    assert_eq!(range(10.0, 20.0).central_value(), 15.0);
    assert_eq!(Range::at_least(-4.0).unwrap().central_value(), f64::INFINITY);
}

#[test]
fn test_expand_to_include() {
    assert_eq!(Range::expand_to_include(None, 4.0), Ok(range(4.0, 4.0)));
    assert_eq!(
        Range::expand_to_include(Some(range(1.0, 2.0)), 7.0),
        Ok(range(1.0, 7.0))
    );
    assert!(Range::expand_to_include(None, f64::NAN).is_err());
}

#[test]
fn test_shift_and_scale() {
    let r = range(1.0, 3.0);
    assert_eq!(r.shift(2.0), Ok(range(3.0, 5.0)));
    assert_eq!(r.scale(2.0), Ok(range(2.0, 6.0)));
    assert!(r.scale(-1.0).is_err());
    assert!(r.shift(f64::NAN).is_err());

    let open = Range::at_least(2.0).unwrap().scale(0.0).unwrap();
    assert_eq!(open.lower(), 0.0);
    assert_eq!(open.upper(), f64::INFINITY);
}

#[test]
fn test_shift_overflowing_lower_bound_is_rejected() {
    let r = Range::at_least(1e308).unwrap();
    assert!(matches!(
        r.shift(1e308),
        Err(LayoutError::InvalidArgument { .. })
    ));
}

#[test]
fn test_scale_overflowing_lower_bound_is_rejected() {
    let r = range(1e308, 1e308);
    assert!(r.scale(10.0).is_err());
}

#[test]
fn test_scale_by_zero_keeps_bounds_ordered() {
    let r = range(-5.0, 5.0).scale(0.0).unwrap();
    assert_eq!(r, range(0.0, 0.0));
    assert!(r.contains(0.0));
    assert_eq!(r.clamp(3.0), 0.0);
}
