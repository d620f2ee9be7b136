//! Tests for insets: trimming, extension and rectangle adjustment.

use plinth_block::{InsetLength, Insets, LayoutError, Rect};
use quickcheck::TestResult;
use quickcheck_macros::quickcheck;

/// Map an arbitrary float onto `[0, limit)`, discarding NaN and infinities.
fn bounded(x: f64, limit: f64) -> Option<f64> {
    x.is_finite().then_some(x.abs() % limit)
}

fn side(x: f64, relative: bool) -> Option<InsetLength> {
    if relative {
        bounded(x, 2.0).map(InsetLength::Relative)
    } else {
        bounded(x, 1000.0).map(InsetLength::Absolute)
    }
}

// ========== construction ==========

#[test]
fn test_constructors_reject_bad_sides() {
    assert!(matches!(
        Insets::uniform(-1.0),
        Err(LayoutError::InvalidArgument { .. })
    ));
    assert!(Insets::absolute(0.0, f64::NAN, 0.0, 0.0).is_err());
    assert!(Insets::relative(0.0, 0.0, f64::INFINITY, 0.0).is_err());
}

#[test]
fn test_zero_and_default() {
    assert!(Insets::ZERO.is_zero());
    assert_eq!(Insets::default(), Insets::ZERO);
    assert!(Insets::relative(0.0, 0.0, 0.0, 0.0).unwrap().is_zero());
    assert!(!Insets::uniform(1.0).unwrap().is_zero());
}

// ========== trim / extend ==========

#[test]
fn test_trim_absolute() {
    let insets = Insets::absolute(1.0, 2.0, 3.0, 4.0).unwrap();
    assert_eq!(insets.trim_width(100.0), 94.0);
    assert_eq!(insets.trim_height(100.0), 96.0);
    assert_eq!(insets.extend_width(94.0), 100.0);
    assert_eq!(insets.extend_height(96.0), 100.0);
}

#[test]
fn test_trim_relative_uses_pre_trim_dimension() {
    // 10% + 20% of 200, not 20% of what is left after the left side.
    let insets = Insets::relative(0.0, 0.1, 0.0, 0.2).unwrap();
    assert_eq!(insets.trim_width(200.0), 140.0);
    assert_eq!(insets.extend_width(100.0), 130.0);
}

#[test]
fn test_trim_clamps_to_zero() {
    let insets = Insets::uniform(15.0).unwrap();
    assert_eq!(insets.trim_width(10.0), 0.0);
    assert_eq!(insets.trim_height(0.0), 0.0);
}

#[test]
fn test_trim_infinity_is_noop() {
    let insets = Insets::uniform(15.0).unwrap();
    assert_eq!(insets.trim_width(f64::INFINITY), f64::INFINITY);
    assert_eq!(insets.extend_height(f64::INFINITY), f64::INFINITY);
    let relative = Insets::relative(0.1, 0.1, 0.1, 0.1).unwrap();
    assert_eq!(relative.trim_width(f64::INFINITY), f64::INFINITY);
}

#[test]
fn test_calculate_side_insets() {
    let insets = Insets::new(
        InsetLength::Relative(0.5),
        InsetLength::Absolute(3.0),
        InsetLength::Absolute(4.0),
        InsetLength::Relative(0.25),
    )
    .unwrap();
    assert_eq!(insets.calculate_top_inset(40.0), 20.0);
    assert_eq!(insets.calculate_left_inset(40.0), 3.0);
    assert_eq!(insets.calculate_bottom_inset(40.0), 4.0);
    assert_eq!(insets.calculate_right_inset(40.0), 10.0);
}

#[quickcheck]
fn prop_trim_is_never_negative(
    sides: (f64, f64, f64, f64),
    relative: (bool, bool, bool, bool),
    dimension: f64,
) -> TestResult {
    let (Some(top), Some(left), Some(bottom), Some(right), Some(dimension)) = (
        side(sides.0, relative.0),
        side(sides.1, relative.1),
        side(sides.2, relative.2),
        side(sides.3, relative.3),
        bounded(dimension, 500.0),
    ) else {
        return TestResult::discard();
    };
    let insets = Insets::new(top, left, bottom, right).unwrap();
    TestResult::from_bool(
        insets.trim_width(dimension) >= 0.0 && insets.trim_height(dimension) >= 0.0,
    )
}

// ========== rectangles ==========

#[test]
fn test_trim_rect_in_place() {
    let insets = Insets::absolute(1.0, 2.0, 3.0, 4.0).unwrap();
    let mut rect = Rect::new(10.0, 10.0, 50.0, 40.0);
    insets.trim(&mut rect);
    assert_eq!(rect, Rect::new(12.0, 11.0, 44.0, 36.0));
}

#[test]
fn test_trim_rect_never_negative() {
    let insets = Insets::uniform(30.0).unwrap();
    let mut rect = Rect::new(0.0, 0.0, 20.0, 10.0);
    insets.trim(&mut rect);
    assert_eq!(rect.width, 0.0);
    assert_eq!(rect.height, 0.0);
    assert_eq!((rect.x, rect.y), (30.0, 30.0));
}

#[test]
fn test_trim_rect_relative_sides() {
    let insets = Insets::relative(0.1, 0.1, 0.1, 0.1).unwrap();
    let rect = insets.create_inset_rectangle(&Rect::new(0.0, 0.0, 200.0, 100.0));
    assert_eq!(rect, Rect::new(20.0, 10.0, 160.0, 80.0));
}

#[test]
fn test_outset_undoes_absolute_inset() {
    let insets = Insets::absolute(1.0, 2.0, 3.0, 4.0).unwrap();
    let outer = Rect::new(5.0, 5.0, 60.0, 30.0);
    let inner = insets.create_inset_rectangle(&outer);
    assert_eq!(insets.create_outset_rectangle(&inner), outer);
}
