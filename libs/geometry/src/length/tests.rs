//! Tests for the millimetre length type.

use super::*;
use approx::assert_relative_eq;

#[test]
fn test_add_number_either_order() {
    assert_eq!(Length::new(3.0) + 6.0, Length::new(9.0));
    assert_eq!(6.0 + Length::new(3.0), Length::new(9.0));
}

#[test]
fn test_sub_number_either_order() {
    assert_eq!(Length::new(3.0) - 6.0, Length::new(-3.0));
    assert_eq!(6.0 - Length::new(3.0), Length::new(3.0));
}

#[test]
fn test_mul_number_either_order() {
    assert_eq!(Length::new(3.0) * 6.0, Length::new(18.0));
    assert_eq!(6.0 * Length::new(3.0), Length::new(18.0));
}

/// Length / number stays a length, number / length is a plain scalar.
#[test]
fn test_division_asymmetry() {
    let scaled: Length = Length::new(3.0) / 6.0;
    assert_eq!(scaled, Length::new(0.5));

    let ratio: f64 = 6.0 / Length::new(3.0);
    assert_eq!(ratio, 2.0);
}

#[test]
fn test_integer_operands() {
    assert_eq!(Length::from(3_i32) + 6_i32, Length::new(9.0));
    assert_eq!(6_i32 + Length::from(3_i32), Length::new(9.0));
    assert_eq!(6_i32 - Length::from(3_i32), Length::new(3.0));
    assert_eq!(6_i32 * Length::from(3_i32), Length::new(18.0));
    assert_eq!(Length::from(3_i32) / 6_i32, Length::new(0.5));
    assert_eq!(6_i32 / Length::from(3_i32), 2.0);
}

#[test]
fn test_conversions_are_exact() {
    let raw = 12.345_678_9;
    let length = Length::from(raw);
    assert_eq!(length.value(), raw);
    assert_eq!(f64::from(length), raw);
    assert_eq!(Length::from(2.5f32).value(), 2.5);
    assert_eq!(Length::from(7u32).value(), 7.0);
}

#[test]
fn test_length_with_length() {
    assert_eq!(Length::new(2.0) + Length::new(3.0), Length::new(5.0));
    assert_eq!(Length::new(2.0) - Length::new(3.0), Length::new(-1.0));
    assert_eq!(Length::new(9.0) / Length::new(3.0), 3.0);
    assert_eq!(-Length::new(2.0), Length::new(-2.0));
}

#[test]
fn test_assign_ops() {
    let mut l = Length::new(1.0);
    l += 2.0;
    l += Length::new(1.0);
    assert_eq!(l, Length::new(4.0));
    l -= 1.0;
    l -= Length::new(1.0);
    assert_eq!(l, Length::new(2.0));
    l *= 3.0;
    assert_eq!(l, Length::new(6.0));
    l /= 4.0;
    assert_eq!(l, Length::new(1.5));
}

/// Equality is exact; tolerance only applies when asked for.
#[test]
fn test_equality_has_no_implicit_tolerance() {
    let a = Length::new(0.1) + 0.2;
    assert_ne!(a, Length::new(0.3));
    assert!(a.approx_eq(Length::new(0.3), 1e-12));
    assert_relative_eq!(a.value(), 0.3, epsilon = 1e-12);
}

#[test]
fn test_nan_is_not_equal_to_itself() {
    let nan = Length::new(f64::NAN);
    assert_ne!(nan, nan);
}

#[test]
fn test_ordering_and_helpers() {
    let a = Length::new(-4.0);
    let b = Length::new(2.0);
    assert!(a < b);
    assert_eq!(a.abs(), Length::new(4.0));
    assert_eq!(a.min(b), a);
    assert_eq!(a.max(b), b);
}

#[test]
fn test_sum() {
    let parts = [Length::new(1.0), Length::new(2.5), Length::new(0.5)];
    let total: Length = parts.iter().sum();
    assert_eq!(total, Length::new(4.0));
    let total: Length = parts.into_iter().sum();
    assert_eq!(total, Length::new(4.0));
}

#[test]
fn test_display() {
    assert_eq!(Length::new(12.5).to_string(), "12.5mm");
}

#[test]
fn test_serde_is_transparent() {
    let json = serde_json::to_string(&Length::new(4.25)).unwrap();
    assert_eq!(json, "4.25");
    let back: Length = serde_json::from_str("7.5").unwrap();
    assert_eq!(back, Length::new(7.5));
}
