//! Property-based tests for the arithmetic laws of `Length` and `Matrix`.
//!
//! Run with: cargo test -p dmt-geometry --test properties

use approx::relative_eq;
use dmt_geometry::{GeometryError, Length, Matrix};
use proptest::prelude::*;

// =============================================================================
// Strategies
// =============================================================================

fn arb_value() -> impl Strategy<Value = f64> {
    -1.0e6..1.0e6f64
}

fn arb_nonzero() -> impl Strategy<Value = f64> {
    arb_value().prop_filter("non-zero divisor", |v| v.abs() > 1.0e-9)
}

/// A matrix of the given shape with bounded entries.
fn arb_matrix(rows: usize, cols: usize) -> impl Strategy<Value = Matrix> {
    prop::collection::vec(prop::collection::vec(-100.0..100.0f64, cols), rows)
        .prop_map(|rows| Matrix::from_rows(rows).unwrap())
}

/// Two matrices sharing a random shape.
fn arb_matrix_pair() -> impl Strategy<Value = (Matrix, Matrix)> {
    (1usize..6, 1usize..6).prop_flat_map(|(r, c)| (arb_matrix(r, c), arb_matrix(r, c)))
}

// =============================================================================
// Length
// =============================================================================

proptest! {
    #[test]
    fn mixed_addition_commutes(a in arb_value(), b in arb_value()) {
        prop_assert_eq!(Length::new(a) + b, Length::new(a + b));
        prop_assert_eq!(b + Length::new(a), Length::new(a + b));
    }

    #[test]
    fn division_collapses_only_when_length_is_divisor(a in arb_nonzero(), b in arb_nonzero()) {
        prop_assert_eq!(Length::new(a) / b, Length::new(a / b));
        let ratio: f64 = b / Length::new(a);
        prop_assert_eq!(ratio, b / a);
    }

    #[test]
    fn scaling_is_symmetric(a in arb_value(), k in arb_value()) {
        prop_assert_eq!(Length::new(a) * k, k * Length::new(a));
    }
}

// =============================================================================
// Matrix
// =============================================================================

proptest! {
    #[test]
    fn scaled_identity_has_k_on_diagonal(n in 1usize..8, k in arb_value()) {
        let m = Matrix::identity(n).unwrap().multiply(k);
        for i in 0..n {
            for j in 0..n {
                let expected = if i == j { k } else { 0.0 };
                prop_assert_eq!(m.get(i, j).unwrap(), expected);
            }
        }
    }

    #[test]
    fn hadamard_rejects_every_mismatched_shape(
        r1 in 1usize..6, c1 in 1usize..6, r2 in 1usize..6, c2 in 1usize..6
    ) {
        prop_assume!((r1, c1) != (r2, c2));
        let a = Matrix::new(r1, c1, 1.0).unwrap();
        let b = Matrix::new(r2, c2, 1.0).unwrap();
        let is_mismatch = matches!(
            a.hadamard_product(&b),
            Err(GeometryError::DimensionMismatch { .. })
        );
        prop_assert!(is_mismatch);
    }

    #[test]
    fn hadamard_commutes((a, b) in arb_matrix_pair()) {
        prop_assert_eq!(a.hadamard_product(&b).unwrap(), b.hadamard_product(&a).unwrap());
    }

    #[test]
    fn hadamard_associates_with_scaling((a, b) in arb_matrix_pair(), s in -100.0..100.0f64) {
        let left = a.multiply(s).hadamard_product(&b).unwrap();
        let right = a.hadamard_product(&b).unwrap().multiply(s);
        prop_assert_eq!(left.shape(), right.shape());
        for i in 0..left.rows() {
            for j in 0..left.cols() {
                let (l, r) = (left.get(i, j).unwrap(), right.get(i, j).unwrap());
                prop_assert!(
                    relative_eq!(l, r, epsilon = 1e-9, max_relative = 1e-12),
                    "({}, {}): {} vs {}", i, j, l, r
                );
            }
        }
    }

    #[test]
    fn operations_leave_inputs_untouched((a, b) in arb_matrix_pair(), s in arb_value()) {
        let (a0, b0) = (a.clone(), b.clone());
        let _ = a.multiply(s);
        let _ = a.hadamard_product(&b).unwrap();
        prop_assert_eq!(a, a0);
        prop_assert_eq!(b, b0);
    }
}
