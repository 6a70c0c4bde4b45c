//! # Error Types
//!
//! Errors raised by misuse of the geometry value types. These describe
//! caller mistakes and are reported immediately; nothing here is retried.

use thiserror::Error;

/// Errors that can occur when constructing or combining matrices.
///
/// ## Example
///
/// ```rust
/// use dmt_geometry::{GeometryError, Matrix};
///
/// let a = Matrix::new(3, 3, 0.0).unwrap();
/// let b = Matrix::new(2, 3, 0.0).unwrap();
/// assert!(matches!(
///     a.hadamard_product(&b),
///     Err(GeometryError::DimensionMismatch { .. })
/// ));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    /// A constructor received an argument outside its domain.
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// What was wrong with the argument
        message: String,
    },

    /// Element access outside `[0, rows) x [0, cols)`.
    #[error("Index ({row}, {col}) out of range for {rows}x{cols} matrix")]
    IndexOutOfRange {
        /// Requested row
        row: usize,
        /// Requested column
        col: usize,
        /// Row count of the matrix
        rows: usize,
        /// Column count of the matrix
        cols: usize,
    },

    /// Two operands have incompatible shapes for the requested operation.
    #[error(
        "Dimension mismatch in {operation}: {}x{} vs {}x{}",
        .left.0, .left.1, .right.0, .right.1
    )]
    DimensionMismatch {
        /// Name of the operation that was attempted
        operation: &'static str,
        /// Shape `(rows, cols)` of the receiver
        left: (usize, usize),
        /// Shape `(rows, cols)` of the argument
        right: (usize, usize),
    },
}

impl GeometryError {
    /// Creates an invalid argument error.
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }
}

/// Result type alias for geometry operations.
pub type GeometryResult<T> = Result<T, GeometryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = GeometryError::IndexOutOfRange {
            row: 4,
            col: 0,
            rows: 3,
            cols: 3,
        };
        assert_eq!(err.to_string(), "Index (4, 0) out of range for 3x3 matrix");

        let err = GeometryError::DimensionMismatch {
            operation: "hadamard_product",
            left: (3, 3),
            right: (2, 3),
        };
        assert_eq!(
            err.to_string(),
            "Dimension mismatch in hadamard_product: 3x3 vs 2x3"
        );
    }

    /// Test error types are Send + Sync for async compatibility.
    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<GeometryError>();
    }
}
