//! Dense two-dimensional matrix.
//!
//! Entries are stored row-major in a single `Vec<f64>`. The shape is fixed
//! at construction; there is no resizing, broadcasting, or implicit shape
//! coercion. Every algebraic operation returns a fresh matrix and leaves
//! its operands untouched.

use std::fmt;
use std::ops::{Index, IndexMut, Mul};

use config::constants::EPSILON_TOLERANCE;
use serde::{Deserialize, Serialize};

use crate::error::{GeometryError, GeometryResult};

/// A `rows x cols` matrix of `f64`, indexed from zero.
///
/// Serialized as a list of rows, so deserialization goes through the same
/// shape validation as [`Matrix::from_rows`].
///
/// # Examples
/// ```
/// use dmt_geometry::Matrix;
///
/// let mut m = Matrix::new(2, 3, 0.0).unwrap();
/// m.set(1, 2, 4.0).unwrap();
/// assert_eq!(m.get(1, 2).unwrap(), 4.0);
/// assert_eq!(m[(1, 2)], 4.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(into = "Vec<Vec<f64>>", try_from = "Vec<Vec<f64>>")]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl Matrix {
    /// Creates a `rows x cols` matrix with every entry set to `fill_value`.
    ///
    /// # Errors
    /// `InvalidArgument` if `rows` or `cols` is zero, or if `rows * cols`
    /// entries cannot be addressed.
    pub fn new(rows: usize, cols: usize, fill_value: f64) -> GeometryResult<Self> {
        if rows == 0 || cols == 0 {
            return Err(GeometryError::invalid_argument(format!(
                "matrix dimensions must be positive, got {rows}x{cols}"
            )));
        }
        let len = element_count(rows, cols)?;
        Ok(Self {
            rows,
            cols,
            data: vec![fill_value; len],
        })
    }

    /// Creates the identity matrix of the given order.
    ///
    /// # Errors
    /// `InvalidArgument` if `order` is zero.
    ///
    /// # Examples
    /// ```
    /// use dmt_geometry::Matrix;
    ///
    /// let i = Matrix::identity(3).unwrap();
    /// assert_eq!(i.get(0, 0).unwrap(), 1.0);
    /// assert_eq!(i.get(0, 1).unwrap(), 0.0);
    /// ```
    pub fn identity(order: usize) -> GeometryResult<Self> {
        let mut matrix = Self::new(order, order, 0.0)?;
        for i in 0..order {
            matrix.data[i * order + i] = 1.0;
        }
        Ok(matrix)
    }

    /// Builds a matrix from row vectors.
    ///
    /// # Errors
    /// `InvalidArgument` if there are no rows, the first row is empty, or
    /// the rows have differing lengths.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> GeometryResult<Self> {
        let row_count = rows.len();
        let col_count = rows.first().map_or(0, Vec::len);
        if row_count == 0 || col_count == 0 {
            return Err(GeometryError::invalid_argument(
                "matrix must have at least one row and one column",
            ));
        }

        if let Some((i, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != col_count) {
            return Err(GeometryError::invalid_argument(format!(
                "row {i} has {} entries, expected {col_count}",
                row.len()
            )));
        }
        // every row is already in memory, so the total cannot overflow
        let data: Vec<f64> = rows.into_iter().flatten().collect();

        Ok(Self {
            rows: row_count,
            cols: col_count,
            data,
        })
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Shape as `(rows, cols)`.
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Returns true if the matrix has as many rows as columns.
    #[inline]
    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// Reads the entry at `(row, col)`.
    ///
    /// # Errors
    /// `IndexOutOfRange` if either index is outside the matrix.
    pub fn get(&self, row: usize, col: usize) -> GeometryResult<f64> {
        self.offset(row, col).map(|i| self.data[i])
    }

    /// Writes the entry at `(row, col)`.
    ///
    /// # Errors
    /// `IndexOutOfRange` if either index is outside the matrix.
    pub fn set(&mut self, row: usize, col: usize, value: f64) -> GeometryResult<()> {
        let i = self.offset(row, col)?;
        self.data[i] = value;
        Ok(())
    }

    /// Returns row `row` as a slice.
    ///
    /// # Errors
    /// `IndexOutOfRange` if `row >= rows`.
    pub fn row(&self, row: usize) -> GeometryResult<&[f64]> {
        let start = self.offset(row, 0)?;
        Ok(&self.data[start..start + self.cols])
    }

    /// Returns a new matrix with every entry multiplied by `scalar`.
    ///
    /// # Examples
    /// ```
    /// use dmt_geometry::Matrix;
    ///
    /// let m = Matrix::identity(2).unwrap().multiply(3.0);
    /// assert_eq!(m.get(1, 1).unwrap(), 3.0);
    /// assert_eq!(m.get(1, 0).unwrap(), 0.0);
    /// ```
    pub fn multiply(&self, scalar: f64) -> Matrix {
        self.map(|v| v * scalar)
    }

    /// Element-wise (Hadamard) product.
    ///
    /// # Errors
    /// `DimensionMismatch` if the shapes differ. Shapes are compared before
    /// any entry is touched.
    ///
    /// # Examples
    /// ```
    /// use dmt_geometry::Matrix;
    ///
    /// let a = Matrix::identity(3).unwrap().multiply(3.0);
    /// let b = Matrix::identity(3).unwrap().multiply(2.0);
    /// let c = a.hadamard_product(&b).unwrap();
    /// assert_eq!(c.get(2, 2).unwrap(), 6.0);
    /// assert_eq!(c.get(0, 2).unwrap(), 0.0);
    /// ```
    pub fn hadamard_product(&self, other: &Matrix) -> GeometryResult<Matrix> {
        self.zip_with(other, "hadamard_product", |a, b| a * b)
    }

    /// Entry-wise sum.
    ///
    /// # Errors
    /// `DimensionMismatch` if the shapes differ.
    pub fn add_matrix(&self, other: &Matrix) -> GeometryResult<Matrix> {
        self.zip_with(other, "add_matrix", |a, b| a + b)
    }

    /// Entry-wise difference.
    ///
    /// # Errors
    /// `DimensionMismatch` if the shapes differ.
    pub fn subtract_matrix(&self, other: &Matrix) -> GeometryResult<Matrix> {
        self.zip_with(other, "subtract_matrix", |a, b| a - b)
    }

    /// Standard matrix product `self * other`.
    ///
    /// # Errors
    /// `DimensionMismatch` unless `self.cols() == other.rows()`.
    ///
    /// # Examples
    /// ```
    /// use dmt_geometry::Matrix;
    ///
    /// let a = Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
    /// let b = Matrix::from_rows(vec![vec![5.0], vec![6.0]]).unwrap();
    /// let c = a.product(&b).unwrap();
    /// assert_eq!(c.shape(), (2, 1));
    /// assert_eq!(c.get(0, 0).unwrap(), 17.0);
    /// assert_eq!(c.get(1, 0).unwrap(), 39.0);
    /// ```
    pub fn product(&self, other: &Matrix) -> GeometryResult<Matrix> {
        if self.cols != other.rows {
            return Err(self.mismatch(other, "product"));
        }

        let mut data = vec![0.0; self.rows * other.cols];
        for i in 0..self.rows {
            for k in 0..self.cols {
                let a = self.data[i * self.cols + k];
                for j in 0..other.cols {
                    data[i * other.cols + j] += a * other.data[k * other.cols + j];
                }
            }
        }

        Ok(Matrix {
            rows: self.rows,
            cols: other.cols,
            data,
        })
    }

    /// Returns the transpose.
    pub fn transpose(&self) -> Matrix {
        let mut data = Vec::with_capacity(self.data.len());
        for j in 0..self.cols {
            for i in 0..self.rows {
                data.push(self.data[i * self.cols + j]);
            }
        }
        Matrix {
            rows: self.cols,
            cols: self.rows,
            data,
        }
    }

    /// Compares two matrices entry by entry within `tolerance`.
    ///
    /// Matrices of different shape are never approximately equal.
    pub fn approx_eq(&self, other: &Matrix, tolerance: f64) -> bool {
        self.shape() == other.shape()
            && self
                .data
                .iter()
                .zip(&other.data)
                .all(|(a, b)| (a - b).abs() <= tolerance)
    }

    /// Returns true if this is a square matrix equal to the identity within
    /// the kernel tolerance.
    pub fn is_identity(&self) -> bool {
        self.is_square()
            && self.data.iter().enumerate().all(|(i, v)| {
                let expected = if i / self.cols == i % self.cols { 1.0 } else { 0.0 };
                (v - expected).abs() <= EPSILON_TOLERANCE
            })
    }

    fn offset(&self, row: usize, col: usize) -> GeometryResult<usize> {
        if row >= self.rows || col >= self.cols {
            return Err(GeometryError::IndexOutOfRange {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(row * self.cols + col)
    }

    fn map(&self, f: impl Fn(f64) -> f64) -> Matrix {
        Matrix {
            rows: self.rows,
            cols: self.cols,
            data: self.data.iter().map(|&v| f(v)).collect(),
        }
    }

    fn zip_with(
        &self,
        other: &Matrix,
        operation: &'static str,
        f: impl Fn(f64, f64) -> f64,
    ) -> GeometryResult<Matrix> {
        if self.shape() != other.shape() {
            return Err(self.mismatch(other, operation));
        }
        Ok(Matrix {
            rows: self.rows,
            cols: self.cols,
            data: self
                .data
                .iter()
                .zip(&other.data)
                .map(|(&a, &b)| f(a, b))
                .collect(),
        })
    }

    fn mismatch(&self, other: &Matrix, operation: &'static str) -> GeometryError {
        GeometryError::DimensionMismatch {
            operation,
            left: self.shape(),
            right: other.shape(),
        }
    }
}

/// Number of entries in a `rows x cols` matrix, if a `Vec<f64>` can hold them.
fn element_count(rows: usize, cols: usize) -> GeometryResult<usize> {
    rows.checked_mul(cols)
        .filter(|&len| len <= isize::MAX as usize / std::mem::size_of::<f64>())
        .ok_or_else(|| {
            GeometryError::invalid_argument(format!(
                "matrix dimensions {rows}x{cols} exceed addressable storage"
            ))
        })
}

/// Panicking access, like slice indexing. Use [`Matrix::get`] for a
/// checked read.
impl Index<(usize, usize)> for Matrix {
    type Output = f64;

    fn index(&self, (row, col): (usize, usize)) -> &f64 {
        assert!(
            row < self.rows && col < self.cols,
            "index ({row}, {col}) out of range for {}x{} matrix",
            self.rows,
            self.cols
        );
        &self.data[row * self.cols + col]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut f64 {
        assert!(
            row < self.rows && col < self.cols,
            "index ({row}, {col}) out of range for {}x{} matrix",
            self.rows,
            self.cols
        );
        &mut self.data[row * self.cols + col]
    }
}

impl Mul<f64> for &Matrix {
    type Output = Matrix;

    fn mul(self, scalar: f64) -> Matrix {
        self.multiply(scalar)
    }
}

impl Mul<&Matrix> for f64 {
    type Output = Matrix;

    fn mul(self, matrix: &Matrix) -> Matrix {
        matrix.multiply(self)
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.data.chunks(self.cols).enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "[")?;
            for (j, v) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{v}")?;
            }
            write!(f, "]")?;
        }
        Ok(())
    }
}

impl From<Matrix> for Vec<Vec<f64>> {
    fn from(matrix: Matrix) -> Self {
        matrix
            .data
            .chunks(matrix.cols)
            .map(<[f64]>::to_vec)
            .collect()
    }
}

impl TryFrom<Vec<Vec<f64>>> for Matrix {
    type Error = GeometryError;

    fn try_from(rows: Vec<Vec<f64>>) -> Result<Self, Self::Error> {
        Matrix::from_rows(rows)
    }
}
