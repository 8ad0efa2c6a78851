pub mod aliases;
mod block;
mod norm;
mod ops;
mod slice;
mod square;
mod util;

pub use slice::Rows;

use alloc::vec;
use alloc::vec::Vec;
use core::ops::{Index, IndexMut};

use crate::error::{Axis, MatrixError};
use crate::traits::Scalar;

/// Dense heap-allocated matrix.
///
/// Row-major `Vec<T>` storage of exactly `nrows * ncols` elements. Dimensions
/// are fixed for the lifetime of the value: every transform returns a new
/// matrix and never touches its operands. `Clone` is a deep copy.
///
/// # Examples
///
/// ```
/// use densemat::Matrix;
///
/// let a = Matrix::from([[4.0_f32, 7.0], [2.0, 6.0]]);
/// assert_eq!(a[(0, 1)], 7.0);
/// assert_eq!(a.nrows(), 2);
/// assert!((a.determinant().unwrap() - 10.0).abs() < 1e-5);
///
/// let id = Matrix::<f32>::identity(3);
/// assert_eq!(id[(2, 2)], 1.0);
/// assert_eq!(id[(0, 2)], 0.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix<T = f32> {
    data: Vec<T>,
    nrows: usize,
    ncols: usize,
}

// ── Constructors ────────────────────────────────────────────────────

impl<T: Scalar> Matrix<T> {
    /// Create an `nrows x ncols` matrix of zeros.
    ///
    /// Panics if either dimension is zero.
    ///
    /// ```
    /// use densemat::Matrix;
    /// let m = Matrix::<f32>::new(2, 3);
    /// assert_eq!(m.ncols(), 3);
    /// assert_eq!(m[(1, 2)], 0.0);
    /// ```
    pub fn new(nrows: usize, ncols: usize) -> Self {
        assert!(
            nrows > 0 && ncols > 0,
            "matrix dimensions must be non-zero, got {}x{}",
            nrows,
            ncols,
        );
        Self {
            data: vec![T::zero(); nrows * ncols],
            nrows,
            ncols,
        }
    }

    /// Create an `n x n` matrix of zeros.
    pub fn square(n: usize) -> Self {
        Self::new(n, n)
    }

    /// Create a matrix from an owned `Vec<T>` in row-major order.
    ///
    /// Panics if `data.len() != nrows * ncols` or a dimension is zero.
    ///
    /// ```
    /// use densemat::Matrix;
    /// let m = Matrix::from_vec(2, 2, vec![1.0_f32, 2.0, 3.0, 4.0]);
    /// assert_eq!(m[(1, 0)], 3.0);
    /// ```
    pub fn from_vec(nrows: usize, ncols: usize, data: Vec<T>) -> Self {
        assert!(
            nrows > 0 && ncols > 0,
            "matrix dimensions must be non-zero, got {}x{}",
            nrows,
            ncols,
        );
        assert_eq!(
            data.len(),
            nrows * ncols,
            "vec length {} does not match {}x{} matrix",
            data.len(),
            nrows,
            ncols,
        );
        Self { data, nrows, ncols }
    }

    /// Create a matrix from a flat row-major slice.
    ///
    /// Panics if `slice.len() != nrows * ncols`.
    pub fn from_slice(nrows: usize, ncols: usize, slice: &[T]) -> Self {
        Self::from_vec(nrows, ncols, slice.to_vec())
    }

    /// Deep-copy a 2D source, one inner slice per row.
    ///
    /// The column count is taken from the first row. Panics on an empty
    /// source or on ragged rows.
    ///
    /// ```
    /// use densemat::Matrix;
    /// let rows = vec![vec![1.0_f32, 2.0, 3.0], vec![4.0, 5.0, 6.0]];
    /// let m = Matrix::from_rows(&rows);
    /// assert_eq!(m.nrows(), 2);
    /// assert_eq!(m[(1, 2)], 6.0);
    /// ```
    pub fn from_rows<R: AsRef<[T]>>(rows: &[R]) -> Self {
        assert!(!rows.is_empty(), "cannot build a matrix from zero rows");
        let ncols = rows[0].as_ref().len();
        let mut data = Vec::with_capacity(rows.len() * ncols);
        for (i, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            assert_eq!(
                row.len(),
                ncols,
                "row {} has {} columns, expected {}",
                i,
                row.len(),
                ncols,
            );
            data.extend_from_slice(row);
        }
        Self::from_vec(rows.len(), ncols, data)
    }

    /// Create a matrix by calling `f(row, col)` for each element.
    ///
    /// ```
    /// use densemat::Matrix;
    /// let m = Matrix::from_fn(2, 3, |i, j| (i * 3 + j) as f32);
    /// assert_eq!(m[(1, 1)], 4.0);
    /// ```
    pub fn from_fn(nrows: usize, ncols: usize, f: impl Fn(usize, usize) -> T) -> Self {
        let mut data = Vec::with_capacity(nrows * ncols);
        for i in 0..nrows {
            for j in 0..ncols {
                data.push(f(i, j));
            }
        }
        Self::from_vec(nrows, ncols, data)
    }
}

impl<T> Matrix<T> {
    /// Number of rows.
    #[inline]
    pub fn nrows(&self) -> usize {
        self.nrows
    }

    /// Number of columns.
    #[inline]
    pub fn ncols(&self) -> usize {
        self.ncols
    }

    /// `(rows, cols)`.
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.nrows, self.ncols)
    }

    /// Whether the matrix is square.
    #[inline]
    pub fn is_square(&self) -> bool {
        self.nrows == self.ncols
    }

    /// Whether `other` has the same row and column counts.
    #[inline]
    pub fn size_equals<U>(&self, other: &Matrix<U>) -> bool {
        self.nrows == other.nrows && self.ncols == other.ncols
    }

    #[inline]
    fn check_index(&self, row: usize, col: usize) -> Result<usize, MatrixError> {
        if row >= self.nrows {
            return Err(MatrixError::OutOfRange {
                axis: Axis::Row,
                index: row,
                bound: self.nrows,
            });
        }
        if col >= self.ncols {
            return Err(MatrixError::OutOfRange {
                axis: Axis::Column,
                index: col,
                bound: self.ncols,
            });
        }
        Ok(row * self.ncols + col)
    }

    pub(crate) fn mismatch<U>(&self, op: &'static str, other: &Matrix<U>) -> MatrixError {
        MatrixError::DimensionMismatch {
            op,
            left_rows: self.nrows,
            left_cols: self.ncols,
            right_rows: other.nrows,
            right_cols: other.ncols,
        }
    }

    pub(crate) fn require_square(&self, op: &'static str) -> Result<(), MatrixError> {
        if self.is_square() {
            Ok(())
        } else {
            Err(MatrixError::NotSquare {
                op,
                rows: self.nrows,
                cols: self.ncols,
            })
        }
    }
}

// ── Element access ──────────────────────────────────────────────────

impl<T: Copy> Matrix<T> {
    /// Read element `(row, col)`.
    ///
    /// ```
    /// use densemat::{Matrix, MatrixError};
    /// let m = Matrix::from([[1.0_f32, 2.0]]);
    /// assert_eq!(m.get(0, 1), Ok(2.0));
    /// assert!(matches!(m.get(1, 0), Err(MatrixError::OutOfRange { .. })));
    /// ```
    pub fn get(&self, row: usize, col: usize) -> Result<T, MatrixError> {
        let k = self.check_index(row, col)?;
        Ok(self.data[k])
    }

    /// Overwrite element `(row, col)`.
    pub fn set(&mut self, row: usize, col: usize, value: T) -> Result<(), MatrixError> {
        let k = self.check_index(row, col)?;
        self.data[k] = value;
        Ok(())
    }
}

// ── Index ───────────────────────────────────────────────────────────

impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &T {
        assert!(
            row < self.nrows && col < self.ncols,
            "index ({}, {}) out of bounds for {}x{} matrix",
            row,
            col,
            self.nrows,
            self.ncols,
        );
        &self.data[row * self.ncols + col]
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix<T> {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        assert!(
            row < self.nrows && col < self.ncols,
            "index ({}, {}) out of bounds for {}x{} matrix",
            row,
            col,
            self.nrows,
            self.ncols,
        );
        &mut self.data[row * self.ncols + col]
    }
}

// ── Conversions ─────────────────────────────────────────────────────

impl<T: Scalar, const R: usize, const C: usize> From<[[T; C]; R]> for Matrix<T> {
    fn from(rows: [[T; C]; R]) -> Self {
        Self::from_rows(&rows)
    }
}

impl<T: Scalar> From<Vec<Vec<T>>> for Matrix<T> {
    fn from(rows: Vec<Vec<T>>) -> Self {
        Self::from_rows(&rows)
    }
}
