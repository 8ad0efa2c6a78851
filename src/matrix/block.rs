use alloc::vec::Vec;

use crate::error::MatrixError;
use crate::traits::Scalar;

use super::Matrix;

impl<T: Scalar> Matrix<T> {
    /// Horizontal concatenation `[self | rhs]`.
    ///
    /// Fails with `RowMismatch` unless both have the same row count.
    ///
    /// ```
    /// use densemat::Matrix;
    /// let a = Matrix::from([[1.0_f32], [2.0]]);
    /// let b = Matrix::from([[3.0_f32, 4.0], [5.0, 6.0]]);
    /// let ab = a.augment(&b).unwrap();
    /// assert_eq!(ab.as_slice(), &[1.0, 3.0, 4.0, 2.0, 5.0, 6.0]);
    /// ```
    pub fn augment(&self, rhs: &Self) -> Result<Self, MatrixError> {
        if self.nrows != rhs.nrows {
            return Err(MatrixError::RowMismatch {
                left: self.nrows,
                right: rhs.nrows,
            });
        }
        let ncols = self.ncols + rhs.ncols;
        let mut data = Vec::with_capacity(self.nrows * ncols);
        for (a, b) in self.rows().zip(rhs.rows()) {
            data.extend_from_slice(a);
            data.extend_from_slice(b);
        }
        Ok(Matrix {
            data,
            nrows: self.nrows,
            ncols,
        })
    }

    /// Copy out `cols` adjacent columns starting at column `start`.
    fn col_block(&self, start: usize, cols: usize) -> Self {
        let mut data = Vec::with_capacity(self.nrows * cols);
        for row in self.rows() {
            data.extend_from_slice(&row[start..start + cols]);
        }
        Matrix {
            data,
            nrows: self.nrows,
            ncols: cols,
        }
    }

    /// Extract the first `n` columns.
    ///
    /// `n` must lie in `1..=ncols`; anything else is a caller bug and panics.
    pub fn left_cols(&self, n: usize) -> Self {
        assert!(
            n > 0 && n <= self.ncols,
            "cannot take {} left columns of a {}x{} matrix",
            n,
            self.nrows,
            self.ncols,
        );
        self.col_block(0, n)
    }

    /// Extract the last `n` columns.
    ///
    /// `n` must lie in `1..=ncols`; anything else is a caller bug and panics.
    pub fn right_cols(&self, n: usize) -> Self {
        assert!(
            n > 0 && n <= self.ncols,
            "cannot take {} right columns of a {}x{} matrix",
            n,
            self.nrows,
            self.ncols,
        );
        self.col_block(self.ncols - n, n)
    }

    fn require_even_cols(&self) -> Result<usize, MatrixError> {
        if self.ncols % 2 == 1 {
            return Err(MatrixError::OddColumnCount { cols: self.ncols });
        }
        Ok(self.ncols / 2)
    }

    /// Left half of the columns. Fails with `OddColumnCount` on an odd
    /// column count.
    pub fn left_half(&self) -> Result<Self, MatrixError> {
        let half = self.require_even_cols()?;
        Ok(self.left_cols(half))
    }

    /// Right half of the columns. Fails with `OddColumnCount` on an odd
    /// column count.
    pub fn right_half(&self) -> Result<Self, MatrixError> {
        let half = self.require_even_cols()?;
        Ok(self.right_cols(half))
    }

    /// Split into `(left_half, right_half)`.
    pub fn split_halves(&self) -> Result<(Self, Self), MatrixError> {
        let half = self.require_even_cols()?;
        Ok((self.left_cols(half), self.right_cols(half)))
    }

    /// Transpose: `result[(j, i)] == self[(i, j)]`.
    ///
    /// ```
    /// use densemat::Matrix;
    /// let m = Matrix::from([[1.0_f32, 2.0, 3.0]]);
    /// let t = m.transpose();
    /// assert_eq!(t.shape(), (3, 1));
    /// assert_eq!(t[(2, 0)], 3.0);
    /// ```
    pub fn transpose(&self) -> Self {
        Matrix::from_fn(self.ncols, self.nrows, |i, j| self.data[j * self.ncols + i])
    }
}
