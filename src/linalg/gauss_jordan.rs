use alloc::vec::Vec;

use crate::error::MatrixError;
use crate::traits::Scalar;
use crate::Matrix;

/// Gauss-Jordan elimination in place on an augmented matrix.
///
/// The first `n` columns of `a` (which must have exactly `n` rows) are the
/// coefficient block; the remaining columns are right-hand sides carried
/// along by every row operation. On success the coefficient block is the
/// identity and the remaining columns hold the solution.
///
/// Pivot selection only reacts to an exact zero on the diagonal, swapping in
/// the first row below with a non-zero entry in the pivot column. There is no
/// magnitude search. Returns `Err(Singular)` when no such row exists; `a` is
/// left partially reduced in that case.
///
/// # Panics
///
/// Panics if `a` does not have exactly `n` rows or has fewer than `n`
/// columns.
pub fn gauss_jordan_in_place<T: Scalar>(a: &mut Matrix<T>, n: usize) -> Result<(), MatrixError> {
    assert_eq!(a.nrows(), n, "coefficient block must have {} rows", n);
    assert!(a.ncols() >= n, "augmented matrix narrower than its coefficient block");

    let width = a.ncols();
    let mut pivot_row: Vec<T> = Vec::with_capacity(width);

    for p in 0..n {
        // 1. Make sure the pivot is non-zero
        if a[(p, p)] == T::zero() {
            let Some(k) = ((p + 1)..n).find(|&k| a[(k, p)] != T::zero()) else {
                log::debug!("gauss-jordan: column {} has no non-zero pivot, matrix is singular", p);
                return Err(MatrixError::Singular);
            };
            log::trace!("gauss-jordan: swapping rows {} and {} for pivot {}", p, k, p);
            a.swap_rows(p, k);
        }

        // 2. Scale the pivot row so the pivot becomes 1
        let pivot = a[(p, p)];
        for x in a.row_slice_mut(p) {
            *x = *x / pivot;
        }

        // 3. Clear column p in every other row
        pivot_row.clear();
        pivot_row.extend_from_slice(a.row_slice(p));
        for i in (0..n).filter(|&i| i != p) {
            let row = a.row_slice_mut(i);
            let factor = row[p];
            for (x, &y) in row.iter_mut().zip(pivot_row.iter()) {
                *x = *x - factor * y;
            }
        }
    }

    Ok(())
}

impl<T: Scalar> Matrix<T> {
    /// Reduce `[self | rhs]` until `self` becomes the identity and return the
    /// transformed `rhs`.
    ///
    /// `self` must be square (`NotSquare`) and share its row count with `rhs`
    /// (`RowMismatch`). Fails with `Singular` when a pivot column has no
    /// non-zero entry at or below the diagonal.
    ///
    /// ```
    /// use densemat::Matrix;
    /// let a = Matrix::from([[2.0_f32, 0.0], [0.0, 4.0]]);
    /// let b = Matrix::from([[2.0_f32], [2.0]]);
    /// let x = a.gaussian_eliminate_with(&b).unwrap();
    /// assert_eq!(x.as_slice(), &[1.0, 0.5]);
    /// ```
    pub fn gaussian_eliminate_with(&self, rhs: &Self) -> Result<Self, MatrixError> {
        self.require_square("gaussian elimination")?;
        let mut augmented = self.augment(rhs)?;
        gauss_jordan_in_place(&mut augmented, self.nrows())?;
        Ok(augmented.right_cols(rhs.ncols()))
    }

    /// Gauss-Jordan elimination of an already-augmented matrix.
    ///
    /// The left half of the columns is the coefficient block and the right
    /// half the right-hand side, so the column count must be even
    /// (`OddColumnCount`) and the left half square (`NotSquare`). Returns the
    /// reduced right half.
    ///
    /// ```
    /// use densemat::Matrix;
    /// let ab = Matrix::from([[4.0_f32, 7.0, 1.0, 0.0], [2.0, 6.0, 0.0, 1.0]]);
    /// let inv = ab.gaussian_eliminate().unwrap();
    /// assert!((inv[(0, 0)] - 0.6).abs() < 1e-5);
    /// assert!((inv[(1, 1)] - 0.4).abs() < 1e-5);
    /// ```
    pub fn gaussian_eliminate(&self) -> Result<Self, MatrixError> {
        let (left, right) = self.split_halves()?;
        left.gaussian_eliminate_with(&right)
    }

    /// Solve `self * X = rhs` for `X`.
    ///
    /// `rhs` may hold several right-hand sides, one per column.
    ///
    /// ```
    /// use densemat::Matrix;
    /// let a = Matrix::from([
    ///     [2.0_f64, 1.0, -1.0],
    ///     [-3.0, -1.0, 2.0],
    ///     [-2.0, 1.0, 2.0],
    /// ]);
    /// let b = Matrix::from([[8.0], [-11.0], [-3.0]]);
    /// let x = a.solve(&b).unwrap();
    /// assert!((x[(0, 0)] - 2.0).abs() < 1e-12);
    /// assert!((x[(1, 0)] - 3.0).abs() < 1e-12);
    /// assert!((x[(2, 0)] + 1.0).abs() < 1e-12);
    /// ```
    pub fn solve(&self, rhs: &Self) -> Result<Self, MatrixError> {
        self.gaussian_eliminate_with(rhs)
    }

    /// Matrix inverse.
    ///
    /// Rejects non-square input with `NotSquare` and matrices whose
    /// [`determinant`](Self::determinant) is zero with `Singular`, then
    /// reduces `[self | I]`.
    ///
    /// ```
    /// use densemat::Matrix;
    /// let a = Matrix::from([[4.0_f32, 7.0], [2.0, 6.0]]);
    /// let inv = a.inverse().unwrap();
    /// let id = a.matmul(&inv).unwrap();
    /// assert!((id[(0, 0)] - 1.0).abs() < 1e-5);
    /// assert!(id[(0, 1)].abs() < 1e-5);
    /// ```
    pub fn inverse(&self) -> Result<Self, MatrixError> {
        self.require_square("inverse")?;
        if self.determinant()? == T::zero() {
            return Err(MatrixError::Singular);
        }
        self.augment(&Self::identity(self.nrows()))?.gaussian_eliminate()
    }
}
