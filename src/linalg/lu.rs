use crate::error::MatrixError;
use crate::traits::Scalar;
use crate::Matrix;

/// Reduce a square matrix to upper-triangular form in place and return its
/// determinant.
///
/// Partial pivoting picks, for each column, the row at or below the diagonal
/// with the largest magnitude (the earliest one on ties). A pivot whose
/// magnitude is at or below [`Scalar::PIVOT_TOLERANCE`] ends the reduction
/// early and the determinant is exactly zero.
///
/// Only the upper triangle of `a` is meaningful on return.
///
/// # Panics
///
/// Panics if `a` is not square.
pub fn det_in_place<T: Scalar>(a: &mut Matrix<T>) -> T {
    let n = a.nrows();
    assert_eq!(n, a.ncols(), "determinant requires a square matrix");

    let mut even = true;

    for col in 0..n {
        // Partial pivoting: find row with largest magnitude in this column
        let mut max_row = col;
        for row in (col + 1)..n {
            if a[(row, col)].abs() > a[(max_row, col)].abs() {
                max_row = row;
            }
        }

        if max_row != col {
            a.swap_rows(col, max_row);
            even = !even;
        }

        let pivot = a[(col, col)];
        if pivot.abs() <= T::PIVOT_TOLERANCE {
            log::trace!(
                "determinant: pivot {} in column {} is within tolerance, returning zero",
                pivot,
                col
            );
            return T::zero();
        }

        // Eliminate below the pivot
        for row in (col + 1)..n {
            let factor = a[(row, col)] / pivot;
            for j in col..n {
                a[(row, j)] = a[(row, j)] - factor * a[(col, j)];
            }
        }
    }

    let mut det = T::one();
    for i in 0..n {
        det = det * a[(i, i)];
    }
    if even {
        det
    } else {
        -det
    }
}

impl<T: Scalar> Matrix<T> {
    /// Determinant via partial-pivoting elimination on a private copy.
    ///
    /// Fails with `NotSquare` on a rectangular matrix. Returns exactly zero
    /// once a pivot's magnitude drops to `PIVOT_TOLERANCE` (1e-6).
    ///
    /// ```
    /// use densemat::Matrix;
    /// let a = Matrix::from([[3.0_f32, 8.0], [4.0, 6.0]]);
    /// assert!((a.determinant().unwrap() + 14.0).abs() < 1e-5);
    ///
    /// let singular = Matrix::from([[1.0_f32, 2.0], [2.0, 4.0]]);
    /// assert_eq!(singular.determinant().unwrap(), 0.0);
    /// ```
    pub fn determinant(&self) -> Result<T, MatrixError> {
        self.require_square("determinant")?;
        let mut scratch = self.clone();
        Ok(det_in_place(&mut scratch))
    }
}
