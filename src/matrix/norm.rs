use crate::traits::Scalar;

use super::Matrix;

impl<T: Scalar> Matrix<T> {
    /// Squared Frobenius norm (sum of all elements squared).
    ///
    /// Skips the square root; use it for comparisons.
    pub fn square_norm(&self) -> T {
        let mut sum = T::zero();
        for &x in &self.data {
            sum = sum + x * x;
        }
        sum
    }

    /// Frobenius norm.
    ///
    /// ```
    /// use densemat::Matrix;
    /// let m = Matrix::from([[1.0_f32, 2.0], [3.0, 4.0]]);
    /// assert!((m.norm() - 30.0_f32.sqrt()).abs() < 1e-6);
    /// ```
    pub fn norm(&self) -> T {
        self.square_norm().sqrt()
    }

    /// Divide every element by [`norm`](Self::norm).
    ///
    /// A zero matrix has norm zero and normalizes to all NaN.
    pub fn normalize(&self) -> Self {
        let n = self.norm();
        self.map(|x| x / n)
    }
}
