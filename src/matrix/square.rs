use crate::error::MatrixError;
use crate::traits::Scalar;

use super::Matrix;

impl<T: Scalar> Matrix<T> {
    /// Create an `n x n` identity matrix.
    ///
    /// ```
    /// use densemat::Matrix;
    /// let id = Matrix::<f32>::identity(3);
    /// assert_eq!(id[(0, 0)], 1.0);
    /// assert_eq!(id[(0, 1)], 0.0);
    /// ```
    pub fn identity(n: usize) -> Self {
        let mut m = Self::square(n);
        for i in 0..n {
            m[(i, i)] = T::one();
        }
        m
    }

    /// Identity matrix with the same size as `self`.
    ///
    /// Fails with `NotSquare` on a rectangular matrix.
    pub fn identity_like(&self) -> Result<Self, MatrixError> {
        self.require_square("identity")?;
        Ok(Self::identity(self.nrows))
    }
}
