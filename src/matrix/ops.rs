use alloc::vec::Vec;
use core::ops::{Add, Div, Mul, Neg, Sub};

use crate::error::MatrixError;
use crate::traits::Scalar;

use super::Matrix;

// ── Scalar operations ───────────────────────────────────────────────

impl<T: Scalar> Matrix<T> {
    /// Add `s` to every element.
    pub fn add_scalar(&self, s: T) -> Self {
        self.map(|x| x + s)
    }

    /// Subtract `s` from every element.
    pub fn sub_scalar(&self, s: T) -> Self {
        self.add_scalar(-s)
    }

    /// Multiply every element by `s`.
    ///
    /// ```
    /// use densemat::Matrix;
    /// let m = Matrix::from([[1.0_f32, -2.0]]).scale(3.0);
    /// assert_eq!(m.as_slice(), &[3.0, -6.0]);
    /// ```
    pub fn scale(&self, s: T) -> Self {
        self.map(|x| x * s)
    }

    /// Divide every element by `s`.
    ///
    /// Computed as a scale by `1 / s`; dividing by zero yields infinities or
    /// NaN per IEEE 754 rather than an error.
    ///
    /// ```
    /// use densemat::Matrix;
    /// let m = Matrix::from([[1.0_f32, -1.0]]).div_scalar(0.0);
    /// assert_eq!(m[(0, 0)], f32::INFINITY);
    /// assert_eq!(m[(0, 1)], f32::NEG_INFINITY);
    /// ```
    pub fn div_scalar(&self, s: T) -> Self {
        self.scale(T::one() / s)
    }

    /// Negate every element.
    pub fn negate(&self) -> Self {
        self.map(|x| -x)
    }
}

// ── Element-wise matrix operations ──────────────────────────────────

impl<T: Scalar> Matrix<T> {
    fn zip_with(
        &self,
        rhs: &Self,
        op: &'static str,
        f: impl Fn(T, T) -> T,
    ) -> Result<Self, MatrixError> {
        if !self.size_equals(rhs) {
            return Err(self.mismatch(op, rhs));
        }
        let data = self
            .data
            .iter()
            .zip(rhs.data.iter())
            .map(|(&a, &b)| f(a, b))
            .collect();
        Ok(Matrix {
            data,
            nrows: self.nrows,
            ncols: self.ncols,
        })
    }

    /// Element-wise sum. Fails with `DimensionMismatch` unless shapes match.
    pub fn try_add(&self, rhs: &Self) -> Result<Self, MatrixError> {
        self.zip_with(rhs, "add", |a, b| a + b)
    }

    /// Element-wise difference. Fails with `DimensionMismatch` unless shapes match.
    pub fn try_sub(&self, rhs: &Self) -> Result<Self, MatrixError> {
        self.zip_with(rhs, "subtract", |a, b| a - b)
    }

    /// Hadamard (element-wise) product.
    ///
    /// ```
    /// use densemat::Matrix;
    /// let a = Matrix::from([[1.0_f32, 2.0], [3.0, 4.0]]);
    /// let b = Matrix::from([[5.0_f32, 6.0], [7.0, 8.0]]);
    /// let c = a.hadamard_product(&b).unwrap();
    /// assert_eq!(c.as_slice(), &[5.0, 12.0, 21.0, 32.0]);
    /// ```
    pub fn hadamard_product(&self, rhs: &Self) -> Result<Self, MatrixError> {
        self.zip_with(rhs, "hadamard product", |a, b| a * b)
    }

    /// Hadamard (element-wise) quotient. Zero divisors produce IEEE
    /// infinities or NaN.
    pub fn hadamard_quotient(&self, rhs: &Self) -> Result<Self, MatrixError> {
        self.zip_with(rhs, "hadamard quotient", |a, b| a / b)
    }
}

// ── Matrix product ──────────────────────────────────────────────────

impl<T: Scalar> Matrix<T> {
    /// Standard matrix product `self * rhs`.
    ///
    /// Requires `self.ncols() == rhs.nrows()`.
    ///
    /// ```
    /// use densemat::Matrix;
    /// let a = Matrix::from([[1.0_f32, 2.0], [3.0, 4.0]]);
    /// let c = a.matmul(&Matrix::identity(2)).unwrap();
    /// assert_eq!(c, a);
    /// ```
    pub fn matmul(&self, rhs: &Self) -> Result<Self, MatrixError> {
        if self.ncols != rhs.nrows {
            return Err(self.mismatch("multiply", rhs));
        }
        let (m, n, p) = (self.nrows, self.ncols, rhs.ncols);
        let mut data = Vec::with_capacity(m * p);
        for i in 0..m {
            let a_row = self.row_slice(i);
            for j in 0..p {
                let mut sum = T::zero();
                for k in 0..n {
                    sum = sum + a_row[k] * rhs.data[k * p + j];
                }
                data.push(sum);
            }
        }
        Ok(Matrix {
            data,
            nrows: m,
            ncols: p,
        })
    }

    /// Matrix "division": `self * rhs⁻¹`.
    ///
    /// The divisor must be square (`NotSquare` otherwise) and invertible
    /// (`Singular`).
    ///
    /// ```
    /// use densemat::Matrix;
    /// let a = Matrix::from([[4.0_f32, 7.0], [2.0, 6.0]]);
    /// let q = a.div_matrix(&a).unwrap();
    /// assert!((q[(0, 0)] - 1.0).abs() < 1e-5);
    /// assert!(q[(0, 1)].abs() < 1e-5);
    /// ```
    pub fn div_matrix(&self, rhs: &Self) -> Result<Self, MatrixError> {
        rhs.require_square("divide")?;
        self.matmul(&rhs.inverse()?)
    }
}

// ── Operator overloads ──────────────────────────────────────────────
//
// Matrix-matrix operators panic on a shape mismatch; use `try_add`,
// `try_sub` and `matmul` for the fallible forms.

macro_rules! impl_matrix_binop {
    ($trait:ident, $method:ident, $checked:ident) => {
        impl<T: Scalar> $trait<&Matrix<T>> for &Matrix<T> {
            type Output = Matrix<T>;

            fn $method(self, rhs: &Matrix<T>) -> Matrix<T> {
                match self.$checked(rhs) {
                    Ok(m) => m,
                    Err(e) => panic!("{}", e),
                }
            }
        }

        impl<T: Scalar> $trait<Matrix<T>> for &Matrix<T> {
            type Output = Matrix<T>;

            fn $method(self, rhs: Matrix<T>) -> Matrix<T> {
                $trait::$method(self, &rhs)
            }
        }

        impl<T: Scalar> $trait<&Matrix<T>> for Matrix<T> {
            type Output = Matrix<T>;

            fn $method(self, rhs: &Matrix<T>) -> Matrix<T> {
                $trait::$method(&self, rhs)
            }
        }

        impl<T: Scalar> $trait for Matrix<T> {
            type Output = Matrix<T>;

            fn $method(self, rhs: Matrix<T>) -> Matrix<T> {
                $trait::$method(&self, &rhs)
            }
        }
    };
}

impl_matrix_binop!(Add, add, try_add);
impl_matrix_binop!(Sub, sub, try_sub);
impl_matrix_binop!(Mul, mul, matmul);

macro_rules! impl_scalar_binop {
    ($trait:ident, $method:ident, $inherent:ident) => {
        impl<T: Scalar> $trait<T> for &Matrix<T> {
            type Output = Matrix<T>;

            fn $method(self, s: T) -> Matrix<T> {
                self.$inherent(s)
            }
        }

        impl<T: Scalar> $trait<T> for Matrix<T> {
            type Output = Matrix<T>;

            fn $method(self, s: T) -> Matrix<T> {
                self.$inherent(s)
            }
        }
    };
}

impl_scalar_binop!(Add, add, add_scalar);
impl_scalar_binop!(Sub, sub, sub_scalar);
impl_scalar_binop!(Mul, mul, scale);
impl_scalar_binop!(Div, div, div_scalar);

impl<T: Scalar> Neg for &Matrix<T> {
    type Output = Matrix<T>;

    fn neg(self) -> Matrix<T> {
        self.negate()
    }
}

impl<T: Scalar> Neg for Matrix<T> {
    type Output = Matrix<T>;

    fn neg(self) -> Matrix<T> {
        self.negate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    fn m2() -> Matrix<f32> {
        Matrix::from([[1.0, 2.0], [3.0, 4.0]])
    }

    #[test]
    fn scalar_ops() {
        let m = m2();
        assert_eq!(m.add_scalar(1.0).as_slice(), &[2.0, 3.0, 4.0, 5.0]);
        assert_eq!(m.sub_scalar(1.0).as_slice(), &[0.0, 1.0, 2.0, 3.0]);
        assert_eq!(m.scale(2.0).as_slice(), &[2.0, 4.0, 6.0, 8.0]);
        assert_eq!(m.div_scalar(2.0).as_slice(), &[0.5, 1.0, 1.5, 2.0]);
        assert_eq!(m.negate().as_slice(), &[-1.0, -2.0, -3.0, -4.0]);
    }

    #[test]
    fn scalar_ops_leave_operand_untouched() {
        let m = m2();
        let _ = m.scale(10.0);
        assert_eq!(m, m2());
    }

    #[test]
    fn div_scalar_by_zero_is_ieee() {
        let m = Matrix::from([[1.0_f32, 0.0]]).div_scalar(0.0);
        assert!(m[(0, 0)].is_infinite());
        assert!(m[(0, 1)].is_nan());
    }

    #[test]
    fn add_sub() {
        let a = m2();
        let b = Matrix::from([[10.0_f32, 20.0], [30.0, 40.0]]);
        assert_eq!(a.try_add(&b).unwrap().as_slice(), &[11.0, 22.0, 33.0, 44.0]);
        assert_eq!(b.try_sub(&a).unwrap().as_slice(), &[9.0, 18.0, 27.0, 36.0]);
    }

    #[test]
    fn add_mismatch() {
        let a = m2();
        let b = Matrix::<f32>::new(2, 3);
        let err = a.try_add(&b).unwrap_err();
        assert!(matches!(err, MatrixError::DimensionMismatch { op: "add", .. }));
        assert_eq!(
            err.to_string(),
            "dimension mismatch in add: left is 2x2, right is 2x3, shapes must be equal"
        );
        assert!(a.try_sub(&b).is_err());
        assert!(a.hadamard_product(&b).is_err());
        assert!(a.hadamard_quotient(&b).is_err());
    }

    #[test]
    fn hadamard_quotient() {
        let a = Matrix::from([[6.0_f32, 1.0]]);
        let b = Matrix::from([[3.0_f32, 0.0]]);
        let q = a.hadamard_quotient(&b).unwrap();
        assert_eq!(q[(0, 0)], 2.0);
        assert_eq!(q[(0, 1)], f32::INFINITY);
    }

    #[test]
    fn matmul_identity() {
        let a = m2();
        let c = a.matmul(&Matrix::from([[1.0, 0.0], [0.0, 1.0]])).unwrap();
        assert_eq!(c, a);
    }

    #[test]
    fn matmul_rect() {
        let a = Matrix::from([[1.0_f32, 2.0, 3.0], [4.0, 5.0, 6.0]]);
        let b = Matrix::from([[7.0_f32, 8.0], [9.0, 10.0], [11.0, 12.0]]);
        let c = a.matmul(&b).unwrap();
        assert_eq!(c.shape(), (2, 2));
        assert_eq!(c.as_slice(), &[58.0, 64.0, 139.0, 154.0]);
    }

    #[test]
    fn matmul_mismatch() {
        let a = Matrix::<f32>::new(2, 3);
        let b = Matrix::<f32>::new(4, 2);
        assert_eq!(
            a.matmul(&b),
            Err(MatrixError::DimensionMismatch {
                op: "multiply",
                left_rows: 2,
                left_cols: 3,
                right_rows: 4,
                right_cols: 2,
            })
        );
    }

    #[test]
    fn div_matrix_non_square_divisor() {
        let a = Matrix::<f32>::new(2, 2);
        let b = Matrix::<f32>::new(2, 3);
        assert!(matches!(
            a.div_matrix(&b),
            Err(MatrixError::NotSquare { op: "divide", .. })
        ));
    }

    #[test]
    fn div_matrix_non_square_dividend() {
        let a = Matrix::from([[1.0_f32], [2.0], [3.0]]);
        let b = Matrix::from([[2.0_f32]]);
        let q = a.div_matrix(&b).unwrap();
        assert_eq!(q.shape(), (3, 1));
        assert_eq!(q.as_slice(), &[0.5, 1.0, 1.5]);

        let wide = Matrix::from([[1.0_f32, 2.0, 3.0]]);
        assert!(matches!(
            wide.div_matrix(&b),
            Err(MatrixError::DimensionMismatch { op: "multiply", .. })
        ));
    }

    #[test]
    fn div_matrix_singular() {
        let a = m2();
        let b = Matrix::from([[1.0_f32, 2.0], [2.0, 4.0]]);
        assert_eq!(a.div_matrix(&b), Err(MatrixError::Singular));
    }

    #[test]
    fn operators() {
        let a = m2();
        let b = m2();
        assert_eq!(&a + &b, a.scale(2.0));
        assert_eq!(&a - &b, Matrix::new(2, 2));
        assert_eq!(&a * &b, a.matmul(&b).unwrap());
        assert_eq!(&a * 2.0, a.scale(2.0));
        assert_eq!(&a / 2.0, a.div_scalar(2.0));
        assert_eq!(-&a, a.negate());
        assert_eq!(a.clone() + 1.0, a.add_scalar(1.0));
        assert_eq!(a.clone() - 1.0, a.sub_scalar(1.0));
    }

    #[test]
    #[should_panic(expected = "dimension mismatch in multiply")]
    fn mul_operator_mismatch_panics() {
        let _ = Matrix::<f32>::new(2, 3) * Matrix::<f32>::new(2, 3);
    }
}
