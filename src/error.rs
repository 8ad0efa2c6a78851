use thiserror::Error;

/// Which index of an `(row, col)` pair was out of range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Row,
    Column,
}

impl core::fmt::Display for Axis {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Axis::Row => write!(f, "row"),
            Axis::Column => write!(f, "column"),
        }
    }
}

/// Errors from matrix operations.
///
/// Every fallible operation validates its operands before allocating a
/// result, so an `Err` never leaves a partially computed matrix behind.
///
/// ```
/// use densemat::{Matrix, MatrixError};
///
/// let a = Matrix::<f32>::new(2, 3);
/// let b = Matrix::<f32>::new(4, 2);
/// let err = a.matmul(&b).unwrap_err();
/// assert!(matches!(err, MatrixError::DimensionMismatch { .. }));
/// assert!(err.to_string().contains("3 columns"));
/// assert!(err.to_string().contains("4 rows"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MatrixError {
    /// Element index outside `[0, bound)`.
    #[error("{axis} index {index} out of range for {axis} count {bound}")]
    OutOfRange { axis: Axis, index: usize, bound: usize },

    /// Operand shapes are incompatible for `op`.
    ///
    /// For `multiply` the message names the left column count and the right
    /// row count; element-wise ops only report both shapes.
    #[error(
        "dimension mismatch in {op}: {}",
        MismatchDetail::new(.op, .left_rows, .left_cols, .right_rows, .right_cols)
    )]
    DimensionMismatch {
        op: &'static str,
        left_rows: usize,
        left_cols: usize,
        right_rows: usize,
        right_cols: usize,
    },

    /// `op` requires a square matrix.
    #[error("{op} requires a square matrix, got {rows}x{cols}")]
    NotSquare {
        op: &'static str,
        rows: usize,
        cols: usize,
    },

    /// Augmentation of matrices with different row counts.
    #[error("cannot augment a matrix with {left} rows by one with {right} rows")]
    RowMismatch { left: usize, right: usize },

    /// Half-splitting requested on an odd column count.
    #[error("cannot split {cols} columns into halves")]
    OddColumnCount { cols: usize },

    /// No usable pivot: the system has no unique solution.
    #[error("matrix is singular")]
    Singular,
}

struct MismatchDetail {
    product: bool,
    left: (usize, usize),
    right: (usize, usize),
}

impl MismatchDetail {
    fn new(op: &str, lr: &usize, lc: &usize, rr: &usize, rc: &usize) -> Self {
        Self {
            product: op == "multiply",
            left: (*lr, *lc),
            right: (*rr, *rc),
        }
    }
}

impl core::fmt::Display for MismatchDetail {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let ((lr, lc), (rr, rc)) = (self.left, self.right);
        if self.product {
            write!(
                f,
                "left is {lr}x{lc} ({lc} columns), right is {rr}x{rc} ({rr} rows)"
            )
        } else {
            write!(f, "left is {lr}x{lc}, right is {rr}x{rc}, shapes must be equal")
        }
    }
}
