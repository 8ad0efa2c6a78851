use super::Matrix;

/// Single-precision matrix, the engine's default element type.
pub type Matrixf32 = Matrix<f32>;
/// Double-precision matrix.
pub type Matrixf64 = Matrix<f64>;
