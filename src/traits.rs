use core::fmt::{Debug, Display};
use num_traits::Float;

/// Trait for matrix elements.
///
/// Implemented for `f32` and `f64`. Builds on [`Float`] so `abs` and `sqrt`
/// are available in `no_std` builds through `libm`.
pub trait Scalar: Float + Debug + Display + 'static {
    /// Pivot magnitude at or below which [`determinant`](crate::Matrix::determinant)
    /// treats the matrix as singular and returns zero.
    const PIVOT_TOLERANCE: Self;
}

macro_rules! impl_scalar {
    ($($t:ty),*) => {
        $(
            impl Scalar for $t {
                const PIVOT_TOLERANCE: $t = 1e-6;
            }
        )*
    };
}

impl_scalar!(f32, f64);
