//! In-place elimination kernels.
//!
//! Two pivoting strategies live side by side and are not interchangeable:
//!
//! - [`gauss_jordan_in_place`] swaps only when the diagonal entry is exactly
//!   zero, taking the first non-zero row below. It backs
//!   [`Matrix::gaussian_eliminate`](crate::Matrix::gaussian_eliminate),
//!   [`Matrix::solve`](crate::Matrix::solve) and
//!   [`Matrix::inverse`](crate::Matrix::inverse).
//! - [`det_in_place`] always moves the largest-magnitude row into the pivot
//!   position and treats pivots within `PIVOT_TOLERANCE` as zero. It backs
//!   [`Matrix::determinant`](crate::Matrix::determinant).

pub(crate) mod gauss_jordan;
pub(crate) mod lu;

pub use gauss_jordan::gauss_jordan_in_place;
pub use lu::det_in_place;
