//! # densemat
//!
//! Dense row-major matrix engine, no-std compatible (requires `alloc`).
//! Arithmetic, augmentation, Gauss-Jordan elimination, determinant and
//! inverse over `f32` (the default) or `f64` elements.
//!
//! ## Quick start
//!
//! ```
//! use densemat::Matrix;
//!
//! let a = Matrix::from([[4.0_f32, 7.0], [2.0, 6.0]]);
//! assert!((a.determinant().unwrap() - 10.0).abs() < 1e-5);
//!
//! let inv = a.inverse().unwrap();
//! assert!((inv[(0, 0)] - 0.6).abs() < 1e-4);
//! assert!((inv[(0, 1)] + 0.7).abs() < 1e-4);
//!
//! // Solve A x = b
//! let b = Matrix::from([[1.0_f32], [2.0]]);
//! let x = a.solve(&b).unwrap();
//! let back = a.matmul(&x).unwrap();
//! assert!((back[(1, 0)] - 2.0).abs() < 1e-5);
//! ```
//!
//! ## Modules
//!
//! - [`matrix`]: [`Matrix<T>`] storage, bounds-checked access, scalar and
//!   element-wise arithmetic, matrix product, augmentation and column
//!   splitting, transpose, norms, row iteration and `Display`.
//!
//! - [`linalg`]: the two elimination kernels. Gauss-Jordan with a
//!   first-non-zero pivot rule drives `gaussian_eliminate`, `solve` and
//!   `inverse`; maximal-magnitude partial pivoting drives `determinant`.
//!
//! - [`error`]: [`MatrixError`], returned by every fallible operation.
//!
//! - [`traits`]: the [`Scalar`] element trait (`f32`, `f64`).
//!
//! ## Errors and floating-point edge cases
//!
//! Shape and singularity problems are reported eagerly as [`MatrixError`]
//! before any result is built. Division by a zero scalar, Hadamard quotients
//! by zero entries and normalizing a zero matrix are *not* errors: they
//! yield IEEE infinities or NaN.
//!
//! Every operation except [`Matrix::map_in_place`], [`Matrix::set`],
//! [`Matrix::swap_rows`] and `IndexMut` returns a fresh matrix and leaves its
//! operands untouched, so a shared `&Matrix` can be read from many threads.
//!
//! ## Cargo features
//!
//! | Feature | Default  | Description |
//! |---------|----------|-------------|
//! | `std`   | yes      | Hardware FPU via system libm, `std::error::Error` |
//!
//! The pure-Rust `libm` float fallback is always enabled through `num-traits`,
//! so the crate builds without `std`.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod error;
pub mod linalg;
pub mod matrix;
pub mod traits;

pub use error::{Axis, MatrixError};
pub use matrix::aliases::{Matrixf32, Matrixf64};
pub use matrix::{Matrix, Rows};
pub use traits::Scalar;
