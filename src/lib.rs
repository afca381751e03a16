//! Compact storage for tridiagonal matrices with dense interoperability.
//!
//! A tridiagonal matrix is a square matrix whose only nonzero entries lie on the main
//! diagonal and the two diagonals directly above and below it. Such matrices arise as the
//! projected operator `T_k` of the symmetric Lanczos process, from second-order finite
//! differences, and as the input of specialized O(n) solvers. Storing only the band cuts
//! memory from O(n²) to O(n).
//!
//! This crate provides [`TridiagonalMatrix`], which keeps the three diagonals in the
//! LAPACK `dl`/`d`/`du` layout, validates their lengths once at construction, and never
//! lets them be resized.
//!
//! ## Interoperability
//!
//! The [`Matrix`] trait is the narrow capability every matrix in the crate shares:
//! its shape and element reads. It is implemented for [`TridiagonalMatrix`] and for the
//! dense matrices of the [`faer`] framework, so [`equal`] can check a tridiagonal matrix
//! against a dense one element by element. [`Banded`] adds the bandwidth, which is
//! always `(1, 1)` for a tridiagonal matrix.
//!
//! ## Example Usage
//!
//! ```rust
//! use faer::mat;
//! use tridiag::{Banded, Matrix, TridiagonalMatrix, equal};
//!
//! let t = TridiagonalMatrix::new(
//!     4,
//!     Some(vec![1.2, 2.3, 3.4]),
//!     Some(vec![4.5, 5.6, 6.7, 7.8]),
//!     Some(vec![8.9, 9.0, 0.1]),
//! )?;
//!
//! let dense = mat![
//!     [4.5, 8.9, 0.0, 0.0],
//!     [1.2, 5.6, 9.0, 0.0],
//!     [0.0, 2.3, 6.7, 0.1],
//!     [0.0, 0.0, 3.4, 7.8],
//! ];
//!
//! assert_eq!(t.dims(), (4, 4));
//! assert_eq!(t.bandwidth(), (1, 1));
//! assert!(equal(&t, &dense));
//! assert_eq!(t.to_dense(), dense);
//! # Ok::<(), tridiag::TridiagError>(())
//! ```
//!
//! ## Errors
//!
//! All fallible operations return [`TridiagError`]; [`TridiagError::kind`] exposes the
//! [`ErrorKind`] for callers that branch on the failure.

pub mod band;
pub mod error;
pub mod matrix;
pub mod tridiag;

pub use band::{BandPosition, Diagonal, locate};
pub use error::{ErrorKind, TridiagError};
pub use matrix::{Banded, Matrix, equal, equal_approx};
pub use tridiag::{Norm, RawTridiagonal, TridiagonalMatrix};
