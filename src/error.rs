//! This module defines the error types for the library.
//!
//! Every failure a [`crate::TridiagonalMatrix`] can report is collected in a single
//! enum, [`ErrorKind`], wrapped by the opaque [`TridiagError`]. Errors are raised at
//! the point of violation and never recovered internally: a failed constructor
//! produces no instance, and a failed access leaves the instance untouched.
use crate::band::Diagonal;
use thiserror::Error;

/// Represents all possible errors raised by tridiagonal storage operations.
#[derive(Error, Debug, Clone)]
#[error(transparent)]
pub struct TridiagError(#[from] ErrorKind);

impl TridiagError {
    /// Returns the kind of failure, for callers that need to branch on it.
    pub fn kind(&self) -> &ErrorKind {
        &self.0
    }
}

/// The distinct kinds of errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// The requested dimension is zero. A tridiagonal matrix has at least one row.
    #[error("Invalid dimension: n must be at least 1, got {n}.")]
    InvalidDimension { n: usize },

    /// A supplied diagonal does not have the length required by the dimension.
    #[error("Invalid {diagonal} length: expected {expected} entries, got {actual}.")]
    InvalidDiagonalLength {
        diagonal: Diagonal,
        expected: usize,
        actual: usize,
    },

    /// An element index lies outside the `n x n` matrix.
    #[error("Index out of range: ({i}, {j}) is outside a {n}x{n} matrix.")]
    IndexOutOfRange { i: usize, j: usize, n: usize },

    /// A write targets an entry that is structurally zero.
    #[error("Entry ({i}, {j}) is not on the tridiagonal band and cannot be set.")]
    NotOnBand { i: usize, j: usize },

    /// The operand of a product has the wrong length.
    #[error("Dimension mismatch: matrix has {matrix_cols} columns but vector has {vector_len} entries.")]
    DimensionMismatch {
        matrix_cols: usize,
        vector_len: usize,
    },
}

impl PartialEq for TridiagError {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl PartialEq<ErrorKind> for TridiagError {
    fn eq(&self, other: &ErrorKind) -> bool {
        &self.0 == other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_dimension_message() {
        let error = TridiagError::from(ErrorKind::InvalidDimension { n: 0 });
        assert_eq!(
            error.to_string(),
            "Invalid dimension: n must be at least 1, got 0."
        );
    }

    #[test]
    fn test_invalid_diagonal_length_message() {
        let error = TridiagError::from(ErrorKind::InvalidDiagonalLength {
            diagonal: Diagonal::Sub,
            expected: 0,
            actual: 1,
        });
        assert_eq!(
            error.to_string(),
            "Invalid sub-diagonal length: expected 0 entries, got 1."
        );
    }

    #[test]
    fn test_index_out_of_range_message() {
        let error = TridiagError::from(ErrorKind::IndexOutOfRange { i: 4, j: 1, n: 4 });
        assert_eq!(
            error.to_string(),
            "Index out of range: (4, 1) is outside a 4x4 matrix."
        );
    }

    #[test]
    fn test_not_on_band_message() {
        let error = TridiagError::from(ErrorKind::NotOnBand { i: 0, j: 3 });
        assert_eq!(
            error.to_string(),
            "Entry (0, 3) is not on the tridiagonal band and cannot be set."
        );
    }

    #[test]
    fn test_kind_accessor_and_comparison() {
        let error = TridiagError::from(ErrorKind::DimensionMismatch {
            matrix_cols: 3,
            vector_len: 2,
        });
        assert_eq!(
            error.kind(),
            &ErrorKind::DimensionMismatch {
                matrix_cols: 3,
                vector_len: 2
            }
        );
        assert_eq!(error, ErrorKind::DimensionMismatch {
            matrix_cols: 3,
            vector_len: 2
        });
        assert_eq!(
            error.to_string(),
            "Dimension mismatch: matrix has 3 columns but vector has 2 entries."
        );
    }
}
