//! Index arithmetic for the three stored diagonals.
//!
//! A tridiagonal matrix of dimension `n` stores its band in three sequences:
//!
//! ```text
//!     | d[0]  du[0]   0     ...     0      |
//!     | dl[0] d[1]   du[1]  ...     0      |
//!     |  0    dl[1]  d[2]   ...     0      |
//!     | ...   ...    ...    ...  du[n-2]   |
//!     |  0    ...     0   dl[n-2] d[n-1]   |
//! ```
//!
//! The sub-diagonal entry `(i + 1, i)` lives at `dl[i]` (indexed by its column), the
//! super-diagonal entry `(i, i + 1)` lives at `du[i]` (indexed by its row). This is the
//! layout expected by LAPACK's `?gtsv`/`?gttrf` family.
//!
//! [`locate`] performs this mapping without touching any storage, so it can be tested
//! independently of construction.
use crate::error::{ErrorKind, TridiagError};
use std::fmt;

/// Names one of the three stored diagonals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Diagonal {
    /// Entries `(i + 1, i)`, length `n - 1`.
    Sub,
    /// Entries `(i, i)`, length `n`.
    Main,
    /// Entries `(i, i + 1)`, length `n - 1`.
    Super,
}

impl Diagonal {
    /// Number of entries this diagonal holds in an `n x n` matrix.
    #[inline]
    pub fn len_for(self, n: usize) -> usize {
        match self {
            Diagonal::Main => n,
            Diagonal::Sub | Diagonal::Super => n.saturating_sub(1),
        }
    }
}

impl fmt::Display for Diagonal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Diagonal::Sub => "sub-diagonal",
            Diagonal::Main => "main diagonal",
            Diagonal::Super => "super-diagonal",
        };
        f.write_str(name)
    }
}

/// Where an element `(i, j)` is stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BandPosition {
    /// Stored at `sub[k]`.
    Sub(usize),
    /// Stored at `main[k]`.
    Main(usize),
    /// Stored at `super[k]`.
    Super(usize),
    /// Outside the band: implicitly zero, no backing cell.
    OffBand,
}

impl BandPosition {
    /// The diagonal and offset backing this position, if any.
    #[inline]
    pub fn cell(self) -> Option<(Diagonal, usize)> {
        match self {
            BandPosition::Sub(k) => Some((Diagonal::Sub, k)),
            BandPosition::Main(k) => Some((Diagonal::Main, k)),
            BandPosition::Super(k) => Some((Diagonal::Super, k)),
            BandPosition::OffBand => None,
        }
    }
}

/// Maps element `(i, j)` of an `n x n` tridiagonal matrix to its backing cell.
///
/// # Errors
/// Returns [`ErrorKind::IndexOutOfRange`] if `i >= n` or `j >= n`.
#[inline]
pub fn locate(n: usize, i: usize, j: usize) -> Result<BandPosition, TridiagError> {
    if i >= n || j >= n {
        return Err(ErrorKind::IndexOutOfRange { i, j, n }.into());
    }
    let position = if i == j {
        BandPosition::Main(i)
    } else if i == j + 1 {
        BandPosition::Sub(j)
    } else if j == i + 1 {
        BandPosition::Super(i)
    } else {
        BandPosition::OffBand
    };
    Ok(position)
}
