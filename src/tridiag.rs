//! The [`TridiagonalMatrix`] storage type.
//!
//! A tridiagonal matrix of dimension `n` keeps only its three central diagonals: `n - 1`
//! sub-diagonal entries, `n` main-diagonal entries and `n - 1` super-diagonal entries.
//! All other entries are structurally zero. The storage follows the LAPACK `dl`/`d`/`du`
//! convention (see [`crate::band`]) so the raw slices can be handed to external
//! tridiagonal routines without copying.
//!
//! Shapes are validated once, at construction, and never change afterwards. Entries on
//! the band can be overwritten through [`TridiagonalMatrix::set_at`] or
//! [`TridiagonalMatrix::diagonal_mut`]; neither can resize a diagonal.

use crate::{
    band::{BandPosition, Diagonal, locate},
    error::{ErrorKind, TridiagError},
    matrix::{Banded, Matrix},
};
use faer::Mat;

/// A square matrix whose nonzero entries lie on the main diagonal and the two
/// diagonals adjacent to it.
#[derive(Debug, Clone, PartialEq)]
pub struct TridiagonalMatrix {
    n: usize,
    sub: Vec<f64>,
    main: Vec<f64>,
    sup: Vec<f64>,
}

/// Borrowed view of the backing storage in LAPACK layout.
///
/// `dl[i]` is entry `(i + 1, i)`, `d[i]` is entry `(i, i)` and `du[i]` is entry
/// `(i, i + 1)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RawTridiagonal<'a> {
    pub n: usize,
    pub dl: &'a [f64],
    pub d: &'a [f64],
    pub du: &'a [f64],
}

/// Matrix norms supported by [`TridiagonalMatrix::norm`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Norm {
    /// Largest absolute entry.
    MaxAbs,
    /// Maximum absolute column sum.
    One,
    /// Maximum absolute row sum.
    Infinity,
    /// Square root of the sum of squared entries.
    Frobenius,
}

impl TridiagonalMatrix {
    /// Creates an `n x n` tridiagonal matrix from its three diagonals.
    ///
    /// Each diagonal is optional. `None` stands for a diagonal that was not supplied
    /// and is filled with zeros of the required length. A supplied diagonal must have
    /// exactly the required length: `n - 1` for `sub` and `sup`, `n` for `main`. For
    /// `n == 1` the off-diagonals are empty, so only `None` or an empty `Vec` is
    /// accepted for them.
    ///
    /// # Errors
    /// * [`ErrorKind::InvalidDimension`] if `n == 0`.
    /// * [`ErrorKind::InvalidDiagonalLength`] if a supplied diagonal has the wrong length.
    ///
    /// # Example
    ///
    /// ```
    /// use tridiag::{Banded, Matrix, TridiagonalMatrix};
    ///
    /// let t = TridiagonalMatrix::new(
    ///     3,
    ///     Some(vec![1.0, 2.0]),
    ///     Some(vec![3.0, 4.0, 5.0]),
    ///     None,
    /// )?;
    /// assert_eq!(t.dims(), (3, 3));
    /// assert_eq!(t.bandwidth(), (1, 1));
    /// assert_eq!(t.at(2, 1), 2.0);
    /// assert_eq!(t.at(1, 2), 0.0);
    /// # Ok::<(), tridiag::TridiagError>(())
    /// ```
    pub fn new(
        n: usize,
        sub: Option<Vec<f64>>,
        main: Option<Vec<f64>>,
        sup: Option<Vec<f64>>,
    ) -> Result<Self, TridiagError> {
        if n == 0 {
            return Err(ErrorKind::InvalidDimension { n }.into());
        }
        let sub = checked_diagonal(n, Diagonal::Sub, sub)?;
        let main = checked_diagonal(n, Diagonal::Main, main)?;
        let sup = checked_diagonal(n, Diagonal::Super, sup)?;
        Ok(Self { n, sub, main, sup })
    }

    /// Creates an `n x n` tridiagonal matrix with every entry zero.
    pub fn zeros(n: usize) -> Result<Self, TridiagError> {
        Self::new(n, None, None, None)
    }

    /// Creates the symmetric tridiagonal matrix with diagonal `main` and the same
    /// `off` entries below and above it.
    ///
    /// This is the shape of the `T_k` produced by the symmetric Lanczos process, with
    /// `main` holding the alphas and `off` the betas.
    pub fn symmetric(main: Vec<f64>, off: Vec<f64>) -> Result<Self, TridiagError> {
        let sup = off.clone();
        Self::new(main.len(), Some(off), Some(main), Some(sup))
    }

    /// The dimension `n` of this `n x n` matrix.
    #[inline]
    pub fn n(&self) -> usize {
        self.n
    }

    /// Returns the element at `(i, j)`.
    ///
    /// Entries off the band read as `0.0`.
    ///
    /// # Errors
    /// [`ErrorKind::IndexOutOfRange`] if `i >= n` or `j >= n`.
    #[inline]
    pub fn try_at(&self, i: usize, j: usize) -> Result<f64, TridiagError> {
        let value = match locate(self.n, i, j)? {
            BandPosition::Sub(k) => self.sub[k],
            BandPosition::Main(k) => self.main[k],
            BandPosition::Super(k) => self.sup[k],
            BandPosition::OffBand => 0.0,
        };
        Ok(value)
    }

    /// Overwrites the element at `(i, j)` with `value`.
    ///
    /// On error the matrix is left unchanged.
    ///
    /// # Errors
    /// * [`ErrorKind::IndexOutOfRange`] if `i >= n` or `j >= n`.
    /// * [`ErrorKind::NotOnBand`] if `(i, j)` is more than one position away from the
    ///   diagonal, where the storage has no cell.
    pub fn set_at(&mut self, i: usize, j: usize, value: f64) -> Result<(), TridiagError> {
        let Some((diagonal, k)) = locate(self.n, i, j)?.cell() else {
            log::trace!("rejected write to off-band entry ({i}, {j})");
            return Err(ErrorKind::NotOnBand { i, j }.into());
        };
        self.diagonal_mut(diagonal)[k] = value;
        Ok(())
    }

    /// Borrows one of the three diagonals.
    #[inline]
    pub fn diagonal(&self, which: Diagonal) -> &[f64] {
        match which {
            Diagonal::Sub => &self.sub,
            Diagonal::Main => &self.main,
            Diagonal::Super => &self.sup,
        }
    }

    /// Mutably borrows one of the three diagonals. Its length cannot be changed.
    #[inline]
    pub fn diagonal_mut(&mut self, which: Diagonal) -> &mut [f64] {
        match which {
            Diagonal::Sub => &mut self.sub,
            Diagonal::Main => &mut self.main,
            Diagonal::Super => &mut self.sup,
        }
    }

    /// Borrows the backing storage in LAPACK `dl`/`d`/`du` layout.
    #[inline]
    pub fn raw(&self) -> RawTridiagonal<'_> {
        RawTridiagonal {
            n: self.n,
            dl: &self.sub,
            d: &self.main,
            du: &self.sup,
        }
    }

    /// Returns the transpose, which swaps the sub- and super-diagonals.
    pub fn transpose(&self) -> Self {
        Self {
            n: self.n,
            sub: self.sup.clone(),
            main: self.main.clone(),
            sup: self.sub.clone(),
        }
    }

    /// Returns whether the sub- and super-diagonals are exactly equal.
    pub fn is_symmetric(&self) -> bool {
        self.sub == self.sup
    }

    /// Sum of the main diagonal.
    pub fn trace(&self) -> f64 {
        self.main.iter().sum()
    }

    /// Sets every entry to zero. The shape is unchanged.
    pub fn zero(&mut self) {
        self.sub.fill(0.0);
        self.main.fill(0.0);
        self.sup.fill(0.0);
    }

    /// Computes the requested matrix norm, with the semantics of LAPACK's `?langt`.
    ///
    /// A `NaN` anywhere on the band makes every norm `NaN`. The Frobenius norm is
    /// accumulated with scaling, so it stays finite whenever the result is representable.
    pub fn norm(&self, kind: Norm) -> f64 {
        let band = || self.sub.iter().chain(&self.main).chain(&self.sup);
        match kind {
            Norm::MaxAbs => band().map(|v| v.abs()).fold(0.0, nan_max),
            // Column j holds sup[j - 1], main[j] and sub[j].
            Norm::One => band_line_sums(&self.sup, &self.main, &self.sub),
            // Row i holds sub[i - 1], main[i] and sup[i].
            Norm::Infinity => band_line_sums(&self.sub, &self.main, &self.sup),
            Norm::Frobenius => {
                let (scale, sumsq) = band().fold((0.0_f64, 1.0_f64), scaled_sum_squares);
                scale * sumsq.sqrt()
            }
        }
    }

    /// Computes `y = A x`.
    ///
    /// # Errors
    /// [`ErrorKind::DimensionMismatch`] if `x.len() != n`.
    pub fn mul_vec(&self, x: &[f64]) -> Result<Vec<f64>, TridiagError> {
        if x.len() != self.n {
            return Err(ErrorKind::DimensionMismatch {
                matrix_cols: self.n,
                vector_len: x.len(),
            }
            .into());
        }
        let y = (0..self.n)
            .map(|i| {
                let mut acc = self.main[i] * x[i];
                if i > 0 {
                    acc += self.sub[i - 1] * x[i - 1];
                }
                if i + 1 < self.n {
                    acc += self.sup[i] * x[i + 1];
                }
                acc
            })
            .collect();
        Ok(y)
    }

    /// Expands into a dense `faer` matrix with explicit zeros off the band.
    pub fn to_dense(&self) -> Mat<f64> {
        let mut dense = Mat::<f64>::zeros(self.n, self.n);
        for (i, &v) in self.main.iter().enumerate() {
            dense[(i, i)] = v;
        }
        for (i, &v) in self.sub.iter().enumerate() {
            dense[(i + 1, i)] = v;
        }
        for (i, &v) in self.sup.iter().enumerate() {
            dense[(i, i + 1)] = v;
        }
        dense
    }
}

/// Validates a supplied diagonal, or zero-fills one that was not supplied.
fn checked_diagonal(
    n: usize,
    diagonal: Diagonal,
    values: Option<Vec<f64>>,
) -> Result<Vec<f64>, TridiagError> {
    let expected = diagonal.len_for(n);
    match values {
        None => {
            log::debug!("{diagonal} not supplied for n = {n}; filling {expected} zeros");
            Ok(vec![0.0; expected])
        }
        Some(values) if values.len() == expected => Ok(values),
        Some(values) => Err(ErrorKind::InvalidDiagonalLength {
            diagonal,
            expected,
            actual: values.len(),
        }
        .into()),
    }
}

/// Largest absolute sum over the lines (rows or columns) of the band, where line `i`
/// holds `before[i - 1]`, `center[i]` and `after[i]`.
fn band_line_sums(before: &[f64], center: &[f64], after: &[f64]) -> f64 {
    (0..center.len())
        .map(|i| {
            let mut sum = center[i].abs();
            if i > 0 {
                sum += before[i - 1].abs();
            }
            if let Some(v) = after.get(i) {
                sum += v.abs();
            }
            sum
        })
        .fold(0.0, nan_max)
}

/// Running maximum that keeps a `NaN` once seen, unlike `f64::max`.
#[inline]
fn nan_max(acc: f64, v: f64) -> f64 {
    if acc < v || v.is_nan() { v } else { acc }
}

/// One step of the `?lassq` update: `scale^2 * sumsq` tracks the sum of squares
/// without squaring values larger than `scale`.
#[inline]
fn scaled_sum_squares((scale, sumsq): (f64, f64), v: &f64) -> (f64, f64) {
    let a = v.abs();
    if a == 0.0 {
        return (scale, sumsq);
    }
    if scale < a {
        let ratio = scale / a;
        (a, 1.0 + sumsq * ratio * ratio)
    } else {
        let ratio = a / scale;
        (scale, sumsq + ratio * ratio)
    }
}

impl Matrix for TridiagonalMatrix {
    #[inline]
    fn dims(&self) -> (usize, usize) {
        (self.n, self.n)
    }

    /// # Panics
    ///
    /// Panics with the [`ErrorKind::IndexOutOfRange`] message if `(i, j)` is out of
    /// range. Use [`TridiagonalMatrix::try_at`] for a fallible read.
    #[inline]
    fn at(&self, i: usize, j: usize) -> f64 {
        self.try_at(i, j).unwrap_or_else(|err| panic!("{err}"))
    }
}

impl Banded for TridiagonalMatrix {
    /// Always `(1, 1)`: the bandwidth is a property of the storage, not of the values.
    #[inline]
    fn bandwidth(&self) -> (usize, usize) {
        (1, 1)
    }
}

impl From<&TridiagonalMatrix> for Mat<f64> {
    fn from(t: &TridiagonalMatrix) -> Self {
        t.to_dense()
    }
}
