//! This module defines the minimal capability shared by every matrix in the crate.
//!
//! Comparing a banded storage format against a dense one does not require either side
//! to know the other's layout. Both only need to report their shape and read a single
//! element. The [`Matrix`] trait formalizes that contract, and the free functions
//! [`equal`] and [`equal_approx`] are written once against it.
//!
//! Implementations are provided for [`crate::TridiagonalMatrix`] and for `faer`'s
//! dense `Mat<f64>`, `MatRef<'_, f64>` and `MatMut<'_, f64>`, so a tridiagonal matrix
//! can be checked directly against its dense equivalent.

use faer::{Mat, MatMut, MatRef, prelude::Reborrow};

/// Read access to a matrix, element by element.
///
/// # Example
///
/// ```
/// use faer::mat;
/// use tridiag::{Matrix, TridiagonalMatrix, equal};
///
/// let t = TridiagonalMatrix::new(2, Some(vec![3.0]), Some(vec![1.0, 2.0]), Some(vec![4.0]))?;
/// let dense = mat![[1.0, 4.0], [3.0, 2.0]];
///
/// assert_eq!(t.dims(), Matrix::dims(&dense));
/// assert!(equal(&t, &dense));
/// # Ok::<(), tridiag::TridiagError>(())
/// ```
pub trait Matrix {
    /// Returns `(rows, cols)`.
    fn dims(&self) -> (usize, usize);

    /// Returns the element at row `i`, column `j`.
    ///
    /// # Panics
    ///
    /// Implementations panic if `(i, j)` lies outside [`Matrix::dims`].
    fn at(&self, i: usize, j: usize) -> f64;
}

/// A [`Matrix`] whose nonzero entries are confined to a band around the diagonal.
pub trait Banded: Matrix {
    /// Returns `(kl, ku)`: the number of sub-diagonals and super-diagonals.
    fn bandwidth(&self) -> (usize, usize);
}

impl<M: Matrix + ?Sized> Matrix for &M {
    #[inline]
    fn dims(&self) -> (usize, usize) {
        (**self).dims()
    }

    #[inline]
    fn at(&self, i: usize, j: usize) -> f64 {
        (**self).at(i, j)
    }
}

impl Matrix for MatRef<'_, f64> {
    #[inline]
    fn dims(&self) -> (usize, usize) {
        let this: MatRef<'_, f64> = *self;
        (this.nrows(), this.ncols())
    }

    #[inline]
    fn at(&self, i: usize, j: usize) -> f64 {
        let this: MatRef<'_, f64> = *self;
        assert!(
            i < this.nrows() && j < this.ncols(),
            "Index out of range: ({}, {}) is outside a {}x{} matrix.",
            i,
            j,
            this.nrows(),
            this.ncols(),
        );
        this[(i, j)]
    }
}

impl Matrix for MatMut<'_, f64> {
    #[inline]
    fn dims(&self) -> (usize, usize) {
        Matrix::dims(&self.rb())
    }

    #[inline]
    fn at(&self, i: usize, j: usize) -> f64 {
        Matrix::at(&self.rb(), i, j)
    }
}

impl Matrix for Mat<f64> {
    #[inline]
    fn dims(&self) -> (usize, usize) {
        Matrix::dims(&self.as_ref())
    }

    #[inline]
    fn at(&self, i: usize, j: usize) -> f64 {
        Matrix::at(&self.as_ref(), i, j)
    }
}

/// Returns whether `a` and `b` have the same shape and bit-identical elements.
///
/// No tolerance is applied: `0.0 == -0.0` holds and `NaN` never compares equal, as
/// with `f64`'s `==`.
pub fn equal<A, B>(a: &A, b: &B) -> bool
where
    A: Matrix + ?Sized,
    B: Matrix + ?Sized,
{
    let (rows, cols) = a.dims();
    if b.dims() != (rows, cols) {
        return false;
    }
    (0..rows).all(|i| (0..cols).all(|j| a.at(i, j) == b.at(i, j)))
}

/// Returns whether `a` and `b` have the same shape and elements within `tol`.
///
/// Two elements match if their absolute difference is at most `tol`, or if that
/// difference relative to the larger magnitude is at most `tol`.
pub fn equal_approx<A, B>(a: &A, b: &B, tol: f64) -> bool
where
    A: Matrix + ?Sized,
    B: Matrix + ?Sized,
{
    let (rows, cols) = a.dims();
    if b.dims() != (rows, cols) {
        return false;
    }
    (0..rows).all(|i| (0..cols).all(|j| close(a.at(i, j), b.at(i, j), tol)))
}

#[inline]
fn close(a: f64, b: f64, tol: f64) -> bool {
    if a == b {
        return true;
    }
    let diff = (a - b).abs();
    if diff <= tol {
        return true;
    }
    diff / a.abs().max(b.abs()) <= tol
}
