//! Linear algebra operations
//!
//! This module provides the direct solver used for the normal equations.
//! Currently uses nalgebra as the backend, but the API is designed to allow
//! swapping the backend without changing callers.
//!
//! The key benefit: the ndarray<->nalgebra conversions are contained here,
//! eliminating scattered conversion code throughout the codebase.

use nalgebra::{DMatrix, DVector};
use ndarray::{Array1, Array2};

/// Convert ndarray Array2<f64> to nalgebra DMatrix<f64>
#[inline]
fn to_na_matrix(a: &Array2<f64>) -> DMatrix<f64> {
    let (m, n) = a.dim();
    DMatrix::from_fn(m, n, |i, j| a[[i, j]])
}

/// Convert ndarray Array1<f64> to nalgebra DVector<f64>
#[inline]
fn to_na_vector(v: &Array1<f64>) -> DVector<f64> {
    DVector::from_fn(v.len(), |i, _| v[i])
}

/// Solve the symmetric positive-definite system `G x = c` by Cholesky
/// factorization.
///
/// `G` must be square and `c` of matching length. Returns `None` when the
/// dimensions disagree or when `G` is singular, rank deficient, or otherwise
/// not positive definite; the factorization is exact (no tolerance
/// parameter, no pseudo-inverse fallback).
pub fn solve_spd(g: &Array2<f64>, c: &Array1<f64>) -> Option<Array1<f64>> {
    let (rows, cols) = g.dim();
    if rows != cols || c.len() != rows {
        return None;
    }
    if rows == 0 {
        return Some(Array1::zeros(0));
    }

    let g_na = to_na_matrix(g);
    let c_na = to_na_vector(c);

    let chol = g_na.cholesky()?;
    let x = chol.solve(&c_na);

    Some(Array1::from_iter(x.iter().cloned()))
}
