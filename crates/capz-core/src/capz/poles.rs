//! Pole utilities for the fitted common AR polynomial
//!
//! The estimated AR coefficients define the shared denominator
//! `A(z) = 1 + a[0] z^-1 + ... + a[P-1] z^-P`; its roots are the common
//! acoustical poles of the modeled room.

use ndarray::Array1;
use num_complex::Complex64;

/// Margin applied when testing pole magnitudes against the unit circle
const UNIT_CIRCLE_TOLERANCE: f64 = 1e-12;

/// Compute the common poles from the AR coefficients.
///
/// The poles are the roots of `z^P + a[0] z^(P-1) + ... + a[P-1]`,
/// extracted as the eigenvalues of the polynomial's companion matrix.
pub fn poles_from_ar(a: &Array1<f64>) -> Array1<Complex64> {
    use nalgebra::DMatrix;

    let p = a.len();
    if p == 0 {
        return Array1::zeros(0);
    }

    // Companion matrix: negated coefficients in the first row, ones on
    // the subdiagonal
    let companion = DMatrix::from_fn(p, p, |i, j| {
        if i == 0 {
            -a[j]
        } else if i == j + 1 {
            1.0
        } else {
            0.0
        }
    });

    let eigen = companion.complex_eigenvalues();

    Array1::from_iter(eigen.iter().map(|e| Complex64::new(e.re, e.im)))
}

/// Whether every pole lies strictly inside the unit circle
pub fn is_stable(poles: &Array1<Complex64>) -> bool {
    poles
        .iter()
        .all(|pole| pole.norm() < 1.0 - UNIT_CIRCLE_TOLERANCE)
}

/// Largest pole magnitude (0.0 for an empty pole set)
pub fn spectral_radius(poles: &Array1<Complex64>) -> f64 {
    poles.iter().map(|pole| pole.norm()).fold(0.0, f64::max)
}
