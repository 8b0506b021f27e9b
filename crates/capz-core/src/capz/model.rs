//! Model response evaluation
//!
//! Functions for evaluating one channel of the fitted common-pole model,
//! in the time domain and on the unit circle.

use ndarray::{Array1, ArrayView1};
use num_complex::Complex64;
use std::f64::consts::PI;

/// Synthesize the impulse response of one channel's fitted model.
///
/// Runs the direct-form recursion
/// `h[t] = b[t] - sum_k a[k] * h[t - 1 - k]`,
/// with `b[t]` taken as zero past the MA order.
///
/// # Arguments
/// * `a` - Shared AR coefficients, length P
/// * `b` - One channel's MA coefficients, length Q + 1
/// * `n_samples` - Number of output samples
pub fn synthesize_response(a: &Array1<f64>, b: ArrayView1<f64>, n_samples: usize) -> Array1<f64> {
    let p = a.len();
    let mut h = Array1::<f64>::zeros(n_samples);

    for t in 0..n_samples {
        let mut sample = if t < b.len() { b[t] } else { 0.0 };
        for k in 0..p.min(t) {
            sample -= a[k] * h[t - 1 - k];
        }
        h[t] = sample;
    }

    h
}

/// Evaluate one channel's transfer function on the unit circle.
///
/// Computes `H(e^{jw}) = B(e^{jw}) / A(e^{jw})` with
/// `A(z) = 1 + a[0] z^-1 + ... + a[P-1] z^-P` at `n_freqs` points spaced
/// uniformly over `[0, pi]`.
pub fn frequency_response(
    a: &Array1<f64>,
    b: ArrayView1<f64>,
    n_freqs: usize,
) -> Array1<Complex64> {
    let mut response = Array1::<Complex64>::zeros(n_freqs);

    for (f_idx, h) in response.iter_mut().enumerate() {
        let omega = if n_freqs > 1 {
            PI * f_idx as f64 / (n_freqs - 1) as f64
        } else {
            0.0
        };
        let z_inv = Complex64::new(0.0, -omega).exp();

        let mut numerator = Complex64::new(0.0, 0.0);
        let mut z_pow = Complex64::new(1.0, 0.0);
        for &bk in b.iter() {
            numerator += z_pow * bk;
            z_pow *= z_inv;
        }

        let mut denominator = Complex64::new(1.0, 0.0);
        let mut z_pow = z_inv;
        for &ak in a.iter() {
            denominator += z_pow * ak;
            z_pow *= z_inv;
        }

        *h = numerator / denominator;
    }

    response
}

/// Calculate RMS error between model and target responses
pub fn rms_error(model_response: &Array1<f64>, target_response: &Array1<f64>) -> f64 {
    if model_response.len() != target_response.len() || model_response.is_empty() {
        return f64::NAN;
    }

    let n = model_response.len() as f64;
    let error_sum: f64 = model_response
        .iter()
        .zip(target_response.iter())
        .map(|(m, t)| (m - t) * (m - t))
        .sum();

    (error_sum / n).sqrt()
}

/// Calculate maximum absolute error between model and target responses
pub fn max_error(model_response: &Array1<f64>, target_response: &Array1<f64>) -> f64 {
    if model_response.len() != target_response.len() || model_response.is_empty() {
        return f64::NAN;
    }

    model_response
        .iter()
        .zip(target_response.iter())
        .map(|(m, t)| (m - t).abs())
        .fold(0.0, f64::max)
}
