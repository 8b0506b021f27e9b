//! Core CommonPoleZero struct and the estimation routine

use ndarray::{Array1, Array2};
use num_complex::Complex64;
use thiserror::Error;

use super::{design, model, poles};
use crate::math::linalg;

/// CAPZ estimation errors
#[derive(Error, Debug)]
pub enum CapzError {
    #[error(
        "impulse response matrix has shape ({rows}, {cols}), \
         expected ({expected_rows}, {expected_cols})"
    )]
    ShapeMismatch {
        rows: usize,
        cols: usize,
        expected_rows: usize,
        expected_cols: usize,
    },

    #[error("normal equations matrix is singular or rank deficient")]
    SingularSystem,
}

/// Estimate common AR and per-channel MA coefficients from measured
/// impulse responses.
///
/// All responses are modeled with one shared pole set (the AR part) and
/// per-channel zeros (the MA part); both are recovered from a single
/// least-squares solve over the block design matrix. The normal equations
/// are solved directly, with no regularization or rank handling: a
/// rank-deficient design fails with [`CapzError::SingularSystem`].
///
/// # Arguments
/// * `n` - Length of each impulse response
/// * `m` - Number of measured impulse responses (channels)
/// * `p` - AR (common pole) order
/// * `q` - MA (per-channel zero) order
/// * `h_r` - Measured impulse responses, shape `(M, N)`
///
/// # Returns
/// The shared AR coefficients `a` of length `P` and the per-channel MA
/// coefficients `B` of shape `(M, Q + 1)`, or an error when `h_r` does not
/// have shape `(M, N)` or the normal equations cannot be solved.
pub fn capz(
    n: usize,
    m: usize,
    p: usize,
    q: usize,
    h_r: &Array2<f64>,
) -> Result<(Array1<f64>, Array2<f64>), CapzError> {
    check_shape(h_r, m, n)?;
    solve(h_r, p, q, 0.0)
}

/// Verify the declared shape before any matrix construction
fn check_shape(h_r: &Array2<f64>, m: usize, n: usize) -> Result<(), CapzError> {
    let (rows, cols) = h_r.dim();
    if (rows, cols) != (m, n) {
        return Err(CapzError::ShapeMismatch {
            rows,
            cols,
            expected_rows: m,
            expected_cols: n,
        });
    }
    Ok(())
}

/// Build the block system, solve the normal equations, split the solution
fn solve(
    h_r: &Array2<f64>,
    p: usize,
    q: usize,
    regularization: f64,
) -> Result<(Array1<f64>, Array2<f64>), CapzError> {
    let (m, _) = h_r.dim();

    let big_a = design::build_design_matrix(h_r, p, q);
    let h_pad = design::build_padded_target(h_r, p);

    let mut gram = big_a.t().dot(&big_a);
    let rhs = big_a.t().dot(&h_pad);

    if regularization > 0.0 {
        for k in 0..gram.nrows() {
            gram[[k, k]] += regularization;
        }
    }

    let x = linalg::solve_spd(&gram, &rhs).ok_or(CapzError::SingularSystem)?;

    Ok(design::extract_coefficients(&x, p, m, q))
}

/// Common pole-zero model of a set of measured room transfer functions
///
/// Wraps the [`capz`] estimation routine and stores the fitted
/// coefficients for model evaluation.
#[derive(Debug, Clone)]
pub struct CommonPoleZero {
    /// Shared AR coefficients, length P
    pub ar_coeffs: Option<Array1<f64>>,

    /// Per-channel MA coefficients [n_channels, Q + 1]
    pub ma_coeffs: Option<Array2<f64>>,

    /// Ridge term added to the normal matrix diagonal before the solve.
    /// Zero (the default) reproduces the plain normal-equations solve,
    /// which fails on a singular system.
    pub regularization: f64,

    /// Wall-clock time of last fit (in seconds)
    pub wall_clock_time: f64,
}

impl Default for CommonPoleZero {
    fn default() -> Self {
        Self {
            ar_coeffs: None,
            ma_coeffs: None,
            regularization: 0.0,
            wall_clock_time: 0.0,
        }
    }
}

impl CommonPoleZero {
    /// Create a new CommonPoleZero instance with default parameters
    pub fn new() -> Self {
        Self::default()
    }

    /// Fit the common-pole model to measured impulse responses.
    ///
    /// # Arguments
    /// * `h_r` - Measured impulse responses, shape `(M, N)`
    /// * `n` - Length of each impulse response
    /// * `m` - Number of measured impulse responses
    /// * `p` - AR (common pole) order
    /// * `q` - MA (per-channel zero) order
    pub fn fit(
        &mut self,
        h_r: &Array2<f64>,
        n: usize,
        m: usize,
        p: usize,
        q: usize,
    ) -> Result<(), CapzError> {
        use std::time::Instant;
        let timer_start = Instant::now();

        check_shape(h_r, m, n)?;
        let (a, b) = solve(h_r, p, q, self.regularization)?;

        self.ar_coeffs = Some(a);
        self.ma_coeffs = Some(b);
        self.wall_clock_time = timer_start.elapsed().as_secs_f64();

        Ok(())
    }

    /// Number of fitted channels
    pub fn n_channels(&self) -> Option<usize> {
        self.ma_coeffs.as_ref().map(|b| b.nrows())
    }

    /// AR model order
    pub fn ar_order(&self) -> Option<usize> {
        self.ar_coeffs.as_ref().map(|a| a.len())
    }

    /// MA model order
    pub fn ma_order(&self) -> Option<usize> {
        self.ma_coeffs.as_ref().map(|b| b.ncols() - 1)
    }

    /// Synthesize the fitted model's impulse response for one channel.
    ///
    /// Returns `None` before a successful fit or for an out-of-range
    /// channel index.
    pub fn model_response(&self, channel: usize, n_samples: usize) -> Option<Array1<f64>> {
        let a = self.ar_coeffs.as_ref()?;
        let b = self.ma_coeffs.as_ref()?;

        if channel >= b.nrows() {
            return None;
        }

        Some(model::synthesize_response(a, b.row(channel), n_samples))
    }

    /// RMS error between the fitted model and one measured response
    pub fn rms_error(&self, h_r: &Array2<f64>, channel: usize) -> Option<f64> {
        if channel >= h_r.nrows() {
            return None;
        }

        let target = h_r.row(channel).to_owned();
        let response = self.model_response(channel, target.len())?;

        Some(model::rms_error(&response, &target))
    }

    /// Common poles of the fitted model (roots of the AR polynomial)
    pub fn poles(&self) -> Option<Array1<Complex64>> {
        self.ar_coeffs.as_ref().map(poles::poles_from_ar)
    }

    /// Whether every common pole lies strictly inside the unit circle
    pub fn is_stable(&self) -> Option<bool> {
        self.poles().map(|p| poles::is_stable(&p))
    }
}
