//! Block design matrix construction
//!
//! Builds the stacked regression system relating the shared AR coefficients
//! and the per-channel MA coefficients to the measured impulse responses,
//! and splits the solution vector back into coefficient arrays.

use ndarray::{s, Array1, Array2, ArrayView1};

/// Build the AR regression block for one channel.
///
/// The block has shape `(N + P + 1, P)`. Column `j` carries the channel's
/// impulse response shifted down by `j + 1` rows, encoding convolution with
/// a unit delay of order `j + 1`; all other entries stay zero.
pub(crate) fn channel_ar_block(h: ArrayView1<f64>, p: usize) -> Array2<f64> {
    let n = h.len();
    let mut block = Array2::<f64>::zeros((n + p + 1, p));

    for j in 0..p {
        block.slice_mut(s![j + 1..j + 1 + n, j]).assign(&h);
    }

    block
}

/// Build the MA regression block, identical for every channel.
///
/// Identity in the first `Q + 1` rows, zero below: the direct (undelayed)
/// regression operator truncated to order `Q`.
pub(crate) fn ma_block(n: usize, p: usize, q: usize) -> Array2<f64> {
    let mut d = Array2::<f64>::zeros((n + p + 1, q + 1));

    for k in 0..=q {
        d[[k, k]] = 1.0;
    }

    d
}

/// Assemble the full design matrix of shape `(M*(N+P+1), P + M*(Q+1))`.
///
/// Row-block `i` holds channel `i`'s AR block in the first `P` columns,
/// shared by all channels (this couples the channels through one common
/// pole set), and the MA identity block in the channel's own `Q + 1`
/// columns. Other channels' MA columns stay zero in that row-block.
///
/// The matrix is assembled dense; the block sparsity is not exploited.
pub fn build_design_matrix(h_r: &Array2<f64>, p: usize, q: usize) -> Array2<f64> {
    let (m, n) = h_r.dim();
    let block_rows = n + p + 1;
    let mut big_a = Array2::<f64>::zeros((m * block_rows, p + m * (q + 1)));

    let d = ma_block(n, p, q);

    for i in 0..m {
        let row0 = i * block_rows;
        let ar = channel_ar_block(h_r.row(i), p);
        big_a.slice_mut(s![row0..row0 + block_rows, ..p]).assign(&ar);

        let col0 = p + i * (q + 1);
        big_a
            .slice_mut(s![row0..row0 + block_rows, col0..col0 + q + 1])
            .assign(&d);
    }

    big_a
}

/// Zero-pad each measured response on the right by `P + 1` samples and
/// flatten the rows (row-major) into the target vector of length
/// `M*(N+P+1)`.
pub fn build_padded_target(h_r: &Array2<f64>, p: usize) -> Array1<f64> {
    let (m, n) = h_r.dim();
    let block_rows = n + p + 1;
    let mut h_pad = Array1::<f64>::zeros(m * block_rows);

    for i in 0..m {
        let row0 = i * block_rows;
        h_pad.slice_mut(s![row0..row0 + n]).assign(&h_r.row(i));
    }

    h_pad
}

/// Split the solution vector into AR and MA coefficients.
///
/// The leading `P` entries are negated, converting the regression
/// convention into the standard filter-coefficient convention. The
/// remaining `M*(Q+1)` entries reshape row-major so that row `i` holds
/// channel `i`'s MA coefficients.
pub fn extract_coefficients(
    x: &Array1<f64>,
    p: usize,
    m: usize,
    q: usize,
) -> (Array1<f64>, Array2<f64>) {
    let a = x.slice(s![..p]).mapv(|v| -v);
    let b = Array2::from_shape_fn((m, q + 1), |(i, k)| x[p + i * (q + 1) + k]);

    (a, b)
}
