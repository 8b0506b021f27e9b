//! Fitted Model Tests
//!
//! Tests the CommonPoleZero wrapper: model synthesis against the measured
//! data, pole extraction, stability classification, and the optional ridge
//! regularization extension.

use approx::assert_relative_eq;
use capz_core::capz::synthesize_response;
use capz_core::{CapzError, CommonPoleZero};
use ndarray::{array, Array2};

/// Two-channel responses sharing a conjugate pole pair at radius 0.7
fn shared_pole_data(n: usize) -> Array2<f64> {
    let a = array![-2.0 * 0.7 * std::f64::consts::FRAC_PI_4.cos(), 0.49];
    let bs = array![[1.0, 0.3], [0.6, -0.4]];

    let mut h_r = Array2::<f64>::zeros((2, n));
    for i in 0..2 {
        h_r.row_mut(i).assign(&synthesize_response(&a, bs.row(i), n));
    }
    h_r
}

#[test]
fn test_fit_reproduces_measured_responses() {
    let h_r = shared_pole_data(96);
    let mut est = CommonPoleZero::new();

    est.fit(&h_r, 96, 2, 2, 1).expect("fit should succeed");

    for channel in 0..2 {
        let rms = est.rms_error(&h_r, channel).expect("fit results present");
        assert!(
            rms < 1e-10,
            "channel {} should be reproduced, rms = {}",
            channel,
            rms
        );
    }
}

#[test]
fn test_model_response_matches_channel() {
    let h_r = shared_pole_data(96);
    let mut est = CommonPoleZero::new();

    est.fit(&h_r, 96, 2, 2, 1).expect("fit should succeed");

    let response = est.model_response(1, 96).expect("fit results present");
    for t in 0..96 {
        assert_relative_eq!(response[t], h_r[[1, t]], epsilon = 1e-10);
    }
}

#[test]
fn test_model_response_out_of_range_channel() {
    let h_r = shared_pole_data(48);
    let mut est = CommonPoleZero::new();

    est.fit(&h_r, 48, 2, 2, 1).expect("fit should succeed");

    assert!(est.model_response(2, 48).is_none());
    assert!(est.rms_error(&h_r, 2).is_none());
}

#[test]
fn test_fitted_poles_and_stability() {
    // Single-pole data: h[t] = 0.5^t scaled per channel
    let a = array![-0.5];
    let bs = array![[1.0], [2.0]];
    let mut h_r = Array2::<f64>::zeros((2, 48));
    for i in 0..2 {
        h_r.row_mut(i).assign(&synthesize_response(&a, bs.row(i), 48));
    }

    let mut est = CommonPoleZero::new();
    est.fit(&h_r, 48, 2, 1, 0).expect("fit should succeed");

    let poles = est.poles().expect("fit results present");
    assert_eq!(poles.len(), 1);
    assert_relative_eq!(poles[0].re, 0.5, epsilon = 1e-8);
    assert_relative_eq!(poles[0].im, 0.0, epsilon = 1e-8);

    assert_eq!(est.is_stable(), Some(true));
}

#[test]
fn test_fit_metadata() {
    let h_r = shared_pole_data(64);
    let mut est = CommonPoleZero::new();

    est.fit(&h_r, 64, 2, 2, 1).expect("fit should succeed");

    assert_eq!(est.n_channels(), Some(2));
    assert_eq!(est.ar_order(), Some(2));
    assert_eq!(est.ma_order(), Some(1));
}

#[test]
fn test_regularization_handles_singular_system() {
    // All-zero input is singular for P >= 1 under the plain solve; a
    // small ridge term makes it solvable and drives everything to zero.
    let h_r = Array2::<f64>::zeros((2, 16));

    let mut plain = CommonPoleZero::new();
    let result = plain.fit(&h_r, 16, 2, 1, 0);
    assert!(matches!(result, Err(CapzError::SingularSystem)));

    let mut ridged = CommonPoleZero::new();
    ridged.regularization = 1e-6;
    ridged.fit(&h_r, 16, 2, 1, 0).expect("ridge fit should succeed");

    let a = ridged.ar_coeffs.as_ref().expect("fit results present");
    let b = ridged.ma_coeffs.as_ref().expect("fit results present");
    for value in a.iter().chain(b.iter()) {
        assert_relative_eq!(*value, 0.0, epsilon = 1e-9);
    }
}
