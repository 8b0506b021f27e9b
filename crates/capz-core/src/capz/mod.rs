//! Common acoustical pole and zero (CAPZ) modeling of room transfer functions
//!
//! Estimates one set of AR coefficients shared by all measured impulse
//! responses together with per-channel MA coefficients, using a single
//! least-squares solve over a block-structured design matrix.
//!
//! # References
//!
//! - Y. Haneda, S. Makino, Y. Kaneda, "Common Acoustical Pole and Zero
//!   Modeling of Room Transfer Functions", IEEE Trans. Speech Audio
//!   Processing, vol. 2, no. 2, pp. 320-328, 1994

mod core;
mod design;
mod model;
pub mod poles;

pub use self::core::{capz, CapzError, CommonPoleZero};
pub use design::{build_design_matrix, build_padded_target, extract_coefficients};
pub use model::{frequency_response, max_error, rms_error, synthesize_response};
