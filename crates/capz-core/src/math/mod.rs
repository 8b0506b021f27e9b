//! Mathematical support routines
//!
//! Currently holds the linear algebra backend used by the estimation code.

pub mod linalg;
