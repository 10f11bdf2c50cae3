#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// Least-squares circle and sphere fitting.
pub mod fit;

pub use crate::fit::{radial_fit, FitError, RadialFit};
