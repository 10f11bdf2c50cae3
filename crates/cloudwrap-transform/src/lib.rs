#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// Error types for the transform module.
pub mod error;

/// Dense point-set container.
pub mod pointset;

/// The transform capability and transform chains.
pub mod transform;

/// Constant-offset translation.
pub mod translation;

/// Cylindrical and spherical unwrapping transforms.
pub mod unwrap;

pub use crate::error::TransformError;
pub use crate::pointset::PointSet;
pub use crate::transform::{Transform, TransformChain};
pub use crate::translation::Translation;
pub use crate::unwrap::{
    optimal_cylindrical_unwrap, optimal_spherical_unwrap, CylindricalUnwrap, SphericalUnwrap,
};
