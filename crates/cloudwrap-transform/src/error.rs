use cloudwrap_linalg::FitError;

/// An error type for the transform module.
#[derive(thiserror::Error, Debug)]
pub enum TransformError {
    /// Error when the point buffer does not match the declared dimensionality.
    #[error("Point buffer length ({0}) is not a multiple of the dimensionality ({1})")]
    InvalidShape(usize, usize),

    /// Error when a transform receives points of the wrong dimensionality.
    #[error("Expected {0}-dimensional points, got {1}-dimensional points")]
    DimensionMismatch(usize, usize),

    /// Error when the radial fit cannot determine a centre and radius.
    #[error("Radial fit failed")]
    DegenerateFit(#[from] FitError),
}
