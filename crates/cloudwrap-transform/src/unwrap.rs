use cloudwrap_linalg::radial_fit;

use crate::error::TransformError;
use crate::pointset::PointSet;
use crate::transform::{Transform, TransformChain};
use crate::translation::Translation;

/// Maps 3D points `(x, y, z)` into cylindrical coordinates.
///
/// ```text
/// depth = sqrt(x^2 + z^2) - radius
/// theta = atan2(x, z)
/// out   = (theta * radius, y, depth)
/// ```
///
/// The output x is the arc length along the circumference, y is the
/// unchanged axial coordinate, and z is the signed radial deviation from
/// the nominal cylinder.
///
/// The cylinder axis is the Y axis and its centre is the origin; points
/// must be translated onto that frame before unwrapping (see
/// [`optimal_cylindrical_unwrap`]). `theta` is discontinuous on the
/// half-plane `x = 0, z < 0`, so the information to preserve in the
/// unwrapping should sit at positive `z`. Points crossing the branch cut
/// wrap around silently.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CylindricalUnwrap {
    radius: f64,
}

impl CylindricalUnwrap {
    /// Create a new unwrapping at `radius` from the cylinder axis.
    pub fn new(radius: f64) -> Self {
        Self { radius }
    }

    /// Get the unwrapping radius.
    pub fn radius(&self) -> f64 {
        self.radius
    }
}

impl Transform for CylindricalUnwrap {
    fn apply(&self, points: &PointSet) -> Result<PointSet, TransformError> {
        if points.dim() != 3 {
            return Err(TransformError::DimensionMismatch(3, points.dim()));
        }
        let mut data = Vec::with_capacity(points.len() * 3);
        for row in points.rows() {
            let (x, y, z) = (row[0], row[1], row[2]);
            let depth = (x * x + z * z).sqrt() - self.radius;
            let theta = x.atan2(z);
            data.extend_from_slice(&[theta * self.radius, y, depth]);
        }
        PointSet::new(data, 3)
    }
}

/// Maps 3D points `(x, y, z)` into spherical coordinates.
///
/// ```text
/// r     = sqrt(x^2 + y^2 + z^2)
/// theta = atan2(x, z)
/// phi   = asin(y / r)
/// out   = (theta * radius, phi * radius, r - radius)
/// ```
///
/// The sphere centre is the origin; points must be translated onto that
/// frame before unwrapping (see [`optimal_spherical_unwrap`]). The same
/// branch-cut caveat as [`CylindricalUnwrap`] applies to `theta`. A point
/// at the origin has no defined direction: `r == 0` produces NaN in the
/// output, which is propagated as a value rather than raised as an error.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SphericalUnwrap {
    radius: f64,
}

impl SphericalUnwrap {
    /// Create a new unwrapping at `radius` from the sphere centre.
    pub fn new(radius: f64) -> Self {
        Self { radius }
    }

    /// Get the unwrapping radius.
    pub fn radius(&self) -> f64 {
        self.radius
    }
}

impl Transform for SphericalUnwrap {
    fn apply(&self, points: &PointSet) -> Result<PointSet, TransformError> {
        if points.dim() != 3 {
            return Err(TransformError::DimensionMismatch(3, points.dim()));
        }
        let mut data = Vec::with_capacity(points.len() * 3);
        for row in points.rows() {
            let (x, y, z) = (row[0], row[1], row[2]);
            let r = (x * x + y * y + z * z).sqrt();
            let theta = x.atan2(z);
            let phi = (y / r).asin();
            data.extend_from_slice(&[theta * self.radius, phi * self.radius, r - self.radius]);
        }
        PointSet::new(data, 3)
    }
}

/// Build the transform chain that optimally cylindrically unwraps `points`.
///
/// Fits a circle to the points in the x-z plane, then composes a
/// [`Translation`] moving the fitted centre to the origin before a
/// [`CylindricalUnwrap`] at the fitted radius. The returned chain can be
/// applied to the fitted points or to any other 3D point set.
///
/// # Errors
///
/// If the points are not 3-dimensional, or the circle fit is degenerate
/// (collinear or too few points), an error is returned.
pub fn optimal_cylindrical_unwrap(points: &PointSet) -> Result<TransformChain, TransformError> {
    let rows = points.to_rows::<3>()?;
    // fit in the x-z plane only
    let xz: Vec<[f64; 2]> = rows.iter().map(|p| [p[0], p[2]]).collect();
    let fit = radial_fit(&xz)?;
    log::debug!(
        "fitted cylinder centre ({}, {}) radius {}",
        fit.center[0],
        fit.center[1],
        fit.radius
    );
    // embed the 2D circle centre back into 3D
    let centring = Translation::new(vec![-fit.center[0], 0.0, -fit.center[1]]);
    Ok(centring.compose_before(CylindricalUnwrap::new(fit.radius)))
}

/// Build the transform chain that optimally spherically unwraps `points`.
///
/// Fits a sphere to the points, then composes a [`Translation`] moving the
/// fitted centre to the origin before a [`SphericalUnwrap`] at the fitted
/// radius.
///
/// # Errors
///
/// If the points are not 3-dimensional, or the sphere fit is degenerate
/// (coplanar or too few points), an error is returned.
pub fn optimal_spherical_unwrap(points: &PointSet) -> Result<TransformChain, TransformError> {
    let rows = points.to_rows::<3>()?;
    let fit = radial_fit(&rows)?;
    log::debug!(
        "fitted sphere centre ({}, {}, {}) radius {}",
        fit.center[0],
        fit.center[1],
        fit.center[2],
        fit.radius
    );
    let centring = Translation::new(fit.center.iter().map(|c| -c).collect());
    Ok(centring.compose_before(SphericalUnwrap::new(fit.radius)))
}
