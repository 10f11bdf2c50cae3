//! Algebraic least-squares fitting of circles and spheres.
//!
//! Estimates the centre and radius of the circle (`D = 2`) or sphere
//! (`D = 3`) that best matches a set of points, in the algebraic
//! least-squares sense.
//!
//! # Mathematical Background
//!
//! A point `p` lies on the sphere with centre `c` and radius `r` iff
//!
//! ```text
//! ‖p‖² = 2 c·p + (r² − ‖c‖²)
//! ```
//!
//! which is linear in the unknowns `(c, d)` with `d = r² − ‖c‖²`. Stacking
//! one row `[2 pᵢᵀ, 1]` per point against the right-hand side `‖pᵢ‖²`
//! gives an `N×(D+1)` overdetermined system whose least-squares solution
//! minimizes the algebraic distance to the circle/sphere. The radius is
//! recovered as `r = √(d + ‖c‖²)`.
//!
//! The system is solved through a thin SVD; a rank check on the singular
//! values rejects degenerate configurations (collinear points for a circle,
//! coplanar points for a sphere, or too few distinct points), for which no
//! unique centre exists.
//!
//! # References
//!
//! * Coope, I. D. (1993). "Circle fitting by linear and nonlinear least
//!   squares." Journal of Optimization Theory and Applications 76.

/// Relative singular-value threshold below which the fit system is
/// considered rank deficient.
const RANK_TOLERANCE: f64 = 1e-12;

/// An error type for the fitting module.
#[derive(thiserror::Error, Debug)]
pub enum FitError {
    /// Error when the point set is too small to determine a fit.
    #[error("radial fit needs at least {needed} points, got {got}")]
    TooFewPoints {
        /// Minimum number of points required for this dimensionality.
        needed: usize,
        /// Number of points provided.
        got: usize,
    },

    /// Error when the points do not determine a unique centre and radius.
    #[error("degenerate point configuration, the fit system is rank deficient")]
    Degenerate,
}

/// Centre and radius estimated by [`radial_fit`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadialFit<const D: usize> {
    /// Centre of the fitted circle or sphere.
    pub center: [f64; D],
    /// Radius of the fitted circle or sphere.
    pub radius: f64,
}

/// Fit a circle (`D = 2`) or sphere (`D = 3`) to a set of points by linear
/// least squares, minimizing the algebraic distance.
///
/// # Arguments
///
/// * `points` - The points to fit, one `[f64; D]` coordinate row per point.
///
/// # Returns
///
/// The fitted centre and radius.
///
/// # Errors
///
/// [`FitError::TooFewPoints`] when fewer than `D + 1` points are given, and
/// [`FitError::Degenerate`] when the points are collinear (circle),
/// coplanar (sphere) or otherwise rank deficient.
///
/// Example:
///
/// ```
/// use cloudwrap_linalg::radial_fit;
///
/// let points = [[5.0, 0.0], [0.0, 5.0], [-5.0, 0.0], [0.0, -5.0]];
/// let fit = radial_fit(&points).unwrap();
/// assert!((fit.radius - 5.0).abs() < 1e-9);
/// ```
pub fn radial_fit<const D: usize>(points: &[[f64; D]]) -> Result<RadialFit<D>, FitError> {
    let cols = D + 1;
    if points.len() < cols {
        return Err(FitError::TooFewPoints {
            needed: cols,
            got: points.len(),
        });
    }

    // design matrix A = [2 p^T, 1], right-hand side b = ||p||^2
    let mat_a = faer::Mat::<f64>::from_fn(points.len(), cols, |i, j| match j < D {
        true => 2.0 * points[i][j],
        false => 1.0,
    });
    let b = faer::Mat::<f64>::from_fn(points.len(), 1, |i, _| {
        points[i].iter().map(|v| v * v).sum::<f64>()
    });

    let svd = mat_a.svd();
    let sigma = svd.s_diagonal();

    // singular values are sorted in descending order
    if sigma.read(cols - 1) < RANK_TOLERANCE * sigma.read(0) {
        return Err(FitError::Degenerate);
    }

    // x = V * S^-1 * U^T b
    let utb = svd.u().transpose() * b.as_ref();
    let scaled = faer::Mat::<f64>::from_fn(cols, 1, |i, _| utb.read(i, 0) / sigma.read(i));
    let x = svd.v() * scaled.as_ref();

    let mut center = [0.0; D];
    for (j, c) in center.iter_mut().enumerate() {
        *c = x.read(j, 0);
    }

    // r^2 = d + ||c||^2
    let radius_sq = x.read(D, 0) + center.iter().map(|v| v * v).sum::<f64>();
    if radius_sq <= 0.0 {
        return Err(FitError::Degenerate);
    }

    Ok(RadialFit {
        center,
        radius: radius_sq.sqrt(),
    })
}
