use crate::error::TransformError;

/// A dense set of N points in D-dimensional space.
///
/// Coordinates are stored row major, one `D`-length row per point. The row
/// index is meaningful: index `i` refers to the same point before and after
/// any transform is applied.
#[derive(Debug, Clone, PartialEq)]
pub struct PointSet {
    // row-major coordinate buffer of length len * dim
    data: Vec<f64>,
    // dimensionality of each point
    dim: usize,
}

impl PointSet {
    /// Create a new point set from a row-major coordinate buffer.
    ///
    /// # Arguments
    ///
    /// * `data` - The coordinates, point by point.
    /// * `dim` - The dimensionality of each point.
    ///
    /// # Errors
    ///
    /// If `dim` is zero or the buffer length is not a multiple of `dim`,
    /// an error is returned.
    pub fn new(data: Vec<f64>, dim: usize) -> Result<Self, TransformError> {
        if dim == 0 || data.len() % dim != 0 {
            return Err(TransformError::InvalidShape(data.len(), dim));
        }
        Ok(Self { data, dim })
    }

    /// Get the number of points in the set.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len() / self.dim
    }

    /// Check if the point set is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Get the dimensionality of the points.
    #[inline]
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Get the coordinates of the point at `index`.
    pub fn row(&self, index: usize) -> &[f64] {
        &self.data[index * self.dim..(index + 1) * self.dim]
    }

    /// Iterate over the points, one coordinate row at a time.
    pub fn rows(&self) -> impl Iterator<Item = &[f64]> {
        self.data.chunks_exact(self.dim)
    }

    /// Get the raw row-major coordinate buffer.
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Copy the points into fixed-size coordinate rows.
    ///
    /// # Errors
    ///
    /// If the point set is not `D`-dimensional, an error is returned.
    pub fn to_rows<const D: usize>(&self) -> Result<Vec<[f64; D]>, TransformError> {
        if self.dim != D {
            return Err(TransformError::DimensionMismatch(D, self.dim));
        }
        Ok(self
            .rows()
            .map(|row| {
                let mut out = [0.0; D];
                out.copy_from_slice(row);
                out
            })
            .collect())
    }
}

impl<const D: usize> From<Vec<[f64; D]>> for PointSet {
    fn from(rows: Vec<[f64; D]>) -> Self {
        Self {
            data: rows.into_iter().flatten().collect(),
            dim: D,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pointset_new() -> Result<(), TransformError> {
        let points = PointSet::new(vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0], 3)?;
        assert_eq!(points.len(), 2);
        assert_eq!(points.dim(), 3);
        assert_eq!(points.row(1), &[3.0, 4.0, 5.0]);
        Ok(())
    }

    #[test]
    fn test_pointset_invalid_shape() {
        assert!(matches!(
            PointSet::new(vec![0.0, 1.0, 2.0, 3.0], 3),
            Err(TransformError::InvalidShape(4, 3))
        ));
        assert!(matches!(
            PointSet::new(vec![0.0], 0),
            Err(TransformError::InvalidShape(1, 0))
        ));
    }

    #[test]
    fn test_pointset_from_rows() {
        let points = PointSet::from(vec![[1.0, 2.0], [3.0, 4.0]]);
        assert_eq!(points.dim(), 2);
        assert_eq!(points.rows().count(), 2);
        assert_eq!(points.as_slice(), &[1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_pointset_to_rows_dimension_mismatch() {
        let points = PointSet::from(vec![[1.0, 2.0], [3.0, 4.0]]);
        assert!(matches!(
            points.to_rows::<3>(),
            Err(TransformError::DimensionMismatch(3, 2))
        ));
    }
}
