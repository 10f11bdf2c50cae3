use crate::error::TransformError;
use crate::pointset::PointSet;
use crate::transform::Transform;

/// A translation by a constant offset, broadcast over every point.
///
/// Works for any dimensionality; the offset length must match the
/// dimensionality of the points it is applied to.
#[derive(Debug, Clone, PartialEq)]
pub struct Translation {
    offset: Vec<f64>,
}

impl Translation {
    /// Create a new translation from an offset vector.
    pub fn new(offset: Vec<f64>) -> Self {
        Self { offset }
    }

    /// Get the offset vector.
    pub fn offset(&self) -> &[f64] {
        &self.offset
    }

    /// Get the translation by the negated offset.
    pub fn inverse(&self) -> Self {
        Self {
            offset: self.offset.iter().map(|v| -v).collect(),
        }
    }
}

impl Transform for Translation {
    fn apply(&self, points: &PointSet) -> Result<PointSet, TransformError> {
        if points.dim() != self.offset.len() {
            return Err(TransformError::DimensionMismatch(
                self.offset.len(),
                points.dim(),
            ));
        }
        let data = points
            .rows()
            .flat_map(|row| row.iter().zip(self.offset.iter()).map(|(p, o)| p + o))
            .collect();
        PointSet::new(data, points.dim())
    }
}

impl<const D: usize> From<[f64; D]> for Translation {
    fn from(offset: [f64; D]) -> Self {
        Self::new(offset.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_translation_apply() -> Result<(), TransformError> {
        let points = PointSet::from(vec![[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]);
        let translated = Translation::from([1.0, -2.0, 0.5]).apply(&points)?;
        assert_eq!(translated.row(0), &[2.0, 0.0, 3.5]);
        assert_eq!(translated.row(1), &[5.0, 3.0, 6.5]);
        Ok(())
    }

    #[test]
    fn test_translation_does_not_mutate_input() -> Result<(), TransformError> {
        let points = PointSet::from(vec![[1.0, 2.0, 3.0]]);
        let before = points.clone();
        Translation::from([9.0, 9.0, 9.0]).apply(&points)?;
        assert_eq!(points, before);
        Ok(())
    }

    #[test]
    fn test_translation_roundtrip() -> Result<(), TransformError> {
        let points = PointSet::from(vec![[1.0, 2.0], [-3.5, 0.25], [100.0, -7.0]]);
        let translation = Translation::from([12.5, -3.25]);
        let back = translation.inverse().apply(&translation.apply(&points)?)?;
        assert_eq!(back, points);
        Ok(())
    }

    #[test]
    fn test_translation_dimension_mismatch() {
        let points = PointSet::from(vec![[1.0, 2.0, 3.0]]);
        assert!(matches!(
            Translation::from([1.0, 2.0]).apply(&points),
            Err(TransformError::DimensionMismatch(2, 3))
        ));
    }
}
