use crate::error::TransformError;
use crate::pointset::PointSet;

/// A pure mapping from a point set to a new point set.
///
/// Implementations never mutate their input and hold no mutable state;
/// `apply` always returns a freshly allocated result with the same number
/// of points, in the same order. The output dimensionality may differ from
/// the input dimensionality.
pub trait Transform {
    /// Apply the transform to a point set.
    ///
    /// # Errors
    ///
    /// If the points do not have the dimensionality this transform expects,
    /// an error is returned.
    fn apply(&self, points: &PointSet) -> Result<PointSet, TransformError>;

    /// Decompose `self` into boxed primitive stages.
    ///
    /// Most transforms are a single stage. [`TransformChain`] overrides this
    /// to surrender its stage list, so that composing chains flattens at
    /// construction time instead of nesting.
    fn boxed_stages(self) -> Vec<Box<dyn Transform>>
    where
        Self: Sized + 'static,
    {
        vec![Box::new(self)]
    }

    /// Compose a chain in which `self` is applied first, then `other`.
    fn compose_before<T>(self, other: T) -> TransformChain
    where
        Self: Sized + 'static,
        T: Transform + 'static,
    {
        let mut stages = self.boxed_stages();
        stages.extend(other.boxed_stages());
        TransformChain::new(stages)
    }

    /// Compose a chain in which `other` is applied first, then `self`.
    fn compose_after<T>(self, other: T) -> TransformChain
    where
        Self: Sized + 'static,
        T: Transform + 'static,
    {
        other.compose_before(self)
    }
}

/// An ordered composition of transforms.
///
/// Applying the chain pipes the output of each stage into the next, left to
/// right. The first stage error aborts the whole application. An empty
/// chain is the identity.
#[derive(Default)]
pub struct TransformChain {
    stages: Vec<Box<dyn Transform>>,
}

impl TransformChain {
    /// Create a new chain from a list of boxed stages.
    pub fn new(stages: Vec<Box<dyn Transform>>) -> Self {
        Self { stages }
    }

    /// Create an empty chain, the identity transform.
    pub fn identity() -> Self {
        Self::default()
    }

    /// Get the number of stages in the chain.
    pub fn len(&self) -> usize {
        self.stages.len()
    }

    /// Check if the chain has no stages.
    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    /// Append a transform to run after the current stages.
    ///
    /// Appending a chain appends its primitive stages, keeping the chain
    /// flat.
    pub fn push<T>(&mut self, transform: T)
    where
        T: Transform + 'static,
    {
        self.stages.extend(transform.boxed_stages());
    }
}

impl Transform for TransformChain {
    fn apply(&self, points: &PointSet) -> Result<PointSet, TransformError> {
        let mut current = points.clone();
        for stage in &self.stages {
            current = stage.apply(&current)?;
        }
        Ok(current)
    }

    fn boxed_stages(self) -> Vec<Box<dyn Transform>> {
        self.stages
    }
}

impl std::fmt::Debug for TransformChain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TransformChain")
            .field("stages", &self.stages.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::translation::Translation;
    use crate::unwrap::CylindricalUnwrap;

    #[test]
    fn test_chain_matches_sequential_application() -> Result<(), TransformError> {
        let points = PointSet::from(vec![[1.0, 2.0, 3.0], [-4.0, 0.5, 6.0]]);
        let t1 = Translation::new(vec![1.0, -1.0, 0.5]);
        let t2 = CylindricalUnwrap::new(2.0);

        let sequential = t2.apply(&t1.apply(&points)?)?;
        let chained = t1.compose_before(t2).apply(&points)?;

        assert_eq!(chained, sequential);
        Ok(())
    }

    #[test]
    fn test_compose_after() -> Result<(), TransformError> {
        let points = PointSet::from(vec![[1.0, 2.0], [3.0, 4.0]]);
        let t1 = Translation::new(vec![1.0, 1.0]);
        let t2 = Translation::new(vec![0.0, -2.0]);

        let before = t1.clone().compose_before(t2.clone()).apply(&points)?;
        let after = t2.compose_after(t1).apply(&points)?;

        assert_eq!(before, after);
        Ok(())
    }

    #[test]
    fn test_chain_composition_flattens() {
        let a = Translation::new(vec![1.0]).compose_before(Translation::new(vec![2.0]));
        let b = Translation::new(vec![3.0]).compose_before(Translation::new(vec![4.0]));
        let chain = a.compose_before(b);
        assert_eq!(chain.len(), 4);

        let mut chain = chain;
        chain.push(Translation::new(vec![5.0]).compose_before(Translation::new(vec![6.0])));
        assert_eq!(chain.len(), 6);
    }

    #[test]
    fn test_empty_chain_is_identity() -> Result<(), TransformError> {
        let points = PointSet::from(vec![[1.0, 2.0], [3.0, 4.0]]);
        let out = TransformChain::identity().apply(&points)?;
        assert_eq!(out, points);
        Ok(())
    }

    #[test]
    fn test_chain_aborts_on_dimension_mismatch() {
        // the unwrap stage expects 3-dimensional input
        let points = PointSet::from(vec![[1.0, 2.0], [3.0, 4.0]]);
        let chain = Translation::new(vec![1.0, 1.0]).compose_before(CylindricalUnwrap::new(1.0));
        assert!(matches!(
            chain.apply(&points),
            Err(TransformError::DimensionMismatch(3, 2))
        ));
    }
}
