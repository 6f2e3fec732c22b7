//! VSA primitives used by the associative memory.
//!
//! - **bind**: associate a position with a value (`A * One`)
//! - **bundle**: superpose bindings (`A * One + A * Two`)
//! - **unbind**: query a binding by one of its factors
//! - **cleanup**: snap a noisy vector back to the closest codebook entry

use crate::error::{ResonanceError, Result};
use crate::similarity::Similarity;
use crate::vector::{sign, Vector};

/// Collection of VSA primitive operations.
pub struct Primitives;

impl Primitives {
    /// Bind two vectors (element-wise multiplication for bipolar).
    ///
    /// The result is dissimilar to both inputs, but `unbind(bind(A, B), A) ≈ B`.
    pub fn bind(a: &Vector, b: &Vector) -> Result<Vector> {
        a.check_dimensions(b.dimensions())?;

        let data = a
            .data()
            .iter()
            .zip(b.data())
            .map(|(&x, &y)| x * y)
            .collect();
        Ok(Vector::from_data(data))
    }

    /// Bipolar binding is its own inverse.
    pub fn unbind(bound: &Vector, key: &Vector) -> Result<Vector> {
        Self::bind(bound, key)
    }

    /// Bundle vectors by element-wise majority vote.
    ///
    /// Ties become 0. Bundling a vector with itself returns it unchanged,
    /// while bundling two unrelated vectors zeroes about half the dimensions.
    pub fn bundle(vectors: &[&Vector]) -> Result<Vector> {
        let first = vectors
            .first()
            .ok_or_else(|| ResonanceError::InvalidInput("cannot bundle an empty list".into()))?;

        let mut sums = vec![0i32; first.dimensions()];
        for vec in vectors {
            first.check_dimensions(vec.dimensions())?;
            for (sum, &v) in sums.iter_mut().zip(vec.data()) {
                *sum += v as i32;
            }
        }

        Ok(Vector::from_data(
            sums.into_iter().map(|s| sign(s as f64)).collect(),
        ))
    }

    /// Find the closest vector in a codebook.
    ///
    /// Returns the index and cosine similarity of the best match, or `None`
    /// for an empty codebook.
    pub fn cleanup(noisy: &Vector, codebook: &[Vector]) -> Option<(usize, f64)> {
        codebook
            .iter()
            .map(|vec| Similarity::cosine(noisy, vec))
            .enumerate()
            .fold(None, |best, (i, sim)| match best {
                Some((_, best_sim)) if best_sim >= sim => best,
                _ => Some((i, sim)),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vector_manager::VectorManager;

    #[test]
    fn test_bind_unbind() {
        let vm = VectorManager::new(4096);
        let a = vm.get_vector("position:A");
        let one = vm.get_vector("value:One");

        let bound = Primitives::bind(&a, &one).unwrap();
        assert!(Similarity::cosine(&bound, &one).abs() < 0.1);

        let recovered = Primitives::unbind(&bound, &a).unwrap();
        assert_eq!(recovered, one);
    }

    #[test]
    fn test_bundle_idempotent_on_duplicates() {
        let vm = VectorManager::new(1024);
        let a = vm.get_vector("x");
        assert_eq!(Primitives::bundle(&[&a, &a]).unwrap(), a);
    }

    #[test]
    fn test_bundle_similar_to_components() {
        let vm = VectorManager::new(4096);
        let a = vm.get_vector("x");
        let b = vm.get_vector("y");
        let ab = Primitives::bundle(&[&a, &b]).unwrap();

        assert!(Similarity::cosine(&ab, &a) > 0.5);
        assert!(Similarity::cosine(&ab, &b) > 0.5);
    }

    #[test]
    fn test_bundle_errors() {
        assert!(matches!(
            Primitives::bundle(&[]),
            Err(ResonanceError::InvalidInput(_))
        ));

        let a = Vector::zeros(4);
        let b = Vector::zeros(8);
        assert!(matches!(
            Primitives::bundle(&[&a, &b]),
            Err(ResonanceError::DimensionMismatch { .. })
        ));
        assert!(Primitives::bind(&a, &b).is_err());
    }

    #[test]
    fn test_cleanup() {
        let vm = VectorManager::new(2048);
        let codebook: Vec<_> = ["One", "Two", "Three"]
            .iter()
            .map(|w| vm.get_vector(w))
            .collect();
        let noisy = Primitives::bundle(&[&codebook[1], &codebook[1], &vm.get_vector("noise")])
            .unwrap();

        let (idx, sim) = Primitives::cleanup(&noisy, &codebook).unwrap();
        assert_eq!(idx, 1);
        assert!(sim > 0.5);
        assert!(Primitives::cleanup(&noisy, &[]).is_none());
    }
}
