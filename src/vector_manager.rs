//! Vector Manager: deterministic atom → vector mapping.
//!
//! Every position and every vocabulary value is an atom. The same atom under
//! the same seed always yields the same vector, on any machine, so traces are
//! reproducible run to run.

use crate::vector::Vector;
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use sha2::{Digest, Sha256};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

/// Maps atoms (strings) to random bipolar vectors, with a shared cache.
#[derive(Clone)]
pub struct VectorManager {
    dimensions: usize,
    global_seed: u64,
    cache: Arc<RwLock<HashMap<String, Vector>>>,
}

impl VectorManager {
    pub fn new(dimensions: usize) -> Self {
        Self::with_seed(dimensions, 0)
    }

    pub fn with_seed(dimensions: usize, global_seed: u64) -> Self {
        Self {
            dimensions,
            global_seed,
            cache: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    pub fn dimensions(&self) -> usize {
        self.dimensions
    }

    /// Vector for `atom`, computed once and cached.
    pub fn get_vector(&self, atom: &str) -> Vector {
        {
            let cache = self.cache.read().unwrap_or_else(|e| e.into_inner());
            if let Some(vec) = cache.get(atom) {
                return vec.clone();
            }
        }

        let vec = self.compute_vector(atom);
        self.cache
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .insert(atom.to_string(), vec.clone());
        vec
    }

    /// SHA-256 of (global_seed || atom) seeds a ChaCha8 stream; one draw per
    /// dimension picks the sign.
    fn compute_vector(&self, atom: &str) -> Vector {
        let mut hasher = Sha256::new();
        hasher.update(self.global_seed.to_le_bytes());
        hasher.update(atom.as_bytes());
        let hash = hasher.finalize();

        let mut seed = [0u8; 8];
        seed.copy_from_slice(&hash[..8]);
        let mut rng = ChaCha8Rng::seed_from_u64(u64::from_le_bytes(seed));

        let data = (0..self.dimensions)
            .map(|_| if rng.next_u32() & 1 == 0 { 1 } else { -1 })
            .collect();
        Vector::from_data(data)
    }

    /// Number of cached atoms.
    pub fn cache_size(&self) -> usize {
        self.cache.read().unwrap_or_else(|e| e.into_inner()).len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deterministic() {
        let vm1 = VectorManager::with_seed(1000, 42);
        let vm2 = VectorManager::with_seed(1000, 42);
        assert_eq!(vm1.get_vector("value:One"), vm2.get_vector("value:One"));
    }

    #[test]
    fn test_different_seeds() {
        let vm1 = VectorManager::with_seed(1000, 42);
        let vm2 = VectorManager::with_seed(1000, 43);
        assert_ne!(vm1.get_vector("position:A"), vm2.get_vector("position:A"));
    }

    #[test]
    fn test_fully_bipolar() {
        let vm = VectorManager::new(512);
        let v = vm.get_vector("position:B");
        assert_eq!(v.dimensions(), 512);
        assert_eq!(v.nnz(), 512);
    }

    #[test]
    fn test_caching_shared_between_clones() {
        let vm = VectorManager::new(64);
        let clone = vm.clone();

        vm.get_vector("position:A");
        assert_eq!(clone.cache_size(), 1);

        clone.get_vector("position:A");
        assert_eq!(vm.cache_size(), 1);

        clone.get_vector("value:Two");
        assert_eq!(vm.cache_size(), 2);
    }
}
