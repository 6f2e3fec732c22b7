//! Similarity between vectors and memory states.
//!
//! When compiled with the `simd` feature, vector-vector cosine and dot
//! products use `simsimd`.

use crate::vector::Vector;

/// Similarity computation.
pub struct Similarity;

impl Similarity {
    /// Cosine similarity: dot(a, b) / (||a|| * ||b||), in [-1, 1].
    ///
    /// Zero vectors and width mismatches score 0.
    #[cfg(feature = "simd")]
    pub fn cosine(a: &Vector, b: &Vector) -> f64 {
        use simsimd::SpatialSimilarity;
        if a.dimensions() != b.dimensions() {
            return 0.0;
        }
        let dot_ab = i8::dot(a.data(), b.data()).unwrap_or(0.0);
        let dot_aa = i8::dot(a.data(), a.data()).unwrap_or(0.0);
        let dot_bb = i8::dot(b.data(), b.data()).unwrap_or(0.0);

        let norm_product = (dot_aa * dot_bb).sqrt();
        if norm_product < 1e-10 {
            return 0.0;
        }
        dot_ab / norm_product
    }

    #[cfg(not(feature = "simd"))]
    pub fn cosine(a: &Vector, b: &Vector) -> f64 {
        if a.dimensions() != b.dimensions() {
            return 0.0;
        }
        let norm_product = a.norm() * b.norm();
        if norm_product < 1e-10 {
            return 0.0;
        }
        Self::dot(a, b) / norm_product
    }

    /// Raw dot product.
    #[cfg(feature = "simd")]
    pub fn dot(a: &Vector, b: &Vector) -> f64 {
        use simsimd::SpatialSimilarity;
        i8::dot(a.data(), b.data()).unwrap_or(0.0)
    }

    #[cfg(not(feature = "simd"))]
    pub fn dot(a: &Vector, b: &Vector) -> f64 {
        a.data()
            .iter()
            .zip(b.data())
            .map(|(&x, &y)| (x as i64) * (y as i64))
            .sum::<i64>() as f64
    }

    /// Cosine similarity of a bipolar pointer against a continuous state.
    ///
    /// This is how a memory trace is read out: the state keeps the raw,
    /// unthresholded sums, so repeated presentations weigh more.
    pub fn cosine_dense(pointer: &Vector, state: &[f64]) -> f64 {
        if pointer.dimensions() != state.len() {
            return 0.0;
        }
        let dot: f64 = pointer
            .data()
            .iter()
            .zip(state)
            .map(|(&p, &s)| p as f64 * s)
            .sum();
        let state_norm = state.iter().map(|s| s * s).sum::<f64>().sqrt();
        let norm_product = pointer.norm() * state_norm;
        if norm_product < 1e-10 {
            return 0.0;
        }
        dot / norm_product
    }
}
