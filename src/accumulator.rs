//! Accumulator: frequency-preserving integration of bindings.
//!
//! The memory integrates whatever binding is currently presented, one step
//! at a time. Unlike bundling, accumulation keeps frequency: a binding held
//! for 25 steps contributes 25 times what a single step does.
//!
//! - `bundle([a, a, a])` = `a` (idempotent)
//! - `add(a)` three times keeps the fact that `a` was seen three times

use crate::error::Result;
use crate::vector::{sign, Vector};

/// Running, unthresholded sum of vectors.
#[derive(Clone, Debug)]
pub struct Accumulator {
    sums: Vec<f64>,
    count: usize,
}

impl Accumulator {
    pub fn new(dimensions: usize) -> Self {
        Self {
            sums: vec![0.0; dimensions],
            count: 0,
        }
    }

    pub fn dimensions(&self) -> usize {
        self.sums.len()
    }

    /// Number of vectors added so far.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Add a vector without thresholding.
    pub fn add(&mut self, example: &Vector) -> Result<()> {
        example.check_dimensions(self.dimensions())?;
        for (sum, &v) in self.sums.iter_mut().zip(example.data()) {
            *sum += v as f64;
        }
        self.count += 1;
        Ok(())
    }

    /// Scale every sum by `factor`. Used for per-step retention.
    pub fn decay(&mut self, factor: f64) {
        for v in &mut self.sums {
            *v *= factor;
        }
    }

    /// Raw sums.
    pub fn raw_sums(&self) -> &[f64] {
        &self.sums
    }

    /// Threshold to bipolar {-1, 0, 1}. Loses frequency information.
    pub fn threshold(&self) -> Vector {
        Vector::from_data(self.sums.iter().map(|&v| sign(v)).collect())
    }
}
