//! Vector type for the associative memory.
//!
//! Bipolar vectors with elements in {-1, 0, 1}, stored as i8. Zeros appear
//! where a bundle's votes tie.

use crate::error::{ResonanceError, Result};

/// A high-dimensional bipolar vector.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Vector {
    data: Vec<i8>,
}

impl Vector {
    /// Create a new zero vector of given dimensionality.
    pub fn zeros(dimensions: usize) -> Self {
        Self {
            data: vec![0; dimensions],
        }
    }

    /// Create a vector from raw data.
    pub fn from_data(data: Vec<i8>) -> Self {
        Self { data }
    }

    /// Sign-threshold real values: positive → 1, negative → -1, zero → 0.
    pub fn from_signs(values: &[f64]) -> Self {
        Self {
            data: values.iter().map(|&v| sign(v)).collect(),
        }
    }

    pub fn dimensions(&self) -> usize {
        self.data.len()
    }

    pub fn data(&self) -> &[i8] {
        &self.data
    }

    /// L2 norm.
    pub fn norm(&self) -> f64 {
        let sum_sq: i64 = self.data.iter().map(|&v| (v as i64) * (v as i64)).sum();
        (sum_sq as f64).sqrt()
    }

    /// Count non-zero elements.
    pub fn nnz(&self) -> usize {
        self.data.iter().filter(|&&v| v != 0).count()
    }

    /// Fail unless `other` has the same width.
    pub fn check_dimensions(&self, other: usize) -> Result<()> {
        if self.dimensions() != other {
            return Err(ResonanceError::DimensionMismatch {
                expected: self.dimensions(),
                got: other,
            });
        }
        Ok(())
    }
}

pub(crate) fn sign(v: f64) -> i8 {
    if v > 0.0 {
        1
    } else if v < 0.0 {
        -1
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zeros() {
        let v = Vector::zeros(100);
        assert_eq!(v.dimensions(), 100);
        assert_eq!(v.nnz(), 0);
    }

    #[test]
    fn test_from_signs() {
        let v = Vector::from_signs(&[3.0, -0.5, 0.0, 2.3, -10.0]);
        assert_eq!(v.data(), &[1, -1, 0, 1, -1]);
        assert_eq!(v.nnz(), 4);
    }

    #[test]
    fn test_norm() {
        let v = Vector::from_data(vec![1, -1, 0, -1]);
        assert!((v.norm() - 3f64.sqrt()).abs() < 1e-10);
    }

    #[test]
    fn test_check_dimensions() {
        let v = Vector::zeros(8);
        assert!(v.check_dimensions(8).is_ok());
        assert!(matches!(
            v.check_dimensions(4),
            Err(ResonanceError::DimensionMismatch {
                expected: 8,
                got: 4
            })
        ));
    }
}
