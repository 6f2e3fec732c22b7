//! Run configuration.
//!
//! All parameters have defaults matching the classic setup: the
//! `One..Four` vocabulary, vigilance 3, and every binding presented for 25
//! steps. A JSON document only needs to name what it overrides:
//!
//! ```rust
//! use resonance::ResonanceConfig;
//!
//! let config = ResonanceConfig::from_json(r#"{"vigilance": 4}"#)?;
//! assert_eq!(config.vigilance, 4.0);
//! assert_eq!(config.memory.steps_per_binding, 25);
//! # Ok::<(), resonance::ResonanceError>(())
//! ```

use crate::classifier::DEFAULT_VIGILANCE;
use crate::error::{ResonanceError, Result};
use crate::vocabulary::Vocabulary;
use serde::{Deserialize, Serialize};

/// Presentation schedule of the associative memory.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MemoryConfig {
    /// Steps each learned binding is held on the input.
    pub steps_per_binding: usize,
    /// Fraction of the state kept from one step to the next, in (0, 1].
    pub retention: f64,
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            steps_per_binding: 25,
            retention: 1.0,
        }
    }
}

impl MemoryConfig {
    pub fn validate(&self) -> Result<()> {
        if self.steps_per_binding == 0 {
            return Err(ResonanceError::InvalidInput(
                "memory.steps_per_binding must be at least 1".into(),
            ));
        }
        if !(self.retention > 0.0 && self.retention <= 1.0) {
            return Err(ResonanceError::InvalidInput(format!(
                "memory.retention must be in (0, 1], got {}",
                self.retention
            )));
        }
        Ok(())
    }
}

/// Configuration of one classification run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResonanceConfig {
    /// Rank distance at or above which an observation spawns a new category.
    pub vigilance: f64,
    /// Vector dimensionality of the memory engine.
    pub dimensions: usize,
    /// Global seed for atom vectors.
    pub seed: u64,
    pub vocabulary: Vocabulary,
    pub memory: MemoryConfig,
}

impl Default for ResonanceConfig {
    fn default() -> Self {
        Self {
            vigilance: DEFAULT_VIGILANCE,
            dimensions: 4096,
            seed: 0,
            vocabulary: Vocabulary::ordinal(),
            memory: MemoryConfig::default(),
        }
    }
}

impl ResonanceConfig {
    /// Parse and validate a JSON document.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn with_vigilance(mut self, vigilance: f64) -> Self {
        self.vigilance = vigilance;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if !self.vigilance.is_finite() || self.vigilance < 0.0 {
            return Err(ResonanceError::InvalidInput(format!(
                "vigilance must be a non-negative number, got {}",
                self.vigilance
            )));
        }
        if self.dimensions == 0 {
            return Err(ResonanceError::InvalidInput(
                "dimensions must be at least 1".into(),
            ));
        }
        self.memory.validate()
    }
}
