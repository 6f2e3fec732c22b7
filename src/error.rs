//! Error types for Resonance.

use thiserror::Error;

/// Resonance error types.
#[derive(Error, Debug)]
pub enum ResonanceError {
    /// Malformed construction arguments
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Value outside the fixed vocabulary
    #[error("Unknown value: {0:?} is not in the vocabulary")]
    UnknownValue(String),

    /// Lookup of a position the category set does not hold
    #[error("Position not found: {0}")]
    PositionNotFound(String),

    /// Observation sequence length disagrees with the category count
    #[error("Length mismatch: expected {expected} observations, got {got}")]
    LengthMismatch { expected: usize, got: usize },

    /// Vectors of different widths combined in the memory engine
    #[error("Dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch { expected: usize, got: usize },

    /// JSON configuration or figure (de)serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for Resonance operations.
pub type Result<T> = std::result::Result<T, ResonanceError>;
