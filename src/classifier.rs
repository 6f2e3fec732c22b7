//! Vigilance Classifier: merge-or-spawn decisions per position.
//!
//! For every position the classifier compares the rank of the learned value
//! with the rank of the incoming observation:
//!
//! - `distance < vigilance` → **resonance**: both bindings are kept side by
//!   side as one [`Binding::Combined`] entry.
//! - `distance >= vigilance` → **novelty**: the learned category is kept
//!   exactly as it was and a new category holding the observation is spawned.
//!
//! A distance equal to the vigilance counts as novel.
//!
//! # Example
//!
//! ```rust
//! use resonance::{reconcile, CategorySet};
//!
//! let baseline = CategorySet::create(&["A", "B", "C", "D"], &["One", "Two", "Three", "Four"])?;
//! let result = reconcile(&baseline, &["One", "Three", "Four", "One"], 3.0)?;
//!
//! assert_eq!(result.novel.len(), 1);
//! assert_eq!(result.novel[0].to_string(), "NewCat3 * One");
//! # Ok::<(), resonance::ResonanceError>(())
//! ```

use crate::category::{Category, CategorySet};
use crate::error::{ResonanceError, Result};
use crate::vocabulary::Vocabulary;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, info};

/// One entry of the merged output.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Binding {
    /// The learned category, untouched (novelty case).
    Single(Category),
    /// Learned and incoming values bound to the same position (merge case).
    ///
    /// Both values are kept even when they are equal; an identical pair is
    /// the reinforcement case, a differing pair the blending case.
    Combined {
        position: String,
        original: String,
        incoming: String,
    },
}

impl Binding {
    /// Get the position this entry belongs to.
    pub fn position(&self) -> &str {
        match self {
            Binding::Single(category) => category.position(),
            Binding::Combined { position, .. } => position,
        }
    }

    /// Whether this entry is a merge.
    pub fn is_combined(&self) -> bool {
        matches!(self, Binding::Combined { .. })
    }

    /// Whether a combined entry binds the same value twice.
    pub fn is_reinforcement(&self) -> bool {
        matches!(self, Binding::Combined { original, incoming, .. } if original == incoming)
    }
}

impl fmt::Display for Binding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Binding::Single(category) => write!(f, "{category}"),
            Binding::Combined {
                position,
                original,
                incoming,
            } => write!(f, "{position} * {original} + {position} * {incoming}"),
        }
    }
}

/// Outcome of the novelty test at one position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    Merged,
    Novel,
}

/// Decision record for one position.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decision {
    pub position: String,
    pub distance: usize,
    pub verdict: Verdict,
}

/// Output of [`VigilanceClassifier::reconcile`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReconciliationResult {
    /// One entry per baseline position, in baseline order.
    pub merged: Vec<Binding>,
    /// Categories spawned by novelty events, in position order.
    pub novel: Vec<Category>,
    /// Per-position distance and verdict, in baseline order.
    pub decisions: Vec<Decision>,
}

impl ReconciliationResult {
    /// Positions that triggered novelty.
    pub fn novel_positions(&self) -> impl Iterator<Item = &str> {
        self.novel.iter().map(Category::position)
    }

    /// The merged entry for `position`.
    pub fn merged_at(&self, position: &str) -> Result<&Binding> {
        self.merged
            .iter()
            .find(|b| b.position() == position)
            .ok_or_else(|| ResonanceError::PositionNotFound(position.to_string()))
    }

    /// Novel categories spawned from `position`.
    pub fn spawned_from<'a>(&'a self, position: &'a str) -> impl Iterator<Item = &'a Category> {
        self.novel.iter().filter(move |c| c.position() == position)
    }

    /// Whether any position spawned a new category.
    pub fn has_novelty(&self) -> bool {
        !self.novel.is_empty()
    }

    /// Final view labels: each merged entry, followed directly by the
    /// category it spawned (if any).
    pub fn labels(&self) -> Vec<String> {
        let mut labels = Vec::with_capacity(self.merged.len() + self.novel.len());
        for binding in &self.merged {
            labels.push(binding.to_string());
            labels.extend(self.spawned_from(binding.position()).map(ToString::to_string));
        }
        labels
    }
}

/// Vigilance used when none is configured.
pub const DEFAULT_VIGILANCE: f64 = 3.0;

/// ART-style classifier gated by a single vigilance threshold.
#[derive(Clone, Debug)]
pub struct VigilanceClassifier {
    vocabulary: Vocabulary,
    vigilance: f64,
}

impl VigilanceClassifier {
    /// Create a classifier. Vigilance must be finite and non-negative.
    pub fn new(vocabulary: Vocabulary, vigilance: f64) -> Result<Self> {
        if !vigilance.is_finite() || vigilance < 0.0 {
            return Err(ResonanceError::InvalidInput(format!(
                "vigilance must be a non-negative number, got {vigilance}"
            )));
        }
        Ok(Self {
            vocabulary,
            vigilance,
        })
    }

    /// Get the vocabulary ranks are taken from.
    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// Get the vigilance threshold.
    pub fn vigilance(&self) -> f64 {
        self.vigilance
    }

    /// Whether a rank distance is far enough to spawn a new category.
    pub fn is_novel(&self, distance: usize) -> bool {
        distance as f64 >= self.vigilance
    }

    /// Reconcile `incoming` against `baseline`.
    ///
    /// Every value is validated before any output is produced.
    pub fn reconcile<S: AsRef<str>>(
        &self,
        baseline: &CategorySet,
        incoming: &[S],
    ) -> Result<ReconciliationResult> {
        if incoming.len() != baseline.len() {
            return Err(ResonanceError::LengthMismatch {
                expected: baseline.len(),
                got: incoming.len(),
            });
        }

        let distances = baseline
            .iter()
            .zip(incoming)
            .map(|(category, observed)| {
                self.vocabulary
                    .distance(&category.value, observed.as_ref())
            })
            .collect::<Result<Vec<_>>>()?;

        let mut merged = Vec::with_capacity(baseline.len());
        let mut novel = Vec::new();
        let mut decisions = Vec::with_capacity(baseline.len());

        for (index, ((category, observed), distance)) in
            baseline.iter().zip(incoming).zip(distances).enumerate()
        {
            let observed: &str = observed.as_ref();
            let verdict = if self.is_novel(distance) {
                merged.push(Binding::Single(category.clone()));
                novel.push(Category::novel(category.position(), index, observed));
                Verdict::Novel
            } else {
                merged.push(Binding::Combined {
                    position: category.position().to_string(),
                    original: category.value.clone(),
                    incoming: observed.to_string(),
                });
                Verdict::Merged
            };

            debug!(
                position = category.position(),
                learned = %category.value,
                observed,
                distance,
                ?verdict,
                "novelty test"
            );
            decisions.push(Decision {
                position: category.position().to_string(),
                distance,
                verdict,
            });
        }

        info!(
            positions = merged.len(),
            novel = novel.len(),
            vigilance = self.vigilance,
            "reconciled observation sequence"
        );

        Ok(ReconciliationResult {
            merged,
            novel,
            decisions,
        })
    }
}

impl Default for VigilanceClassifier {
    fn default() -> Self {
        Self {
            vocabulary: Vocabulary::ordinal(),
            vigilance: DEFAULT_VIGILANCE,
        }
    }
}

/// Reconcile against the ordinal `One..Four` vocabulary.
pub fn reconcile<S: AsRef<str>>(
    baseline: &CategorySet,
    incoming: &[S],
    vigilance: f64,
) -> Result<ReconciliationResult> {
    VigilanceClassifier::new(Vocabulary::ordinal(), vigilance)?.reconcile(baseline, incoming)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn baseline() -> CategorySet {
        CategorySet::create(&["A", "B", "C", "D"], &["One", "Two", "Three", "Four"]).unwrap()
    }

    #[test]
    fn test_merge_keeps_both_values() {
        let result = reconcile(&baseline(), &["One", "Four", "Four", "Two"], 3.0).unwrap();

        assert!(result.novel.is_empty());
        assert!(result.merged.iter().all(Binding::is_combined));
        assert_eq!(
            result.labels(),
            vec![
                "A * One + A * One",
                "B * Two + B * Four",
                "C * Three + C * Four",
                "D * Four + D * Two",
            ]
        );
    }

    #[test]
    fn test_novelty_preserves_original() {
        let result = reconcile(&baseline(), &["One", "Three", "Four", "One"], 3.0).unwrap();

        assert_eq!(
            result.merged_at("D").unwrap(),
            &Binding::Single(Category::original("D", "Four"))
        );
        assert_eq!(result.novel, vec![Category::novel("D", 3, "One")]);
        assert_eq!(result.novel_positions().collect::<Vec<_>>(), vec!["D"]);
        assert_eq!(
            result.labels(),
            vec![
                "A * One + A * One",
                "B * Two + B * Three",
                "C * Three + C * Four",
                "D * Four",
                "NewCat3 * One",
            ]
        );
    }

    #[test]
    fn test_boundary_is_novel() {
        let set = CategorySet::create(&["A"], &["One"]).unwrap();

        let at = reconcile(&set, &["Four"], 3.0).unwrap();
        assert_eq!(at.decisions[0].distance, 3);
        assert_eq!(at.decisions[0].verdict, Verdict::Novel);

        let above = reconcile(&set, &["Four"], 4.0).unwrap();
        assert_eq!(above.decisions[0].verdict, Verdict::Merged);
        assert!(above.novel.is_empty());
    }

    #[test]
    fn test_zero_vigilance_spawns_everywhere() {
        let result = reconcile(&baseline(), &["One", "Two", "Three", "Four"], 0.0).unwrap();
        assert_eq!(result.novel.len(), 4);
        assert!(result.merged.iter().all(|b| !b.is_combined()));
    }

    #[test]
    fn test_reinforcement_vs_blending() {
        let result = reconcile(&baseline(), &["One", "Four", "Four", "Two"], 3.0).unwrap();
        assert!(result.merged[0].is_reinforcement());
        assert!(!result.merged[1].is_reinforcement());
    }

    #[test]
    fn test_length_mismatch() {
        let err = reconcile(&baseline(), &["One", "Two", "Three"], 3.0).unwrap_err();
        assert!(matches!(
            err,
            ResonanceError::LengthMismatch {
                expected: 4,
                got: 3
            }
        ));
    }

    #[test]
    fn test_unknown_values_rejected() {
        let err = reconcile(&baseline(), &["One", "Two", "Three", "Five"], 3.0).unwrap_err();
        assert!(matches!(err, ResonanceError::UnknownValue(v) if v == "Five"));

        let odd = CategorySet::create(&["A"], &["Zero"]).unwrap();
        let err = reconcile(&odd, &["One"], 3.0).unwrap_err();
        assert!(matches!(err, ResonanceError::UnknownValue(v) if v == "Zero"));
    }

    #[test]
    fn test_invalid_vigilance() {
        assert!(VigilanceClassifier::new(Vocabulary::ordinal(), -1.0).is_err());
        assert!(VigilanceClassifier::new(Vocabulary::ordinal(), f64::NAN).is_err());
    }

    #[test]
    fn test_fractional_vigilance() {
        let classifier = VigilanceClassifier::new(Vocabulary::ordinal(), 1.5).unwrap();
        assert!(!classifier.is_novel(1));
        assert!(classifier.is_novel(2));
    }
}
