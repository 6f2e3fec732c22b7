//! # Resonance: vigilance-gated category learning
//!
//! Resonance decides how a fixed set of learned categories absorbs new data.
//! Each category binds a position to a value from an ordered vocabulary.
//! When a new observation sequence arrives, every position is either merged
//! (the observation resonates with what was learned) or spawns a new category
//! (the observation is too far away), gated by a single vigilance threshold,
//! in the manner of Adaptive Resonance Theory.
//!
//! ## Quick Start
//!
//! ```rust
//! use resonance::{Resonance, ResonanceConfig};
//!
//! let resonance = Resonance::new(ResonanceConfig::default())?;
//! let baseline = resonance.create(&["A", "B", "C", "D"], &["One", "Two", "Three", "Four"])?;
//!
//! // Classification only
//! let result = resonance.reconcile(&baseline, &["One", "Three", "Four", "One"])?;
//! assert_eq!(result.labels().last().map(String::as_str), Some("NewCat3 * One"));
//!
//! // Classification plus the traces of the three views
//! let run = resonance.run(&baseline, &["One", "Three", "Four", "One"])?;
//! assert_eq!(run.figure.panels.len(), 3);
//! # Ok::<(), resonance::ResonanceError>(())
//! ```
//!
//! ## Core Concepts
//!
//! - **Rank**: index of a value in the ordered vocabulary; the only numeric
//!   handle on similarity
//! - **Vigilance**: rank distance at or above which an observation is novel
//! - **Merge**: both bindings kept side by side (`A * One + A * Two`)
//! - **Novelty**: the learned category is kept as it was and a new one
//!   (`NewCat3 * One`) is spawned
//! - **Memory**: a hyperdimensional store that turns bindings into traces

pub mod accumulator;
pub mod category;
pub mod classifier;
pub mod config;
pub mod error;
pub mod figure;
pub mod memory;
pub mod primitives;
pub mod similarity;
pub mod vector;
pub mod vector_manager;
pub mod vocabulary;

// Re-exports for convenience
pub use accumulator::Accumulator;
pub use category::{Category, CategoryKey, CategorySet, Origin};
pub use classifier::{
    reconcile, Binding, Decision, ReconciliationResult, Verdict, VigilanceClassifier,
};
pub use config::{MemoryConfig, ResonanceConfig};
pub use error::{ResonanceError, Result};
pub use figure::{Figure, Panel, Trace};
pub use memory::{AssociativeMemory, Pointer};
pub use primitives::Primitives;
pub use similarity::Similarity;
pub use vector::Vector;
pub use vector_manager::VectorManager;
pub use vocabulary::Vocabulary;

/// Output of [`Resonance::run`].
#[derive(Clone, Debug)]
pub struct Run {
    pub result: ReconciliationResult,
    pub figure: Figure,
}

/// The main entry point: one configured classifier plus its memory engine.
///
/// Replaces per-scenario scripts with a single call parameterized by the
/// incoming sequence and the vigilance in [`ResonanceConfig`].
pub struct Resonance {
    config: ResonanceConfig,
    classifier: VigilanceClassifier,
    vectors: VectorManager,
}

impl Resonance {
    /// Validate `config` and build the classifier and vector manager.
    pub fn new(config: ResonanceConfig) -> Result<Self> {
        config.validate()?;
        let classifier = VigilanceClassifier::new(config.vocabulary.clone(), config.vigilance)?;
        let vectors = VectorManager::with_seed(config.dimensions, config.seed);
        Ok(Self {
            config,
            classifier,
            vectors,
        })
    }

    /// Get the validated configuration.
    pub fn config(&self) -> &ResonanceConfig {
        &self.config
    }

    /// Get the value vocabulary.
    pub fn vocabulary(&self) -> &Vocabulary {
        self.classifier.vocabulary()
    }

    // =========================================================================
    // Category Store
    // =========================================================================

    /// Build a category set, checking every value against the vocabulary.
    pub fn create<P, V>(&self, positions: &[P], values: &[V]) -> Result<CategorySet>
    where
        P: AsRef<str>,
        V: AsRef<str>,
    {
        let set = CategorySet::create(positions, values)?;
        for category in &set {
            self.rank(&category.value)?;
        }
        Ok(set)
    }

    /// 0-based rank of `value` in the vocabulary.
    pub fn rank(&self, value: &str) -> Result<usize> {
        self.vocabulary().rank(value)
    }

    // =========================================================================
    // Classification
    // =========================================================================

    /// Reconcile `incoming` against `baseline` under the configured vigilance.
    pub fn reconcile<S: AsRef<str>>(
        &self,
        baseline: &CategorySet,
        incoming: &[S],
    ) -> Result<ReconciliationResult> {
        self.classifier.reconcile(baseline, incoming)
    }

    // =========================================================================
    // Memory
    // =========================================================================

    /// A memory that has been presented `baseline`.
    pub fn memory_for(&self, baseline: &CategorySet) -> Result<AssociativeMemory> {
        let mut memory = AssociativeMemory::new(self.vectors.clone(), &self.config.memory);
        memory.present(baseline)?;
        Ok(memory)
    }

    /// Reconcile, then read the three views out of the baseline's memory.
    pub fn run<S: AsRef<str>>(&self, baseline: &CategorySet, incoming: &[S]) -> Result<Run> {
        let result = self.reconcile(baseline, incoming)?;
        let memory = self.memory_for(baseline)?;
        let figure = Figure::render(&memory, baseline, incoming, &result)?;
        Ok(Run { result, figure })
    }
}

impl Default for Resonance {
    fn default() -> Self {
        let config = ResonanceConfig::default();
        Self {
            classifier: VigilanceClassifier::default(),
            vectors: VectorManager::with_seed(config.dimensions, config.seed),
            config,
        }
    }
}
