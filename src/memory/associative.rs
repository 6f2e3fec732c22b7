//! AssociativeMemory: integrates learned bindings and reads out traces.
//!
//! Presentation holds each category's `bind(position, value)` on the input
//! for `steps_per_binding` steps. Every step first scales the state by
//! `retention`, then adds the current binding, then records a snapshot:
//!
//! ```text
//! state[t+1] = retention * state[t] + bind(position, value)
//! ```
//!
//! A trace is the cosine similarity of a pointer against every snapshot, so
//! it rises while the matching binding is on the input and holds (or fades,
//! with retention < 1) afterwards.

use crate::accumulator::Accumulator;
use crate::category::{CategoryKey, CategorySet};
use crate::config::MemoryConfig;
use crate::error::Result;
use crate::figure::Trace;
use crate::memory::pointer::Pointer;
use crate::primitives::Primitives;
use crate::similarity::Similarity;
use crate::vector::Vector;
use crate::vector_manager::VectorManager;
use crate::vocabulary::Vocabulary;
use tracing::{debug, trace};

/// Time-integrating associative memory over position-value bindings.
pub struct AssociativeMemory {
    vectors: VectorManager,
    state: Accumulator,
    snapshots: Vec<Vec<f64>>,
    steps_per_binding: usize,
    retention: f64,
}

impl AssociativeMemory {
    pub fn new(vectors: VectorManager, config: &MemoryConfig) -> Self {
        let dimensions = vectors.dimensions();
        Self {
            vectors,
            state: Accumulator::new(dimensions),
            snapshots: Vec::new(),
            steps_per_binding: config.steps_per_binding,
            retention: config.retention,
        }
    }

    /// Present every category of `set`, in order.
    pub fn present(&mut self, set: &CategorySet) -> Result<()> {
        for category in set {
            let binding = Pointer::from_category(category).encode(&self.vectors)?;
            debug!(
                binding = %category,
                steps = self.steps_per_binding,
                "presenting binding"
            );
            for _ in 0..self.steps_per_binding {
                self.step(&binding)?;
            }
        }
        Ok(())
    }

    fn step(&mut self, input: &Vector) -> Result<()> {
        self.state.decay(self.retention);
        self.state.add(input)?;
        self.snapshots.push(self.state.raw_sums().to_vec());
        trace!(step = self.snapshots.len(), "memory step");
        Ok(())
    }

    /// Number of recorded steps.
    pub fn steps(&self) -> usize {
        self.snapshots.len()
    }

    pub fn vectors(&self) -> &VectorManager {
        &self.vectors
    }

    /// Activation of `pointer` at every recorded step.
    pub fn trace(&self, pointer: &Pointer) -> Result<Trace> {
        let probe = pointer.encode(&self.vectors)?;
        let values = self
            .snapshots
            .iter()
            .map(|state| Similarity::cosine_dense(&probe, state))
            .collect();
        Ok(Trace {
            label: pointer.to_string(),
            values,
        })
    }

    /// Cue the final state with a position and clean the result up against
    /// the vocabulary.
    ///
    /// Returns the best-matching value and its similarity, or `None` before
    /// anything has been presented.
    pub fn recall(&self, position: &str, vocabulary: &Vocabulary) -> Result<Option<(String, f64)>> {
        if self.snapshots.is_empty() {
            return Ok(None);
        }

        let cue = self
            .vectors
            .get_vector(&CategoryKey::Original(position.to_string()).atom());
        let retrieved = Primitives::unbind(&self.state.threshold(), &cue)?;

        let codebook: Vec<Vector> = vocabulary
            .iter()
            .map(|value| self.vectors.get_vector(&Pointer::value_atom(value)))
            .collect();

        Ok(Primitives::cleanup(&retrieved, &codebook).and_then(|(idx, sim)| {
            vocabulary
                .iter()
                .nth(idx)
                .map(|value| (value.to_string(), sim))
        }))
    }
}
