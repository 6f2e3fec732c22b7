//! Figure: the three labeled views handed to a plotting backend.
//!
//! 1. **Original mapping**: every learned category.
//! 2. **Trained sequence**: each raw observation paired with its position.
//! 3. **Final mapping**: merged entries, each followed by the category it
//!    spawned (if any).
//!
//! Drawing is left to the consumer; [`Figure::to_json`] gives it the data.

use crate::category::CategorySet;
use crate::classifier::ReconciliationResult;
use crate::error::{ResonanceError, Result};
use crate::memory::{AssociativeMemory, Pointer};
use serde::{Deserialize, Serialize};

pub const ORIGINAL_MAPPING: &str = "Original mapping";
pub const TRAINED_SEQUENCE: &str = "Trained sequence";
pub const FINAL_MAPPING: &str = "Final mapping";

/// Activation of one labeled pointer over time.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Trace {
    pub label: String,
    pub values: Vec<f64>,
}

impl Trace {
    /// Final value, or 0 for an empty trace.
    pub fn last(&self) -> f64 {
        self.values.last().copied().unwrap_or(0.0)
    }

    /// Largest value, or 0 for an empty trace.
    pub fn peak(&self) -> f64 {
        self.values.iter().copied().fold(0.0, f64::max)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Panel {
    pub title: String,
    pub series: Vec<Trace>,
}

impl Panel {
    /// Trace labels in plotting order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.series.iter().map(|t| t.label.as_str())
    }

    /// The trace labeled `label`, if present.
    pub fn get(&self, label: &str) -> Option<&Trace> {
        self.series.iter().find(|t| t.label == label)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Figure {
    pub panels: Vec<Panel>,
}

impl Figure {
    /// Read the three views out of a memory the baseline was presented to.
    ///
    /// `incoming` is the sequence `result` was reconciled from; it must have
    /// one value per baseline position.
    pub fn render<S: AsRef<str>>(
        memory: &AssociativeMemory,
        baseline: &CategorySet,
        incoming: &[S],
        result: &ReconciliationResult,
    ) -> Result<Self> {
        if incoming.len() != baseline.len() {
            return Err(ResonanceError::LengthMismatch {
                expected: baseline.len(),
                got: incoming.len(),
            });
        }

        let original = Self::panel(
            memory,
            ORIGINAL_MAPPING,
            baseline.iter().map(Pointer::from_category),
        )?;

        let trained = Self::panel(
            memory,
            TRAINED_SEQUENCE,
            baseline
                .positions()
                .zip(incoming)
                .map(|(position, value)| Pointer::observation(position, value.as_ref())),
        )?;

        let final_pointers = result.merged.iter().flat_map(|binding| {
            std::iter::once(Pointer::from_binding(binding)).chain(
                result
                    .spawned_from(binding.position())
                    .map(Pointer::from_category),
            )
        });
        let fin = Self::panel(memory, FINAL_MAPPING, final_pointers)?;

        Ok(Self {
            panels: vec![original, trained, fin],
        })
    }

    fn panel(
        memory: &AssociativeMemory,
        title: &str,
        pointers: impl Iterator<Item = Pointer>,
    ) -> Result<Panel> {
        let series = pointers
            .map(|pointer| memory.trace(&pointer))
            .collect::<Result<Vec<_>>>()?;
        Ok(Panel {
            title: title.to_string(),
            series,
        })
    }

    /// The panel with `title`, if present.
    pub fn panel_titled(&self, title: &str) -> Option<&Panel> {
        self.panels.iter().find(|p| p.title == title)
    }

    /// Serialize for an external plotting backend.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Parse a figure produced by [`Figure::to_json`].
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
