//! Memory layer: the engine that turns category sets into activation traces.
//!
//! - [`Pointer`]: an explicit sum of `position * value` products, built from
//!   a category, a merged binding, or a raw observation. Its `Display` form is
//!   the human-readable label (`"A * One + A * Two"`).
//!
//! - [`AssociativeMemory`]: presents each learned binding for a fixed number
//!   of steps, integrating them into one continuous state, and reads out how
//!   strongly any pointer resonates with that state at every step.
//!
//! # Usage
//!
//! ```rust
//! use resonance::memory::{AssociativeMemory, Pointer};
//! use resonance::{CategorySet, MemoryConfig, VectorManager};
//!
//! let baseline = CategorySet::create(&["A", "B"], &["One", "Two"])?;
//! let mut memory = AssociativeMemory::new(VectorManager::new(2048), &MemoryConfig::default());
//! memory.present(&baseline)?;
//!
//! let learned = memory.trace(&Pointer::observation("A", "One"))?;
//! let unseen = memory.trace(&Pointer::observation("A", "Two"))?;
//! assert!(learned.last() > unseen.last());
//! # Ok::<(), resonance::ResonanceError>(())
//! ```

pub mod associative;
pub mod pointer;

pub use associative::AssociativeMemory;
pub use pointer::{Pointer, Term};
