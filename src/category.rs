//! Category Store: labeled (position, value) associations.
//!
//! A [`CategorySet`] is built once from two literal arrays and never changes
//! afterwards. Reconciliation produces new collections instead of editing a
//! set in place, so the "before merge" state of every category survives.

use crate::error::{ResonanceError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Label prefix for categories spawned by a novelty event.
pub const NOVEL_TAG: &str = "NewCat";

/// Identifier of a category.
///
/// Synthetic keys are a separate variant, so they can never collide with a
/// position supplied by the caller, whatever that position is called.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CategoryKey {
    /// A position from the configured range.
    Original(String),
    /// A category spawned from `base` when the observation at index
    /// `sequence` was judged novel.
    Synthetic { base: String, sequence: usize },
}

impl CategoryKey {
    /// The position this key is anchored to.
    pub fn position(&self) -> &str {
        match self {
            CategoryKey::Original(position) => position,
            CategoryKey::Synthetic { base, .. } => base,
        }
    }

    /// Whether this key was spawned by a novelty event.
    pub fn is_synthetic(&self) -> bool {
        matches!(self, CategoryKey::Synthetic { .. })
    }

    /// Atom name used to draw this key's vector in the memory engine.
    pub(crate) fn atom(&self) -> String {
        match self {
            CategoryKey::Original(position) => format!("position:{position}"),
            CategoryKey::Synthetic { base, sequence } => format!("novel:{base}#{sequence}"),
        }
    }
}

impl fmt::Display for CategoryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryKey::Original(position) => write!(f, "{position}"),
            CategoryKey::Synthetic { sequence, .. } => write!(f, "{NOVEL_TAG}{sequence}"),
        }
    }
}

/// Where a category came from. Only used for labeling.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Origin {
    Original,
    New,
}

/// A single learned association.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub key: CategoryKey,
    pub value: String,
    pub origin: Origin,
}

impl Category {
    /// A learned category at `position`.
    pub fn original(position: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: CategoryKey::Original(position.into()),
            value: value.into(),
            origin: Origin::Original,
        }
    }

    /// A category spawned from `base` by the observation at `sequence`.
    pub fn novel(base: impl Into<String>, sequence: usize, value: impl Into<String>) -> Self {
        Self {
            key: CategoryKey::Synthetic {
                base: base.into(),
                sequence,
            },
            value: value.into(),
            origin: Origin::New,
        }
    }

    /// Get the position this category is anchored to.
    pub fn position(&self) -> &str {
        self.key.position()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} * {}", self.key, self.value)
    }
}

/// Ordered set of categories, exactly one per position.
///
/// Serializes as a plain list of categories; deserialization goes through
/// the same checks as [`CategorySet::from_categories`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Category>", into = "Vec<Category>")]
pub struct CategorySet {
    categories: Vec<Category>,
}

impl CategorySet {
    /// Pair `positions[i]` with `values[i]`.
    ///
    /// # Example
    /// ```rust
    /// use resonance::CategorySet;
    ///
    /// let set = CategorySet::create(&["A", "B"], &["One", "Two"])?;
    /// assert_eq!(set.lookup("B")?.value, "Two");
    /// # Ok::<(), resonance::ResonanceError>(())
    /// ```
    pub fn create<P, V>(positions: &[P], values: &[V]) -> Result<Self>
    where
        P: AsRef<str>,
        V: AsRef<str>,
    {
        if positions.is_empty() || values.is_empty() {
            return Err(ResonanceError::InvalidInput(
                "positions and values must be non-empty".into(),
            ));
        }
        if positions.len() != values.len() {
            return Err(ResonanceError::InvalidInput(format!(
                "{} positions but {} values",
                positions.len(),
                values.len()
            )));
        }

        Self::from_categories(
            positions
                .iter()
                .zip(values)
                .map(|(position, value)| Category::original(position.as_ref(), value.as_ref()))
                .collect(),
        )
    }

    /// Build a set from learned categories.
    ///
    /// Fails with `InvalidInput` on an empty list, a repeated position, or
    /// a category that was not learned at an original position.
    pub fn from_categories(categories: Vec<Category>) -> Result<Self> {
        if categories.is_empty() {
            return Err(ResonanceError::InvalidInput(
                "a category set needs at least one category".into(),
            ));
        }
        for (i, category) in categories.iter().enumerate() {
            if category.key.is_synthetic() || category.origin != Origin::Original {
                return Err(ResonanceError::InvalidInput(format!(
                    "{category} is not an original category"
                )));
            }
            if categories[..i].iter().any(|c| c.position() == category.position()) {
                return Err(ResonanceError::InvalidInput(format!(
                    "position {:?} listed twice",
                    category.position()
                )));
            }
        }
        Ok(Self { categories })
    }

    /// The category at `position`.
    pub fn lookup(&self, position: &str) -> Result<&Category> {
        self.categories
            .iter()
            .find(|c| c.position() == position)
            .ok_or_else(|| ResonanceError::PositionNotFound(position.to_string()))
    }

    /// Positions in order.
    pub fn positions(&self) -> impl Iterator<Item = &str> {
        self.categories.iter().map(Category::position)
    }

    /// Iterate categories in position order.
    pub fn iter(&self) -> std::slice::Iter<'_, Category> {
        self.categories.iter()
    }

    /// Get the number of positions.
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

impl TryFrom<Vec<Category>> for CategorySet {
    type Error = ResonanceError;

    fn try_from(categories: Vec<Category>) -> Result<Self> {
        Self::from_categories(categories)
    }
}

impl From<CategorySet> for Vec<Category> {
    fn from(set: CategorySet) -> Self {
        set.categories
    }
}

impl<'a> IntoIterator for &'a CategorySet {
    type Item = &'a Category;
    type IntoIter = std::slice::Iter<'a, Category>;

    fn into_iter(self) -> Self::IntoIter {
        self.categories.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn baseline() -> CategorySet {
        CategorySet::create(&["A", "B", "C", "D"], &["One", "Two", "Three", "Four"]).unwrap()
    }

    #[test]
    fn test_create_pairs_by_index() {
        let set = baseline();
        assert_eq!(set.len(), 4);
        let pairs: Vec<_> = set.iter().map(|c| (c.position(), c.value.as_str())).collect();
        assert_eq!(
            pairs,
            vec![("A", "One"), ("B", "Two"), ("C", "Three"), ("D", "Four")]
        );
        assert!(set.iter().all(|c| c.origin == Origin::Original));
    }

    #[test]
    fn test_create_rejects_bad_input() {
        let empty: [&str; 0] = [];
        assert!(matches!(
            CategorySet::create(&empty, &empty),
            Err(ResonanceError::InvalidInput(_))
        ));
        assert!(matches!(
            CategorySet::create(&["A", "B"], &["One"]),
            Err(ResonanceError::InvalidInput(_))
        ));
        assert!(matches!(
            CategorySet::create(&["A", "A"], &["One", "Two"]),
            Err(ResonanceError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_lookup() {
        let set = baseline();
        assert_eq!(set.lookup("C").unwrap().value, "Three");
        assert!(matches!(
            set.lookup("E"),
            Err(ResonanceError::PositionNotFound(p)) if p == "E"
        ));
    }

    #[test]
    fn test_from_categories_rejects_broken_sets() {
        assert!(matches!(
            CategorySet::from_categories(vec![]),
            Err(ResonanceError::InvalidInput(_))
        ));
        assert!(matches!(
            CategorySet::from_categories(vec![
                Category::original("A", "One"),
                Category::original("A", "Two"),
            ]),
            Err(ResonanceError::InvalidInput(_))
        ));
        assert!(matches!(
            CategorySet::from_categories(vec![Category::novel("A", 0, "One")]),
            Err(ResonanceError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_deserialize_validates() {
        let set = baseline();
        let json = serde_json::to_string(&set).unwrap();
        let parsed: CategorySet = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, set);

        let duplicate = serde_json::to_string(&vec![
            Category::original("A", "One"),
            Category::original("A", "Two"),
        ])
        .unwrap();
        assert!(serde_json::from_str::<CategorySet>(&duplicate).is_err());
        assert!(serde_json::from_str::<CategorySet>("[]").is_err());

        let synthetic = serde_json::to_string(&vec![Category::novel("D", 3, "One")]).unwrap();
        assert!(serde_json::from_str::<CategorySet>(&synthetic).is_err());
    }

    #[test]
    fn test_labels() {
        assert_eq!(Category::original("A", "One").to_string(), "A * One");
        assert_eq!(Category::novel("D", 3, "One").to_string(), "NewCat3 * One");
    }

    #[test]
    fn test_synthetic_key_never_equals_original() {
        let original = CategoryKey::Original("NewCat3".into());
        let synthetic = CategoryKey::Synthetic {
            base: "D".into(),
            sequence: 3,
        };
        assert_ne!(original, synthetic);
        assert_ne!(original.atom(), synthetic.atom());
    }
}
