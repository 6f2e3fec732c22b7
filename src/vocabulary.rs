//! Vocabulary: the fixed, totally ordered set of category values.
//!
//! Values are words ("One", "Two", ...) but they stand for magnitudes. The
//! only numeric handle the classifier has on them is their **rank**, the
//! 0-based index within the vocabulary:
//!
//! ```text
//! One < Two < Three < Four
//!  0     1     2      3
//! ```

use crate::error::{ResonanceError, Result};
use serde::{Deserialize, Serialize};

/// The default word-number vocabulary.
pub const ORDINAL_WORDS: [&str; 4] = ["One", "Two", "Three", "Four"];

/// An ordered value vocabulary.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct Vocabulary {
    words: Vec<String>,
}

impl Vocabulary {
    /// Build a vocabulary from words listed in ascending order.
    ///
    /// Fails on an empty list or a repeated word, since either would make
    /// ranks ambiguous.
    pub fn new<I, S>(words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let words: Vec<String> = words.into_iter().map(Into::into).collect();
        if words.is_empty() {
            return Err(ResonanceError::InvalidInput(
                "vocabulary must contain at least one value".into(),
            ));
        }
        for (i, word) in words.iter().enumerate() {
            if words[..i].contains(word) {
                return Err(ResonanceError::InvalidInput(format!(
                    "vocabulary value {word:?} listed twice"
                )));
            }
        }
        Ok(Self { words })
    }

    /// The `One < Two < Three < Four` vocabulary.
    pub fn ordinal() -> Self {
        Self {
            words: ORDINAL_WORDS.iter().map(|w| w.to_string()).collect(),
        }
    }

    /// 0-based rank of `value`.
    pub fn rank(&self, value: &str) -> Result<usize> {
        self.words
            .iter()
            .position(|w| w == value)
            .ok_or_else(|| ResonanceError::UnknownValue(value.to_string()))
    }

    /// Absolute rank difference between two values.
    pub fn distance(&self, a: &str, b: &str) -> Result<usize> {
        Ok(self.rank(a)?.abs_diff(self.rank(b)?))
    }

    /// Whether `value` is in the vocabulary.
    pub fn contains(&self, value: &str) -> bool {
        self.words.iter().any(|w| w == value)
    }

    /// Get the number of values.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Values in ascending rank order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self::ordinal()
    }
}

impl TryFrom<Vec<String>> for Vocabulary {
    type Error = ResonanceError;

    fn try_from(words: Vec<String>) -> Result<Self> {
        Self::new(words)
    }
}

impl From<Vocabulary> for Vec<String> {
    fn from(vocabulary: Vocabulary) -> Self {
        vocabulary.words
    }
}
