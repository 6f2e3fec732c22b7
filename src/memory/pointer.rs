//! Pointer: a superposition of role-filler bindings.
//!
//! A pointer is kept as a list of terms rather than as a parsed string, so
//! synthetic keys never go through string parsing. Encoding binds each
//! term's position vector to its value vector and bundles the results.

use crate::category::{Category, CategoryKey};
use crate::classifier::Binding;
use crate::error::Result;
use crate::primitives::Primitives;
use crate::vector::Vector;
use crate::vector_manager::VectorManager;
use std::fmt;

/// One `position * value` product.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Term {
    pub role: CategoryKey,
    pub filler: String,
}

/// Sum of terms.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pointer {
    terms: Vec<Term>,
}

impl Pointer {
    pub fn from_category(category: &Category) -> Self {
        Self {
            terms: vec![Term {
                role: category.key.clone(),
                filler: category.value.clone(),
            }],
        }
    }

    /// A combined binding keeps both terms, even when they are identical.
    pub fn from_binding(binding: &Binding) -> Self {
        match binding {
            Binding::Single(category) => Self::from_category(category),
            Binding::Combined {
                position,
                original,
                incoming,
            } => Self {
                terms: [original, incoming]
                    .into_iter()
                    .map(|value| Term {
                        role: CategoryKey::Original(position.clone()),
                        filler: value.clone(),
                    })
                    .collect(),
            },
        }
    }

    /// Raw observation paired with a baseline position.
    pub fn observation(position: &str, value: &str) -> Self {
        Self {
            terms: vec![Term {
                role: CategoryKey::Original(position.to_string()),
                filler: value.to_string(),
            }],
        }
    }

    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    pub(crate) fn value_atom(value: &str) -> String {
        format!("value:{value}")
    }

    /// Bundle of `bind(role, filler)` over all terms.
    pub fn encode(&self, vectors: &VectorManager) -> Result<Vector> {
        let bound = self
            .terms
            .iter()
            .map(|term| {
                Primitives::bind(
                    &vectors.get_vector(&term.role.atom()),
                    &vectors.get_vector(&Self::value_atom(&term.filler)),
                )
            })
            .collect::<Result<Vec<_>>>()?;
        let refs: Vec<&Vector> = bound.iter().collect();
        Primitives::bundle(&refs)
    }
}

impl fmt::Display for Pointer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, term) in self.terms.iter().enumerate() {
            if i > 0 {
                f.write_str(" + ")?;
            }
            write!(f, "{} * {}", term.role, term.filler)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::similarity::Similarity;

    #[test]
    fn test_labels_match_bindings() {
        let combined = Binding::Combined {
            position: "A".into(),
            original: "One".into(),
            incoming: "Two".into(),
        };
        assert_eq!(Pointer::from_binding(&combined).to_string(), "A * One + A * Two");
        assert_eq!(
            Pointer::from_binding(&combined).to_string(),
            combined.to_string()
        );

        let novel = Category::novel("D", 3, "One");
        assert_eq!(Pointer::from_category(&novel).to_string(), "NewCat3 * One");
        assert_eq!(Pointer::observation("B", "Four").to_string(), "B * Four");
    }

    #[test]
    fn test_reinforcement_encodes_like_single() {
        let vm = VectorManager::new(1024);
        let reinforced = Pointer::from_binding(&Binding::Combined {
            position: "A".into(),
            original: "One".into(),
            incoming: "One".into(),
        });
        let single = Pointer::observation("A", "One");
        assert_eq!(reinforced.encode(&vm).unwrap(), single.encode(&vm).unwrap());
    }

    #[test]
    fn test_blend_resembles_both_terms() {
        let vm = VectorManager::new(4096);
        let blend = Pointer::from_binding(&Binding::Combined {
            position: "B".into(),
            original: "Two".into(),
            incoming: "Four".into(),
        })
        .encode(&vm)
        .unwrap();
        let two = Pointer::observation("B", "Two").encode(&vm).unwrap();
        let four = Pointer::observation("B", "Four").encode(&vm).unwrap();
        let other = Pointer::observation("C", "Two").encode(&vm).unwrap();

        assert!(Similarity::cosine(&blend, &two) > 0.5);
        assert!(Similarity::cosine(&blend, &four) > 0.5);
        assert!(Similarity::cosine(&blend, &other).abs() < 0.1);
    }
}
