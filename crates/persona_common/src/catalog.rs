//! Question catalogs - the fixed questionnaire for one scoring pass.
//!
//! A catalog bundles the ordered question list with the four tie-break
//! questions, keyed by the context it was written for (a location such as
//! "hospital"). The catalog used to score must be the same catalog that
//! was presented to the user; callers hold one `Catalog` value for the
//! whole session to guarantee that.

use crate::axis::AxisPair;
use crate::builtin;
use crate::error::CatalogError;
use crate::question::{Question, TieQuestion};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::path::Path;
use tracing::debug;

/// Built-in catalog variants, one per deployment context.
///
/// Every variant except `General` appends five context-specific questions
/// to the shared base set and replaces the tie-break questions with a
/// context-specific set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Location {
    General,
    Hospital,
    Library,
    ShoppingMall,
    School,
    Airport,
}

impl Location {
    pub const ALL: [Location; 6] = [
        Location::General,
        Location::Hospital,
        Location::Library,
        Location::ShoppingMall,
        Location::School,
        Location::Airport,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Location::General => "general",
            Location::Hospital => "hospital",
            Location::Library => "library",
            Location::ShoppingMall => "shopping-mall",
            Location::School => "school",
            Location::Airport => "airport",
        }
    }

    pub fn from_name(name: &str) -> Option<Location> {
        match name.trim().to_ascii_lowercase().as_str() {
            "general" => Some(Location::General),
            "hospital" => Some(Location::Hospital),
            "library" => Some(Location::Library),
            "shopping-mall" | "shopping_mall" | "mall" => Some(Location::ShoppingMall),
            "school" => Some(Location::School),
            "airport" => Some(Location::Airport),
            _ => None,
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// An ordered question sequence plus its tie-break set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    /// Variant name, e.g. "general" or "hospital".
    pub name: String,
    /// Questions in presentation order.
    pub questions: Vec<Question>,
    /// One tie-break question per pair.
    pub tie_breakers: Vec<TieQuestion>,
}

impl Catalog {
    /// Built-in catalog for a location. The built-in data always passes
    /// `validate` (a unit test pins that down).
    pub fn builtin(location: Location) -> Catalog {
        let mut questions = builtin::base_questions();
        questions.extend(builtin::location_questions(location));

        let tie_breakers = builtin::location_tie_breakers(location)
            .unwrap_or_else(builtin::base_tie_breakers);

        Catalog {
            name: location.name().to_string(),
            questions,
            tie_breakers,
        }
    }

    /// Load a custom catalog from a TOML file and validate it.
    pub fn from_toml_path(path: &Path) -> Result<Catalog> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read catalog file {}", path.display()))?;
        let catalog: Catalog = toml::from_str(&content)
            .with_context(|| format!("failed to parse catalog file {}", path.display()))?;
        catalog
            .validate()
            .with_context(|| format!("invalid catalog in {}", path.display()))?;
        debug!(
            catalog = %catalog.name,
            questions = catalog.questions.len(),
            "loaded custom catalog"
        );
        Ok(catalog)
    }

    /// Tie-break question for a pair, if the catalog carries one.
    pub fn tie_breaker(&self, pair: AxisPair) -> Option<&TieQuestion> {
        self.tie_breakers.iter().find(|t| t.pair == pair)
    }

    /// Number of questions contributing to a given pair.
    pub fn pair_question_count(&self, pair: AxisPair) -> usize {
        self.questions.iter().filter(|q| q.pair() == pair).count()
    }

    /// Check the structural invariants every scorable catalog must hold:
    /// unique ids, two distinct choices per question, axes drawn from one
    /// pair, every pair covered by at least one question, and exactly one
    /// tie-break question per pair.
    ///
    /// A catalog that under-covers a pair would leave that tally at 0-0
    /// forever and bias the derivation, so the gap is rejected here at
    /// configuration time rather than discovered mid-diagnosis.
    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.questions.is_empty() {
            return Err(CatalogError::Empty {
                catalog: self.name.clone(),
            });
        }

        let mut seen_ids = BTreeSet::new();
        for question in &self.questions {
            if !seen_ids.insert(question.id.clone()) {
                return Err(CatalogError::DuplicateQuestionId {
                    catalog: self.name.clone(),
                    id: question.id.clone(),
                });
            }
            let (pos, neg) = question.axes;
            if pos.pair() != neg.pair() || pos == neg {
                return Err(CatalogError::MixedAxes {
                    catalog: self.name.clone(),
                    id: question.id.clone(),
                });
            }
            if question.choices[0].is_empty()
                || question.choices[1].is_empty()
                || question.choices[0] == question.choices[1]
            {
                return Err(CatalogError::BadChoices {
                    catalog: self.name.clone(),
                    id: question.id.clone(),
                });
            }
        }

        for pair in AxisPair::ALL {
            if self.pair_question_count(pair) == 0 {
                return Err(CatalogError::UncoveredPair {
                    catalog: self.name.clone(),
                    pair,
                });
            }
            match self.tie_breakers.iter().filter(|t| t.pair == pair).count() {
                0 => {
                    return Err(CatalogError::MissingTieBreaker {
                        catalog: self.name.clone(),
                        pair,
                    })
                }
                1 => {}
                _ => {
                    return Err(CatalogError::DuplicateTieBreaker {
                        catalog: self.name.clone(),
                        pair,
                    })
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::axis::Axis;

    #[test]
    fn test_all_builtin_catalogs_validate() {
        for location in Location::ALL {
            let catalog = Catalog::builtin(location);
            catalog
                .validate()
                .unwrap_or_else(|e| panic!("builtin catalog {location} invalid: {e}"));
        }
    }

    #[test]
    fn test_general_catalog_shape() {
        let catalog = Catalog::builtin(Location::General);
        assert_eq!(catalog.questions.len(), 12);
        for pair in AxisPair::ALL {
            assert_eq!(catalog.pair_question_count(pair), 3);
            assert!(catalog.tie_breaker(pair).is_some());
        }
    }

    #[test]
    fn test_location_catalogs_extend_base() {
        let base = Catalog::builtin(Location::General);
        for location in Location::ALL.into_iter().filter(|l| *l != Location::General) {
            let catalog = Catalog::builtin(location);
            assert_eq!(
                catalog.questions.len(),
                base.questions.len() + 5,
                "{location} should append five questions"
            );
            // Base questions come first, unchanged.
            assert_eq!(&catalog.questions[..base.questions.len()], &base.questions[..]);
        }
    }

    #[test]
    fn test_validate_rejects_uncovered_pair() {
        let mut catalog = Catalog::builtin(Location::General);
        catalog.questions.retain(|q| q.pair() != AxisPair::JP);
        assert_eq!(
            catalog.validate(),
            Err(CatalogError::UncoveredPair {
                catalog: "general".to_string(),
                pair: AxisPair::JP,
            })
        );
    }

    #[test]
    fn test_validate_rejects_missing_tie_breaker() {
        let mut catalog = Catalog::builtin(Location::General);
        catalog.tie_breakers.retain(|t| t.pair != AxisPair::SN);
        assert_eq!(
            catalog.validate(),
            Err(CatalogError::MissingTieBreaker {
                catalog: "general".to_string(),
                pair: AxisPair::SN,
            })
        );
    }

    #[test]
    fn test_validate_rejects_mixed_axes() {
        let mut catalog = Catalog::builtin(Location::General);
        catalog.questions[0].axes = (Axis::E, Axis::F);
        assert!(matches!(
            catalog.validate(),
            Err(CatalogError::MixedAxes { .. })
        ));
    }

    #[test]
    fn test_validate_rejects_duplicate_ids() {
        let mut catalog = Catalog::builtin(Location::General);
        let dup = catalog.questions[0].clone();
        catalog.questions.push(dup);
        assert!(matches!(
            catalog.validate(),
            Err(CatalogError::DuplicateQuestionId { .. })
        ));
    }

    #[test]
    fn test_location_names_round_trip() {
        for location in Location::ALL {
            assert_eq!(Location::from_name(location.name()), Some(location));
        }
        assert_eq!(Location::from_name("mall"), Some(Location::ShoppingMall));
        assert_eq!(Location::from_name("moon-base"), None);
    }

    #[test]
    fn test_toml_round_trip() {
        let catalog = Catalog::builtin(Location::General);
        let text = toml::to_string(&catalog).unwrap();
        let back: Catalog = toml::from_str(&text).unwrap();
        assert_eq!(back, catalog);
    }
}
