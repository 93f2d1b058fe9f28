//! Category codes - the four-letter diagnosis outcome.

use crate::axis::{Axis, AxisPair};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A four-letter category code, one letter per complementary pair in
/// derivation order (E/I, S/N, T/F, J/P).
///
/// Downstream code treats the code as an opaque label; guide text,
/// compatibility scores and statistics are all keyed by it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CategoryCode {
    letters: [Axis; 4],
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid category code '{0}'")]
pub struct ParseCategoryError(pub String);

impl CategoryCode {
    /// Construct from per-pair picks. Callers guarantee each letter was
    /// picked from the pair at its position, which `derive_code` does by
    /// construction.
    pub(crate) fn from_picks(letters: [Axis; 4]) -> Self {
        Self { letters }
    }

    /// The letter chosen for a given pair.
    pub fn letter(&self, pair: AxisPair) -> Axis {
        match pair {
            AxisPair::EI => self.letters[0],
            AxisPair::SN => self.letters[1],
            AxisPair::TF => self.letters[2],
            AxisPair::JP => self.letters[3],
        }
    }

    /// All sixteen codes, first-letter variants first.
    pub fn all() -> Vec<CategoryCode> {
        let mut codes = Vec::with_capacity(16);
        for ei in [Axis::E, Axis::I] {
            for sn in [Axis::S, Axis::N] {
                for tf in [Axis::T, Axis::F] {
                    for jp in [Axis::J, Axis::P] {
                        codes.push(CategoryCode {
                            letters: [ei, sn, tf, jp],
                        });
                    }
                }
            }
        }
        codes
    }
}

impl fmt::Display for CategoryCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for letter in self.letters {
            write!(f, "{}", letter)?;
        }
        Ok(())
    }
}

impl FromStr for CategoryCode {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = s.trim().chars().collect();
        if chars.len() != 4 {
            return Err(ParseCategoryError(s.to_string()));
        }

        let mut letters = [Axis::E; 4];
        for (i, (c, pair)) in chars.iter().zip(AxisPair::ALL).enumerate() {
            let axis =
                Axis::from_letter(*c).ok_or_else(|| ParseCategoryError(s.to_string()))?;
            // Each position must hold a letter of its own pair.
            if axis.pair() != pair {
                return Err(ParseCategoryError(s.to_string()));
            }
            letters[i] = axis;
        }
        Ok(CategoryCode { letters })
    }
}

impl TryFrom<String> for CategoryCode {
    type Error = ParseCategoryError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<CategoryCode> for String {
    fn from(code: CategoryCode) -> Self {
        code.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_display_round_trip() {
        for code in CategoryCode::all() {
            let text = code.to_string();
            assert_eq!(text.parse::<CategoryCode>().unwrap(), code);
        }
    }

    #[test]
    fn test_parse_accepts_lowercase() {
        let code: CategoryCode = "estj".parse().unwrap();
        assert_eq!(code.to_string(), "ESTJ");
    }

    #[test]
    fn test_parse_rejects_misplaced_letters() {
        // Valid letters, wrong positions
        assert!("SETJ".parse::<CategoryCode>().is_err());
        assert!("EEEE".parse::<CategoryCode>().is_err());
        assert!("EST".parse::<CategoryCode>().is_err());
        assert!("ESTJX".parse::<CategoryCode>().is_err());
        assert!("ABCD".parse::<CategoryCode>().is_err());
    }

    #[test]
    fn test_sixteen_distinct_codes() {
        let all = CategoryCode::all();
        assert_eq!(all.len(), 16);
        let mut strings: Vec<String> = all.iter().map(|c| c.to_string()).collect();
        strings.dedup();
        assert_eq!(strings.len(), 16);
        assert!(strings.contains(&"ESTJ".to_string()));
        assert!(strings.contains(&"INFP".to_string()));
    }

    #[test]
    fn test_letter_accessor() {
        let code: CategoryCode = "ISFP".parse().unwrap();
        assert_eq!(code.letter(AxisPair::EI), Axis::I);
        assert_eq!(code.letter(AxisPair::SN), Axis::S);
        assert_eq!(code.letter(AxisPair::TF), Axis::F);
        assert_eq!(code.letter(AxisPair::JP), Axis::P);
    }

    #[test]
    fn test_serde_as_string() {
        let code: CategoryCode = "ENTP".parse().unwrap();
        let json = serde_json::to_string(&code).unwrap();
        assert_eq!(json, "\"ENTP\"");
        let back: CategoryCode = serde_json::from_str(&json).unwrap();
        assert_eq!(back, code);
    }
}
