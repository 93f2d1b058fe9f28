//! Error types shared across the diagnosis pipeline.

use crate::axis::AxisPair;
use thiserror::Error;

/// Recoverable failures while scoring one diagnosis run.
///
/// Nothing here is fatal: `Incomplete` and `UnresolvedTie` both mean
/// "collect more answers and retry", `UnrecognizedAnswer` means the
/// presentation layer handed over a label that matches neither choice.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClassifyError {
    #[error("questionnaire incomplete, missing answers for: {}", .missing.join(", "))]
    Incomplete { missing: Vec<String> },

    #[error("unresolved tie on pair(s): {}", format_pairs(.pairs))]
    UnresolvedTie { pairs: Vec<AxisPair> },

    #[error("answer '{answer}' for question '{question}' matches neither choice")]
    UnrecognizedAnswer { question: String, answer: String },
}

fn format_pairs(pairs: &[AxisPair]) -> String {
    pairs
        .iter()
        .map(|p| p.name())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Configuration defects in a question catalog, caught at load time.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("catalog '{catalog}': no questions cover the {pair} pair")]
    UncoveredPair { catalog: String, pair: AxisPair },

    #[error("catalog '{catalog}': no tie-break question for the {pair} pair")]
    MissingTieBreaker { catalog: String, pair: AxisPair },

    #[error("catalog '{catalog}': duplicate tie-break question for the {pair} pair")]
    DuplicateTieBreaker { catalog: String, pair: AxisPair },

    #[error("catalog '{catalog}': duplicate question id '{id}'")]
    DuplicateQuestionId { catalog: String, id: String },

    #[error("catalog '{catalog}': question '{id}' mixes letters from different pairs")]
    MixedAxes { catalog: String, id: String },

    #[error("catalog '{catalog}': question '{id}' must offer two distinct choices")]
    BadChoices { catalog: String, id: String },

    #[error("catalog '{catalog}' has no questions")]
    Empty { catalog: String },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::axis::AxisPair;

    #[test]
    fn test_incomplete_message_lists_ids() {
        let err = ClassifyError::Incomplete {
            missing: vec!["Q3".into(), "Q7".into()],
        };
        assert_eq!(
            err.to_string(),
            "questionnaire incomplete, missing answers for: Q3, Q7"
        );
    }

    #[test]
    fn test_unresolved_tie_message_lists_pairs() {
        let err = ClassifyError::UnresolvedTie {
            pairs: vec![AxisPair::EI, AxisPair::JP],
        };
        assert_eq!(err.to_string(), "unresolved tie on pair(s): E/I, J/P");
    }
}
