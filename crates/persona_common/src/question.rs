//! Questionnaire building blocks: questions, selections, responses.
//!
//! Answers are carried as a stable choice index (`Selection`), never as the
//! label string. Label text is resolved to a `Selection` exactly once, at
//! the boundary where user input comes in, so renaming a choice label can
//! never silently flip which axis gets credited.

use crate::axis::{Axis, AxisPair};
use crate::error::ClassifyError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Which of a question's two choices was picked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Selection {
    First,
    Second,
}

impl Selection {
    /// Zero-based choice index.
    pub fn index(&self) -> usize {
        match self {
            Selection::First => 0,
            Selection::Second => 1,
        }
    }

    /// Selection for a zero-based choice index.
    pub fn from_index(index: usize) -> Option<Selection> {
        match index {
            0 => Some(Selection::First),
            1 => Some(Selection::Second),
            _ => None,
        }
    }
}

/// One forced-choice questionnaire item.
///
/// Picking the first choice credits `axes.0`, picking the second credits
/// `axes.1`. Both letters must come from the same complementary pair;
/// `Catalog::validate` enforces this for every question it accepts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// Stable identifier, unique within one catalog.
    pub id: String,
    /// Prompt shown to the user. Opaque to the scoring core.
    pub text: String,
    /// Exactly two choice labels, in presentation order.
    pub choices: [String; 2],
    /// `(positive, negative)` letters credited by the first/second choice.
    pub axes: (Axis, Axis),
}

impl Question {
    pub fn new(
        id: impl Into<String>,
        text: impl Into<String>,
        choices: [&str; 2],
        axes: (Axis, Axis),
    ) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            choices: [choices[0].to_string(), choices[1].to_string()],
            axes,
        }
    }

    /// The axis credited by a given selection.
    pub fn credited_axis(&self, selection: Selection) -> Axis {
        match selection {
            Selection::First => self.axes.0,
            Selection::Second => self.axes.1,
        }
    }

    /// Label text for a given selection.
    pub fn choice(&self, selection: Selection) -> &str {
        &self.choices[selection.index()]
    }

    /// Resolve a label string to a selection by exact match.
    pub fn selection_for(&self, label: &str) -> Option<Selection> {
        if label == self.choices[0] {
            Some(Selection::First)
        } else if label == self.choices[1] {
            Some(Selection::Second)
        } else {
            None
        }
    }

    /// The pair this question contributes to. Meaningful only after the
    /// catalog has been validated (both letters share one pair).
    pub fn pair(&self) -> AxisPair {
        self.axes.0.pair()
    }
}

/// Supplementary forced-choice question used only to break a tied pair.
///
/// The first choice sides with the pair's first letter, the second with
/// its second letter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TieQuestion {
    pub pair: AxisPair,
    pub text: String,
    pub choices: [String; 2],
}

impl TieQuestion {
    pub fn new(pair: AxisPair, text: impl Into<String>, choices: [&str; 2]) -> Self {
        Self {
            pair,
            text: text.into(),
            choices: [choices[0].to_string(), choices[1].to_string()],
        }
    }

    /// The axis that gains the tie-break point for a given selection.
    pub fn chosen_axis(&self, selection: Selection) -> Axis {
        match selection {
            Selection::First => self.pair.first(),
            Selection::Second => self.pair.second(),
        }
    }

    /// Resolve a label string to a selection by exact match.
    pub fn selection_for(&self, label: &str) -> Option<Selection> {
        if label == self.choices[0] {
            Some(Selection::First)
        } else if label == self.choices[1] {
            Some(Selection::Second)
        } else {
            None
        }
    }
}

/// Map of question id -> selection for one questionnaire pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResponseSet {
    answers: BTreeMap<String, Selection>,
}

impl ResponseSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record (or overwrite) the answer for one question.
    pub fn record(&mut self, question_id: impl Into<String>, selection: Selection) {
        self.answers.insert(question_id.into(), selection);
    }

    pub fn get(&self, question_id: &str) -> Option<Selection> {
        self.answers.get(question_id).copied()
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    /// Build a response set from raw label strings, resolving each against
    /// its question by exact match. A label matching neither choice is an
    /// `UnrecognizedAnswer` error, not a silent credit to the second axis.
    pub fn from_labels<'a, I>(questions: I, labels: &BTreeMap<String, String>) -> Result<Self, ClassifyError>
    where
        I: IntoIterator<Item = &'a Question>,
    {
        let mut responses = ResponseSet::new();
        for question in questions {
            if let Some(label) = labels.get(&question.id) {
                let selection = question.selection_for(label).ok_or_else(|| {
                    ClassifyError::UnrecognizedAnswer {
                        question: question.id.clone(),
                        answer: label.clone(),
                    }
                })?;
                responses.record(question.id.clone(), selection);
            }
        }
        Ok(responses)
    }
}

/// Tie-break answers collected so far, keyed by pair.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TieAnswers {
    answers: BTreeMap<AxisPair, Selection>,
}

impl TieAnswers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, pair: AxisPair, selection: Selection) {
        self.answers.insert(pair, selection);
    }

    pub fn get(&self, pair: AxisPair) -> Option<Selection> {
        self.answers.get(&pair).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn greeting_question() -> Question {
        Question::new(
            "Q1",
            "When the robot greets you first, how do you react?",
            ["Join the conversation right away", "Observe the situation first"],
            (Axis::E, Axis::I),
        )
    }

    #[test]
    fn test_credited_axis_follows_choice_order() {
        let q = greeting_question();
        assert_eq!(q.credited_axis(Selection::First), Axis::E);
        assert_eq!(q.credited_axis(Selection::Second), Axis::I);
    }

    #[test]
    fn test_selection_for_requires_exact_match() {
        let q = greeting_question();
        assert_eq!(
            q.selection_for("Join the conversation right away"),
            Some(Selection::First)
        );
        assert_eq!(
            q.selection_for("Observe the situation first"),
            Some(Selection::Second)
        );
        // No trimming, no case folding, no fallback to the second choice.
        assert_eq!(q.selection_for("observe the situation first"), None);
        assert_eq!(q.selection_for("something else entirely"), None);
    }

    #[test]
    fn test_from_labels_rejects_unknown_label() {
        let questions = vec![greeting_question()];
        let mut labels = BTreeMap::new();
        labels.insert("Q1".to_string(), "garbage".to_string());

        let err = ResponseSet::from_labels(&questions, &labels).unwrap_err();
        assert_eq!(
            err,
            ClassifyError::UnrecognizedAnswer {
                question: "Q1".to_string(),
                answer: "garbage".to_string(),
            }
        );
    }

    #[test]
    fn test_from_labels_skips_unanswered() {
        // Missing answers are not an error here; completeness is the
        // accumulator's gate.
        let questions = vec![greeting_question()];
        let labels = BTreeMap::new();
        let responses = ResponseSet::from_labels(&questions, &labels).unwrap();
        assert!(responses.is_empty());
    }

    #[test]
    fn test_tie_question_chosen_axis() {
        let tie = TieQuestion::new(
            AxisPair::TF,
            "What matters more in your relationship with the robot?",
            ["Efficiency and results", "Emotional connection and understanding"],
        );
        assert_eq!(tie.chosen_axis(Selection::First), Axis::T);
        assert_eq!(tie.chosen_axis(Selection::Second), Axis::F);
    }
}
