//! The classification pipeline: accumulate -> resolve ties -> derive.
//!
//! Three pure steps over in-memory values, executed once per diagnosis
//! submission. Nothing here touches storage or ambient state; concurrent
//! diagnosis runs share nothing.

use crate::axis::AxisPair;
use crate::catalog::Catalog;
use crate::category::CategoryCode;
use crate::error::ClassifyError;
use crate::question::{ResponseSet, TieAnswers};
use crate::tally::AxisTally;
use tracing::debug;

/// The outcome of one completed diagnosis run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnosis {
    pub code: CategoryCode,
    pub tally: AxisTally,
}

/// Tally one point per answered question.
///
/// All-or-nothing: if any catalog question has no response, the run fails
/// with `Incomplete` listing every unanswered id, and no partial tally is
/// returned.
pub fn accumulate(catalog: &Catalog, responses: &ResponseSet) -> Result<AxisTally, ClassifyError> {
    let missing: Vec<String> = catalog
        .questions
        .iter()
        .filter(|q| responses.get(&q.id).is_none())
        .map(|q| q.id.clone())
        .collect();
    if !missing.is_empty() {
        return Err(ClassifyError::Incomplete { missing });
    }

    let mut tally = AxisTally::new();
    for question in &catalog.questions {
        // Safe: completeness checked above.
        if let Some(selection) = responses.get(&question.id) {
            tally.credit(question.credited_axis(selection));
        }
    }
    Ok(tally)
}

/// Break every tied pair with its forced-choice answer.
///
/// Each pair whose two counts are equal (including 0-0) must have an
/// answer in `answers`; the chosen letter gains exactly one point. If any
/// tied pair is unanswered, the whole step fails with `UnresolvedTie`
/// listing all of them - there is no partial resolution, and derivation
/// cannot proceed until the caller collects the missing answers. Answers
/// for pairs that are not tied are ignored.
///
/// Pairs are independent, so resolution order does not affect the result.
pub fn resolve_ties(
    tally: &AxisTally,
    catalog: &Catalog,
    answers: &TieAnswers,
) -> Result<AxisTally, ClassifyError> {
    let tied = tally.tied_pairs();

    let unanswered: Vec<AxisPair> = tied
        .iter()
        .copied()
        .filter(|pair| answers.get(*pair).is_none())
        .collect();
    if !unanswered.is_empty() {
        return Err(ClassifyError::UnresolvedTie { pairs: unanswered });
    }

    let mut resolved = tally.clone();
    for pair in tied {
        if let (Some(selection), Some(tie_question)) = (answers.get(pair), catalog.tie_breaker(pair))
        {
            resolved.credit(tie_question.chosen_axis(selection));
        }
    }
    Ok(resolved)
}

/// Reduce the eight counts to a four-letter code.
///
/// Per pair, in fixed order, the first letter wins iff its count is
/// greater than *or equal to* the second letter's count. With ties already
/// resolved the equality branch never decides a real run, but the `>=` is
/// kept exactly: if a caller skips tie resolution, ties fall to the
/// first-listed letter.
pub fn derive_code(tally: &AxisTally) -> CategoryCode {
    let mut letters = [AxisPair::EI.first(); 4];
    for (i, pair) in AxisPair::ALL.into_iter().enumerate() {
        let (first, second) = tally.pair_counts(pair);
        letters[i] = if first >= second {
            pair.first()
        } else {
            pair.second()
        };
    }
    CategoryCode::from_picks(letters)
}

/// Run the full pipeline for one submission.
pub fn classify(
    catalog: &Catalog,
    responses: &ResponseSet,
    tie_answers: &TieAnswers,
) -> Result<Diagnosis, ClassifyError> {
    let tally = accumulate(catalog, responses)?;
    let tally = resolve_ties(&tally, catalog, tie_answers)?;
    let code = derive_code(&tally);
    debug!(catalog = %catalog.name, code = %code, tally = %tally, "diagnosis complete");
    Ok(Diagnosis { code, tally })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::axis::Axis;
    use crate::catalog::Location;
    use crate::question::Selection;

    /// Answer every question in the catalog with the same selection.
    fn uniform_responses(catalog: &Catalog, selection: Selection) -> ResponseSet {
        let mut responses = ResponseSet::new();
        for question in &catalog.questions {
            responses.record(question.id.clone(), selection);
        }
        responses
    }

    #[test]
    fn test_all_first_choices_score_estj() {
        // 12 questions, 3 per pair, every answer picks the first choice.
        let catalog = Catalog::builtin(Location::General);
        let responses = uniform_responses(&catalog, Selection::First);

        let tally = accumulate(&catalog, &responses).unwrap();
        assert_eq!(tally.pair_counts(AxisPair::EI), (3, 0));
        assert_eq!(tally.pair_counts(AxisPair::SN), (3, 0));
        assert_eq!(tally.pair_counts(AxisPair::TF), (3, 0));
        assert_eq!(tally.pair_counts(AxisPair::JP), (3, 0));
        assert!(tally.tied_pairs().is_empty());

        let diagnosis = classify(&catalog, &responses, &TieAnswers::new()).unwrap();
        assert_eq!(diagnosis.code.to_string(), "ESTJ");
    }

    #[test]
    fn test_majority_flip_on_single_pair() {
        // Flip two of the three T/F answers to the second choice; only the
        // third letter of the code changes.
        let catalog = Catalog::builtin(Location::General);
        let mut responses = uniform_responses(&catalog, Selection::First);
        responses.record("Q7", Selection::Second);
        responses.record("Q8", Selection::Second);

        let tally = accumulate(&catalog, &responses).unwrap();
        assert_eq!(tally.pair_counts(AxisPair::TF), (1, 2));

        let diagnosis = classify(&catalog, &responses, &TieAnswers::new()).unwrap();
        assert_eq!(diagnosis.code.to_string(), "ESFJ");
    }

    #[test]
    fn test_incomplete_lists_missing_ids() {
        let catalog = Catalog::builtin(Location::General);
        let mut responses = uniform_responses(&catalog, Selection::First);
        let mut partial = ResponseSet::new();
        for question in catalog.questions.iter().filter(|q| q.id != "Q5") {
            partial.record(
                question.id.clone(),
                responses.get(&question.id).unwrap(),
            );
        }
        responses = partial;

        let err = accumulate(&catalog, &responses).unwrap_err();
        assert_eq!(
            err,
            ClassifyError::Incomplete {
                missing: vec!["Q5".to_string()]
            }
        );
    }

    #[test]
    fn test_tie_blocks_until_answered() {
        let catalog = Catalog::builtin(Location::General);
        let mut tally = AxisTally::new();
        for _ in 0..2 {
            tally.credit(Axis::E);
            tally.credit(Axis::I);
        }
        tally.credit(Axis::S);
        tally.credit(Axis::T);
        tally.credit(Axis::J);

        // No tie-break answer supplied: hard gate.
        let err = resolve_ties(&tally, &catalog, &TieAnswers::new()).unwrap_err();
        assert_eq!(
            err,
            ClassifyError::UnresolvedTie {
                pairs: vec![AxisPair::EI]
            }
        );

        // Choosing the introvert side breaks the tie by exactly one point.
        let mut answers = TieAnswers::new();
        answers.record(AxisPair::EI, Selection::Second);
        let resolved = resolve_ties(&tally, &catalog, &answers).unwrap();
        assert_eq!(resolved.pair_counts(AxisPair::EI), (2, 3));
        assert_eq!(derive_code(&resolved).letter(AxisPair::EI), Axis::I);
    }

    #[test]
    fn test_tie_break_touches_only_chosen_letter() {
        let catalog = Catalog::builtin(Location::General);
        let mut tally = AxisTally::new();
        tally.credit(Axis::E);
        tally.credit(Axis::I);
        tally.credit(Axis::S);
        tally.credit(Axis::T);
        tally.credit(Axis::J);

        let mut answers = TieAnswers::new();
        answers.record(AxisPair::EI, Selection::Second);
        let resolved = resolve_ties(&tally, &catalog, &answers).unwrap();

        assert_eq!(resolved.get(Axis::I), tally.get(Axis::I) + 1);
        for axis in Axis::ALL.into_iter().filter(|a| *a != Axis::I) {
            assert_eq!(resolved.get(axis), tally.get(axis), "{axis} changed");
        }
    }

    #[test]
    fn test_multiple_ties_all_required() {
        let catalog = Catalog::builtin(Location::General);
        // Everything tied at zero except T/F.
        let mut tally = AxisTally::new();
        tally.credit(Axis::T);

        let mut answers = TieAnswers::new();
        answers.record(AxisPair::EI, Selection::First);
        let err = resolve_ties(&tally, &catalog, &answers).unwrap_err();
        assert_eq!(
            err,
            ClassifyError::UnresolvedTie {
                pairs: vec![AxisPair::SN, AxisPair::JP]
            }
        );

        answers.record(AxisPair::SN, Selection::Second);
        answers.record(AxisPair::JP, Selection::Second);
        let resolved = resolve_ties(&tally, &catalog, &answers).unwrap();
        assert_eq!(derive_code(&resolved).to_string(), "ENTP");
    }

    #[test]
    fn test_answers_for_untied_pairs_are_ignored() {
        let catalog = Catalog::builtin(Location::General);
        let mut tally = AxisTally::new();
        tally.credit(Axis::E);
        tally.credit(Axis::S);
        tally.credit(Axis::T);
        tally.credit(Axis::J);

        let mut answers = TieAnswers::new();
        answers.record(AxisPair::EI, Selection::Second);
        let resolved = resolve_ties(&tally, &catalog, &answers).unwrap();
        assert_eq!(resolved, tally);
    }

    #[test]
    fn test_derive_favors_first_letter_on_equal_counts() {
        // An unresolved 0-0 tally falls to the first letter of every pair.
        let tally = AxisTally::new();
        assert_eq!(derive_code(&tally).to_string(), "ESTJ");
    }

    #[test]
    fn test_classify_is_deterministic() {
        let catalog = Catalog::builtin(Location::Hospital);
        let mut responses = ResponseSet::new();
        for (i, question) in catalog.questions.iter().enumerate() {
            let selection = if i % 3 == 0 {
                Selection::Second
            } else {
                Selection::First
            };
            responses.record(question.id.clone(), selection);
        }
        let mut answers = TieAnswers::new();
        for pair in AxisPair::ALL {
            answers.record(pair, Selection::First);
        }

        let first = classify(&catalog, &responses, &answers).unwrap();
        for _ in 0..10 {
            let again = classify(&catalog, &responses, &answers).unwrap();
            assert_eq!(again, first);
        }
    }

    #[test]
    fn test_pair_totals_match_question_counts() {
        let catalog = Catalog::builtin(Location::Airport);
        let mut responses = ResponseSet::new();
        for (i, question) in catalog.questions.iter().enumerate() {
            let selection = if i % 2 == 0 {
                Selection::First
            } else {
                Selection::Second
            };
            responses.record(question.id.clone(), selection);
        }

        let tally = accumulate(&catalog, &responses).unwrap();
        for pair in AxisPair::ALL {
            assert_eq!(
                tally.pair_total(pair) as usize,
                catalog.pair_question_count(pair)
            );
        }
    }
}
