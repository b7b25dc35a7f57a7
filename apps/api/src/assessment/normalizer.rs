use std::collections::BTreeMap;

use crate::assessment::questions::Question;
use crate::models::assessment::{Trait, TraitVector};

const LIKERT_MIN: u8 = 1;
const LIKERT_MAX: u8 = 5;

/// Converts Likert answers into a normalized trait vector.
///
/// Each trait is `sum(scored responses) / (answered questions × 5)`, so every
/// value lands in [0.2, 1.0] when answered and exactly 0 when no question for
/// that trait was answered. Answers for ids absent from `questions` are ignored.
pub fn normalize_responses(answers: &BTreeMap<u32, u8>, questions: &[Question]) -> TraitVector {
    let mut sums = [0u32; 5];
    let mut counts = [0u32; 5];

    for question in questions {
        let Some(&response) = answers.get(&question.id) else {
            continue;
        };
        let response = response.clamp(LIKERT_MIN, LIKERT_MAX);
        let scored = if question.reverse {
            LIKERT_MAX + 1 - response
        } else {
            response
        };
        let slot = question.dimension.index();
        sums[slot] += u32::from(scored);
        counts[slot] += 1;
    }

    TraitVector::from_fn(|dimension: Trait| {
        let slot = dimension.index();
        if counts[slot] == 0 {
            0.0
        } else {
            f64::from(sums[slot]) / f64::from(counts[slot] * u32::from(LIKERT_MAX))
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assessment::questions::QUESTIONS;

    fn answers(pairs: &[(u32, u8)]) -> BTreeMap<u32, u8> {
        pairs.iter().copied().collect()
    }

    #[test]
    fn test_reverse_scored_five_becomes_point_two() {
        let questions = [Question {
            id: 1,
            text: "calm",
            dimension: Trait::Neuroticism,
            reverse: true,
        }];
        let traits = normalize_responses(&answers(&[(1, 5)]), &questions);
        assert!((traits.neuroticism - 0.2).abs() < 1e-12);
    }

    #[test]
    fn test_unanswered_trait_is_exactly_zero() {
        // Only openness questions answered
        let traits = normalize_responses(&answers(&[(2, 4), (7, 5)]), QUESTIONS);
        assert!((traits.openness - 0.9).abs() < 1e-12);
        assert_eq!(traits.conscientiousness, 0.0);
        assert_eq!(traits.extraversion, 0.0);
        assert_eq!(traits.agreeableness, 0.0);
        assert_eq!(traits.neuroticism, 0.0);
    }

    #[test]
    fn test_partial_answers_use_answered_subset() {
        // Extraversion: q1=5, q6=3 answered; q11, q16 skipped → 8 / 10
        let traits = normalize_responses(&answers(&[(1, 5), (6, 3)]), QUESTIONS);
        assert!((traits.extraversion - 0.8).abs() < 1e-12);
    }

    #[test]
    fn test_full_questionnaire_bounds() {
        for response in 1..=5u8 {
            let all: BTreeMap<u32, u8> = QUESTIONS.iter().map(|q| (q.id, response)).collect();
            let traits = normalize_responses(&all, QUESTIONS);
            for dimension in Trait::ALL {
                let value = traits.get(dimension);
                assert!((0.0..=1.0).contains(&value), "{value} out of bounds");
            }
        }
    }

    #[test]
    fn test_neuroticism_mixes_reverse_item() {
        // q5=5, q10=5, q15=5 (reverse → 1), q20=5 → 16 / 20
        let traits = normalize_responses(&answers(&[(5, 5), (10, 5), (15, 5), (20, 5)]), QUESTIONS);
        assert!((traits.neuroticism - 0.8).abs() < 1e-12);
    }

    #[test]
    fn test_unknown_question_ids_ignored() {
        let traits = normalize_responses(&answers(&[(99, 5)]), QUESTIONS);
        assert_eq!(traits, TraitVector::default());
    }
}
