use super::common::*;
use crate::assessment::domain::{AnswerOption, AnswerSet, Axis};
use crate::assessment::scoring::{compute_scores, HYBRID_GAP_THRESHOLD};
use crate::assessment::shuffle::shuffle_with_seed;
use proptest::prelude::*;

fn answer_sets() -> impl Strategy<Value = AnswerSet> {
    proptest::collection::btree_map(0u16..=130, any::<bool>(), 0..=130).prop_map(|raw| {
        raw.into_iter()
            .map(|(id, pick_a)| {
                let option = if pick_a { AnswerOption::A } else { AnswerOption::B };
                (id, option)
            })
            .collect()
    })
}

proptest! {
    #[test]
    fn scoring_is_deterministic(answers in answer_sets()) {
        let catalog = catalog();
        let first = compute_scores(&answers, catalog.questions());
        let second = compute_scores(&answers, catalog.questions());
        prop_assert_eq!(first, second);
    }

    #[test]
    fn each_answered_question_counts_once(answers in answer_sets()) {
        let catalog = catalog();
        let scores = catalog.score(&answers);
        for axis in Axis::ordered() {
            let answered = catalog
                .questions_for_axis(axis)
                .iter()
                .filter(|question| answers.get(question.id).is_some())
                .count();
            prop_assert_eq!(scores.dimensions.axis_total(axis) as usize, answered);
        }
    }

    #[test]
    fn percentages_stay_within_bounds(answers in answer_sets()) {
        let scores = catalog().score(&answers);
        for (_, score) in scores.temperaments.entries() {
            prop_assert!(score <= 100);
        }

        let percentages = scores.dimension_percentages();
        for axis in Axis::ordered() {
            let (first, second) = percentages.for_axis(axis);
            prop_assert!(first <= 100 && second <= 100);
            let pair = u16::from(first) + u16::from(second);
            prop_assert!((100..=101).contains(&pair));
        }

        let sum: u32 = scores
            .temperaments
            .entries()
            .iter()
            .map(|(_, score)| u32::from(*score))
            .sum();
        prop_assert!((198..=202).contains(&sum));
    }

    #[test]
    fn classification_matches_scores(answers in answer_sets()) {
        let scores = catalog().score(&answers);
        let dominant = scores.dominant_score();
        let secondary = scores.secondary_score();

        prop_assert_ne!(scores.dominant_type, scores.secondary_type);
        prop_assert!(dominant >= secondary);
        for (temperament, score) in scores.temperaments.entries() {
            prop_assert!(score <= dominant);
            if temperament != scores.dominant_type {
                prop_assert!(score <= secondary);
            }
        }
        prop_assert_eq!(scores.is_hybrid, dominant - secondary <= HYBRID_GAP_THRESHOLD);
    }

    #[test]
    fn code_letters_follow_first_pole_tie_break(answers in answer_sets()) {
        let scores = catalog().score(&answers);
        let letters: Vec<char> = scores.mbti_code.chars().collect();
        prop_assert_eq!(letters.len(), 4);
        for (axis, letter) in Axis::ordered().into_iter().zip(letters) {
            let (first, second) = axis.poles();
            let expected = if scores.dimensions.count(first) >= scores.dimensions.count(second) {
                first
            } else {
                second
            };
            prop_assert_eq!(letter, expected.letter());
        }
    }

    #[test]
    fn question_order_does_not_change_scores(answers in answer_sets(), seed in any::<u64>()) {
        let catalog = catalog();
        let order = shuffle_with_seed(&catalog.ids(), seed);
        let reordered: Vec<_> = order
            .iter()
            .filter_map(|id| catalog.get(*id).cloned())
            .collect();

        prop_assert_eq!(
            compute_scores(&answers, &reordered),
            compute_scores(&answers, catalog.questions())
        );
    }
}
