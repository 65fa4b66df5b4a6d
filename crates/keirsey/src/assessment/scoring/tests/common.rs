use crate::assessment::catalog::QuestionCatalog;
use crate::assessment::domain::{AnswerOption, AnswerSet, Axis};

pub(super) fn catalog() -> QuestionCatalog {
    QuestionCatalog::standard()
}

/// Answers the first `first + second` questions of each listed axis: `first`
/// of them with option A (first pole), the next `second` with option B.
pub(super) fn answers_with(catalog: &QuestionCatalog, plan: &[(Axis, usize, usize)]) -> AnswerSet {
    let mut answers = AnswerSet::new();
    for (axis, first, second) in plan {
        let questions = catalog.questions_for_axis(*axis);
        let options = std::iter::repeat(AnswerOption::A)
            .take(*first)
            .chain(std::iter::repeat(AnswerOption::B).take(*second));
        for (question, option) in questions.iter().zip(options) {
            answers.answer(question.id, option);
        }
    }
    answers
}

pub(super) fn all_answered(catalog: &QuestionCatalog, option: AnswerOption) -> AnswerSet {
    catalog
        .questions()
        .iter()
        .map(|question| (question.id, option))
        .collect()
}
