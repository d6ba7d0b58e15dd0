use quiz_core::model::{OptionLetter, ResultSummary, ReviewRecord};

use crate::vm::time_fmt::format_percentage;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultsVm {
    pub score: u32,
    pub total: u32,
    pub incorrect: u32,
    pub percentage_label: String,
}

impl From<ResultSummary> for ResultsVm {
    fn from(summary: ResultSummary) -> Self {
        Self {
            score: summary.score,
            total: summary.total,
            incorrect: summary.incorrect(),
            percentage_label: format!("{}%", format_percentage(summary.percentage)),
        }
    }
}

/// One reviewed question on the answers page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnswerReviewVm {
    pub heading: String,
    pub is_correct: bool,
    pub question: String,
    pub options: Vec<(OptionLetter, String)>,
    pub your_answer: String,
    pub correct_answer: String,
}

impl AnswerReviewVm {
    #[must_use]
    pub fn from_record(index: usize, record: &ReviewRecord) -> Self {
        let icon = if record.is_correct { "✅" } else { "❌" };
        Self {
            heading: format!("{icon} Question {}", index + 1),
            is_correct: record.is_correct,
            question: record.question.clone(),
            options: OptionLetter::ALL
                .iter()
                .map(|&letter| (letter, record.options.get(letter).to_string()))
                .collect(),
            your_answer: format!(
                "{} - {}",
                record.selected,
                record.options.get(record.selected)
            ),
            correct_answer: record.correct.to_string(),
        }
    }
}

#[must_use]
pub fn map_answer_reviews(records: &[ReviewRecord]) -> Vec<AnswerReviewVm> {
    records
        .iter()
        .enumerate()
        .map(|(index, record)| AnswerReviewVm::from_record(index, record))
        .collect()
}

#[cfg(test)]
mod tests {
    use quiz_core::model::ReviewOptions;

    use super::*;

    #[test]
    fn summary_counts_incorrect() {
        let vm = ResultsVm::from(ResultSummary::new(2, 3, 66.67));
        assert_eq!(vm.incorrect, 1);
        assert_eq!(vm.percentage_label, "66.67%");
    }

    #[test]
    fn review_lines_name_selected_and_correct_option() {
        let record = ReviewRecord {
            question: "Which AWS service is used for serverless computing?".into(),
            options: ReviewOptions {
                a: "EC2".into(),
                b: "Lambda".into(),
                c: "ECS".into(),
                d: "Fargate".into(),
            },
            selected: OptionLetter::A,
            correct: OptionLetter::B,
            is_correct: false,
        };
        let vms = map_answer_reviews(&[record]);

        assert_eq!(vms[0].heading, "❌ Question 1");
        assert_eq!(vms[0].your_answer, "A - EC2");
        assert_eq!(vms[0].correct_answer, "B");
        assert_eq!(vms[0].options[1], (OptionLetter::B, "Lambda".to_string()));
    }
}
