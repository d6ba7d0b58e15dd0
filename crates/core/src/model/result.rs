use serde::{Deserialize, Serialize};

use crate::model::question::OptionLetter;

/// Option texts of a reviewed question, keyed by letter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewOptions {
    #[serde(rename = "A")]
    pub a: String,
    #[serde(rename = "B")]
    pub b: String,
    #[serde(rename = "C")]
    pub c: String,
    #[serde(rename = "D")]
    pub d: String,
}

impl ReviewOptions {
    #[must_use]
    pub fn get(&self, letter: OptionLetter) -> &str {
        match letter {
            OptionLetter::A => &self.a,
            OptionLetter::B => &self.b,
            OptionLetter::C => &self.c,
            OptionLetter::D => &self.d,
        }
    }
}

/// Per-question outcome returned by the scoring endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewRecord {
    pub question: String,
    pub options: ReviewOptions,
    pub selected: OptionLetter,
    pub correct: OptionLetter,
    pub is_correct: bool,
}

/// Full response of `POST /api/quiz/submit`.
///
/// Only answered questions appear in `results`; `total` counts every question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizResult {
    pub score: u32,
    pub total: u32,
    pub percentage: f64,
    #[serde(default)]
    pub results: Vec<ReviewRecord>,
}

impl QuizResult {
    #[must_use]
    pub fn summary(&self) -> ResultSummary {
        ResultSummary::new(self.score, self.total, self.percentage)
    }
}

/// Score figures carried in the results page address.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ResultSummary {
    pub score: u32,
    pub total: u32,
    pub percentage: f64,
}

impl ResultSummary {
    #[must_use]
    pub fn new(score: u32, total: u32, percentage: f64) -> Self {
        Self {
            score,
            total,
            percentage,
        }
    }

    #[must_use]
    pub fn incorrect(&self) -> u32 {
        self.total.saturating_sub(self.score)
    }
}
