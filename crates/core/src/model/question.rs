use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::model::ids::QuestionId;

/// Seconds the quiz confirmation page budgets for each question.
pub const SECONDS_PER_QUESTION: u32 = 30;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum OptionLetterError {
    #[error("invalid option letter: {0:?}")]
    Invalid(String),
}

/// One of the four answer choices of a question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum OptionLetter {
    A,
    B,
    C,
    D,
}

impl OptionLetter {
    pub const ALL: [OptionLetter; 4] = [Self::A, Self::B, Self::C, Self::D];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
        }
    }
}

impl fmt::Display for OptionLetter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OptionLetter {
    type Err = OptionLetterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "A" | "a" => Ok(Self::A),
            "B" | "b" => Ok(Self::B),
            "C" | "c" => Ok(Self::C),
            "D" | "d" => Ok(Self::D),
            other => Err(OptionLetterError::Invalid(other.to_string())),
        }
    }
}

impl TryFrom<String> for OptionLetter {
    type Error = OptionLetterError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// A multiple-choice question as served by `GET /api/questions`.
///
/// Fields the client has no use for (such as the correct answer) are dropped
/// on deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: QuestionId,
    pub question: String,
    pub option_a: String,
    pub option_b: String,
    pub option_c: String,
    pub option_d: String,
}

impl Question {
    #[must_use]
    pub fn id(&self) -> QuestionId {
        self.id
    }

    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.question
    }

    #[must_use]
    pub fn option(&self, letter: OptionLetter) -> &str {
        match letter {
            OptionLetter::A => &self.option_a,
            OptionLetter::B => &self.option_b,
            OptionLetter::C => &self.option_c,
            OptionLetter::D => &self.option_d,
        }
    }
}

/// What the confirmation page shows before a quiz starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizOverview {
    question_count: u32,
}

impl QuizOverview {
    #[must_use]
    pub fn new(question_count: u32) -> Self {
        Self { question_count }
    }

    #[must_use]
    pub fn question_count(&self) -> u32 {
        self.question_count
    }

    /// Whole minutes needed to answer every question at the default pace.
    #[must_use]
    pub fn total_minutes(&self) -> u32 {
        (self.question_count.saturating_mul(SECONDS_PER_QUESTION)).div_ceil(60)
    }
}
