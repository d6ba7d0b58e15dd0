use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::model::ids::QuestionId;
use crate::model::question::OptionLetter;

/// Answers chosen so far, keyed by question.
///
/// Recording an answer for a question that already has one replaces it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerSheet(BTreeMap<QuestionId, OptionLetter>);

impl AnswerSheet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `letter` for `id`, returning the answer it replaced.
    pub fn record(&mut self, id: QuestionId, letter: OptionLetter) -> Option<OptionLetter> {
        self.0.insert(id, letter)
    }

    #[must_use]
    pub fn get(&self, id: QuestionId) -> Option<OptionLetter> {
        self.0.get(&id).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (QuestionId, OptionLetter)> + '_ {
        self.0.iter().map(|(id, letter)| (*id, *letter))
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }
}

impl FromIterator<(QuestionId, OptionLetter)> for AnswerSheet {
    fn from_iter<I: IntoIterator<Item = (QuestionId, OptionLetter)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_overwrites_previous_answer() {
        let mut sheet = AnswerSheet::new();
        assert_eq!(sheet.record(QuestionId::new(1), OptionLetter::A), None);
        assert_eq!(
            sheet.record(QuestionId::new(1), OptionLetter::C),
            Some(OptionLetter::A)
        );
        assert_eq!(sheet.len(), 1);
        assert_eq!(sheet.get(QuestionId::new(1)), Some(OptionLetter::C));
    }

    #[test]
    fn serializes_as_object_keyed_by_id() {
        let sheet: AnswerSheet = [
            (QuestionId::new(2), OptionLetter::C),
            (QuestionId::new(1), OptionLetter::A),
        ]
        .into_iter()
        .collect();

        let json = serde_json::to_string(&sheet).unwrap();
        assert_eq!(json, r#"{"1":"A","2":"C"}"#);

        let back: AnswerSheet = serde_json::from_str(&json).unwrap();
        assert_eq!(back, sheet);
    }
}
