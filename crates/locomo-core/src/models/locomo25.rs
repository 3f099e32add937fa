use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::calc;
use crate::error::CoreError;

/// Number of items in the Locomo25 questionnaire.
pub const QUESTION_COUNT: usize = 25;

/// Highest per-item answer ("unable").
pub const MAX_ANSWER: u8 = 4;

/// A questionnaire being filled in. `None` marks an unanswered item.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Locomo25Answers {
    slots: [Option<u8>; QUESTION_COUNT],
}

impl Locomo25Answers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the answer for the zero-based question `index`.
    /// Re-answering a question overwrites the earlier choice.
    pub fn answer(&mut self, index: usize, value: u8) -> Result<(), CoreError> {
        if index >= QUESTION_COUNT {
            return Err(CoreError::OutOfRange {
                field: "question_index",
                value: index as f64,
                min: 0.0,
                max: (QUESTION_COUNT - 1) as f64,
            });
        }
        if value > MAX_ANSWER {
            return Err(CoreError::OutOfRange {
                field: "answer",
                value: f64::from(value),
                min: 0.0,
                max: f64::from(MAX_ANSWER),
            });
        }
        self.slots[index] = Some(value);
        Ok(())
    }

    pub fn get(&self, index: usize) -> Option<u8> {
        self.slots.get(index).copied().flatten()
    }

    pub fn is_complete(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }

    /// Zero-based indexes still waiting for an answer.
    pub fn unanswered(&self) -> Vec<usize> {
        self.slots
            .iter()
            .enumerate()
            .filter(|(_, slot)| slot.is_none())
            .map(|(i, _)| i)
            .collect()
    }

    pub fn finish(&self) -> Result<Locomo25Result, CoreError> {
        let mut answers = [0u8; QUESTION_COUNT];
        for (i, slot) in self.slots.iter().enumerate() {
            answers[i] = slot.ok_or_else(|| {
                CoreError::Incomplete(format!(
                    "{} of {QUESTION_COUNT} questions unanswered",
                    self.unanswered().len()
                ))
            })?;
        }
        Ok(Locomo25Result::from_answers(answers))
    }
}

/// A completed Locomo25 questionnaire. Lower totals are better.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(try_from = "Locomo25Record", into = "Locomo25Record")]
#[ts(export)]
pub struct Locomo25Result {
    #[ts(type = "Array<number>")]
    answers: [u8; QUESTION_COUNT],
    total_score: u32,
}

impl Locomo25Result {
    fn from_answers(answers: [u8; QUESTION_COUNT]) -> Self {
        Self {
            total_score: calc::questionnaire_total(&answers),
            answers,
        }
    }

    pub fn answers(&self) -> &[u8; QUESTION_COUNT] {
        &self.answers
    }

    pub fn total_score(&self) -> u32 {
        self.total_score
    }
}

#[derive(Serialize, Deserialize)]
struct Locomo25Record {
    answers: Vec<u8>,
    #[serde(default)]
    total_score: u32,
}

impl TryFrom<Locomo25Record> for Locomo25Result {
    type Error = CoreError;

    fn try_from(r: Locomo25Record) -> Result<Self, Self::Error> {
        if r.answers.len() != QUESTION_COUNT {
            return Err(CoreError::Incomplete(format!(
                "expected {QUESTION_COUNT} answers, got {}",
                r.answers.len()
            )));
        }
        let mut draft = Locomo25Answers::new();
        for (i, value) in r.answers.into_iter().enumerate() {
            draft.answer(i, value)?;
        }
        draft.finish()
    }
}

impl From<Locomo25Result> for Locomo25Record {
    fn from(r: Locomo25Result) -> Self {
        Self {
            answers: r.answers.to_vec(),
            total_score: r.total_score,
        }
    }
}
