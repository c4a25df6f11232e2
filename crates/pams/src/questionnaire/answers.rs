use super::questions::{question, question_ids, QUESTION_COUNT};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Agreement level on the six point scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Rating(u8);

impl Rating {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 6;

    pub fn new(value: u8) -> Result<Self, AnswerError> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(AnswerError::RatingOutOfRange { value: value.into() })
        }
    }

    pub const fn value(self) -> u8 {
        self.0
    }

    pub const fn label(self) -> &'static str {
        match self.0 {
            1 => "Egyáltalán nem értek egyet",
            2 => "Nem értek egyet",
            3 => "Némileg nem értek egyet",
            4 => "Valamelyest egyetértek",
            5 => "Egyetértek",
            _ => "Teljes mértékben egyetértek",
        }
    }

    pub fn all() -> impl Iterator<Item = Rating> {
        (Self::MIN..=Self::MAX).map(Rating)
    }
}

impl TryFrom<u8> for Rating {
    type Error = AnswerError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Rating> for u8 {
    fn from(rating: Rating) -> Self {
        rating.0
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Rejections raised while recording answers.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AnswerError {
    #[error("rating {value} is outside the 1-6 scale")]
    RatingOutOfRange { value: i64 },
    #[error("question {id} does not exist (expected 1-{max})", max = QUESTION_COUNT)]
    UnknownQuestion { id: i64 },
    #[error("'{input}' is not a number")]
    NotANumber { input: String },
}

/// The respondent's answers, keyed by question id.
///
/// Unanswered questions are simply absent. Setting an answer twice keeps the
/// last value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    into = "BTreeMap<u8, Rating>",
    try_from = "BTreeMap<u8, Rating>"
)]
pub struct AnswerSheet {
    answers: BTreeMap<u8, Rating>,
}

impl AnswerSheet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a sheet from raw `(id, value)` pairs, validating both.
    pub fn from_pairs<I>(pairs: I) -> Result<Self, AnswerError>
    where
        I: IntoIterator<Item = (i64, i64)>,
    {
        let mut sheet = Self::new();
        for (id, value) in pairs {
            let id = checked_question_id(id)?;
            let value = u8::try_from(value)
                .map_err(|_| AnswerError::RatingOutOfRange { value })?;
            sheet.answer(id, Rating::new(value)?)?;
        }
        Ok(sheet)
    }

    /// Records `rating` for question `id`, returning the previous answer.
    pub fn answer(&mut self, id: u8, rating: Rating) -> Result<Option<Rating>, AnswerError> {
        if question(id).is_none() {
            return Err(AnswerError::UnknownQuestion { id: id.into() });
        }
        Ok(self.answers.insert(id, rating))
    }

    /// Records an answer typed or posted as text, e.g. `("12", "5")`.
    pub fn answer_text(&mut self, id: &str, value: &str) -> Result<Option<Rating>, AnswerError> {
        let id = checked_question_id(parse_number(id)?)?;
        let value = parse_number(value)?;
        let value = u8::try_from(value).map_err(|_| AnswerError::RatingOutOfRange { value })?;
        self.answer(id, Rating::new(value)?)
    }

    pub fn clear(&mut self, id: u8) -> Option<Rating> {
        self.answers.remove(&id)
    }

    pub fn clear_all(&mut self) {
        self.answers.clear();
    }

    pub fn get(&self, id: u8) -> Option<Rating> {
        self.answers.get(&id).copied()
    }

    /// Value used for scoring: the recorded rating, or zero when unanswered.
    pub fn value_or_zero(&self, id: u8) -> u32 {
        self.get(id).map_or(0, |rating| u32::from(rating.value()))
    }

    pub fn answered_count(&self) -> usize {
        self.answers.len()
    }

    pub fn missing_ids(&self) -> Vec<u8> {
        question_ids()
            .filter(|id| !self.answers.contains_key(id))
            .collect()
    }

    pub fn missing_count(&self) -> usize {
        usize::from(QUESTION_COUNT) - self.answered_count()
    }

    pub fn is_complete(&self) -> bool {
        self.missing_count() == 0
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }
}

impl TryFrom<BTreeMap<u8, Rating>> for AnswerSheet {
    type Error = AnswerError;

    fn try_from(answers: BTreeMap<u8, Rating>) -> Result<Self, Self::Error> {
        let mut sheet = Self::new();
        for (id, rating) in answers {
            sheet.answer(id, rating)?;
        }
        Ok(sheet)
    }
}

impl From<AnswerSheet> for BTreeMap<u8, Rating> {
    fn from(sheet: AnswerSheet) -> Self {
        sheet.answers
    }
}

fn parse_number(input: &str) -> Result<i64, AnswerError> {
    input
        .trim()
        .parse::<i64>()
        .map_err(|_| AnswerError::NotANumber {
            input: input.trim().to_string(),
        })
}

fn checked_question_id(id: i64) -> Result<u8, AnswerError> {
    u8::try_from(id)
        .ok()
        .filter(|candidate| question(*candidate).is_some())
        .ok_or(AnswerError::UnknownQuestion { id })
}
