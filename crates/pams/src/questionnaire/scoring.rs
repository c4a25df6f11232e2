use super::answers::{AnswerSheet, Rating};
use super::questions::{question_ids, QuestionSection};
use super::scales::ScaleDefinition;
use serde::{Serialize, Serializer};
use std::fmt;

/// Share of the attainable maximum, rounded half-up to a whole percent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Percentage {
    Whole(u32),
    /// The scale has no items, so there is nothing to divide by.
    Undefined,
}

impl Percentage {
    pub const UNDEFINED_MARK: &'static str = "—";

    pub fn of(score: u32, max: u32) -> Self {
        if max == 0 {
            return Self::Undefined;
        }
        // floor(score / max * 100 + 0.5) without leaving integers
        let numerator = 200 * u64::from(score) + u64::from(max);
        let denominator = 2 * u64::from(max);
        Self::Whole((numerator / denominator) as u32)
    }
}

impl fmt::Display for Percentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Whole(value) => write!(f, "{value}%"),
            Self::Undefined => f.write_str(Self::UNDEFINED_MARK),
        }
    }
}

impl Serialize for Percentage {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Scored row for one scale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScaleResult {
    pub key: &'static str,
    pub label: &'static str,
    pub score: u32,
    pub max: u32,
    pub pct: Percentage,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subgroup: Option<&'static str>,
}

/// Highest value a single item can contribute.
pub const ITEM_MAX: u32 = Rating::MAX as u32;

pub fn sum_items(items: &[u8], answers: &AnswerSheet) -> u32 {
    items.iter().map(|id| answers.value_or_zero(*id)).sum()
}

pub fn max_score(item_count: usize) -> u32 {
    item_count as u32 * ITEM_MAX
}

pub fn score_scale(scale: &ScaleDefinition, answers: &AnswerSheet) -> ScaleResult {
    let items = scale.items.ids();
    let score = sum_items(&items, answers);
    let max = max_score(items.len());

    ScaleResult {
        key: scale.key,
        label: scale.label,
        score,
        max,
        pct: Percentage::of(score, max),
        group: scale.group,
        subgroup: scale.subgroup,
    }
}

/// One result per scale, in the order the scales are given.
///
/// Missing answers count as zero. Ratings are validated when recorded, so
/// nothing here can fail.
pub fn score_scales(scales: &[ScaleDefinition], answers: &AnswerSheet) -> Vec<ScaleResult> {
    let results: Vec<ScaleResult> = scales
        .iter()
        .map(|scale| score_scale(scale, answers))
        .collect();
    tracing::debug!(
        scales = results.len(),
        answered = answers.answered_count(),
        "scored answer sheet"
    );
    results
}

/// Sum over every question of the instrument.
pub fn total_score(answers: &AnswerSheet) -> u32 {
    question_ids().map(|id| answers.value_or_zero(id)).sum()
}

pub fn section_score(section: &QuestionSection, answers: &AnswerSheet) -> u32 {
    section.ids().map(|id| answers.value_or_zero(id)).sum()
}
