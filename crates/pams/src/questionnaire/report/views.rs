use super::super::benchmark::BenchmarkResult;
use super::super::scoring::Percentage;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct ResultRowView {
    pub key: &'static str,
    pub label: &'static str,
    pub score: u32,
    pub max: u32,
    pub pct: Percentage,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subgroup: Option<&'static str>,
    /// Subgroup rows render indented under their parent scale.
    pub nested: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct ResultGroupView {
    pub group: &'static str,
    pub rows: Vec<ResultRowView>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProgressView {
    pub answered: usize,
    pub total_questions: usize,
    pub missing_count: usize,
    /// Present only while a handful of items are left.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub missing_ids: Option<Vec<u8>>,
    pub complete: bool,
}

impl ProgressView {
    pub fn label(&self) -> String {
        format!("Kitöltött: {}/{}", self.answered, self.total_questions)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AssessmentSummary {
    pub progress: ProgressView,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
    pub groups: Vec<ResultGroupView>,
    pub total_score: u32,
    /// Shown once every item is answered.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub benchmark: Option<BenchmarkResult>,
}
