use super::super::answers::AnswerSheet;
use super::super::benchmark::{BenchmarkBand, BenchmarkResult};
use super::super::questions::QUESTION_COUNT;
use super::super::scales::{ScaleCatalog, GROUP_ORDER};
use super::super::scoring::{score_scales, total_score, ScaleResult};
use super::views::{AssessmentSummary, ProgressView, ResultGroupView, ResultRowView};

/// Heading for scales that belong to no group (the grand total).
pub const SUMMARY_GROUP: &str = "Összegzés";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportOptions {
    /// Missing items are enumerated only while fewer than this many remain.
    pub missing_list_threshold: usize,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            missing_list_threshold: 10,
        }
    }
}

/// Everything derived from one answer sheet.
#[derive(Debug, Clone)]
pub struct AssessmentReport {
    pub results: Vec<ScaleResult>,
    pub answered_count: usize,
    pub missing_ids: Vec<u8>,
    pub total_score: u32,
    pub band: BenchmarkBand,
}

impl AssessmentReport {
    pub fn build(catalog: &ScaleCatalog, answers: &AnswerSheet) -> Self {
        let total = total_score(answers);
        Self {
            results: score_scales(catalog.scales(), answers),
            answered_count: answers.answered_count(),
            missing_ids: answers.missing_ids(),
            total_score: total,
            band: BenchmarkBand::classify(total),
        }
    }

    pub fn missing_count(&self) -> usize {
        self.missing_ids.len()
    }

    pub fn is_complete(&self) -> bool {
        self.missing_ids.is_empty()
    }

    pub fn quartile_text(&self) -> &'static str {
        self.band.verdict()
    }

    pub fn result(&self, key: &str) -> Option<&ScaleResult> {
        self.results.iter().find(|row| row.key == key)
    }

    pub fn summary(&self, options: &ReportOptions) -> AssessmentSummary {
        let missing_count = self.missing_count();
        let missing_ids = (missing_count > 0 && missing_count < options.missing_list_threshold)
            .then(|| self.missing_ids.clone());

        let warning = (missing_count > 0).then(|| {
            format!(
                "Figyelem: {missing_count} tétel nincs még megjelölve, ezért egyes skálák rész-eredményeket mutathatnak."
            )
        });

        AssessmentSummary {
            progress: ProgressView {
                answered: self.answered_count,
                total_questions: usize::from(QUESTION_COUNT),
                missing_count,
                missing_ids,
                complete: self.is_complete(),
            },
            warning,
            groups: self.grouped(),
            total_score: self.total_score,
            benchmark: self
                .is_complete()
                .then(|| BenchmarkResult::for_total(self.total_score)),
        }
    }

    /// Result rows bucketed by group. Groups outside the I, II, III ladder
    /// (the ungrouped summary among them) lead, in catalog order.
    pub fn grouped(&self) -> Vec<ResultGroupView> {
        let mut groups: Vec<ResultGroupView> = Vec::new();

        for row in &self.results {
            let name = row.group.unwrap_or(SUMMARY_GROUP);
            let view = ResultRowView {
                key: row.key,
                label: row.label,
                score: row.score,
                max: row.max,
                pct: row.pct,
                subgroup: row.subgroup,
                nested: row.subgroup.is_some(),
            };

            match groups.iter_mut().find(|group| group.group == name) {
                Some(group) => group.rows.push(view),
                None => groups.push(ResultGroupView {
                    group: name,
                    rows: vec![view],
                }),
            }
        }

        groups.sort_by_key(|group| group_position(group.group));
        groups
    }
}

fn group_position(name: &str) -> usize {
    GROUP_ORDER
        .iter()
        .position(|known| *known == name)
        .map_or(0, |index| index + 1)
}
