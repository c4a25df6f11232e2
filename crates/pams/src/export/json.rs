use super::{ExportError, ImportError};
use crate::questionnaire::{AnswerSheet, AssessmentReport, ScaleResult};
use chrono::{DateTime, FixedOffset};
use serde::Serialize;
use serde_json::Value;

/// Structured export: raw answers, computed results and bookkeeping.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportDocument<'a> {
    pub date: DateTime<FixedOffset>,
    pub answered_count: usize,
    pub missing_count: usize,
    pub missing_ids: &'a [u8],
    pub total_score: u32,
    pub quartile_text: &'static str,
    pub answers: &'a AnswerSheet,
    pub results: &'a [ScaleResult],
}

impl<'a> ExportDocument<'a> {
    pub fn new(
        answers: &'a AnswerSheet,
        report: &'a AssessmentReport,
        date: DateTime<FixedOffset>,
    ) -> Self {
        Self {
            date,
            answered_count: report.answered_count,
            missing_count: report.missing_count(),
            missing_ids: &report.missing_ids,
            total_score: report.total_score,
            quartile_text: report.quartile_text(),
            answers,
            results: &report.results,
        }
    }

    pub fn to_json_pretty(&self) -> Result<String, ExportError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Accepts either a full export document or a bare `{"id": value}` object.
pub fn answers_from_json(raw: &str) -> Result<AnswerSheet, ImportError> {
    let value: Value = serde_json::from_str(raw)?;
    let answers = match value {
        Value::Object(mut document) if document.contains_key("answers") => document
            .remove("answers")
            .unwrap_or(Value::Null),
        other => other,
    };
    Ok(serde_json::from_value(answers)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::questionnaire::ScaleCatalog;
    use chrono::TimeZone;

    fn timestamp() -> DateTime<FixedOffset> {
        FixedOffset::east_opt(2 * 3600)
            .expect("valid offset")
            .with_ymd_and_hms(2026, 10, 16, 9, 30, 0)
            .single()
            .expect("valid timestamp")
    }

    #[test]
    fn document_uses_camel_case_fields() {
        let answers = AnswerSheet::from_pairs([(1, 6), (2, 5)]).expect("sheet");
        let report = AssessmentReport::build(&ScaleCatalog::standard(), &answers);
        let document = ExportDocument::new(&answers, &report, timestamp());
        let value: Value =
            serde_json::from_str(&document.to_json_pretty().expect("json")).expect("parse back");

        assert_eq!(value["date"], "2026-10-16T09:30:00+02:00");
        assert_eq!(value["answeredCount"], 2);
        assert_eq!(value["missingCount"], 82);
        assert_eq!(value["missingIds"][0], 3);
        assert_eq!(value["totalScore"], 11);
        assert_eq!(value["quartileText"], "Ön az első negyedbe tartozik");
        assert_eq!(value["answers"]["1"], 6);
        assert_eq!(value["results"].as_array().map(Vec::len), Some(38));
        assert_eq!(value["results"][0]["key"], "I_total");
        assert_eq!(value["results"][0]["pct"], "8%");
    }

    #[test]
    fn import_understands_documents_and_bare_maps() {
        let answers = AnswerSheet::from_pairs([(7, 2), (70, 4)]).expect("sheet");
        let report = AssessmentReport::build(&ScaleCatalog::standard(), &answers);
        let json = ExportDocument::new(&answers, &report, timestamp())
            .to_json_pretty()
            .expect("json");

        assert_eq!(answers_from_json(&json).expect("document import"), answers);
        assert_eq!(
            answers_from_json(r#"{"7": 2, "70": 4}"#).expect("bare import"),
            answers
        );
        assert!(answers_from_json(r#"{"answers": {"7": 0}}"#).is_err());
        assert!(answers_from_json("[1, 2]").is_err());
    }
}
