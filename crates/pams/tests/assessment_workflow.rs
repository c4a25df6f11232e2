use pams::export::{answers_from_csv, answers_to_csv, results_to_csv, ExportBundle};
use pams::questionnaire::{
    score_scales, total_score, AnswerSheet, AssessmentReport, BenchmarkBand, Rating,
    ReportOptions, ScaleCatalog, SECTIONS,
};
use chrono::{FixedOffset, TimeZone};
use std::collections::HashMap;

fn rating(value: u8) -> Rating {
    Rating::new(value).expect("valid rating")
}

fn uniform_sheet(value: i64) -> AnswerSheet {
    AnswerSheet::from_pairs((1..=84).map(|id| (id, value))).expect("valid sheet")
}

#[test]
fn first_five_items_at_maximum_fill_self_knowledge_scale() {
    let answers =
        AnswerSheet::from_pairs([(1, 6), (2, 6), (3, 6), (4, 6), (5, 6)]).expect("valid sheet");
    let report = AssessmentReport::build(&ScaleCatalog::standard(), &answers);

    let scale = report.result("I_onismeret_total").expect("scale present");
    assert_eq!(scale.label, "Önismeret fejlesztése (1–5)");
    assert_eq!((scale.score, scale.max), (30, 30));
    assert_eq!(scale.pct.to_string(), "100%");

    assert_eq!(report.total_score, 30);
    assert_eq!(report.band, BenchmarkBand::Bottom);
    assert_eq!(report.quartile_text(), "Ön az első negyedbe tartozik");
}

#[test]
fn all_fives_land_in_second_band() {
    let report = AssessmentReport::build(&ScaleCatalog::standard(), &uniform_sheet(5));
    assert_eq!(report.total_score, 420);
    assert_eq!(report.band, BenchmarkBand::Second);
    assert_eq!(report.quartile_text(), "Ön a második negyedbe tartozik");
}

#[test]
fn answer_state_follows_set_overwrite_and_clear() {
    let catalog = ScaleCatalog::standard();
    let mut answers = AnswerSheet::new();

    answers.answer(10, rating(2)).expect("answer");
    answers.answer(10, rating(6)).expect("overwrite");
    answers.answer(11, rating(3)).expect("answer");
    let report = AssessmentReport::build(&catalog, &answers);
    assert_eq!(report.result("I_rovidtavu").map(|row| row.score), Some(9));

    answers.clear(10);
    let report = AssessmentReport::build(&catalog, &answers);
    assert_eq!(report.result("I_rovidtavu").map(|row| row.score), Some(3));

    answers.clear_all();
    let report = AssessmentReport::build(&catalog, &answers);
    assert_eq!(report.missing_count(), 84);
    assert!(report.results.iter().all(|row| row.score == 0));
    let summary = report.summary(&ReportOptions::default());
    assert_eq!(summary.progress.answered, 0);
    assert!(summary.progress.missing_ids.is_none());
}

#[test]
fn group_totals_partition_grand_total() {
    let answers = AnswerSheet::from_pairs((1..=84).map(|id| (id, (id * 7) % 6 + 1))).expect("sheet");
    let report = AssessmentReport::build(&ScaleCatalog::standard(), &answers);
    let groups: u32 = ["I_total", "II_total", "III_total"]
        .iter()
        .map(|key| report.result(key).expect("group total").score)
        .sum();

    assert_eq!(groups, report.total_score);
    assert_eq!(report.result("TOTAL").map(|row| row.score), Some(report.total_score));
    assert_eq!(SECTIONS.iter().map(|section| section.ids().count()).sum::<usize>(), 84);
}

#[test]
fn exported_answer_rows_reproduce_exported_scale_sums() {
    let answers = AnswerSheet::from_pairs(
        (1..=84)
            .filter(|id| id % 5 != 0)
            .map(|id| (id, (id * 11) % 6 + 1)),
    )
    .expect("sheet");
    let catalog = ScaleCatalog::standard();
    let results = score_scales(catalog.scales(), &answers);

    let answers_csv = answers_to_csv(&answers).expect("answers csv");
    let results_csv = results_to_csv(&results).expect("results csv");

    let mut exported_scores: HashMap<String, u32> = HashMap::new();
    let mut reader = csv::Reader::from_reader(results_csv.as_bytes());
    for record in reader.records() {
        let record = record.expect("results row");
        let score = record[2].parse::<u32>().expect("numeric score");
        exported_scores.insert(record[0].to_string(), score);
    }

    let reimported = answers_from_csv(answers_csv.as_bytes()).expect("reimport");
    for rescored in score_scales(catalog.scales(), &reimported) {
        assert_eq!(
            exported_scores.get(rescored.key),
            Some(&rescored.score),
            "{} drifted",
            rescored.key
        );
    }
    assert_eq!(total_score(&reimported), total_score(&answers));
}

#[test]
fn bundle_carries_consistent_artifacts() {
    let answers = uniform_sheet(4);
    let report = AssessmentReport::build(&ScaleCatalog::standard(), &answers);
    let generated_at = FixedOffset::east_opt(3600)
        .expect("offset")
        .with_ymd_and_hms(2026, 3, 2, 8, 0, 0)
        .single()
        .expect("timestamp");
    let bundle = ExportBundle::render(&answers, &report, generated_at).expect("bundle");

    let document: serde_json::Value = serde_json::from_str(&bundle.document).expect("json");
    assert_eq!(document["totalScore"], 336);
    assert_eq!(document["missingIds"], serde_json::json!([]));
    assert_eq!(document["quartileText"], "Ön az első negyedbe tartozik");
    assert_eq!(bundle.answers_csv.lines().count(), 85);
    assert_eq!(bundle.results_csv.lines().count(), 39);
}
