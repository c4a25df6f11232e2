use crate::questionnaire::report::views::{AssessmentSummary, ResultGroupView};
use crate::questionnaire::{
    AnswerSheet, BenchmarkBand, Rating, RESULTS_TITLE, SECTIONS, TITLE,
};
use chrono::NaiveDate;

const LABEL_WIDTH: usize = 52;

/// Hungarian short date, as printed on the results sheet (`2026. 10. 16.`).
pub fn display_date(date: NaiveDate) -> String {
    date.format("%Y. %m. %d.").to_string()
}

pub fn rating_legend() -> String {
    Rating::all()
        .map(|rating| format!("{} = {}", rating.value(), rating.label()))
        .collect::<Vec<_>>()
        .join(" | ")
}

/// Questionnaire listing by section; answered items show their rating.
pub fn render_questionnaire(answers: &AnswerSheet) -> String {
    let mut lines = vec![
        TITLE.to_string(),
        format!("Értékelési skála: {}", rating_legend()),
    ];

    for section in SECTIONS.iter() {
        lines.push(String::new());
        lines.push(section.title.to_string());
        for question in section.questions() {
            let mark = answers
                .get(question.id)
                .map(|rating| rating.to_string())
                .unwrap_or_else(|| " ".to_string());
            lines.push(format!("[{mark}] {:>2}. {}", question.id, question.text));
        }
    }

    finish(lines)
}

pub fn render_report(summary: &AssessmentSummary, date: NaiveDate) -> String {
    let mut lines = vec![
        RESULTS_TITLE.to_string(),
        format!("Dátum: {}", display_date(date)),
    ];

    let progress = &summary.progress;
    if progress.complete {
        lines.push(format!("{} ✅", progress.label()));
    } else {
        lines.push(format!(
            "{} (hiányzik: {})",
            progress.label(),
            progress.missing_count
        ));
    }
    if let Some(ids) = &progress.missing_ids {
        let listed: Vec<String> = ids.iter().map(u8::to_string).collect();
        lines.push(format!("Hiányzó tételek: {}", listed.join(", ")));
    }
    if let Some(warning) = &summary.warning {
        lines.push(warning.clone());
    }

    for group in &summary.groups {
        render_group(&mut lines, group);
    }

    if let Some(benchmark) = &summary.benchmark {
        lines.push(String::new());
        lines.push("Összehasonlítási adatok".to_string());
        lines.push(format!(
            "N = {} hallgatóval végzett kutatás eredménye ({})",
            benchmark.reference.respondents, benchmark.reference.survey_year
        ));
        lines.push(format!(
            "- {} = átlag",
            format!("{:.2}", benchmark.reference.mean_total).replace('.', ",")
        ));
        for band in BenchmarkBand::ordered() {
            lines.push(format!("- {}", band.range_label()));
        }
        lines.push(format!(
            "Az Ön összpontszáma: {} — {}",
            benchmark.total_score, benchmark.verdict
        ));
    }

    finish(lines)
}

fn render_group(lines: &mut Vec<String>, group: &ResultGroupView) {
    lines.push(String::new());
    lines.push(group.group.to_string());
    for row in &group.rows {
        let label = if row.nested {
            format!("  {}", row.label)
        } else {
            row.label.to_string()
        };
        lines.push(format!(
            "{label:<LABEL_WIDTH$} {:>4} / {:<4} {:>5}",
            row.score,
            row.max,
            row.pct.to_string()
        ));
    }
}

fn finish(lines: Vec<String>) -> String {
    let mut out = lines.join("\n");
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::questionnaire::{AssessmentReport, ReportOptions, ScaleCatalog};

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 16).expect("valid date")
    }

    #[test]
    fn questionnaire_marks_answered_items() {
        let answers = AnswerSheet::from_pairs([(3, 4)]).expect("sheet");
        let text = render_questionnaire(&answers);
        assert!(text.starts_with(TITLE));
        assert!(text.contains("[4]  3. Tisztában vagyok"));
        assert!(text.contains("[ ]  4. Jó érzékem"));
        assert!(text.contains("II. Interperszonális készségek (24–58)"));
        assert!(text.contains("6 = Teljes mértékben egyetértek"));
    }

    #[test]
    fn report_for_partial_sheet_lists_missing_items() {
        let answers = AnswerSheet::from_pairs((1..=82).map(|id| (id, 2))).expect("sheet");
        let summary = AssessmentReport::build(&ScaleCatalog::standard(), &answers)
            .summary(&ReportOptions::default());
        let text = render_report(&summary, date());

        assert!(text.contains("Dátum: 2026. 10. 16."));
        assert!(text.contains("Kitöltött: 82/84 (hiányzik: 2)"));
        assert!(text.contains("Hiányzó tételek: 83, 84"));
        assert!(text.contains("Figyelem: 2 tétel"));
        assert!(!text.contains("Összehasonlítási adatok"));
    }

    #[test]
    fn report_for_complete_sheet_shows_benchmark() {
        let answers = AnswerSheet::from_pairs((1..=84).map(|id| (id, 6))).expect("sheet");
        let summary = AssessmentReport::build(&ScaleCatalog::standard(), &answers)
            .summary(&ReportOptions::default());
        let text = render_report(&summary, date());

        assert!(text.contains("Kitöltött: 84/84 ✅"));
        assert!(text.contains("394,35 = átlag"));
        assert!(text.contains("Az Ön összpontszáma: 504 — Ön a negyedik (legjobb) negyedbe tartozik"));
        assert!(text.contains("  — Önismeret és nyitottság (1–2)"));
        let summary_at = text.find("\nÖsszegzés\nÖsszpontszám (1–84)").expect("summary group");
        let personal_at = text.find("\nI. Személyes készségek\n").expect("personal group");
        assert!(summary_at < personal_at);
    }

    #[test]
    fn rendered_text_is_newline_terminated_without_stray_blank_lines() {
        let summary = AssessmentReport::build(&ScaleCatalog::standard(), &AnswerSheet::new())
            .summary(&ReportOptions::default());
        for text in [render_report(&summary, date()), render_questionnaire(&AnswerSheet::new())] {
            assert!(text.ends_with('\n'));
            assert!(!text.ends_with("\n\n"));
            assert!(!text.contains("\n\n\n"));
        }
    }
}
