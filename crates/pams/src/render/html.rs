use super::text::display_date;
use crate::questionnaire::report::views::{AssessmentSummary, ResultGroupView};
use crate::questionnaire::{AnswerSheet, BenchmarkBand, Rating, RESULTS_TITLE, SECTIONS, TITLE};
use chrono::NaiveDate;

/// Options for HTML generation.
#[derive(Debug, Clone)]
pub struct PageOptions {
    /// Include the questionnaire form above the results.
    pub include_form: bool,
    /// Where the form posts its answers.
    pub form_action: String,
    /// Target of the "clear answers" link.
    pub reset_href: String,
}

impl Default for PageOptions {
    fn default() -> Self {
        Self {
            include_form: true,
            form_action: "/".to_string(),
            reset_href: "/".to_string(),
        }
    }
}

impl PageOptions {
    /// Results only, for printing or saving as PDF.
    pub fn print_only() -> Self {
        Self {
            include_form: false,
            ..Self::default()
        }
    }
}

/// Full HTML document: optional questionnaire form plus the results view.
pub fn render_page(
    answers: &AnswerSheet,
    summary: &AssessmentSummary,
    date: NaiveDate,
    options: &PageOptions,
) -> String {
    let title = if options.include_form {
        TITLE
    } else {
        RESULTS_TITLE
    };

    let mut html = String::new();
    html.push_str("<!DOCTYPE html>\n<html lang=\"hu\">\n<head>\n");
    html.push_str("  <meta charset=\"UTF-8\">\n");
    html.push_str("  <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n");
    html.push_str(&format!("  <title>{}</title>\n", escape_html(title)));
    html.push_str(STYLES);
    html.push_str("</head>\n<body>\n<div class=\"vk-container\" id=\"top\">\n");

    if options.include_form {
        html.push_str(&format!(
            "<header class=\"vk-header\"><h1>{}</h1></header>\n",
            escape_html(TITLE)
        ));
        render_form(&mut html, answers, summary, options);
    }

    render_results(&mut html, summary, date);

    if options.include_form {
        html.push_str("<a class=\"vk-backtotop\" href=\"#top\" aria-label=\"Ugrás az oldal tetejére\">↑</a>\n");
    }
    html.push_str("</div>\n</body>\n</html>\n");
    html
}

fn render_form(
    html: &mut String,
    answers: &AnswerSheet,
    summary: &AssessmentSummary,
    options: &PageOptions,
) {
    html.push_str("<section class=\"vk-scale\">\n  <div class=\"vk-scale-title\">Értékelési skála</div>\n  <ul class=\"vk-scale-chips\">\n");
    for rating in Rating::all() {
        html.push_str(&format!(
            "    <li class=\"chip chip-{value}\"><span class=\"chip-index\">{value}</span><span class=\"chip-label\">{}</span></li>\n",
            escape_html(rating.label()),
            value = rating.value()
        ));
    }
    html.push_str("  </ul>\n</section>\n");

    html.push_str(&format!(
        "<form class=\"vk-form\" method=\"post\" action=\"{}\">\n",
        escape_html(&options.form_action)
    ));

    for (index, section) in SECTIONS.iter().enumerate() {
        html.push_str(&format!(
            "<section class=\"vk-section vk-section--{}\">\n  <h2 class=\"vk-section-title\">{}</h2>\n  <div class=\"vk-questions\">\n",
            index + 1,
            escape_html(section.title)
        ));
        for question in section.questions() {
            let current = answers.get(question.id);
            html.push_str(&format!(
                "    <article class=\"vk-question-card\">\n      <div class=\"vk-q-row\"><div class=\"vk-q-id\">{id}.</div><div class=\"vk-q-text\">{}</div></div>\n      <div class=\"vk-radio-group\" aria-label=\"Kérdés {id} válaszok\">",
                escape_html(question.text),
                id = question.id
            ));
            for rating in Rating::all() {
                let checked = if current == Some(rating) { " checked" } else { "" };
                html.push_str(&format!(
                    "<label class=\"vk-radio-label vk-radio-{value}\"><input class=\"vk-radio-input\" type=\"radio\" name=\"q_{id}\" value=\"{value}\"{checked}><span class=\"vk-radio-value\">{value}</span></label>",
                    value = rating.value(),
                    id = question.id
                ));
            }
            html.push_str("</div>\n    </article>\n");
        }
        html.push_str("  </div>\n</section>\n");
    }

    let progress = &summary.progress;
    html.push_str("<section class=\"vk-controls\">\n");
    html.push_str("  <button type=\"submit\" class=\"btn btn-solid\">Számolás</button>\n");
    html.push_str(&format!(
        "  <a class=\"btn btn-ghost\" href=\"{}\">Válaszok törlése</a>\n",
        escape_html(&options.reset_href)
    ));
    html.push_str("  <button type=\"button\" class=\"btn btn-solid\" onclick=\"window.print()\">PDF mentése</button>\n");
    if progress.complete {
        html.push_str(&format!(
            "  <div class=\"vk-progress\">Kitöltött: <strong>{}/{}</strong> <span class=\"vk-done\">✅</span></div>\n",
            progress.answered, progress.total_questions
        ));
    } else {
        html.push_str(&format!(
            "  <div class=\"vk-progress\">Kitöltött: <strong>{}/{}</strong> <span class=\"vk-missing\">(hiányzik: {})</span></div>\n",
            progress.answered, progress.total_questions, progress.missing_count
        ));
    }
    if let Some(ids) = &progress.missing_ids {
        let listed: Vec<String> = ids.iter().map(u8::to_string).collect();
        html.push_str(&format!(
            "  <div class=\"vk-missing-list\">Hiányzó tételek: {}</div>\n",
            listed.join(", ")
        ));
    }
    html.push_str("</section>\n</form>\n");
}

fn render_results(html: &mut String, summary: &AssessmentSummary, date: NaiveDate) {
    html.push_str("<section class=\"vk-results-section\">\n");
    html.push_str(&format!(
        "  <div class=\"vk-print-header\"><h1>{}</h1><div>Dátum: {}</div></div>\n",
        escape_html(RESULTS_TITLE),
        display_date(date)
    ));

    if let Some(warning) = &summary.warning {
        html.push_str(&format!(
            "  <div class=\"vk-warning\">{}</div>\n",
            escape_html(warning)
        ));
    }

    html.push_str("  <div class=\"vk-results\">\n");
    for group in &summary.groups {
        render_group(html, group);
    }
    html.push_str("  </div>\n</section>\n");

    if let Some(benchmark) = &summary.benchmark {
        html.push_str("<section class=\"vk-benchmark\">\n  <h3 class=\"vk-benchmark-title\">Összehasonlítási adatok</h3>\n");
        html.push_str(&format!(
            "  <div class=\"vk-bench-heading\">N = {} hallgatóval végzett kutatás eredménye</div>\n  <ul class=\"vk-bench-bands\">\n",
            benchmark.reference.respondents
        ));
        html.push_str(&format!(
            "    <li><strong>{}</strong> = átlag</li>\n",
            format!("{:.2}", benchmark.reference.mean_total).replace('.', ",")
        ));
        for band in BenchmarkBand::ordered() {
            let class = if band == benchmark.band {
                " class=\"is-current\""
            } else {
                ""
            };
            html.push_str(&format!(
                "    <li{class}>{}</li>\n",
                escape_html(band.range_label())
            ));
        }
        html.push_str(&format!(
            "  </ul>\n  <div class=\"vk-bench-your\">Az Ön összpontszáma: <strong>{}</strong> — <strong>{}</strong></div>\n</section>\n",
            benchmark.total_score,
            escape_html(benchmark.verdict)
        ));
    }
}

fn render_group(html: &mut String, group: &ResultGroupView) {
    html.push_str(&format!(
        "    <div class=\"vk-group\">\n      <h3 class=\"vk-group-title\">{}</h3>\n      <table class=\"vk-table\"><tbody>\n",
        escape_html(group.group)
    ));
    for row in &group.rows {
        let class = if row.nested {
            " class=\"vk-subgroup-row\""
        } else {
            ""
        };
        html.push_str(&format!(
            "        <tr{class}><td align=\"left\">{}</td><td align=\"center\"><strong>{}</strong></td><td align=\"center\">{}</td><td align=\"center\">{}</td></tr>\n",
            escape_html(row.label),
            row.score,
            row.max,
            row.pct
        ));
    }
    html.push_str("      </tbody></table>\n    </div>\n");
}

pub(crate) fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}

const STYLES: &str = r#"  <style>
    body { font-family: system-ui, sans-serif; margin: 0; color: #1f2933; }
    .vk-container { max-width: 960px; margin: 0 auto; padding: 1.5rem; }
    .vk-scale-chips { display: flex; flex-wrap: wrap; gap: .5rem; list-style: none; padding: 0; }
    .chip { border: 1px solid #cbd2d9; border-radius: 999px; padding: .25rem .75rem; }
    .chip-index { font-weight: 700; margin-right: .35rem; }
    .vk-question-card { border-bottom: 1px solid #e4e7eb; padding: .6rem 0; }
    .vk-q-row { display: flex; gap: .5rem; }
    .vk-q-id { font-weight: 700; min-width: 2.5rem; }
    .vk-radio-group { display: flex; gap: .75rem; margin: .4rem 0 0 2.5rem; }
    .vk-controls { display: flex; flex-wrap: wrap; align-items: center; gap: .75rem; margin: 1.5rem 0; }
    .btn { padding: .45rem 1rem; border-radius: 6px; border: 1px solid #3e4c59; background: #fff; text-decoration: none; color: inherit; cursor: pointer; }
    .btn-solid { background: #3e4c59; color: #fff; }
    .vk-missing { color: #b44d12; }
    .vk-warning { background: #fffbea; border: 1px solid #f0b429; padding: .6rem; margin: 1rem 0; }
    .vk-table { width: 100%; border-collapse: collapse; }
    .vk-table td { border-bottom: 1px solid #e4e7eb; padding: .3rem .5rem; }
    .vk-subgroup-row td:first-child { padding-left: 1.5rem; color: #52606d; }
    .vk-bench-bands .is-current { font-weight: 700; }
    .vk-print-header { display: none; }
    .vk-backtotop { position: fixed; right: 1rem; bottom: 1rem; text-decoration: none; }
    @media print {
      .vk-form, .vk-scale, .vk-header, .vk-backtotop { display: none; }
      .vk-print-header { display: block; }
    }
  </style>
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::questionnaire::{AssessmentReport, ReportOptions, ScaleCatalog};

    fn page(answers: &AnswerSheet, options: &PageOptions) -> String {
        let summary = AssessmentReport::build(&ScaleCatalog::standard(), answers)
            .summary(&ReportOptions::default());
        let date = NaiveDate::from_ymd_opt(2026, 10, 16).expect("valid date");
        render_page(answers, &summary, date, options)
    }

    #[test]
    fn form_checks_recorded_answers() {
        let answers = AnswerSheet::from_pairs([(5, 3)]).expect("sheet");
        let html = page(&answers, &PageOptions::default());

        assert!(html.contains("name=\"q_5\" value=\"3\" checked>"));
        assert!(html.contains("name=\"q_5\" value=\"4\">"));
        assert_eq!(html.matches("type=\"radio\"").count(), 84 * 6);
        assert!(html.contains("onclick=\"window.print()\""));
        assert!(html.contains("Kitöltött: <strong>1/84</strong>"));
    }

    #[test]
    fn print_document_omits_form_and_shows_header() {
        let answers = AnswerSheet::from_pairs((1..=84).map(|id| (id, 5))).expect("sheet");
        let html = page(&answers, &PageOptions::print_only());

        assert!(!html.contains("<form"));
        assert!(html.contains("Vezetői készségek - PAMS eredmények"));
        assert!(html.contains("Dátum: 2026. 10. 16."));
        assert!(html.contains("<li class=\"is-current\">395–421 = a második negyedbe tartozik.</li>"));
        assert!(html.contains("<tr class=\"vk-subgroup-row\"><td align=\"left\">— Coaching és tanácsadás (24–25)</td>"));
    }

    #[test]
    fn escapes_markup() {
        assert_eq!(escape_html("<a href='x'>&\"</a>"), "&lt;a href=&#39;x&#39;&gt;&amp;&quot;&lt;/a&gt;");
    }
}
