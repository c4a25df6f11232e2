use crate::infra::{deserialize_optional_date, timestamp_for, AppState};
use axum::http::{header, StatusCode};
use axum::response::{Html, IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Extension, Form, Json, Router};
use chrono::{Local, NaiveDate};
use pams::error::AppError;
use pams::export::{ExportBundle, ExportKind};
use pams::questionnaire::report::views::AssessmentSummary;
use pams::questionnaire::{
    AnswerError, AnswerSheet, AssessmentReport, BenchmarkBand, Question, QuestionSection, Rating,
    ScaleCatalog, ScaleDefinition, ScaleResult, QUESTIONS, SECTIONS, TITLE,
};
use pams::render::{render_page, PageOptions};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::collections::BTreeMap;
use tracing::info;

const FORM_FIELD_PREFIX: &str = "q_";

#[derive(Debug, Default, Deserialize)]
pub(crate) struct AssessmentRequest {
    /// Question id to rating; `null` leaves the item unanswered.
    #[serde(default)]
    pub(crate) answers: BTreeMap<i64, Option<i64>>,
    #[serde(default, deserialize_with = "deserialize_optional_date")]
    pub(crate) date: Option<NaiveDate>,
}

impl AssessmentRequest {
    fn answer_sheet(&self) -> Result<AnswerSheet, AnswerError> {
        AnswerSheet::from_pairs(
            self.answers
                .iter()
                .filter_map(|(id, value)| value.map(|value| (*id, value))),
        )
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct RatingView {
    pub(crate) value: u8,
    pub(crate) label: &'static str,
}

#[derive(Debug, Serialize)]
pub(crate) struct QuestionnaireResponse {
    pub(crate) title: &'static str,
    pub(crate) sections: &'static [QuestionSection],
    pub(crate) questions: &'static [Question],
    pub(crate) ratings: Vec<RatingView>,
    pub(crate) scales: &'static [ScaleDefinition],
}

#[derive(Debug, Serialize)]
pub(crate) struct ScoreResponse {
    pub(crate) date: NaiveDate,
    pub(crate) answered_count: usize,
    pub(crate) missing_count: usize,
    pub(crate) missing_ids: Vec<u8>,
    pub(crate) total_score: u32,
    pub(crate) band: BenchmarkBand,
    pub(crate) quartile_text: &'static str,
    pub(crate) results: Vec<ScaleResult>,
    pub(crate) summary: AssessmentSummary,
}

pub(crate) fn assessment_routes() -> Router {
    Router::new()
        .route("/", get(form_page).post(submit_form))
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .route("/api/v1/questionnaire", get(questionnaire_endpoint))
        .route("/api/v1/assessment/score", post(score_endpoint))
        .route("/api/v1/assessment/export/json", post(export_document))
        .route("/api/v1/assessment/export/answers.csv", post(export_answers_table))
        .route("/api/v1/assessment/export/results.csv", post(export_results_table))
        .route("/api/v1/assessment/print", post(print_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn questionnaire_endpoint() -> Json<QuestionnaireResponse> {
    Json(QuestionnaireResponse {
        title: TITLE,
        sections: &SECTIONS,
        questions: &QUESTIONS,
        ratings: Rating::all()
            .map(|rating| RatingView {
                value: rating.value(),
                label: rating.label(),
            })
            .collect(),
        scales: ScaleCatalog::standard().scales(),
    })
}

pub(crate) async fn form_page(Extension(state): Extension<AppState>) -> Html<String> {
    Html(page_for(&AnswerSheet::new(), &state, &PageOptions::default()))
}

/// Re-renders the questionnaire with the posted `q_<id>` radio values.
pub(crate) async fn submit_form(
    Extension(state): Extension<AppState>,
    Form(fields): Form<Vec<(String, String)>>,
) -> Result<Html<String>, AppError> {
    let mut answers = AnswerSheet::new();
    for (name, value) in &fields {
        if let Some(id) = name.strip_prefix(FORM_FIELD_PREFIX) {
            answers.answer_text(id, value)?;
        }
    }
    Ok(Html(page_for(&answers, &state, &PageOptions::default())))
}

pub(crate) async fn score_endpoint(
    Extension(state): Extension<AppState>,
    Json(payload): Json<AssessmentRequest>,
) -> Result<Json<ScoreResponse>, AppError> {
    let answers = payload.answer_sheet()?;
    let report = AssessmentReport::build(&ScaleCatalog::standard(), &answers);
    let summary = report.summary(&state.report_options);
    let date = payload.date.unwrap_or_else(|| Local::now().date_naive());

    info!(
        answered = report.answered_count,
        total = report.total_score,
        "scored assessment"
    );

    Ok(Json(ScoreResponse {
        date,
        answered_count: report.answered_count,
        missing_count: report.missing_count(),
        quartile_text: report.quartile_text(),
        missing_ids: report.missing_ids,
        total_score: report.total_score,
        band: report.band,
        results: report.results,
        summary,
    }))
}

pub(crate) async fn export_document(
    Json(payload): Json<AssessmentRequest>,
) -> Result<Response, AppError> {
    export_response(ExportKind::Document, &payload)
}

pub(crate) async fn export_answers_table(
    Json(payload): Json<AssessmentRequest>,
) -> Result<Response, AppError> {
    export_response(ExportKind::AnswersTable, &payload)
}

pub(crate) async fn export_results_table(
    Json(payload): Json<AssessmentRequest>,
) -> Result<Response, AppError> {
    export_response(ExportKind::ResultsTable, &payload)
}

pub(crate) async fn print_endpoint(
    Extension(state): Extension<AppState>,
    Json(payload): Json<AssessmentRequest>,
) -> Result<Response, AppError> {
    let answers = payload.answer_sheet()?;
    let report = AssessmentReport::build(&ScaleCatalog::standard(), &answers);
    let date = payload.date.unwrap_or_else(|| Local::now().date_naive());
    let html = render_page(
        &answers,
        &report.summary(&state.report_options),
        date,
        &PageOptions::print_only(),
    );

    Ok((
        StatusCode::OK,
        [(header::CONTENT_TYPE, mime::TEXT_HTML_UTF_8.as_ref())],
        html,
    )
        .into_response())
}

fn export_response(kind: ExportKind, payload: &AssessmentRequest) -> Result<Response, AppError> {
    let answers = payload.answer_sheet()?;
    let report = AssessmentReport::build(&ScaleCatalog::standard(), &answers);
    let bundle = ExportBundle::render(&answers, &report, timestamp_for(payload.date))?;
    let file_name = kind.file_name(bundle.date);

    info!(file = %file_name, answered = report.answered_count, "serving export");

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, kind.content_type().to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{file_name}\""),
            ),
        ],
        bundle.contents(kind).to_string(),
    )
        .into_response())
}

fn page_for(answers: &AnswerSheet, state: &AppState, options: &PageOptions) -> String {
    let report = AssessmentReport::build(&ScaleCatalog::standard(), answers);
    render_page(
        answers,
        &report.summary(&state.report_options),
        Local::now().date_naive(),
        options,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use metrics_exporter_prometheus::PrometheusBuilder;
    use pams::questionnaire::ReportOptions;
    use std::sync::atomic::AtomicBool;
    use std::sync::Arc;
    use tower::ServiceExt;

    fn test_state() -> AppState {
        let recorder = PrometheusBuilder::new().build_recorder();
        AppState {
            readiness: Arc::new(AtomicBool::new(true)),
            metrics: Arc::new(recorder.handle()),
            report_options: ReportOptions::default(),
        }
    }

    fn app() -> Router {
        assessment_routes().layer(Extension(test_state()))
    }

    fn json_post(uri: &str, body: serde_json::Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .expect("request builds")
    }

    async fn body_text(response: Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body readable");
        String::from_utf8(bytes.to_vec()).expect("utf-8 body")
    }

    #[tokio::test]
    async fn score_endpoint_reports_first_scale() {
        let request = AssessmentRequest {
            answers: (1..=5).map(|id| (id, Some(6))).collect(),
            date: None,
        };

        let Json(body) = score_endpoint(Extension(test_state()), Json(request))
            .await
            .expect("scores");

        let scale = body
            .results
            .iter()
            .find(|row| row.key == "I_onismeret_total")
            .expect("scale present");
        assert_eq!((scale.score, scale.max), (30, 30));
        assert_eq!(body.total_score, 30);
        assert_eq!(body.band, BenchmarkBand::Bottom);
        assert_eq!(body.missing_count, 79);
        assert!(body.summary.benchmark.is_none());
    }

    #[tokio::test]
    async fn score_endpoint_ignores_null_answers() {
        let mut answers: BTreeMap<i64, Option<i64>> = (1..=84).map(|id| (id, Some(5))).collect();
        answers.insert(84, None);
        let request = AssessmentRequest {
            answers,
            date: None,
        };

        let Json(body) = score_endpoint(Extension(test_state()), Json(request))
            .await
            .expect("scores");
        assert_eq!(body.answered_count, 83);
        assert_eq!(body.summary.progress.missing_ids, Some(vec![84]));
    }

    #[tokio::test]
    async fn invalid_rating_is_bad_request() {
        let response = app()
            .oneshot(json_post(
                "/api/v1/assessment/score",
                json!({ "answers": { "3": 9 } }),
            ))
            .await
            .expect("response");

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body: serde_json::Value =
            serde_json::from_str(&body_text(response).await).expect("json error body");
        assert!(body["error"]
            .as_str()
            .expect("error message")
            .contains("rating 9"));
    }

    #[tokio::test]
    async fn results_csv_is_an_attachment() {
        let response = app()
            .oneshot(json_post(
                "/api/v1/assessment/export/results.csv",
                json!({ "answers": { "1": 4 }, "date": "2026-03-02" }),
            ))
            .await
            .expect("response");

        assert_eq!(response.status(), StatusCode::OK);
        let disposition = response
            .headers()
            .get(header::CONTENT_DISPOSITION)
            .and_then(|value| value.to_str().ok())
            .expect("disposition header")
            .to_string();
        assert_eq!(
            disposition,
            "attachment; filename=\"pams-results-2026-03-02.csv\""
        );

        let body = body_text(response).await;
        assert!(body.starts_with("key,label,score,max,pct,group,subgroup\n"));
        assert_eq!(body.lines().count(), 39);
    }

    #[tokio::test]
    async fn json_export_carries_document_fields() {
        let response = app()
            .oneshot(json_post(
                "/api/v1/assessment/export/json",
                json!({ "answers": { "2": 6 }, "date": "2026-03-02" }),
            ))
            .await
            .expect("response");

        assert_eq!(response.status(), StatusCode::OK);
        let document: serde_json::Value =
            serde_json::from_str(&body_text(response).await).expect("json document");
        assert_eq!(document["answeredCount"], 1);
        assert_eq!(document["missingCount"], 83);
        assert_eq!(document["totalScore"], 6);
        assert!(document["date"]
            .as_str()
            .expect("date string")
            .starts_with("2026-03-02T"));
    }

    #[tokio::test]
    async fn form_submission_marks_chosen_ratings() {
        let request = Request::builder()
            .method("POST")
            .uri("/")
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from("q_1=6&q_2=3&submit=1"))
            .expect("request builds");

        let response = app().oneshot(request).await.expect("response");
        assert_eq!(response.status(), StatusCode::OK);
        let html = body_text(response).await;
        assert!(html.contains("Kitöltött: <strong>2/84</strong>"));
        assert!(html.contains("name=\"q_1\" value=\"6\" checked"));
    }

    #[tokio::test]
    async fn print_renders_results_without_form() {
        let response = app()
            .oneshot(json_post(
                "/api/v1/assessment/print",
                json!({ "answers": { "1": 1 } }),
            ))
            .await
            .expect("response");

        assert_eq!(response.status(), StatusCode::OK);
        let html = body_text(response).await;
        assert!(html.contains("<title>Vezetői készségek - PAMS eredmények</title>"));
        assert!(!html.contains("<form"));
    }

    #[tokio::test]
    async fn questionnaire_lists_all_items() {
        let Json(body) = questionnaire_endpoint().await;
        assert_eq!(body.questions.len(), 84);
        assert_eq!(body.sections.len(), 3);
        assert_eq!(body.ratings.len(), 6);
        assert_eq!(body.scales.len(), 38);
    }

    #[tokio::test]
    async fn readiness_reflects_flag() {
        let state = test_state();
        state
            .readiness
            .store(false, std::sync::atomic::Ordering::Relaxed);
        let response = readiness_endpoint(Extension(state)).await.into_response();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }
}
