//! The PAMS management skills questionnaire: item bank, scoring key,
//! answer state and derived results.

mod answers;
pub mod benchmark;
pub mod questions;
pub mod report;
pub mod scales;
pub mod scoring;

pub use answers::{AnswerError, AnswerSheet, Rating};
pub use benchmark::{BenchmarkBand, BenchmarkResult, REFERENCE_POPULATION};
pub use questions::{question, Question, QuestionSection, QUESTIONS, QUESTION_COUNT, SECTIONS};
pub use report::{AssessmentReport, ReportOptions};
pub use scales::{ScaleCatalog, ScaleDefinition, ScaleItems};
pub use scoring::{score_scales, total_score, Percentage, ScaleResult};

/// Title shown above the questionnaire.
pub const TITLE: &str = "Vezetői készségek - PAMS (84 tétel)";
/// Heading of the printable results page.
pub const RESULTS_TITLE: &str = "Vezetői készségek - PAMS eredmények";
