mod summary;
pub mod views;

pub use summary::{AssessmentReport, ReportOptions, SUMMARY_GROUP};
