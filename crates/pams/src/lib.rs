//! Scoring engine for the PAMS (Personal Assessment of Management Skills)
//! 84-item self-assessment, with the export formats and renderers used by the
//! CLI and HTTP front ends.

pub mod config;
pub mod error;
pub mod export;
pub mod questionnaire;
pub mod render;
pub mod telemetry;
