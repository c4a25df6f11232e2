//! JSON and CSV serializations of an assessment, plus the readers that turn
//! those files back into an answer sheet.

mod csv;
mod json;

pub use self::csv::{answers_from_csv, answers_to_csv, results_to_csv};
pub use self::json::{answers_from_json, ExportDocument};

use crate::questionnaire::{AnswerError, AnswerSheet, AssessmentReport};
use chrono::{DateTime, FixedOffset, NaiveDate};
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

const FILE_PREFIX: &str = "pams";

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("failed to encode CSV: {0}")]
    Csv(#[from] ::csv::Error),
    #[error("failed to flush CSV buffer: {0}")]
    Buffer(std::io::Error),
    #[error("CSV output was not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
    #[error("failed to encode JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    #[error("failed to read answers: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid answers CSV: {0}")]
    Csv(#[from] ::csv::Error),
    #[error("invalid answers JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("line {line}: '{value}' is not a rating")]
    InvalidAnswer { line: usize, value: String },
    #[error("line {line}: question {id} does not exist")]
    UnknownQuestion { line: usize, id: i64 },
    #[error("line {line}: {source}")]
    Answer { line: usize, source: AnswerError },
}

/// Input formats understood by [`load_answers`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerFormat {
    Json,
    Csv,
}

impl AnswerFormat {
    /// `.json` files are JSON, anything else is treated as CSV.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::Csv,
        }
    }
}

pub fn read_answers<R: Read>(mut reader: R, format: AnswerFormat) -> Result<AnswerSheet, ImportError> {
    match format {
        AnswerFormat::Csv => answers_from_csv(reader),
        AnswerFormat::Json => {
            let mut raw = String::new();
            reader.read_to_string(&mut raw)?;
            answers_from_json(&raw)
        }
    }
}

pub fn load_answers<P: AsRef<Path>>(path: P) -> Result<AnswerSheet, ImportError> {
    let path = path.as_ref();
    let file = fs::File::open(path)?;
    let sheet = read_answers(file, AnswerFormat::from_path(path))?;
    info!(path = %path.display(), answered = sheet.answered_count(), "loaded answers");
    Ok(sheet)
}

/// Which of the three export artifacts a file holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportKind {
    Document,
    AnswersTable,
    ResultsTable,
}

impl ExportKind {
    pub const fn ordered() -> [Self; 3] {
        [Self::Document, Self::AnswersTable, Self::ResultsTable]
    }

    /// Date-stamped download name, e.g. `pams-results-2026-10-16.json`.
    pub fn file_name(self, date: NaiveDate) -> String {
        let (stem, extension) = match self {
            Self::Document => ("results", "json"),
            Self::AnswersTable => ("answers", "csv"),
            Self::ResultsTable => ("results", "csv"),
        };
        format!("{FILE_PREFIX}-{stem}-{}.{extension}", date.format("%Y-%m-%d"))
    }

    pub const fn content_type(self) -> &'static str {
        match self {
            Self::Document => "application/json",
            Self::AnswersTable | Self::ResultsTable => "text/csv; charset=utf-8",
        }
    }
}

/// All export artifacts for one answer sheet, rendered in memory.
#[derive(Debug, Clone)]
pub struct ExportBundle {
    pub date: NaiveDate,
    pub document: String,
    pub answers_csv: String,
    pub results_csv: String,
}

impl ExportBundle {
    pub fn render(
        answers: &AnswerSheet,
        report: &AssessmentReport,
        generated_at: DateTime<FixedOffset>,
    ) -> Result<Self, ExportError> {
        Ok(Self {
            date: generated_at.date_naive(),
            document: ExportDocument::new(answers, report, generated_at).to_json_pretty()?,
            answers_csv: answers_to_csv(answers)?,
            results_csv: results_to_csv(&report.results)?,
        })
    }

    pub fn contents(&self, kind: ExportKind) -> &str {
        match kind {
            ExportKind::Document => &self.document,
            ExportKind::AnswersTable => &self.answers_csv,
            ExportKind::ResultsTable => &self.results_csv,
        }
    }

    /// Writes every artifact into `dir`, returning the paths written.
    pub fn write_to_dir(&self, dir: &Path) -> Result<Vec<PathBuf>, ExportError> {
        fs::create_dir_all(dir).map_err(|source| {
            warn!(dir = %dir.display(), error = %source, "export directory unavailable");
            ExportError::Write {
                path: dir.to_path_buf(),
                source,
            }
        })?;

        let mut written = Vec::with_capacity(3);
        for kind in ExportKind::ordered() {
            let path = dir.join(kind.file_name(self.date));
            if let Err(source) = fs::write(&path, self.contents(kind)) {
                warn!(path = %path.display(), error = %source, "export failed");
                return Err(ExportError::Write { path, source });
            }
            info!(path = %path.display(), "exported assessment");
            written.push(path);
        }
        Ok(written)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::questionnaire::ScaleCatalog;
    use chrono::TimeZone;

    #[test]
    fn file_names_are_date_stamped() {
        let date = NaiveDate::from_ymd_opt(2026, 10, 16).expect("valid date");
        assert_eq!(
            ExportKind::Document.file_name(date),
            "pams-results-2026-10-16.json"
        );
        assert_eq!(
            ExportKind::AnswersTable.file_name(date),
            "pams-answers-2026-10-16.csv"
        );
        assert_eq!(
            ExportKind::ResultsTable.file_name(date),
            "pams-results-2026-10-16.csv"
        );
    }

    #[test]
    fn format_is_chosen_by_extension() {
        assert_eq!(AnswerFormat::from_path(Path::new("a.JSON")), AnswerFormat::Json);
        assert_eq!(AnswerFormat::from_path(Path::new("a.csv")), AnswerFormat::Csv);
        assert_eq!(AnswerFormat::from_path(Path::new("answers")), AnswerFormat::Csv);
    }

    fn sample_bundle(answers: &AnswerSheet) -> ExportBundle {
        let report = AssessmentReport::build(&ScaleCatalog::standard(), answers);
        let generated_at = FixedOffset::east_opt(0)
            .expect("offset")
            .with_ymd_and_hms(2026, 10, 16, 12, 0, 0)
            .single()
            .expect("timestamp");
        ExportBundle::render(answers, &report, generated_at).expect("bundle")
    }

    #[test]
    fn bundle_writes_three_files() {
        let answers = AnswerSheet::from_pairs([(1, 1)]).expect("sheet");
        let bundle = sample_bundle(&answers);

        let dir = std::env::temp_dir().join(format!("pams-export-test-{}", std::process::id()));
        let written = bundle.write_to_dir(&dir).expect("write");
        assert_eq!(written.len(), 3);
        for path in &written {
            assert!(path.exists(), "{} missing", path.display());
        }
        let reloaded = load_answers(dir.join("pams-answers-2026-10-16.csv")).expect("reload");
        assert_eq!(reloaded, answers);
        let reloaded = load_answers(dir.join("pams-results-2026-10-16.json")).expect("reload");
        assert_eq!(reloaded, answers);

        fs::remove_dir_all(&dir).expect("cleanup");
    }

    #[test]
    fn unwritable_directory_fails_with_its_path() {
        let bundle = sample_bundle(&AnswerSheet::new());
        let blocker =
            std::env::temp_dir().join(format!("pams-export-blocker-{}", std::process::id()));
        fs::write(&blocker, "regular file").expect("create blocker");
        let target = blocker.join("exports");

        let err = bundle.write_to_dir(&target).expect_err("parent is a file");
        match err {
            ExportError::Write { path, .. } => assert_eq!(path, target),
            other => panic!("unexpected error: {other}"),
        }

        fs::remove_file(&blocker).expect("cleanup");
    }
}
