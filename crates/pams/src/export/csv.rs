use super::{ExportError, ImportError};
use crate::questionnaire::{question, AnswerSheet, Rating, ScaleResult, QUESTIONS};
use serde::{Deserialize, Deserializer, Serialize};
use std::io::Read;

#[derive(Debug, Serialize)]
struct AnswerCsvRow<'a> {
    id: u8,
    text: &'a str,
    answer: Option<u8>,
}

#[derive(Debug, Serialize)]
struct ResultCsvRow<'a> {
    key: &'a str,
    label: &'a str,
    score: u32,
    max: u32,
    pct: String,
    group: Option<&'a str>,
    subgroup: Option<&'a str>,
}

fn writer() -> csv::Writer<Vec<u8>> {
    csv::WriterBuilder::new()
        .quote_style(csv::QuoteStyle::Necessary)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new())
}

fn finish(writer: csv::Writer<Vec<u8>>) -> Result<String, ExportError> {
    let bytes = writer
        .into_inner()
        .map_err(|err| ExportError::Buffer(err.into_error()))?;
    Ok(String::from_utf8(bytes)?)
}

/// `id,text,answer` table with one row per question; unanswered items leave
/// `answer` empty.
pub fn answers_to_csv(answers: &AnswerSheet) -> Result<String, ExportError> {
    let mut writer = writer();
    for question in QUESTIONS.iter() {
        writer.serialize(AnswerCsvRow {
            id: question.id,
            text: question.text,
            answer: answers.get(question.id).map(Rating::value),
        })?;
    }
    finish(writer)
}

/// `key,label,score,max,pct,group,subgroup` table of scored scales.
pub fn results_to_csv(results: &[ScaleResult]) -> Result<String, ExportError> {
    let mut writer = writer();
    for row in results {
        writer.serialize(ResultCsvRow {
            key: row.key,
            label: row.label,
            score: row.score,
            max: row.max,
            pct: row.pct.to_string(),
            group: row.group,
            subgroup: row.subgroup,
        })?;
    }
    finish(writer)
}

#[derive(Debug, Deserialize)]
struct ImportedAnswerRow {
    id: i64,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    answer: Option<String>,
}

/// Reads an answer sheet back from the `id,text,answer` table.
///
/// The `text` column is optional and ignored; blank answers stay unanswered.
pub fn answers_from_csv<R: Read>(reader: R) -> Result<AnswerSheet, ImportError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut sheet = AnswerSheet::new();

    for (index, record) in csv_reader.deserialize::<ImportedAnswerRow>().enumerate() {
        let row = record?;
        // header occupies line 1
        let line = index + 2;
        let Some(raw) = row.answer else {
            continue;
        };

        let value: u8 = raw.parse().map_err(|_| ImportError::InvalidAnswer {
            line,
            value: raw.clone(),
        })?;
        let id = u8::try_from(row.id)
            .ok()
            .filter(|id| question(*id).is_some())
            .ok_or(ImportError::UnknownQuestion { line, id: row.id })?;
        let rating = Rating::new(value).map_err(|source| ImportError::Answer { line, source })?;
        sheet
            .answer(id, rating)
            .map_err(|source| ImportError::Answer { line, source })?;
    }

    Ok(sheet)
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}
