//! CSV import of a completed questionnaire (`question_id,answer` rows).

use super::domain::AssessmentError;
use super::responses::ResponseStore;
use serde::Deserialize;
use std::io::Read;
use std::path::Path;

#[derive(Debug)]
pub enum AnswerImportError {
    Io(std::io::Error),
    Csv(csv::Error),
    Assessment { line: u64, source: AssessmentError },
}

impl std::fmt::Display for AnswerImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AnswerImportError::Io(err) => write!(f, "failed to read answer export: {}", err),
            AnswerImportError::Csv(err) => write!(f, "invalid answer CSV data: {}", err),
            AnswerImportError::Assessment { line, source } => {
                write!(f, "answer on line {} rejected: {}", line, source)
            }
        }
    }
}

impl std::error::Error for AnswerImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AnswerImportError::Io(err) => Some(err),
            AnswerImportError::Csv(err) => Some(err),
            AnswerImportError::Assessment { source, .. } => Some(source),
        }
    }
}

impl From<std::io::Error> for AnswerImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for AnswerImportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

#[derive(Debug, Deserialize)]
struct AnswerRow {
    #[serde(alias = "Question ID", alias = "question", alias = "id")]
    question_id: String,
    #[serde(alias = "Answer", alias = "response")]
    answer: String,
}

pub struct AnswerImporter;

impl AnswerImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<ResponseStore, AnswerImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<ResponseStore, AnswerImportError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::Headers)
            .flexible(false)
            .from_reader(reader);
        let mut store = ResponseStore::new();

        // Header is line 1.
        for (index, row) in csv_reader.deserialize::<AnswerRow>().enumerate() {
            let row = row?;
            let key = row.question_id.trim_start_matches('\u{feff}');
            let line = index as u64 + 2;
            store
                .record_by_key(key, row.answer)
                .map_err(|source| AnswerImportError::Assessment { line, source })?;
        }

        Ok(store)
    }
}
