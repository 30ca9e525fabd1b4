//! CSV problem loader.
//!
//! Reads header-less `question,answer` records into an ordered list of
//! [`Problem`]s. The whole source is read before the quiz starts, so a
//! malformed record anywhere aborts the run before the first prompt.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ErrorKind, ReaderBuilder};

use crate::error::LoadError;
use crate::model::Problem;

/// Open `path` and parse every record into a [`Problem`].
pub fn load_problems(path: &Path) -> Result<Vec<Problem>, LoadError> {
    let file = File::open(path).map_err(|source| LoadError::SourceUnavailable {
        path: path.to_path_buf(),
        source,
    })?;

    let problems = parse_problems(file, path)?;
    tracing::debug!(count = problems.len(), path = %path.display(), "problems loaded");
    Ok(problems)
}

/// Parse CSV content from any reader. `source_path` is only used in errors.
pub fn parse_problems<R: Read>(reader: R, source_path: &Path) -> Result<Vec<Problem>, LoadError> {
    let mut csv_reader = ReaderBuilder::new().has_headers(false).from_reader(reader);

    let mut problems = Vec::new();
    for record in csv_reader.records() {
        let record = record.map_err(|e| csv_error(e, source_path))?;
        let line = record.position().map(|p| p.line());

        match (record.get(0), record.get(1)) {
            (Some(question), Some(answer)) => problems.push(Problem::new(question, answer)),
            _ => {
                return Err(LoadError::SourceMalformed {
                    path: source_path.to_path_buf(),
                    line,
                    reason: format!(
                        "record has {} field(s), expected at least 2",
                        record.len()
                    ),
                });
            }
        }
    }

    Ok(problems)
}

fn csv_error(err: csv::Error, source_path: &Path) -> LoadError {
    let line = err.position().map(|p| p.line());
    let path = source_path.to_path_buf();

    let reason = match err.into_kind() {
        ErrorKind::Io(source) => return LoadError::SourceUnavailable { path, source },
        ErrorKind::UnequalLengths {
            expected_len, len, ..
        } => format!("record has {len} field(s), previous records have {expected_len}"),
        ErrorKind::Utf8 { err, .. } => format!("invalid UTF-8: {err}"),
        other => format!("{other:?}"),
    };

    LoadError::SourceMalformed { path, line, reason }
}
