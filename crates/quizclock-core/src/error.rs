//! Problem source error types.
//!
//! These are the only fatal conditions of a quiz: both happen before the
//! first problem is presented. Defined as a concrete enum so the CLI can
//! downcast an `anyhow::Error` and report them differently from other
//! failures.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading problems from a CSV source.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The source file could not be opened or read.
    #[error("Failed to open the CSV file: {}", .path.display())]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A record could not be parsed into a problem.
    #[error("Failed to parse the CSV file: {}", describe(.path, .line, .reason))]
    SourceMalformed {
        path: PathBuf,
        line: Option<u64>,
        reason: String,
    },
}

fn describe(path: &std::path::Path, line: &Option<u64>, reason: &str) -> String {
    match line {
        Some(line) => format!("{}:{line}: {reason}", path.display()),
        None => format!("{}: {reason}", path.display()),
    }
}

impl LoadError {
    /// Returns the source path the error refers to.
    pub fn path(&self) -> &std::path::Path {
        match self {
            LoadError::SourceUnavailable { path, .. } | LoadError::SourceMalformed { path, .. } => {
                path
            }
        }
    }

    /// Returns the 1-based line of the offending record, if known.
    pub fn line(&self) -> Option<u64> {
        match self {
            LoadError::SourceMalformed { line, .. } => *line,
            LoadError::SourceUnavailable { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unavailable_message_names_the_file() {
        let err = LoadError::SourceUnavailable {
            path: PathBuf::from("missing.csv"),
            source: io::Error::new(io::ErrorKind::NotFound, "no such file"),
        };
        assert_eq!(err.to_string(), "Failed to open the CSV file: missing.csv");
        assert_eq!(err.line(), None);
    }

    #[test]
    fn malformed_message_includes_line() {
        let err = LoadError::SourceMalformed {
            path: PathBuf::from("problems.csv"),
            line: Some(3),
            reason: "record has 1 field, expected at least 2".into(),
        };
        assert_eq!(
            err.to_string(),
            "Failed to parse the CSV file: problems.csv:3: record has 1 field, expected at least 2"
        );
        assert_eq!(err.line(), Some(3));
        assert_eq!(err.path(), std::path::Path::new("problems.csv"));
    }
}
