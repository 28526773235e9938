use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid JSON in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("{path}: expected a JSON array of term strings")]
    NotATermList { path: PathBuf },
    #[error("{path}: expected a JSON object mapping terms to weights")]
    NotAWeightMap { path: PathBuf },
    #[error("{path}: weight for term '{term}' must be a finite number")]
    InvalidWeight { path: PathBuf, term: String },
    #[error("failed to parse CSV {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
    #[error("{path}: missing column '{column}'")]
    MissingColumn { path: PathBuf, column: &'static str },
    #[error("{path}, row {row}: column '{column}' is not a JSON array of strings: {source}")]
    InvalidTerms {
        path: PathBuf,
        row: usize,
        column: &'static str,
        #[source]
        source: serde_json::Error,
    },
}
