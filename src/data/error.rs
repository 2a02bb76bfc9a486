use std::path::PathBuf;

use thiserror::Error;

use super::normalize::REQUIRED_COLUMNS;

/// Everything that can stop a dataset from being built.
///
/// Any of these aborts the whole pipeline: the UI shows one banner built from
/// [`LoadError::user_message`] and renders neither listings nor charts.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to fetch {url}: {source}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("server returned {status} for {url}")]
    HttpStatus {
        url: String,
        status: reqwest::StatusCode,
    },

    /// Drive answers with an HTML interstitial for files it will not serve directly.
    #[error("{url} returned an HTML page instead of CSV data")]
    NotCsv { url: String },

    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("malformed CSV at line {line}: expected {expected} fields, saw {found}")]
    Malformed {
        line: u64,
        expected: usize,
        found: usize,
    },

    #[error("missing required columns: {}", .missing.join(", "))]
    MissingColumns { missing: Vec<String> },
}

impl LoadError {
    /// The single message shown to the user in the error banner.
    pub fn user_message(&self) -> String {
        match self {
            LoadError::MissingColumns { .. } => format!(
                "Your CSV file must contain the following columns: {}",
                REQUIRED_COLUMNS.join(", ")
            ),
            other => format!("Error while processing the file: {other}"),
        }
    }
}
