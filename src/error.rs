//! Error types for the report pipeline.
//!
//! Every variant is fatal to a run. Opening the finished report is the only
//! step allowed to fail silently, and it never produces a [`ReportError`].

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    /// Input file does not exist
    #[error("input file not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// A required header column is absent
    #[error("missing required column '{0}' in header")]
    MissingColumn(&'static str),

    /// Score field is not a base-10 integer
    #[error("malformed score '{value}' in row {row}")]
    MalformedScore { row: usize, value: String },

    /// Row is too short to hold every required column
    #[error("row {row} is missing required fields")]
    MalformedRow { row: usize },

    /// The PDF backend could not produce or write the document
    #[error("failed to render report: {0}")]
    RenderFailure(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ReportError>;
