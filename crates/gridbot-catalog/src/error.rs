//! Catalog loading errors.

use gridbot_types::DiagnosticReport;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog document is not a JSON list of puzzles.
    #[error("invalid catalog JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Two puzzles share an id.
    #[error("duplicate puzzle id: {0}")]
    DuplicateId(String),

    /// One or more puzzles failed validation.
    #[error("catalog has {count} puzzle diagnostic(s):\n{0}", count = .0.total)]
    Invalid(DiagnosticReport),
}

/// Catalog result type alias.
pub type Result<T> = std::result::Result<T, CatalogError>;
