//! Error types for profile coercion, configuration, and persistence

use thiserror::Error;

/// Errors raised while turning intake data into a computable profile
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// A field held text that cannot be coerced to the expected type
    #[error("invalid value {value:?} for field `{field}`")]
    InvalidInput { field: &'static str, value: String },

    /// One of the caller-owned mandatory fields (name, age, income) is blank
    #[error("required field `{0}` is missing")]
    MissingField(&'static str),

    /// Intake row could not be read or coerced
    #[error("intake row {row}: {source}")]
    Row {
        row: usize,
        #[source]
        source: Box<AnalysisError>,
    },

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration file is present but malformed
    #[error("configuration error: {0}")]
    Config(String),
}

impl AnalysisError {
    pub(crate) fn invalid(field: &'static str, value: &str) -> Self {
        AnalysisError::InvalidInput {
            field,
            value: value.to_string(),
        }
    }
}

/// Errors raised by analysis stores
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("store serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("analysis `{0}` not found")]
    NotFound(String),
}
