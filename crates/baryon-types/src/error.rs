use thiserror::Error;

#[derive(Error, Debug)]
pub enum BaryonError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Invalid {field} input {value:?}: {reason}")]
    InvalidInput {
        field: &'static str,
        value: String,
        reason: String,
    },

    #[error("Scan error: {0}")]
    ScanError(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type BaryonResult<T> = Result<T, BaryonError>;
