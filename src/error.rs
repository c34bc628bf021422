use thiserror::Error;

#[derive(Error, Debug)]
pub enum LmError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Statistics unavailable: {0}")]
    StatisticsUnavailable(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Duplicate feature name: {0}")]
    DuplicateFeature(String),
}

pub type Result<T> = std::result::Result<T, LmError>;
