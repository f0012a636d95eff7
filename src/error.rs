use thiserror::Error;

#[derive(Error, Debug)]
pub enum AlcanciaError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("GEMINI_API_KEY environment variable not set")]
    MissingApiKey,

    #[error("Advisor error: {0}")]
    Provider(String),

    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    #[error("Unknown transaction: {0}")]
    UnknownTransaction(String),

    #[error("Unknown goal: {0}")]
    UnknownGoal(String),

    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("Invalid date: {0} (expected YYYY-MM-DD)")]
    InvalidDate(String),

    #[error("{0}")]
    Validation(String),

    #[error("Settings error: {0}")]
    Settings(String),
}

pub type Result<T> = std::result::Result<T, AlcanciaError>;
