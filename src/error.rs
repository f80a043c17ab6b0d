use thiserror::Error;

#[derive(Error, Debug)]
pub enum CodeError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Base64 error: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("Amount must be a finite number, got {0}")]
    InvalidAmount(f64),

    #[error("Invalid timestamp: {0} (expected RFC 3339 or YYYY-MM-DD)")]
    InvalidTimestamp(String),

    #[error("Invalid code: {0}")]
    InvalidCode(String),

    #[error("Settings error: {0}")]
    Settings(String),
}

pub type Result<T> = std::result::Result<T, CodeError>;
