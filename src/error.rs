use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("http {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("invalid json: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("malformed envelope: missing {0}")]
    Envelope(&'static str),

    #[error("api error: {message}")]
    Remote { message: String },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid timeout: {0}")]
    InvalidTimeout(String),

    #[error("invalid log level: {0}")]
    InvalidLogLevel(String),

    #[error("invalid base url: {0}")]
    InvalidBaseUrl(String),
}
