use thiserror::Error;

#[derive(Debug, Error)]
pub enum GetImgError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Model {model} does not support the {pipeline} pipeline")]
    UnsupportedPipeline { model: String, pipeline: String },

    /// The API answered with a non-200 status. The raw body is kept so
    /// callers can inspect the provider's error payload.
    #[error("API error: status {status}: {body}")]
    Api { status: u16, body: String },

    #[error("Request error: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Response error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Base64 decode error: {0}")]
    Decode(#[from] base64::DecodeError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, GetImgError>;
