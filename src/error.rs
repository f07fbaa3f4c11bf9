use thiserror::Error;

pub type Result<T> = std::result::Result<T, PricerError>;

#[derive(Debug, Error)]
pub enum PricerError {
    /// The user query is incomplete. Raised before any request is sent.
    #[error("Invalid search: {0}")]
    Validation(String),

    #[error("Misconfigured environment: {0}")]
    Config(String),

    #[error("Invalid catalog url: {0}")]
    Url(#[from] url::ParseError),

    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Request to {url} failed with status {status}")]
    Status {
        status: reqwest::StatusCode,
        url: String,
    },

    #[error("Catalog response could not be parsed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Selection {index} is out of range, {len} candidates available")]
    Selection { index: usize, len: usize },
}
