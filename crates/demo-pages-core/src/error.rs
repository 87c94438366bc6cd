//! Error types shared by the page logic

use thiserror::Error;

pub type PagesResult<T> = std::result::Result<T, PagesError>;

#[derive(Debug, Error)]
pub enum PagesError {
    /// Request never produced a response (DNS, refused connection, CORS...)
    #[error("{0}")]
    Transport(String),

    /// Response arrived but the body could not be read as requested
    #[error("{0}")]
    Decode(String),

    /// Durable key-value store unavailable or rejected a write
    #[error("storage error: {0}")]
    Storage(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<reqwest::Error> for PagesError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() || err.is_body() {
            PagesError::Decode(err.to_string())
        } else {
            PagesError::Transport(err.to_string())
        }
    }
}
