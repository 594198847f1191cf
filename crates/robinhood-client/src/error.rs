use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RobinhoodError {
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("response contained error {0}")]
    Service(String),

    #[error("this account requires two factor. Two factor type: {0}")]
    MfaRequired(String),

    #[error("Empty token")]
    EmptyToken,

    #[error("Token cache error at {}: {source}", .path.display())]
    CacheIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("No instrument found for symbol {0}")]
    NotFound(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Token contains characters not allowed in an HTTP header")]
    InvalidToken,

    #[error("Watchlist is not attached to a client")]
    Detached,
}

pub type Result<T> = std::result::Result<T, RobinhoodError>;

impl RobinhoodError {
    pub(crate) fn cache_io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::CacheIo {
            path: path.into(),
            source,
        }
    }
}
