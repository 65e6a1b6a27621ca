use thiserror::Error;

#[derive(Error, Debug)]
pub enum FrontpageError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("API request failed: {status} {reason}")]
    Request { status: u16, reason: String },

    #[error("Failed to parse response: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid date: {0}")]
    Format(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Clipboard error: {0}")]
    Clipboard(String),
}

impl FrontpageError {
    /// HTTP status carried by a request failure, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            FrontpageError::Request { status, .. } => Some(*status),
            FrontpageError::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}

pub type Result<T> = std::result::Result<T, FrontpageError>;
