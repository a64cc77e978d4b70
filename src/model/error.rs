use thiserror::Error;

/// The standard result type used throughout the application.
pub type StdResult<T> = Result<T, anyhow::Error>;

/// Fetch error
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// The API answered with a non-success status code and its reason phrase.
    #[error("HTTP error {0}: {1}")]
    Http(u16, String),
    /// The request could not be sent, or the response could not be read or decoded.
    #[error("Transport error: {0}")]
    Transport(String),
}

impl FetchError {
    /// Returns `true` if a new attempt of the same request may succeed.
    pub fn is_transient(&self) -> bool {
        match self {
            FetchError::Http(status, _) => *status >= 500,
            FetchError::Transport(_) => true,
        }
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(error: reqwest::Error) -> Self {
        FetchError::Transport(error.to_string())
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(error: serde_json::Error) -> Self {
        FetchError::Transport(format!("Failed to decode repositories: {error}"))
    }
}
