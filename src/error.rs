use thiserror::Error;

/// Failure of a single repository fetch.
///
/// Every variant is shown to the user as the same notification; the
/// distinction only matters for logs and tests.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("GitHub API returned status {code}")]
    HttpStatus { code: u16 },

    #[error("Failed to decode repository list: {0}")]
    Decode(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchErrorKind {
    Network,
    HttpStatus { code: u16 },
    Decode,
}

impl FetchError {
    pub fn kind(&self) -> FetchErrorKind {
        match self {
            FetchError::Network(_) => FetchErrorKind::Network,
            FetchError::HttpStatus { code } => FetchErrorKind::HttpStatus { code: *code },
            FetchError::Decode(_) => FetchErrorKind::Decode,
        }
    }
}

#[derive(Error, Debug)]
pub enum RepoSearchError {
    #[error("Fetch failed: {0}")]
    Fetch(#[from] FetchError),

    #[error("Invalid repository record: {0}")]
    InvalidRecord(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Platform error: {0}")]
    Platform(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("No username has been entered yet")]
    NoUsername,

    #[error("No repository at position {0}")]
    RowNotFound(usize),
}

pub type Result<T> = std::result::Result<T, RepoSearchError>;
