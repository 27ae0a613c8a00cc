use thiserror::Error;

/// Errors emitted by the activity fetch boundary.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("failed to fetch data: {0}")]
    Http(#[from] reqwest::Error),
    #[error("usage endpoint returned status {0}")]
    Status(u16),
}

pub type Result<T> = std::result::Result<T, FetchError>;
