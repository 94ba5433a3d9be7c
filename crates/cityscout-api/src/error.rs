use thiserror::Error;

/// Everything an outbound call can trip over
///
/// Transport problems, non-2xx answers and bodies that don't look like
/// what we decode are kept apart so the relay can report them, even though
/// it answers them all the same way.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("API request failed: status {status}: {body}")]
    RequestFailed { status: u16, body: String },

    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    ParseError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ApiError>;
