use thiserror::Error;

/// Errors surfaced by the client, the directory and the renderer.
#[derive(Debug, Error)]
pub enum CovidError {
    /// Transport failure.
    #[error("network error: {0}")]
    Network(#[source] reqwest::Error),

    /// The server answered with a non-success HTTP status.
    #[error("network error: GET {url} failed with HTTP {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    /// The response (or a file) did not have the expected JSON shape.
    #[error("decode error: {0}")]
    Decode(String),

    /// No directory or summary entry matched the requested name/code.
    #[error("not found: {0}")]
    NotFound(String),

    /// A raw payload could not be classified as any known record.
    #[error("unsupported type: {0}")]
    UnsupportedType(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<reqwest::Error> for CovidError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            CovidError::Decode(e.to_string())
        } else {
            CovidError::Network(e)
        }
    }
}

impl From<serde_json::Error> for CovidError {
    fn from(e: serde_json::Error) -> Self {
        CovidError::Decode(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, CovidError>;
