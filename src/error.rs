use thiserror::Error;

/// Failure kinds for client and mirror operations.
///
/// Every HTTP status the server rejects with maps to its own variant so
/// callers can match on the kind instead of parsing status codes. All
/// status-derived variants carry the original status and raw response
/// body for inspection.
#[derive(Debug, Error)]
pub enum Error {
    #[error("authentication failed")]
    Authentication { status: u16, body: String },

    #[error("access forbidden - insufficient permissions")]
    Forbidden { status: u16, body: String },

    #[error("resource not found")]
    NotFound { status: u16, body: String },

    #[error("bad request: {body}")]
    BadRequest { status: u16, body: String },

    #[error("request failed with status {status}: {body}")]
    Status { status: u16, body: String },

    /// The request never completed: connection refused, timeout, DNS
    /// failure, or a body that could not be read.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("invalid response body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("asset {0} has no download URL")]
    MissingDownloadUrl(String),

    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid configuration: {0}")]
    Config(String),
}

impl Error {
    /// The HTTP status the server answered with, if the failure came
    /// from a completed response.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Authentication { status, .. }
            | Error::Forbidden { status, .. }
            | Error::NotFound { status, .. }
            | Error::BadRequest { status, .. }
            | Error::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
