use thiserror::Error;

/// Failures surfaced by every client operation.
#[derive(Error, Debug)]
pub enum Error {
    /// The request never produced a usable response (DNS, TLS, connect, body read).
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The API answered with anything other than 200 OK.
    #[error("request failed, received HTTP {status}")]
    Status { status: u16 },

    /// The response body was not JSON of the expected shape.
    #[error("decoding response: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("encoding request body: {0}")]
    Encode(#[source] serde_json::Error),
}

impl Error {
    /// The HTTP status code, for [`Error::Status`] failures.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Status { status } => Some(*status),
            _ => None,
        }
    }
}

/// A string that isn't one of the vendor's AC mode names.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown mode: {0:?}")]
pub struct ParseModeError(pub String);

pub type Result<T> = std::result::Result<T, Error>;
