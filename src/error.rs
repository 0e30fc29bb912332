//! Custom error types for the monarch-control library.
//!
//! Transport failures (network, timeout, HTTP status) are kept apart from
//! protocol mismatches: a response that does not match the expected grammar
//! is not an error, it is [`Reply::Failed`](crate::Reply::Failed).

use thiserror::Error;

/// Top-level error type for all Monarch operations.
#[derive(Debug, Error)]
pub enum MonarchError {
    /// Connection, DNS, timeout or body-read failure reported by the HTTP client.
    #[error("HTTP error: {0}")]
    Http(ureq::Error),

    /// The device answered with a non-success HTTP status.
    #[error("Device returned HTTP status {status}")]
    HttpStatus { status: u16 },

    /// The device address was empty.
    #[error("Invalid device address '{0}'")]
    InvalidAddress(String),

    /// A command token was empty.
    #[error("Command must not be empty")]
    EmptyCommand,

    /// Encoder index outside the HDX's two encoders.
    #[error("Invalid encoder {0}.\nValid values: 1, 2")]
    InvalidEncoder(u8),
}

impl From<ureq::Error> for MonarchError {
    fn from(err: ureq::Error) -> Self {
        match err {
            ureq::Error::StatusCode(status) => Self::HttpStatus { status },
            other => Self::Http(other),
        }
    }
}
