//! Application error types

use booker_domain::DomainError;
use thiserror::Error;

use crate::ports::HttpClientError;

/// Application-level errors.
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// A domain validation or encoding error occurred.
    #[error("domain error: {0}")]
    Domain(#[from] DomainError),

    /// The HTTP call itself failed.
    #[error("HTTP error: {0}")]
    Http(#[from] HttpClientError),

    /// The API refused the supplied credentials.
    #[error("authentication failed: {0}")]
    Authentication(String),

    /// The API answered with a status the caller cannot continue from.
    #[error("unexpected status {actual} (expected {expected}): {body}")]
    UnexpectedStatus {
        /// Status the caller needed.
        expected: u16,
        /// Status actually received.
        actual: u16,
        /// Response body, for diagnosis.
        body: String,
    },
}

/// Result type alias for application operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;
