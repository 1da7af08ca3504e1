//! Received response description.

use std::time::Duration;

use serde::de::DeserializeOwned;

use crate::error::DomainResult;
use crate::request::{Header, Headers};

/// Raw outcome of one call. Judging the status is left to callers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseSpec {
    /// Numeric status code.
    pub status: u16,
    /// Response headers.
    pub headers: Headers,
    /// Body decoded as UTF-8, lossily.
    pub body: String,
    /// `Content-Type` value, if the server sent one.
    pub content_type: Option<String>,
    /// Time from send to the last body byte.
    pub duration: Duration,
}

impl ResponseSpec {
    /// Builds a response from what the transport received.
    #[must_use]
    pub fn new(
        status: u16,
        headers: impl IntoIterator<Item = Header>,
        body: &[u8],
        duration: Duration,
    ) -> Self {
        let headers: Headers = headers.into_iter().collect();
        let content_type = headers.get("content-type").map(ToString::to_string);

        Self {
            status,
            headers,
            body: String::from_utf8_lossy(body).into_owned(),
            content_type,
            duration,
        }
    }

    /// Decodes the body into `T`.
    ///
    /// # Errors
    ///
    /// Returns an error if the body is not JSON of the expected shape.
    pub fn json<T: DeserializeOwned>(&self) -> DomainResult<T> {
        Ok(serde_json::from_str(&self.body)?)
    }
}
