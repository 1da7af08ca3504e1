//! Outgoing request description.

use serde::Serialize;
use url::Url;

use super::{AcceptFormat, Header, Headers, HttpMethod, QueryParam};
use crate::error::{DomainError, DomainResult};

/// Everything the transport needs to send one call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestSpec {
    /// Request method.
    pub method: HttpMethod,
    /// Target URL without query string.
    pub url: String,
    /// Headers to send.
    pub headers: Headers,
    /// Query parameters, appended in order.
    pub query: Vec<QueryParam>,
    /// Raw body, if any.
    pub body: Option<String>,
}

impl RequestSpec {
    /// Creates a request with no headers, query or body.
    #[must_use]
    pub fn new(method: HttpMethod, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            headers: Headers::new(),
            query: Vec::new(),
            body: None,
        }
    }

    /// Sets a header (builder pattern).
    #[must_use]
    pub fn with_header(mut self, header: Header) -> Self {
        self.headers.set(header);
        self
    }

    /// Sets the `Accept` header (builder pattern).
    #[must_use]
    pub fn with_accept(self, accept: AcceptFormat) -> Self {
        self.with_header(Header::new("Accept", accept.mime()))
    }

    /// Appends query parameters (builder pattern).
    #[must_use]
    pub fn with_query(mut self, params: impl IntoIterator<Item = QueryParam>) -> Self {
        self.query.extend(params);
        self
    }

    /// Serializes `body` as JSON and sets the content type.
    ///
    /// # Errors
    ///
    /// Returns an error if the body cannot be serialized.
    pub fn with_json_body<T: Serialize>(mut self, body: &T) -> DomainResult<Self> {
        self.body = Some(serde_json::to_string(body)?);
        Ok(self.with_header(Header::new("Content-Type", "application/json")))
    }

    /// Returns the parsed URL with query parameters applied.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is malformed.
    pub fn full_url(&self) -> DomainResult<Url> {
        let mut url = Url::parse(&self.url)
            .map_err(|e| DomainError::InvalidUrl(format!("{e}: {}", self.url)))?;
        if !self.query.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for param in &self.query {
                pairs.append_pair(&param.key, &param.value);
            }
        }
        Ok(url)
    }
}
