//! Wrapper for the `/auth` endpoint.

use booker_domain::{AuthOutcome, AuthToken, AuthorisePayload, HttpMethod, ResponseSpec};
use tracing::warn;

use super::{dispatch, endpoint, json_request};
use crate::error::{ApplicationError, ApplicationResult};
use crate::ports::HttpClient;

/// Client for the credential exchange endpoint.
#[derive(Debug, Clone)]
pub struct AuthoriseApi<C> {
    client: C,
    base_url: String,
}

impl<C: HttpClient> AuthoriseApi<C> {
    /// Creates a wrapper issuing requests against `base_url`.
    #[must_use]
    pub fn new(client: C, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// `POST /auth`, returning the raw response.
    ///
    /// # Errors
    ///
    /// Returns an error if the payload cannot be encoded or the request
    /// cannot be sent.
    pub async fn post_credentials(
        &self,
        payload: &AuthorisePayload,
    ) -> ApplicationResult<ResponseSpec> {
        let request = json_request(HttpMethod::Post, endpoint(&self.base_url, "auth"))
            .with_json_body(payload)?;
        dispatch(&self.client, request).await
    }

    /// Exchanges credentials for a token.
    ///
    /// # Errors
    ///
    /// Returns [`ApplicationError::Authentication`] if the API refuses the
    /// credentials, [`ApplicationError::UnexpectedStatus`] for a non-200
    /// answer, and a domain error if the body has neither a token nor a
    /// reason.
    pub async fn token(&self, payload: &AuthorisePayload) -> ApplicationResult<AuthToken> {
        let response = self.post_credentials(payload).await?;
        if response.status != 200 {
            return Err(ApplicationError::UnexpectedStatus {
                expected: 200,
                actual: response.status,
                body: response.body,
            });
        }

        match response.json::<AuthOutcome>()? {
            AuthOutcome::Granted { token } => Ok(token),
            AuthOutcome::Denied { reason } => {
                warn!(username = %payload.username, %reason, "credentials refused");
                Err(ApplicationError::Authentication(reason))
            }
        }
    }
}
