//! Credential exchange types for the `/auth` endpoint.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};
use crate::request::Header;

/// Credentials exchanged for an access token.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct AuthorisePayload {
    /// Account name.
    pub username: String,
    /// Account password.
    pub password: String,
}

impl AuthorisePayload {
    /// Creates a credential payload.
    #[must_use]
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for AuthorisePayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthorisePayload")
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}

/// Opaque access token issued by the API.
#[derive(Clone, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct AuthToken(String);

impl AuthToken {
    /// Wraps a token string.
    ///
    /// # Errors
    ///
    /// Returns an error if the token is blank.
    pub fn new(token: impl Into<String>) -> DomainResult<Self> {
        let token = token.into();
        if token.trim().is_empty() {
            return Err(DomainError::InvalidIdentifier("empty token".to_string()));
        }
        Ok(Self(token))
    }

    /// Returns the raw token.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AuthToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AuthToken(***)")
    }
}

/// Body of the `/auth` response.
///
/// Bad credentials still answer 200, with a `reason` instead of a `token`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum AuthOutcome {
    /// Credentials accepted.
    Granted {
        /// Issued token.
        token: AuthToken,
    },
    /// Credentials refused.
    Denied {
        /// Server-provided explanation, e.g. "Bad credentials".
        reason: String,
    },
}

/// Where a token is attached on mutating requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TokenPlacement {
    /// `Cookie: token=<token>`
    #[default]
    Cookie,
    /// `Authorization: Bearer <token>`
    Bearer,
}

impl TokenPlacement {
    /// Builds the header carrying `token`.
    #[must_use]
    pub fn header(self, token: &AuthToken) -> Header {
        match self {
            Self::Cookie => Header::new("Cookie", format!("token={}", token.as_str())),
            Self::Bearer => Header::new("Authorization", format!("Bearer {}", token.as_str())),
        }
    }
}

impl FromStr for TokenPlacement {
    type Err = DomainError;

    fn from_str(s: &str) -> DomainResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "cookie" => Ok(Self::Cookie),
            "bearer" => Ok(Self::Bearer),
            other => Err(DomainError::InvalidIdentifier(format!(
                "unknown token placement: {other}"
            ))),
        }
    }
}
