//! Booker Acceptance - Scenario harness
//!
//! Wires configuration, the reqwest adapter and the API wrappers into a
//! [`Harness`] that scenarios build fresh for every test. The scenarios
//! themselves live under `tests/`.

use booker_application::ports::{HttpClient, HttpClientError};
use booker_application::{ApplicationError, AuthoriseApi, BookingApi};
use booker_domain::{
    AuthToken, BookingId, BookingPayload, CreatedBooking, ResponseSpec, TestResults, TestSuite,
};
use booker_infrastructure::{BookerConfig, ConfigError, ReqwestHttpClient, init_tracing, run_suite};
use thiserror::Error;
use tracing::{info, warn};

/// Errors raised while arranging a scenario.
#[derive(Debug, Error)]
pub enum HarnessError {
    /// Configuration could not be read.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// An API call or its decoding failed.
    #[error(transparent)]
    Application(#[from] ApplicationError),

    /// The HTTP client could not be built.
    #[error("client error: {0}")]
    Client(#[from] HttpClientError),
}

/// Everything one scenario needs: both API wrappers and the suite
/// configuration.
#[derive(Debug)]
pub struct Harness<C = ReqwestHttpClient> {
    config: BookerConfig,
    bookings: BookingApi<C>,
    auth: AuthoriseApi<C>,
}

impl Harness<ReqwestHttpClient> {
    /// Builds a harness from `BOOKER_*` environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if the environment holds invalid values or the
    /// HTTP client cannot be created.
    pub fn from_env() -> Result<Self, HarnessError> {
        Self::with_config(BookerConfig::from_env()?)
    }

    /// Builds a harness with a reqwest client for `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn with_config(config: BookerConfig) -> Result<Self, HarnessError> {
        init_tracing();
        let client = ReqwestHttpClient::new(config.timeout)?;
        info!(base_url = %config.base_url, "harness ready");
        Ok(Self::with_client(client, config))
    }
}

impl<C: HttpClient + Clone> Harness<C> {
    /// Builds a harness around any `HttpClient`.
    #[must_use]
    pub fn with_client(client: C, config: BookerConfig) -> Self {
        let bookings = BookingApi::new(client.clone(), config.base_url.clone())
            .with_token_placement(config.token_placement);
        let auth = AuthoriseApi::new(client, config.base_url.clone());
        Self {
            config,
            bookings,
            auth,
        }
    }
}

impl<C: HttpClient> Harness<C> {
    /// The booking endpoint wrappers.
    #[must_use]
    pub const fn bookings(&self) -> &BookingApi<C> {
        &self.bookings
    }

    /// The `/auth` endpoint wrapper.
    #[must_use]
    pub const fn auth(&self) -> &AuthoriseApi<C> {
        &self.auth
    }

    /// The configuration this harness was built from.
    #[must_use]
    pub const fn config(&self) -> &BookerConfig {
        &self.config
    }

    /// Creates `payload` and returns the id the server assigned.
    ///
    /// # Errors
    ///
    /// Returns an error if the call fails, the status is not 200, or the
    /// body is not a created booking.
    pub async fn create_booking(
        &self,
        payload: &BookingPayload,
    ) -> Result<BookingId, HarnessError> {
        let response = self.bookings.create_booking(payload).await?;
        if response.status != 200 {
            return Err(ApplicationError::UnexpectedStatus {
                expected: 200,
                actual: response.status,
                body: response.body,
            }
            .into());
        }
        let created: CreatedBooking = response.json().map_err(ApplicationError::from)?;
        info!(booking_id = %created.bookingid, "booking created");
        Ok(created.bookingid)
    }

    /// Exchanges the configured credentials for a token.
    ///
    /// # Errors
    ///
    /// Returns an error if the call fails or the credentials are refused.
    pub async fn token(&self) -> Result<AuthToken, HarnessError> {
        Ok(self.auth.token(&self.config.credentials()).await?)
    }

    /// Evaluates `suite` against `response`.
    #[must_use]
    pub fn check(&self, suite: &TestSuite, response: &ResponseSpec) -> TestResults {
        let results = run_suite(suite, response);
        if results.all_passed() {
            info!(base_url = %self.config.base_url, suite = %suite.name, "suite passed");
        } else {
            warn!(base_url = %self.config.base_url, "{}", results.report());
        }
        results
    }

    /// Evaluates `suite` and fails the calling test with a report of every
    /// failed assertion.
    ///
    /// # Panics
    ///
    /// Panics if any assertion of `suite` does not hold.
    pub fn assert_suite(&self, suite: &TestSuite, response: &ResponseSpec) {
        let results = self.check(suite, response);
        assert!(results.all_passed(), "{}", results.report());
    }
}
