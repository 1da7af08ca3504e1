//! Wrappers for the `/booking` and `/ping` endpoints.

use booker_domain::{
    AcceptFormat, AuthToken, BookingFilter, BookingId, BookingPayload, HttpMethod,
    PartialBookingPayload, RequestSpec, ResponseSpec, TokenPlacement,
};

use super::{dispatch, endpoint, json_request};
use crate::error::ApplicationResult;
use crate::ports::HttpClient;

/// Client for the booking resource.
#[derive(Debug, Clone)]
pub struct BookingApi<C> {
    client: C,
    base_url: String,
    token_placement: TokenPlacement,
}

impl<C: HttpClient> BookingApi<C> {
    /// Creates a wrapper issuing requests against `base_url`.
    #[must_use]
    pub fn new(client: C, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            token_placement: TokenPlacement::default(),
        }
    }

    /// Chooses how tokens are attached to mutating calls (builder pattern).
    #[must_use]
    pub const fn with_token_placement(mut self, placement: TokenPlacement) -> Self {
        self.token_placement = placement;
        self
    }

    fn collection_url(&self) -> String {
        endpoint(&self.base_url, "booking")
    }

    fn booking_url(&self, id: &BookingId) -> String {
        endpoint(&self.base_url, &format!("booking/{id}"))
    }

    /// `GET /booking`
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be sent.
    pub async fn all_bookings(&self) -> ApplicationResult<ResponseSpec> {
        let request = json_request(HttpMethod::Get, self.collection_url());
        dispatch(&self.client, request).await
    }

    /// `GET /booking/{id}` asking for `accept`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be sent.
    pub async fn specific_booking(
        &self,
        id: &BookingId,
        accept: AcceptFormat,
    ) -> ApplicationResult<ResponseSpec> {
        let request = RequestSpec::new(HttpMethod::Get, self.booking_url(id)).with_accept(accept);
        dispatch(&self.client, request).await
    }

    /// `GET /booking?firstname=..&lastname=..`
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be sent.
    pub async fn filter_booking_by_name(
        &self,
        firstname: &str,
        lastname: &str,
    ) -> ApplicationResult<ResponseSpec> {
        self.filter_bookings(&BookingFilter::by_name(firstname, lastname))
            .await
    }

    /// `GET /booking` with whichever filters are set.
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be sent.
    pub async fn filter_bookings(&self, filter: &BookingFilter) -> ApplicationResult<ResponseSpec> {
        let request =
            json_request(HttpMethod::Get, self.collection_url()).with_query(filter.to_query());
        dispatch(&self.client, request).await
    }

    /// `POST /booking`
    ///
    /// # Errors
    ///
    /// Returns an error if the payload cannot be encoded or the request
    /// cannot be sent.
    pub async fn create_booking(
        &self,
        payload: &BookingPayload,
    ) -> ApplicationResult<ResponseSpec> {
        let request =
            json_request(HttpMethod::Post, self.collection_url()).with_json_body(payload)?;
        dispatch(&self.client, request).await
    }

    /// `PUT /booking/{id}`
    ///
    /// # Errors
    ///
    /// Returns an error if the payload cannot be encoded or the request
    /// cannot be sent.
    pub async fn update_booking(
        &self,
        id: &BookingId,
        payload: &BookingPayload,
        token: &AuthToken,
    ) -> ApplicationResult<ResponseSpec> {
        let request = json_request(HttpMethod::Put, self.booking_url(id))
            .with_header(self.token_placement.header(token))
            .with_json_body(payload)?;
        dispatch(&self.client, request).await
    }

    /// `PATCH /booking/{id}`
    ///
    /// # Errors
    ///
    /// Returns an error if the payload cannot be encoded or the request
    /// cannot be sent.
    pub async fn partial_update_booking(
        &self,
        id: &BookingId,
        payload: &PartialBookingPayload,
        token: &AuthToken,
    ) -> ApplicationResult<ResponseSpec> {
        let request = json_request(HttpMethod::Patch, self.booking_url(id))
            .with_header(self.token_placement.header(token))
            .with_json_body(payload)?;
        dispatch(&self.client, request).await
    }

    /// `DELETE /booking/{id}`
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be sent.
    pub async fn delete_booking(
        &self,
        id: &BookingId,
        token: &AuthToken,
    ) -> ApplicationResult<ResponseSpec> {
        let request = RequestSpec::new(HttpMethod::Delete, self.booking_url(id))
            .with_header(self.token_placement.header(token));
        dispatch(&self.client, request).await
    }

    /// `GET /ping`, the API health check.
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be sent.
    pub async fn ping(&self) -> ApplicationResult<ResponseSpec> {
        let request = RequestSpec::new(HttpMethod::Get, endpoint(&self.base_url, "ping"));
        dispatch(&self.client, request).await
    }
}
