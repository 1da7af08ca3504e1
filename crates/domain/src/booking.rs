//! Booking payloads and identifiers.
//!
//! Field names follow the booking API wire format exactly; the remote
//! service owns all validation, so nothing here rejects odd values.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{DomainError, DomainResult};
use crate::request::QueryParam;

/// Wire format for check-in and check-out dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Server-assigned booking identifier.
///
/// The API hands ids out as JSON numbers, but the suite only ever echoes
/// them back in a path, so they are kept as opaque text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct BookingId(String);

impl BookingId {
    /// Creates a booking id from its textual form.
    ///
    /// # Errors
    ///
    /// Returns an error if the id is empty or contains a path separator.
    pub fn new(id: impl Into<String>) -> DomainResult<Self> {
        let id = id.into();
        let trimmed = id.trim();
        if trimmed.is_empty() || trimmed.contains('/') {
            return Err(DomainError::InvalidIdentifier(id));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Returns the id as a path segment.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BookingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<u64> for BookingId {
    fn from(id: u64) -> Self {
        Self(id.to_string())
    }
}

impl<'de> Deserialize<'de> for BookingId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Number(u64),
            Text(String),
        }

        match RawId::deserialize(deserializer)? {
            RawId::Number(id) => Ok(Self::from(id)),
            RawId::Text(id) => Self::new(id).map_err(serde::de::Error::custom),
        }
    }
}

/// Stay dates, serialized as the nested `bookingdates` object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingDates {
    /// Check-in date.
    pub checkin: NaiveDate,
    /// Check-out date.
    pub checkout: NaiveDate,
}

impl BookingDates {
    /// Creates stay dates from already parsed values.
    #[must_use]
    pub const fn new(checkin: NaiveDate, checkout: NaiveDate) -> Self {
        Self { checkin, checkout }
    }
}

/// Full booking body used by create and update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingPayload {
    /// Guest first name.
    pub firstname: String,
    /// Guest last name.
    pub lastname: String,
    /// Total price of the stay.
    pub totalprice: u32,
    /// Whether the deposit has been paid.
    pub depositpaid: bool,
    /// Stay dates.
    pub bookingdates: BookingDates,
    /// Free-text extras such as "Breakfast".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additionalneeds: Option<String>,
}

impl BookingPayload {
    /// Creates a booking without additional needs.
    #[must_use]
    pub fn new(
        firstname: impl Into<String>,
        lastname: impl Into<String>,
        totalprice: u32,
        depositpaid: bool,
        bookingdates: BookingDates,
    ) -> Self {
        Self {
            firstname: firstname.into(),
            lastname: lastname.into(),
            totalprice,
            depositpaid,
            bookingdates,
            additionalneeds: None,
        }
    }

    /// Sets the additional needs (builder pattern).
    #[must_use]
    pub fn with_additional_needs(mut self, needs: impl Into<String>) -> Self {
        self.additionalneeds = Some(needs.into());
        self
    }

    /// Serializes the payload to its JSON wire form.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> DomainResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Returns the payload as a JSON value, for structural comparisons.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_value(&self) -> DomainResult<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }
}

/// Body for a partial update; only present fields go on the wire.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartialBookingPayload {
    /// Guest first name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub firstname: Option<String>,
    /// Guest last name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lastname: Option<String>,
    /// Total price of the stay.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub totalprice: Option<u32>,
    /// Whether the deposit has been paid.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub depositpaid: Option<bool>,
    /// Stay dates.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bookingdates: Option<BookingDates>,
    /// Free-text extras.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additionalneeds: Option<String>,
}

impl PartialBookingPayload {
    /// Creates an empty partial payload.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the first name (builder pattern).
    #[must_use]
    pub fn with_firstname(mut self, firstname: impl Into<String>) -> Self {
        self.firstname = Some(firstname.into());
        self
    }

    /// Sets the last name (builder pattern).
    #[must_use]
    pub fn with_lastname(mut self, lastname: impl Into<String>) -> Self {
        self.lastname = Some(lastname.into());
        self
    }

    /// Sets the total price (builder pattern).
    #[must_use]
    pub const fn with_totalprice(mut self, totalprice: u32) -> Self {
        self.totalprice = Some(totalprice);
        self
    }

    /// Sets the deposit flag (builder pattern).
    #[must_use]
    pub const fn with_depositpaid(mut self, depositpaid: bool) -> Self {
        self.depositpaid = Some(depositpaid);
        self
    }

    /// Applies the present fields on top of a full booking.
    #[must_use]
    pub fn apply_to(&self, booking: &BookingPayload) -> BookingPayload {
        BookingPayload {
            firstname: self
                .firstname
                .clone()
                .unwrap_or_else(|| booking.firstname.clone()),
            lastname: self
                .lastname
                .clone()
                .unwrap_or_else(|| booking.lastname.clone()),
            totalprice: self.totalprice.unwrap_or(booking.totalprice),
            depositpaid: self.depositpaid.unwrap_or(booking.depositpaid),
            bookingdates: self.bookingdates.unwrap_or(booking.bookingdates),
            additionalneeds: self
                .additionalneeds
                .clone()
                .or_else(|| booking.additionalneeds.clone()),
        }
    }
}

/// Response body of `POST /booking`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreatedBooking {
    /// Id assigned by the server.
    pub bookingid: BookingId,
    /// The booking as stored.
    pub booking: BookingPayload,
}

/// One element of the list returned by `GET /booking`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BookingIdEntry {
    /// Booking id.
    pub bookingid: BookingId,
}

/// Optional query filters for `GET /booking`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookingFilter {
    /// Match on guest first name.
    pub firstname: Option<String>,
    /// Match on guest last name.
    pub lastname: Option<String>,
    /// Bookings checking in on or after this date.
    pub checkin: Option<NaiveDate>,
    /// Bookings checking out on or before this date.
    pub checkout: Option<NaiveDate>,
}

impl BookingFilter {
    /// Creates a filter on guest name.
    #[must_use]
    pub fn by_name(firstname: impl Into<String>, lastname: impl Into<String>) -> Self {
        Self {
            firstname: Some(firstname.into()),
            lastname: Some(lastname.into()),
            ..Self::default()
        }
    }

    /// Creates a filter on stay dates.
    #[must_use]
    pub const fn by_dates(checkin: NaiveDate, checkout: NaiveDate) -> Self {
        Self {
            firstname: None,
            lastname: None,
            checkin: Some(checkin),
            checkout: Some(checkout),
        }
    }

    /// Returns the query parameters for the fields that are set.
    #[must_use]
    pub fn to_query(&self) -> Vec<QueryParam> {
        let mut params = Vec::new();
        if let Some(firstname) = &self.firstname {
            params.push(QueryParam::new("firstname", firstname));
        }
        if let Some(lastname) = &self.lastname {
            params.push(QueryParam::new("lastname", lastname));
        }
        if let Some(checkin) = self.checkin {
            params.push(QueryParam::new(
                "checkin",
                checkin.format(DATE_FORMAT).to_string(),
            ));
        }
        if let Some(checkout) = self.checkout {
            params.push(QueryParam::new(
                "checkout",
                checkout.format(DATE_FORMAT).to_string(),
            ));
        }
        params
    }
}
