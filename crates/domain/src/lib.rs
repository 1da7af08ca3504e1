//! Booker Domain - Core types for the restful-booker acceptance suite
//!
//! This crate defines the payloads exchanged with the booking API, the
//! request and response specifications passed through the HTTP port, and
//! the declarative assertions evaluated against responses.
//! All types here are pure Rust with no I/O dependencies.

pub mod auth;
pub mod booking;
pub mod error;
pub mod request;
pub mod response;
pub mod testing;

pub use auth::{AuthOutcome, AuthToken, AuthorisePayload, TokenPlacement};
pub use booking::{
    BookingDates, BookingFilter, BookingId, BookingIdEntry, BookingPayload, CreatedBooking,
    PartialBookingPayload,
};
pub use error::{DomainError, DomainResult};
pub use request::{AcceptFormat, Header, Headers, HttpMethod, QueryParam, RequestSpec};
pub use response::ResponseSpec;
pub use testing::{Assertion, AssertionResult, TestResults, TestSuite};
