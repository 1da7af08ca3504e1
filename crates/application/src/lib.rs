//! Booker Application - Ports, API wrappers and fixtures
//!
//! This crate holds everything between the domain types and the outside
//! world: the HTTP port, one wrapper per remote endpoint, and the payload
//! factory that scenarios draw their test data from.

pub mod api;
pub mod error;
pub mod fixtures;
pub mod ports;

pub use api::{AuthoriseApi, BookingApi};
pub use error::{ApplicationError, ApplicationResult};
pub use fixtures::PayloadFactory;
