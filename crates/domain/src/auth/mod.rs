//! Authentication domain types

mod types;

pub use types::{AuthOutcome, AuthToken, AuthorisePayload, TokenPlacement};
