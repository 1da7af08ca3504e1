//! HTTP Request domain types

mod accept;
mod header;
mod method;
mod query;
mod spec;

pub use accept::AcceptFormat;
pub use header::{Header, Headers};
pub use method::HttpMethod;
pub use query::QueryParam;
pub use spec::RequestSpec;
