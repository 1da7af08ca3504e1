//! Thin wrappers, one function per remote endpoint.
//!
//! Each wrapper issues exactly one request and hands back the raw
//! [`ResponseSpec`]; status codes are for the caller to judge.

mod authorise;
mod booking;

pub use authorise::AuthoriseApi;
pub use booking::BookingApi;

use booker_domain::{AcceptFormat, HttpMethod, RequestSpec, ResponseSpec};
use tracing::debug;

use crate::error::ApplicationResult;
use crate::ports::HttpClient;

/// Joins `path` onto a base URL, tolerating a trailing slash on the base.
fn endpoint(base_url: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// Starts a request that expects JSON back.
fn json_request(method: HttpMethod, url: String) -> RequestSpec {
    RequestSpec::new(method, url).with_accept(AcceptFormat::Json)
}

async fn dispatch<C: HttpClient>(
    client: &C,
    request: RequestSpec,
) -> ApplicationResult<ResponseSpec> {
    debug!(method = %request.method, url = %request.url, "sending request");
    let response = client.execute(&request).await?;
    debug!(
        method = %request.method,
        url = %request.url,
        status = response.status,
        elapsed_ms = response.duration.as_millis(),
        "received response"
    );
    Ok(response)
}
