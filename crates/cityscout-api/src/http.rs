// Shared plumbing for the upstream clients
use std::time::Duration;

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::{ApiError, Result};

const USER_AGENT: &str = concat!("cityscout/", env!("CARGO_PKG_VERSION"));

/// Build the HTTP client every upstream client shares
///
/// No timeout unless one is asked for: a hung upstream only hangs the
/// request that is waiting on it.
pub fn build_http_client(timeout: Option<Duration>) -> Result<reqwest::Client> {
    let mut headers = reqwest::header::HeaderMap::new();
    headers.insert(
        reqwest::header::USER_AGENT,
        reqwest::header::HeaderValue::from_static(USER_AGENT),
    );
    headers.insert(
        reqwest::header::ACCEPT,
        reqwest::header::HeaderValue::from_static("application/json"),
    );

    let mut builder = reqwest::Client::builder().default_headers(headers);
    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
    }

    Ok(builder.build()?)
}

/// Send one GET and decode the body into `T`
///
/// Exactly one attempt. Non-2xx answers come back as `RequestFailed` with
/// whatever body the upstream sent.
pub(crate) async fn get_json<T: DeserializeOwned>(request: reqwest::RequestBuilder) -> Result<T> {
    let response = request.send().await?;
    let status = response.status();

    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        debug!("Upstream answered {}", status);
        return Err(ApiError::RequestFailed {
            status: status.as_u16(),
            body,
        });
    }

    // Decode by hand so a shape mismatch is a ParseError, not a NetworkError
    let body = response.text().await?;
    Ok(serde_json::from_str(&body)?)
}

pub(crate) fn trim_base(base_url: String) -> String {
    base_url.trim_end_matches('/').to_string()
}
