//! Shared HTTP plumbing for feed and article downloads.

use std::time::Duration;

use reqwest::blocking::{Client, Response};
use url::Url;

use crate::errors::{NewsError, NewsResult};

/// Default per-request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Maximum number of redirects to follow.
const MAX_REDIRECTS: usize = 5;

const USER_AGENT: &str = concat!("disaster-news/", env!("CARGO_PKG_VERSION"));

/// Build the blocking client used for every request in a run.
pub fn build_client(timeout: Duration) -> NewsResult<Client> {
    let client = Client::builder()
        .timeout(timeout)
        .redirect(reqwest::redirect::Policy::limited(MAX_REDIRECTS))
        .user_agent(USER_AGENT)
        .build()?;

    Ok(client)
}

/// Reject anything that is not an absolute http(s) URL with a host.
pub fn validate_url(url: &str) -> NewsResult<Url> {
    let parsed = Url::parse(url).map_err(|e| NewsError::InvalidUrl(format!("{}: {}", url, e)))?;

    match parsed.scheme() {
        "http" | "https" => {}
        scheme => {
            return Err(NewsError::InvalidUrl(format!(
                "{}: unsupported scheme {}",
                url, scheme
            )));
        }
    }

    if parsed.host_str().map_or(true, str::is_empty) {
        return Err(NewsError::InvalidUrl(format!("{}: missing host", url)));
    }

    Ok(parsed)
}

/// GET a URL and fail on any non-success status.
pub fn get_checked(client: &Client, url: &str) -> NewsResult<Response> {
    let response = client.get(url).send()?;

    let status = response.status();
    if !status.is_success() {
        return Err(NewsError::HttpStatus(format!("{} returned {}", url, status)));
    }

    Ok(response)
}
