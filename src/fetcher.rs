use crate::error::Result;
use std::time::Duration;
use tracing::info;

/// Upper bound on the whole request, connect included
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

const USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/114.0.0.0 Safari/537.36";

/// Fetch one catalogue page and return its body as text.
///
/// Non-2xx statuses are treated as failures; there is no retry.
pub fn fetch_page(url: &str) -> Result<String> {
    let client = reqwest::blocking::Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .build()?;
    info!("HTTP GET request to: {}", url);
    let response = client
        .get(url)
        .header("User-Agent", USER_AGENT)
        .send()?
        .error_for_status()?;
    let status = response.status().as_u16();
    let body = response.text()?;
    info!("HTTP response: status={}, size={} bytes", status, body.len());
    Ok(body)
}
