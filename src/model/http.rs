/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/
use crate::constants::USER_AGENT;
use crate::error::AppError;
use reqwest::{Client, Method, Response, StatusCode};
use serde::Serialize;
use std::time::Duration;
use tracing::{debug, error};

/// Builds the HTTP client used for a single job invocation
///
/// # Errors
/// * `AppError::Network` - if the TLS backend cannot be initialised
pub fn build_http_client() -> Result<Client, AppError> {
    Ok(Client::builder().user_agent(USER_AGENT).build()?)
}

/// Joins a base URL and a relative path with exactly one slash between them
#[must_use]
pub fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// Makes a single HTTP request and maps non-success statuses to errors
///
/// There is no retry: a failed request fails the job.
///
/// # Arguments
///
/// * `client` - The HTTP client to use for the request
/// * `method` - HTTP method (GET, POST, PATCH, ...)
/// * `url` - Full URL to request
/// * `headers` - Vector of (header_name, header_value) tuples
/// * `query` - Query string pairs appended to the URL
/// * `body` - Optional request body (will be serialized to JSON)
/// * `timeout` - Optional connect and read timeout for this request
///
/// # Returns
///
/// * `Ok(Response)` - Successful HTTP response
/// * `Err(AppError)` - Transport failure or non-2xx status
///
/// # Example
///
/// ```ignore
/// let client = build_http_client()?;
/// let response = make_http_request(
///     &client,
///     Method::GET,
///     "https://pro-api.coinmarketcap.com/v1/cryptocurrency/quotes/latest",
///     vec![("X-CMC_PRO_API_KEY", "key"), ("Accept", "application/json")],
///     &[("symbol", "BTC")],
///     &None::<()>,
///     None,
/// ).await?;
/// ```
pub async fn make_http_request<B: Serialize>(
    client: &Client,
    method: Method,
    url: &str,
    headers: Vec<(&str, &str)>,
    query: &[(&str, &str)],
    body: &Option<B>,
    timeout: Option<Duration>,
) -> Result<Response, AppError> {
    debug!("{} {}", method, url);

    let mut request = client.request(method, url);

    for (name, value) in &headers {
        request = request.header(*name, *value);
    }

    if !query.is_empty() {
        request = request.query(query);
    }

    if let Some(b) = body {
        request = request.json(b);
    }

    if let Some(t) = timeout {
        request = request.timeout(t);
    }

    let response = request.send().await?;
    let status = response.status();
    debug!("Response status: {}", status);

    if status.is_success() {
        return Ok(response);
    }

    let body_text = response.text().await.unwrap_or_default();
    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
            error!("Unauthorized: {}", body_text);
            Err(AppError::Unauthorized)
        }
        StatusCode::NOT_FOUND => {
            error!("Not found: {}", body_text);
            Err(AppError::NotFound)
        }
        StatusCode::TOO_MANY_REQUESTS => {
            error!("Rate limit exceeded: {}", body_text);
            Err(AppError::RateLimitExceeded)
        }
        _ => {
            error!("Request failed with status {}: {}", status, body_text);
            Err(AppError::Unexpected(status))
        }
    }
}
