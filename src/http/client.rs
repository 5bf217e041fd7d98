//! HTTP client wrapper for Graph API requests.

use super::Params;
use crate::config::HttpSettings;
use crate::error::{Error, Operation, Result};
use reqwest::header::RETRY_AFTER;
use reqwest::{Method, RequestBuilder};
use serde::de::DeserializeOwned;

/// Thin wrapper that sends one request and maps the outcome to [`Error`].
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: reqwest::Client,
}

impl HttpClient {
    /// Create a new HTTP client.
    pub fn new(settings: &HttpSettings) -> Self {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = settings.timeout() {
            builder = builder.timeout(timeout);
        }
        if let Some(connect_timeout) = settings.connect_timeout() {
            builder = builder.connect_timeout(connect_timeout);
        }

        Self {
            client: builder.build().unwrap_or_else(|_| reqwest::Client::new()),
        }
    }

    /// GET `url` with `params` as the query string.
    pub async fn get<R: DeserializeOwned>(
        &self,
        operation: Operation,
        url: &str,
        params: &Params,
    ) -> Result<R> {
        let request = self.client.get(url).query(params.as_slice());
        self.execute(operation, Method::GET, url, request).await
    }

    /// POST `params` to `url` as a form-encoded body.
    pub async fn post_form<R: DeserializeOwned>(
        &self,
        operation: Operation,
        url: &str,
        params: &Params,
    ) -> Result<R> {
        let request = self.client.post(url).form(params.as_slice());
        self.execute(operation, Method::POST, url, request).await
    }

    async fn execute<R: DeserializeOwned>(
        &self,
        operation: Operation,
        method: Method,
        url: &str,
        request: RequestBuilder,
    ) -> Result<R> {
        // Parameters carry credentials; only the bare URL is logged.
        tracing::debug!(%operation, %method, url, "sending request");

        let response = request
            .send()
            .await
            .map_err(|e| Error::network(operation, e))?;

        let status = response.status();
        let retry_after = parse_retry_after(&response);
        let text = response
            .text()
            .await
            .map_err(|e| Error::network(operation, e))?;

        tracing::debug!(%operation, status = status.as_u16(), "received response");

        if !status.is_success() {
            let err = Error::from_response(operation, status, retry_after, &text);
            tracing::warn!(%operation, status = status.as_u16(), kind = ?err.kind(), "request failed");
            return Err(err);
        }

        serde_json::from_str(&text).map_err(|e| Error::decode(operation, status, &e))
    }
}

/// Extract and parse `Retry-After` header from a response.
fn parse_retry_after(response: &reqwest::Response) -> Option<u64> {
    let value = response.headers().get(RETRY_AFTER)?;
    let s = value.to_str().ok()?;
    parse_retry_after_value(s)
}

/// Parse a `Retry-After` header value as seconds.
///
/// Handles integer and fractional seconds (rounds up). HTTP-date values and
/// non-finite numbers return None.
fn parse_retry_after_value(s: &str) -> Option<u64> {
    let s = s.trim();
    if let Ok(secs) = s.parse::<u64>() {
        Some(secs.max(1))
    } else if let Ok(f) = s.parse::<f64>() {
        if f.is_finite() && f > 0.0 {
            Some((f.ceil() as u64).max(1))
        } else {
            None
        }
    } else {
        None
    }
}
