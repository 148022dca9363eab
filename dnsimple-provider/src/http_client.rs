//! Generic HTTP client tools
//!
//! Request sending, logging and response reading shared by every registrar
//! endpoint. The client builds its own `RequestBuilder` (URL, headers, body)
//! and hands it here.
//!
//! No request is retried: a caller that wants a retry reissues the operation.

use std::time::Duration;

use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;

use crate::error::ProviderError;
use crate::utils::log_sanitizer::truncate_for_log;

/// Default connect timeout (seconds)
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
/// Default request timeout (seconds)
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Create an HTTP client with the default timeouts.
pub fn create_http_client() -> Result<Client, ProviderError> {
    Client::builder()
        .connect_timeout(Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS))
        .timeout(Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS))
        .build()
        .map_err(|e| ProviderError::NetworkError {
            detail: format!("Failed to create HTTP client: {e}"),
        })
}

/// HTTP tool function set
pub struct HttpUtils;

impl HttpUtils {
    /// Performs an HTTP request and returns the status code and response text.
    ///
    /// Non-success statuses are *not* treated as errors here; the caller maps
    /// them with the context it knows about (which record, which domain).
    ///
    /// # Arguments
    /// * `request_builder` - configured request (URL, headers, body)
    /// * `method_name` - HTTP method, for logging
    /// * `path` - request path, for logging
    ///
    /// # Returns
    /// * `Ok((status_code, response_text))`
    /// * `Err(ProviderError::Timeout)` / `Err(ProviderError::NetworkError)`
    pub async fn execute_request(
        request_builder: RequestBuilder,
        method_name: &str,
        path: &str,
    ) -> Result<(u16, String), ProviderError> {
        log::debug!("[dnsimple] {method_name} {path}");

        let response = request_builder.send().await.map_err(|e| {
            let is_timeout = e.is_timeout();
            let detail = e.without_url().to_string();
            if is_timeout {
                ProviderError::Timeout { detail }
            } else {
                ProviderError::NetworkError { detail }
            }
        })?;

        let status_code = response.status().as_u16();
        log::debug!("[dnsimple] Response Status: {status_code}");

        let response_text = response
            .text()
            .await
            .map_err(|e| ProviderError::NetworkError {
                detail: format!("Failed to read response body: {}", e.without_url()),
            })?;

        log::debug!(
            "[dnsimple] Response Body: {}",
            truncate_for_log(&response_text)
        );

        Ok((status_code, response_text))
    }

    /// Parse a JSON response.
    ///
    /// # Returns
    /// * `Ok(T)` - successfully parsed
    /// * `Err(ProviderError::ParseError)` - the body does not have the expected shape
    pub fn parse_json<T>(response_text: &str) -> Result<T, ProviderError>
    where
        T: DeserializeOwned,
    {
        serde_json::from_str(response_text).map_err(|e| {
            log::error!("[dnsimple] JSON parse failed: {e}");
            log::error!(
                "[dnsimple] Raw response: {}",
                truncate_for_log(response_text)
            );
            ProviderError::ParseError {
                detail: e.to_string(),
            }
        })
    }

    /// Extract the registrar's error message from a response body.
    ///
    /// DNSimple error bodies look like `{"message": "..."}`. When the body is
    /// not JSON, or has no `message`, it is passed through verbatim (or as the
    /// status reason when empty).
    pub fn error_message(status_code: u16, response_text: &str) -> String {
        let from_json = serde_json::from_str::<serde_json::Value>(response_text)
            .ok()
            .and_then(|v| {
                v.get("message")
                    .and_then(serde_json::Value::as_str)
                    .map(str::to_string)
            });

        match from_json {
            Some(message) => message,
            None if response_text.trim().is_empty() => reqwest::StatusCode::from_u16(status_code)
                .ok()
                .and_then(|s| s.canonical_reason())
                .unwrap_or("Unknown error")
                .to_string(),
            None => response_text.trim().to_string(),
        }
    }
}
