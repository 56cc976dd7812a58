//! HTTP client creation and configuration utilities

use crate::constants::API_KEY_HEADER;
use crate::error::AppError;
use reqwest::Client;
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use std::time::Duration;

/// Creates the HTTP client used for every API call.
///
/// The client carries the request timeout and the two fixed headers the
/// API expects: `accept: application/json` and the `x-api-key` credential.
/// The key header is marked sensitive so it never shows up in debug output.
pub fn create_http_client(timeout_seconds: u64, api_key: &str) -> Result<Client, AppError> {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

    let mut key = HeaderValue::from_str(api_key).map_err(|_| {
        AppError::config_error("API key contains characters not allowed in an HTTP header")
    })?;
    key.set_sensitive(true);
    headers.insert(API_KEY_HEADER, key);

    Client::builder()
        .timeout(Duration::from_secs(timeout_seconds))
        .default_headers(headers)
        .build()
        .map_err(|e| AppError::config_error(format!("Failed to create HTTP client: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_http_client() {
        assert!(create_http_client(30, "abc123").is_ok());
    }

    #[test]
    fn test_create_http_client_rejects_invalid_key() {
        let result = create_http_client(30, "bad\nkey");
        assert!(matches!(result, Err(AppError::Config(_))));
    }
}
