//! HTTP client shared by device sessions
//!
//! This module provides a shared HTTP client with:
//! - Configurable timeout and User-Agent
//! - Optional acceptance of self-signed device certificates
//! - Mapping of transport and status failures onto DeviceError
//!
//! Requests are never retried; a failed device is reported and the run moves on.

use crate::error::DeviceError;
use reqwest::{Client, StatusCode};
use std::time::Duration;

/// Default timeout for HTTP requests (30 seconds)
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Default User-Agent header
const DEFAULT_USER_AGENT: &str = concat!("issucheck/", env!("CARGO_PKG_VERSION"));

/// HTTP client wrapper
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    /// Create a new HTTP client with default settings
    pub fn new() -> Result<Self, DeviceError> {
        Self::with_config(DEFAULT_TIMEOUT, false)
    }

    /// Create a new HTTP client with custom configuration
    pub fn with_config(timeout: Duration, accept_invalid_certs: bool) -> Result<Self, DeviceError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(DEFAULT_USER_AGENT)
            .danger_accept_invalid_certs(accept_invalid_certs)
            .build()
            .map_err(|e| {
                DeviceError::connection("HTTP client", format!("failed to create HTTP client: {}", e))
            })?;

        Ok(Self { client })
    }

    /// Perform an authenticated GET request and decode the JSON body
    pub async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        url: &str,
        host: &str,
        user: &str,
        password: &str,
    ) -> Result<T, DeviceError> {
        let response = self
            .client
            .get(url)
            .basic_auth(user, Some(password))
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| map_transport_error(host, e))?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(DeviceError::Authentication {
                host: host.to_string(),
                user: user.to_string(),
            });
        }
        if !status.is_success() {
            return Err(DeviceError::Http {
                host: host.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| map_transport_error(host, e))?;

        serde_json::from_str(&body)
            .map_err(|e| DeviceError::invalid_reply(host, format!("failed to parse JSON: {}", e)))
    }
}

/// Convert a reqwest failure into a DeviceError
fn map_transport_error(host: &str, e: reqwest::Error) -> DeviceError {
    if e.is_timeout() {
        DeviceError::timeout(host)
    } else {
        DeviceError::connection(host, e.to_string())
    }
}
