// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! HTTP transport for WLED devices.

use std::time::Duration;

use reqwest::multipart::{Form, Part};
use reqwest::{Client, StatusCode};

use crate::error::NetworkError;
use crate::protocol::{FileUpload, FormFields, RawResponse, Transport, UPLOAD_FIELD};

// ============================================================================
// HttpConfig - Connection parameters for one device
// ============================================================================

/// Configuration for an HTTP WLED device.
///
/// HTTP is stateless - each operation is one or more independent requests.
/// Devices are always addressed over plain HTTP.
///
/// # Examples
///
/// ```
/// use wled_lib::protocol::HttpConfig;
/// use std::time::Duration;
///
/// let config = HttpConfig::new("wled-kitchen.local");
/// assert_eq!(config.base_url(), "http://wled-kitchen.local");
///
/// let config = HttpConfig::new("192.168.1.40")
///     .with_port(8080)
///     .with_timeout(Duration::from_secs(5));
/// assert_eq!(config.base_url(), "http://192.168.1.40:8080");
/// ```
#[derive(Debug, Clone)]
pub struct HttpConfig {
    host: String,
    port: u16,
    timeout: Option<Duration>,
}

impl HttpConfig {
    /// Default HTTP port.
    pub const DEFAULT_PORT: u16 = 80;

    /// Creates a new HTTP configuration for the specified host.
    ///
    /// # Arguments
    ///
    /// * `host` - Bare hostname or IP address of the device, optionally with
    ///   a `:port` suffix. A leading `http://` is tolerated and stripped; any
    ///   other scheme is rejected when the client is built.
    #[must_use]
    pub fn new(host: impl Into<String>) -> Self {
        let host = host.into();
        let host = host
            .strip_prefix("http://")
            .unwrap_or(&host)
            .trim_end_matches('/')
            .to_string();
        Self {
            host,
            port: Self::DEFAULT_PORT,
            timeout: None,
        }
    }

    /// Sets a custom port.
    #[must_use]
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Sets a request timeout.
    ///
    /// Without it the HTTP client default applies.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Returns the host.
    #[must_use]
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Returns the port.
    #[must_use]
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Returns the timeout, if one was set.
    #[must_use]
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Builds the base URL from this configuration.
    #[must_use]
    pub fn base_url(&self) -> String {
        if self.port == Self::DEFAULT_PORT {
            format!("http://{}", self.host)
        } else {
            format!("http://{}:{}", self.host, self.port)
        }
    }

    /// Creates an `HttpClient` from this configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the host is empty, carries a scheme other than
    /// `http://`, or the HTTP client cannot be created.
    pub fn into_client(self) -> Result<HttpClient, NetworkError> {
        if self.host.is_empty() {
            return Err(NetworkError::InvalidAddress(
                "host must not be empty".to_string(),
            ));
        }
        if let Some((scheme, _)) = self.host.split_once("://") {
            return Err(NetworkError::InvalidAddress(format!(
                "unsupported scheme '{scheme}' in '{}', devices are reached over plain HTTP",
                self.host
            )));
        }

        let base_url = self.base_url();

        let mut builder = Client::builder();
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(|source| NetworkError::Http {
            url: base_url.clone(),
            source,
        })?;

        Ok(HttpClient { base_url, client })
    }
}

// ============================================================================
// HttpClient - reqwest-backed transport
// ============================================================================

/// HTTP client for communicating with one WLED device.
///
/// # Examples
///
/// ```no_run
/// use wled_lib::protocol::{HttpClient, Transport};
///
/// # async fn example() -> wled_lib::Result<()> {
/// let client = HttpClient::new("192.168.1.40")?;
/// let response = client.fetch("/presets.json").await?;
/// println!("{}", response.body());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct HttpClient {
    base_url: String,
    client: Client,
}

impl HttpClient {
    /// Creates a new HTTP client for the specified host.
    ///
    /// # Errors
    ///
    /// Returns error if the host is empty or the HTTP client cannot be created.
    pub fn new(host: impl Into<String>) -> Result<Self, NetworkError> {
        HttpConfig::new(host).into_client()
    }

    /// Returns the base URL of the device.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

fn check_status(url: &str, status: StatusCode) -> Result<(), NetworkError> {
    if status.is_success() {
        return Ok(());
    }
    tracing::warn!(url = %url, status = status.as_u16(), "Device answered with an error status");
    Err(NetworkError::Status {
        url: url.to_string(),
        status: status.as_u16(),
        reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
    })
}

impl Transport for HttpClient {
    fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{path}", self.base_url)
        } else {
            format!("{}/{path}", self.base_url)
        }
    }

    async fn fetch(&self, path: &str) -> Result<RawResponse, NetworkError> {
        let url = self.url(path);

        tracing::debug!(url = %url, "Sending HTTP GET");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|source| NetworkError::Http {
                url: url.clone(),
                source,
            })?;

        check_status(&url, response.status())?;

        let body = response.text().await.map_err(|source| NetworkError::Http {
            url: url.clone(),
            source,
        })?;

        tracing::debug!(url = %url, bytes = body.len(), "Received HTTP response");

        Ok(RawResponse::new(url, body))
    }

    async fn upload_file(&self, path: &str, file: FileUpload) -> Result<(), NetworkError> {
        let url = self.url(path);

        tracing::debug!(
            url = %url,
            file = %file.file_name,
            bytes = file.content.len(),
            "Uploading file"
        );

        let part = Part::bytes(file.content)
            .file_name(file.file_name)
            .mime_str(file.content_type)
            .map_err(|source| NetworkError::Http {
                url: url.clone(),
                source,
            })?;
        let form = Form::new().part(UPLOAD_FIELD, part);

        let response = self
            .client
            .post(&url)
            .multipart(form)
            .send()
            .await
            .map_err(|source| NetworkError::Http {
                url: url.clone(),
                source,
            })?;

        check_status(&url, response.status())
    }

    async fn post_form(&self, path: &str, fields: &FormFields) -> Result<(), NetworkError> {
        let url = self.url(path);
        let body = fields.encode();

        tracing::debug!(url = %url, fields = fields.len(), "Posting form");

        let response = self
            .client
            .post(&url)
            .header(
                reqwest::header::CONTENT_TYPE,
                "application/x-www-form-urlencoded",
            )
            .body(body)
            .send()
            .await
            .map_err(|source| NetworkError::Http {
                url: url.clone(),
                source,
            })?;

        check_status(&url, response.status())
    }
}

/// Builder for creating an HTTP client with custom configuration.
#[derive(Debug, Default)]
pub struct HttpClientBuilder {
    host: Option<String>,
    port: Option<u16>,
    timeout: Option<Duration>,
}

impl HttpClientBuilder {
    /// Creates a new builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the host address.
    #[must_use]
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }

    /// Sets the port.
    #[must_use]
    pub fn port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    /// Sets the request timeout.
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Builds the HTTP client.
    ///
    /// # Errors
    ///
    /// Returns error if host is not set or client creation fails.
    pub fn build(self) -> Result<HttpClient, NetworkError> {
        let host = self
            .host
            .ok_or_else(|| NetworkError::InvalidAddress("host is required".to_string()))?;

        let mut config = HttpConfig::new(host);
        if let Some(port) = self.port {
            config = config.with_port(port);
        }
        if let Some(timeout) = self.timeout {
            config = config.with_timeout(timeout);
        }
        config.into_client()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_joins_absolute_path() {
        let client = HttpClient::new("192.168.1.40").unwrap();
        assert_eq!(
            client.url("/presets.json"),
            "http://192.168.1.40/presets.json"
        );
    }

    #[test]
    fn url_joins_relative_path() {
        let client = HttpClient::new("wled.local").unwrap();
        assert_eq!(client.url("win"), "http://wled.local/win");
    }

    #[test]
    fn url_keeps_trailing_query_marker() {
        let client = HttpClient::new("wled.local").unwrap();
        assert_eq!(client.url("/settings/ui?"), "http://wled.local/settings/ui?");
    }

    #[test]
    fn scheme_prefix_is_stripped() {
        let client = HttpClient::new("http://wled.local/").unwrap();
        assert_eq!(client.base_url(), "http://wled.local");
    }

    #[test]
    fn other_schemes_are_rejected() {
        let result = HttpClient::new("https://wled.local");
        match result {
            Err(NetworkError::InvalidAddress(message)) => {
                assert!(message.contains("https"));
            }
            other => panic!("unexpected result: {other:?}"),
        }
        assert!(HttpConfig::new("ws://10.0.0.2").into_client().is_err());
    }

    #[test]
    fn empty_host_is_rejected() {
        let result = HttpClient::new("");
        assert!(matches!(result, Err(NetworkError::InvalidAddress(_))));
    }

    #[test]
    fn builder_missing_host() {
        let result = HttpClientBuilder::new().build();
        assert!(result.is_err());
    }

    #[test]
    fn builder_with_all_options() {
        let client = HttpClientBuilder::new()
            .host("192.168.1.40")
            .port(8080)
            .timeout(Duration::from_secs(5))
            .build()
            .unwrap();

        assert_eq!(client.base_url(), "http://192.168.1.40:8080");
    }

    // =========================================================================
    // HttpConfig tests
    // =========================================================================

    #[test]
    fn http_config_default_values() {
        let config = HttpConfig::new("192.168.1.40");
        assert_eq!(config.host(), "192.168.1.40");
        assert_eq!(config.port(), 80);
        assert!(config.timeout().is_none());
    }

    #[test]
    fn http_config_with_timeout() {
        let config = HttpConfig::new("192.168.1.40").with_timeout(Duration::from_secs(30));
        assert_eq!(config.timeout(), Some(Duration::from_secs(30)));
    }

    #[test]
    fn http_config_base_url_custom_port() {
        let config = HttpConfig::new("192.168.1.40").with_port(8080);
        assert_eq!(config.base_url(), "http://192.168.1.40:8080");
    }

    #[test]
    fn http_config_host_with_port_suffix() {
        let config = HttpConfig::new("127.0.0.1:5000");
        assert_eq!(config.base_url(), "http://127.0.0.1:5000");
    }
}
