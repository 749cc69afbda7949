// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! HTTP transport for Z-Way controllers.

use std::time::Duration;

use reqwest::blocking::Client;

use crate::error::ProtocolError;
use crate::protocol::{ApiResponse, Transport};

// ============================================================================
// HttpConfig - Connection parameters for a controller
// ============================================================================

/// Configuration for connecting to a Z-Way controller over HTTP.
///
/// # Examples
///
/// ```
/// use zway_lib::protocol::HttpConfig;
/// use std::time::Duration;
///
/// // Simple configuration
/// let config = HttpConfig::new("192.168.1.10:8083");
/// assert_eq!(config.base_url(), "http://192.168.1.10:8083");
///
/// // With all options
/// let config = HttpConfig::new("https://zway.local/")
///     .with_credentials("admin", Some("password"))
///     .with_timeout(Duration::from_secs(5));
/// assert_eq!(config.base_url(), "https://zway.local");
/// ```
#[derive(Debug, Clone)]
pub struct HttpConfig {
    base_url: String,
    credentials: Option<Credentials>,
    timeout: Option<Duration>,
}

impl HttpConfig {
    /// Creates a new configuration for the controller at `base_url`.
    ///
    /// A missing scheme defaults to `http://`; a trailing `/` is dropped.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: normalize_base_url(&base_url.into()),
            credentials: None,
            timeout: None,
        }
    }

    /// Sets basic authentication credentials.
    #[must_use]
    pub fn with_credentials(mut self, username: impl Into<String>, password: Option<&str>) -> Self {
        self.credentials = Some(Credentials {
            username: username.into(),
            password: password.map(str::to_string),
        });
        self
    }

    /// Sets the request timeout.
    ///
    /// Without it, the HTTP client's own default applies.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Returns the normalized base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the credentials if set.
    #[must_use]
    pub fn credentials(&self) -> Option<&Credentials> {
        self.credentials.as_ref()
    }

    /// Returns the timeout if set.
    #[must_use]
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Creates an `HttpClient` from this configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the base URL is empty or the HTTP client cannot be
    /// created.
    pub fn into_client(self) -> Result<HttpClient, ProtocolError> {
        if self.base_url.is_empty() {
            return Err(ProtocolError::InvalidAddress(
                "base URL is required".to_string(),
            ));
        }

        let mut builder = Client::builder();
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(ProtocolError::Http)?;

        Ok(HttpClient {
            client,
            credentials: self.credentials,
        })
    }
}

fn normalize_base_url(base_url: &str) -> String {
    let trimmed = base_url.trim().trim_end_matches('/');
    if trimmed.is_empty() || trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        trimmed.to_string()
    } else {
        format!("http://{trimmed}")
    }
}

// ============================================================================
// HttpClient - Blocking reqwest transport
// ============================================================================

/// HTTP authentication credentials.
///
/// Z-Way accepts a username with no password, so the password is optional.
#[derive(Clone)]
pub struct Credentials {
    /// Username for authentication.
    pub username: String,
    /// Password for authentication.
    pub password: Option<String>,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "***"))
            .finish()
    }
}

/// Blocking HTTP transport that attaches basic authentication to every
/// request.
///
/// # Examples
///
/// ```no_run
/// use zway_lib::protocol::{HttpClient, Transport};
///
/// # fn example() -> zway_lib::Result<()> {
/// let client = HttpClient::new()?.with_credentials("admin", Some("secret"));
/// let response = client.get("http://192.168.1.10:8083/ZAutomation/api/v1/devices")?;
/// println!("{}", response.body());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    credentials: Option<Credentials>,
}

impl HttpClient {
    /// Creates a new HTTP client without credentials.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client cannot be created.
    pub fn new() -> Result<Self, ProtocolError> {
        let client = Client::builder().build().map_err(ProtocolError::Http)?;
        Ok(Self {
            client,
            credentials: None,
        })
    }

    /// Sets authentication credentials.
    #[must_use]
    pub fn with_credentials(mut self, username: impl Into<String>, password: Option<&str>) -> Self {
        self.credentials = Some(Credentials {
            username: username.into(),
            password: password.map(str::to_string),
        });
        self
    }

    /// Returns the credentials if set.
    #[must_use]
    pub fn credentials(&self) -> Option<&Credentials> {
        self.credentials.as_ref()
    }
}

impl Transport for HttpClient {
    fn get(&self, url: &str) -> Result<ApiResponse, ProtocolError> {
        tracing::debug!(url = %url, "Sending HTTP request");

        let mut request = self.client.get(url);
        if let Some(creds) = &self.credentials {
            request = request.basic_auth(&creds.username, creds.password.as_ref());
        }

        let response = request.send().map_err(ProtocolError::Http)?;

        if response.status() == reqwest::StatusCode::UNAUTHORIZED {
            return Err(ProtocolError::AuthenticationFailed);
        }

        if !response.status().is_success() {
            return Err(ProtocolError::ConnectionFailed(format!(
                "HTTP {} - {}",
                response.status().as_u16(),
                response.status().canonical_reason().unwrap_or("Unknown")
            )));
        }

        let body = response.text().map_err(ProtocolError::Http)?;

        tracing::trace!(body = %body, "Received HTTP response");

        Ok(ApiResponse::new(body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_default_values() {
        let config = HttpConfig::new("http://192.168.1.10:8083");
        assert_eq!(config.base_url(), "http://192.168.1.10:8083");
        assert!(config.credentials().is_none());
        assert!(config.timeout().is_none());
    }

    #[test]
    fn config_adds_missing_scheme() {
        let config = HttpConfig::new("zway.local:8083");
        assert_eq!(config.base_url(), "http://zway.local:8083");
    }

    #[test]
    fn config_keeps_https() {
        let config = HttpConfig::new("https://find.z-wave.me");
        assert_eq!(config.base_url(), "https://find.z-wave.me");
    }

    #[test]
    fn config_drops_trailing_slash() {
        let config = HttpConfig::new("http://zway.local:8083/");
        assert_eq!(config.base_url(), "http://zway.local:8083");
    }

    #[test]
    fn config_with_credentials() {
        let config = HttpConfig::new("zway.local").with_credentials("admin", Some("secret"));
        let creds = config.credentials().unwrap();
        assert_eq!(creds.username, "admin");
        assert_eq!(creds.password.as_deref(), Some("secret"));
    }

    #[test]
    fn config_with_username_only() {
        let config = HttpConfig::new("zway.local").with_credentials("admin", None);
        assert!(config.credentials().unwrap().password.is_none());
    }

    #[test]
    fn config_with_timeout() {
        let config = HttpConfig::new("zway.local").with_timeout(Duration::from_secs(3));
        assert_eq!(config.timeout(), Some(Duration::from_secs(3)));
    }

    #[test]
    fn config_into_client_keeps_credentials() {
        let client = HttpConfig::new("zway.local")
            .with_credentials("admin", Some("secret"))
            .into_client()
            .unwrap();
        assert_eq!(client.credentials().unwrap().username, "admin");
    }

    #[test]
    fn config_into_client_rejects_empty_url() {
        let result = HttpConfig::new("  /").into_client();
        assert!(matches!(result, Err(ProtocolError::InvalidAddress(_))));
    }

    #[test]
    fn credentials_debug_hides_password() {
        let client = HttpClient::new()
            .unwrap()
            .with_credentials("admin", Some("secret"));
        let debug = format!("{:?}", client.credentials().unwrap());
        assert!(debug.contains("admin"));
        assert!(!debug.contains("secret"));
    }
}
