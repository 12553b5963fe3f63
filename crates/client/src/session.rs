//! Session builder.
//!
//! Responsibilities:
//! - Read the hostname and credential from an injected [`ConfigProvider`].
//! - Produce a [`Session`]: base URL, fixed JSON content type, and either the
//!   `z-api-key` header or basic-auth credentials.
//! - Stamp every outgoing request with the session's headers and auth.
//!
//! Does NOT handle:
//! - Router envelopes or response decoding (see [`crate::endpoints`]).
//! - Retries or connection reuse across operations.
//!
//! Invariants:
//! - `Content-type: application/json; charset=utf-8` is always present.
//! - `z-api-key` is only set in API key mode and is marked sensitive.
//! - Basic auth is only set in username/password mode.

use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, Method, RequestBuilder, redirect};
use secrecy::{ExposeSecret, SecretString};
use std::time::Duration;
use zenoss_config::constants::{DEFAULT_MAX_REDIRECTS, DEFAULT_TIMEOUT_SECS, KEY_HOSTNAME};
use zenoss_config::{ConfigError, ConfigProvider, Credential, base_url_from_hostname};

use crate::error::{ClientError, Result};
use crate::tracing::inject_trace_context;

/// Content type sent with every request.
pub const CONTENT_TYPE_JSON: &str = "application/json; charset=utf-8";

/// Header carrying the API key.
pub const API_KEY_HEADER: &str = "z-api-key";

/// Options applied to every session a client builds.
#[derive(Debug, Clone)]
pub struct SessionOptions {
    pub timeout: Duration,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

/// An authenticated HTTP session against one Zenoss instance.
#[derive(Debug)]
pub struct Session {
    http: Client,
    base_url: String,
    headers: HeaderMap,
    basic_auth: Option<(String, SecretString)>,
}

impl Session {
    /// Build a session from the values in `provider`.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::MissingHostname`] / [`ConfigError::InvalidHostname`] for a bad hostname.
    /// - [`ConfigError::MissingCredentials`] when neither auth mode is configured.
    /// - [`ClientError::InvalidHeader`] when the API key is not a valid header value.
    pub fn from_provider(provider: &dyn ConfigProvider, options: &SessionOptions) -> Result<Self> {
        let hostname = provider
            .option(KEY_HOSTNAME)
            .ok_or(ConfigError::MissingHostname)?;
        let base_url = base_url_from_hostname(&hostname)?;
        let credential = Credential::from_provider(provider)?;

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(CONTENT_TYPE_JSON));

        let basic_auth = match credential {
            Credential::ApiKey(api_key) => {
                let mut value = HeaderValue::from_str(api_key.expose_secret())
                    .map_err(|_| ClientError::InvalidHeader(API_KEY_HEADER))?;
                value.set_sensitive(true);
                headers.insert(HeaderName::from_static(API_KEY_HEADER), value);
                None
            }
            Credential::UserPass { username, password } => Some((username, password)),
        };

        let http = Client::builder()
            .timeout(options.timeout)
            .redirect(redirect::Policy::limited(DEFAULT_MAX_REDIRECTS))
            .build()?;

        tracing::debug!(
            base_url = %base_url,
            api_key = basic_auth.is_none(),
            "Built Zenoss session"
        );

        Ok(Self {
            http,
            base_url,
            headers,
            basic_auth,
        })
    }

    /// Base URL requests are resolved against, without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Headers attached to every request.
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Basic-auth pair, present only in username/password mode.
    pub fn basic_auth(&self) -> Option<(&str, &SecretString)> {
        self.basic_auth
            .as_ref()
            .map(|(username, password)| (username.as_str(), password))
    }

    /// Whether this session authenticates with the `z-api-key` header.
    pub fn uses_api_key(&self) -> bool {
        self.headers.contains_key(API_KEY_HEADER)
    }

    /// Absolute URL for `path` (which must start with `/`).
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Start a request carrying the session headers, auth and trace context.
    pub(crate) fn request(&self, method: Method, url: &str) -> RequestBuilder {
        let mut builder = self.http.request(method, url).headers(self.headers.clone());
        if let Some((username, password)) = &self.basic_auth {
            builder = builder.basic_auth(username, Some(password.expose_secret()));
        }
        inject_trace_context(builder)
    }
}
