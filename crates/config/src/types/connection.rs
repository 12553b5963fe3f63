//! Connection configuration types for the Zenoss client.
//!
//! Responsibilities:
//! - Define connection settings (host, request timeout).
//! - Define the main `Config` structure combining connection and credential.
//! - Provide convenience constructors for the two credential modes.
//!
//! Does NOT handle:
//! - Configuration loading from files/env (see `loader` module).
//! - Actual network connections (see client crate).
//!
//! Invariants:
//! - All duration fields are serialized as seconds (integers).
//! - `hostname` is stored as configured; URL derivation happens in the client.

use crate::constants::DEFAULT_TIMEOUT_SECS;
use crate::loader::ConfigError;
use crate::types::auth::Credential;
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Module for serializing Duration as seconds (integer).
mod duration_seconds {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        duration.as_secs().serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let secs = u64::deserialize(deserializer)?;
        Ok(Duration::from_secs(secs))
    }
}

/// Derive the base URL for a configured Zenoss host.
///
/// A bare host (`zenoss.example.com`, `zenoss:8443`) is served over HTTPS. A
/// value that already names an `http` or `https` scheme is kept as given.
/// Trailing slashes are removed so endpoint paths can be appended directly.
///
/// # Examples
///
/// - `"zenoss"` -> `"https://zenoss"`
/// - `"https://zenoss.example.com/"` -> `"https://zenoss.example.com"`
/// - `"http://127.0.0.1:8080"` -> `"http://127.0.0.1:8080"`
pub fn base_url_from_hostname(hostname: &str) -> Result<String, ConfigError> {
    let hostname = hostname.trim();
    if hostname.is_empty() {
        return Err(ConfigError::MissingHostname);
    }

    let candidate = if hostname.starts_with("https://") || hostname.starts_with("http://") {
        hostname.to_string()
    } else if hostname.contains("://") {
        return Err(ConfigError::InvalidHostname {
            hostname: hostname.to_string(),
            message: "only http and https schemes are supported".to_string(),
        });
    } else {
        format!("https://{}", hostname)
    };

    let parsed = url::Url::parse(&candidate).map_err(|e| ConfigError::InvalidHostname {
        hostname: hostname.to_string(),
        message: e.to_string(),
    })?;
    if parsed.host_str().is_none_or(str::is_empty) {
        return Err(ConfigError::InvalidHostname {
            hostname: hostname.to_string(),
            message: "no host component".to_string(),
        });
    }

    Ok(candidate.trim_end_matches('/').to_string())
}

/// Connection configuration for a Zenoss instance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectionConfig {
    /// Zenoss host, e.g. `zenoss.example.com` or `https://zenoss.example.com:8443`
    pub hostname: String,
    /// Request timeout (serialized as seconds)
    #[serde(with = "duration_seconds")]
    pub timeout: Duration,
}

impl ConnectionConfig {
    fn new(hostname: String) -> Self {
        Self {
            hostname,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Connection settings
    pub connection: ConnectionConfig,
    /// Active credential
    pub credential: Credential,
}

impl Config {
    /// Create a new config with the specified host and API key.
    pub fn with_api_key(hostname: String, api_key: SecretString) -> Self {
        Self {
            connection: ConnectionConfig::new(hostname),
            credential: Credential::ApiKey(api_key),
        }
    }

    /// Create a new config with the specified host and username/password.
    pub fn with_user_pass(hostname: String, username: String, password: SecretString) -> Self {
        Self {
            connection: ConnectionConfig::new(hostname),
            credential: Credential::UserPass { username, password },
        }
    }
}
