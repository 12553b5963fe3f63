//! Configuration loader builder implementation.
//!
//! Responsibilities:
//! - Provide a builder-pattern `ConfigLoader` for hierarchical configuration merging.
//! - Support loading from environment variables, profile files, and direct builder methods.
//! - Build and validate the final `Config`.
//!
//! Does NOT handle:
//! - Direct environment variable parsing logic (delegated to env.rs).
//! - Profile file loading logic (delegated to profile.rs).
//!
//! Invariants / Assumptions:
//! - Each source overwrites values set by sources applied before it.
//! - API key takes precedence over username/password at build time.
//! - Blank or whitespace-only values never replace a value from an earlier source.

use secrecy::SecretString;
use std::path::PathBuf;
use std::time::Duration;

use super::env::{apply_env, non_blank};
use super::error::ConfigError;
use super::profile::apply_profile;
use crate::constants::{DEFAULT_TIMEOUT_SECS, MAX_TIMEOUT_SECS};
use crate::types::{Config, ConnectionConfig, Credential, base_url_from_hostname};

/// Configuration loader that builds config from environment variables and profiles.
#[derive(Default)]
pub struct ConfigLoader {
    hostname: Option<String>,
    username: Option<String>,
    password: Option<SecretString>,
    api_key: Option<SecretString>,
    timeout: Option<Duration>,
    profile_name: Option<String>,
    profile_missing: Option<String>,
    config_path: Option<PathBuf>,
}

impl ConfigLoader {
    /// Create a new configuration loader.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if dotenv loading is disabled via environment variable.
    fn dotenv_disabled() -> bool {
        matches!(
            std::env::var("DOTENV_DISABLED").ok().as_deref(),
            Some("true") | Some("1")
        )
    }

    /// Load environment variables from .env file if present.
    ///
    /// If `DOTENV_DISABLED` environment variable is set to "true" or "1",
    /// the .env file will not be loaded (useful for testing).
    ///
    /// # Errors
    ///
    /// Returns an error if the `.env` file exists but has invalid syntax
    /// (`ConfigError::DotenvParse`) or cannot be read (`ConfigError::DotenvIo`).
    /// Missing `.env` files are silently ignored.
    pub fn load_dotenv(self) -> Result<Self, ConfigError> {
        if Self::dotenv_disabled() {
            return Ok(self);
        }

        match dotenvy::dotenv() {
            Ok(_) => Ok(self),
            Err(e) if Self::is_not_found(&e) => Ok(self),
            Err(dotenvy::Error::LineParse(_, idx)) => {
                Err(ConfigError::DotenvParse { error_index: idx })
            }
            Err(dotenvy::Error::Io(io_err)) => Err(ConfigError::DotenvIo {
                kind: io_err.kind(),
            }),
            Err(_) => Err(ConfigError::DotenvUnknown),
        }
    }

    fn is_not_found(err: &dotenvy::Error) -> bool {
        matches!(
            err,
            dotenvy::Error::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound
        )
    }

    /// Set the active profile name to load from the config file.
    pub fn with_profile_name(mut self, name: String) -> Self {
        self.profile_name = Some(name);
        self
    }

    /// Override the config file path.
    pub fn with_config_path(mut self, path: PathBuf) -> Self {
        self.config_path = Some(path);
        self
    }

    /// Read configuration from a profile in the config file.
    ///
    /// If the profile is not found, this records the missing profile name
    /// for later error handling in `build()`.
    pub fn from_profile(mut self) -> Result<Self, ConfigError> {
        apply_profile(&mut self)?;
        Ok(self)
    }

    /// Read configuration from `ZENOSS_*` environment variables.
    pub fn from_env(mut self) -> Result<Self, ConfigError> {
        apply_env(&mut self)?;
        Ok(self)
    }

    /// Set the Zenoss hostname.
    pub fn with_hostname(mut self, hostname: String) -> Self {
        if let Some(hostname) = non_blank(hostname) {
            self.hostname = Some(hostname);
        }
        self
    }

    /// Set the username.
    pub fn with_username(mut self, username: String) -> Self {
        if let Some(username) = non_blank(username) {
            self.username = Some(username);
        }
        self
    }

    /// Set the password.
    pub fn with_password(mut self, password: String) -> Self {
        if let Some(password) = non_blank(password) {
            self.password = Some(SecretString::new(password.into()));
        }
        self
    }

    /// Set the API key.
    pub fn with_api_key(mut self, api_key: String) -> Self {
        if let Some(api_key) = non_blank(api_key) {
            self.api_key = Some(SecretString::new(api_key.into()));
        }
        self
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Check if we have a complete configuration (hostname + credential).
    fn has_complete_config(&self) -> bool {
        let has_complete_auth =
            self.api_key.is_some() || (self.username.is_some() && self.password.is_some());
        self.hostname.is_some() && has_complete_auth
    }

    /// Build the final configuration.
    pub fn build(self) -> Result<Config, ConfigError> {
        if let Some(ref profile_name) = self.profile_missing {
            // A complete config from env/CLI makes the missing profile irrelevant
            if !self.has_complete_config() {
                return Err(ConfigError::ProfileNotFound(profile_name.clone()));
            }
            tracing::warn!(profile = %profile_name, "Profile not found, using env/CLI settings");
        }

        let hostname = self.hostname.ok_or(ConfigError::MissingHostname)?;
        base_url_from_hostname(&hostname)?;

        let credential = if let Some(api_key) = self.api_key {
            Credential::ApiKey(api_key)
        } else if let (Some(username), Some(password)) = (self.username, self.password) {
            Credential::UserPass { username, password }
        } else {
            return Err(ConfigError::MissingCredentials);
        };

        let connection = ConnectionConfig {
            hostname: hostname.trim().to_string(),
            timeout: self
                .timeout
                .unwrap_or(Duration::from_secs(DEFAULT_TIMEOUT_SECS)),
        };
        Self::validate_timeout(&connection)?;

        Ok(Config {
            connection,
            credential,
        })
    }

    fn validate_timeout(connection: &ConnectionConfig) -> Result<(), ConfigError> {
        let timeout_secs = connection.timeout.as_secs();

        if timeout_secs == 0 {
            return Err(ConfigError::InvalidTimeout {
                message: "timeout must be greater than 0 seconds".to_string(),
            });
        }

        if timeout_secs > MAX_TIMEOUT_SECS {
            return Err(ConfigError::InvalidTimeout {
                message: format!(
                    "timeout exceeds maximum allowed value of {} seconds",
                    MAX_TIMEOUT_SECS
                ),
            });
        }

        Ok(())
    }

    // Internal accessor methods for use by other loader modules

    pub(crate) fn profile_name(&self) -> Option<&String> {
        self.profile_name.as_ref()
    }

    pub(crate) fn config_path(&self) -> Option<&PathBuf> {
        self.config_path.as_ref()
    }

    pub(crate) fn set_profile_missing(&mut self, name: Option<String>) {
        self.profile_missing = name;
    }

    pub(crate) fn set_hostname(&mut self, hostname: Option<String>) {
        self.hostname = hostname;
    }

    pub(crate) fn set_username(&mut self, username: Option<String>) {
        self.username = username;
    }

    pub(crate) fn set_password(&mut self, password: Option<SecretString>) {
        self.password = password;
    }

    pub(crate) fn set_api_key(&mut self, api_key: Option<SecretString>) {
        self.api_key = api_key;
    }

    pub(crate) fn set_timeout(&mut self, timeout: Option<Duration>) {
        self.timeout = timeout;
    }
}
