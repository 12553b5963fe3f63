//! Environment variable parsing for configuration.
//!
//! Invariants:
//! - Empty or whitespace-only environment variables are treated as unset.
//! - Returned values are trimmed (leading/trailing whitespace removed).
//! - Invalid numeric values return ConfigError::InvalidValue.

use secrecy::SecretString;
use std::time::Duration;

use super::builder::ConfigLoader;
use super::error::ConfigError;

/// Trim `value`, returning None when nothing but whitespace remains.
pub(crate) fn non_blank(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else if trimmed.len() == value.len() {
        Some(value)
    } else {
        Some(trimmed.to_string())
    }
}

/// Read an environment variable, returning None if unset, empty, or whitespace-only.
/// Returns the trimmed value (leading/trailing whitespace removed) if present.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(non_blank)
}

/// Apply environment variable configuration to the loader.
pub fn apply_env(loader: &mut ConfigLoader) -> Result<(), ConfigError> {
    if let Some(hostname) = env_var_or_none("ZENOSS_HOSTNAME") {
        loader.set_hostname(Some(hostname));
    }
    if let Some(username) = env_var_or_none("ZENOSS_USERNAME") {
        loader.set_username(Some(username));
    }
    if let Some(password) = env_var_or_none("ZENOSS_PASSWORD") {
        loader.set_password(Some(SecretString::new(password.into())));
    }
    if let Some(api_key) = env_var_or_none("ZENOSS_API_KEY") {
        loader.set_api_key(Some(SecretString::new(api_key.into())));
    }
    if let Some(timeout) = env_var_or_none("ZENOSS_TIMEOUT") {
        let secs: u64 = timeout.parse().map_err(|_| ConfigError::InvalidValue {
            var: "ZENOSS_TIMEOUT".to_string(),
            message: "must be a number".to_string(),
        })?;
        loader.set_timeout(Some(Duration::from_secs(secs)));
    }

    Ok(())
}
