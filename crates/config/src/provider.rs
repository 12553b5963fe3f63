//! Key-value configuration lookup injected into the client.
//!
//! Responsibilities:
//! - Define the [`ConfigProvider`] trait the session builder reads through.
//! - Provide implementations for plain maps (tests, embedding) and the loaded [`Config`].
//!
//! Does NOT handle:
//! - Deciding which credential mode wins (see [`Credential::from_provider`]).
//! - Loading values from files or the environment (see `loader`).
//!
//! Invariants:
//! - Empty or whitespace-only values are reported as absent.
//!
//! [`Credential::from_provider`]: crate::types::Credential::from_provider

use secrecy::ExposeSecret;
use std::collections::{BTreeMap, HashMap};

use crate::constants::{KEY_API_KEY, KEY_HOSTNAME, KEY_PASSWORD, KEY_USERNAME};
use crate::types::{Config, Credential};

/// Source of configuration values, looked up by key.
///
/// Keys consumed by the client are `hostname`, `api_key`, `username` and
/// `password` (see [`crate::constants`]).
pub trait ConfigProvider: Send + Sync {
    /// Return the raw value stored under `key`, if any.
    fn lookup(&self, key: &str) -> Option<String>;

    /// Return the trimmed value under `key`, treating blank values as unset.
    fn option(&self, key: &str) -> Option<String> {
        self.lookup(key).and_then(|value| {
            let trimmed = value.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        })
    }
}

impl ConfigProvider for HashMap<String, String> {
    fn lookup(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

impl ConfigProvider for BTreeMap<String, String> {
    fn lookup(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

impl ConfigProvider for Config {
    fn lookup(&self, key: &str) -> Option<String> {
        match (key, &self.credential) {
            (KEY_HOSTNAME, _) => Some(self.connection.hostname.clone()),
            (KEY_API_KEY, Credential::ApiKey(api_key)) => {
                Some(api_key.expose_secret().to_string())
            }
            (KEY_USERNAME, Credential::UserPass { username, .. }) => Some(username.clone()),
            (KEY_PASSWORD, Credential::UserPass { password, .. }) => {
                Some(password.expose_secret().to_string())
            }
            _ => None,
        }
    }
}
