//! Credential types for the Zenoss client configuration.
//!
//! Responsibilities:
//! - Define the two mutually exclusive authentication modes.
//! - Resolve the active mode from a [`ConfigProvider`].
//! - Handle serialization of secret values.
//!
//! Does NOT handle:
//! - Applying the credential to HTTP requests (see the client crate's session builder).
//! - Persisting or storing credentials outside of profile files.
//!
//! Invariants:
//! - All secret values use `secrecy::SecretString` to prevent accidental logging.
//! - `api_key` takes precedence over `username`/`password` when both are configured.
//! - A credential only exists when one mode is complete; there is no anonymous default.

use secrecy::SecretString;
use serde::{Deserialize, Serialize};

use crate::constants::{KEY_API_KEY, KEY_PASSWORD, KEY_USERNAME};
use crate::loader::ConfigError;
use crate::provider::ConfigProvider;

/// Module for serializing SecretString as strings.
pub(crate) mod secret_string {
    use secrecy::{ExposeSecret, SecretString};
    use serde::{Deserialize as DeserializeTrait, Serialize as SerializeTrait};
    use serde::{Deserializer, Serializer};

    pub fn serialize<S>(secret: &SecretString, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        secret.expose_secret().serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<SecretString, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(SecretString::new(s.into()))
    }
}

/// How requests to Zenoss are authenticated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Credential {
    /// API key sent in the `z-api-key` header.
    #[serde(rename = "api_key")]
    ApiKey(#[serde(with = "secret_string")] SecretString),
    /// HTTP basic authentication.
    #[serde(rename = "basic")]
    UserPass {
        username: String,
        #[serde(with = "secret_string")]
        password: SecretString,
    },
}

impl Credential {
    /// Select the credential configured in `provider`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingCredentials`] when neither an API key nor a
    /// complete username/password pair is present.
    pub fn from_provider<P>(provider: &P) -> Result<Self, ConfigError>
    where
        P: ConfigProvider + ?Sized,
    {
        if let Some(api_key) = provider.option(KEY_API_KEY) {
            return Ok(Self::ApiKey(SecretString::new(api_key.into())));
        }

        match (provider.option(KEY_USERNAME), provider.option(KEY_PASSWORD)) {
            (Some(username), Some(password)) => Ok(Self::UserPass {
                username,
                password: SecretString::new(password.into()),
            }),
            _ => Err(ConfigError::MissingCredentials),
        }
    }

    /// Whether this credential uses the API key header.
    pub fn is_api_key(&self) -> bool {
        matches!(self, Self::ApiKey(_))
    }
}
