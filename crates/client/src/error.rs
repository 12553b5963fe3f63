//! Error types for the Zenoss client.

use serde::Deserialize;
use thiserror::Error;
use zenoss_config::ConfigError;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// One entry of the `errors` list Zenoss returns alongside a 401.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AuthErrorDetail {
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub subject: String,
}

/// Errors that can occur during Zenoss client operations.
#[derive(Error, Debug)]
pub enum ClientError {
    /// The injected configuration could not produce a session.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Zenoss rejected the credential with HTTP 401.
    #[error("Unauthorized: {message}")]
    Unauthorized {
        message: String,
        errors: Vec<AuthErrorDetail>,
    },

    /// Zenoss answered with its login page instead of an API response.
    #[error("Authentication failed: {0}")]
    AuthFailed(String),

    /// Non-success HTTP status other than 401.
    #[error("API error ({status}) at {url}: {message}")]
    ApiError {
        status: u16,
        url: String,
        message: String,
    },

    /// Request parameters could not be encoded as JSON.
    #[error("Failed to encode request: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Response body did not have the expected shape.
    #[error("Invalid response format: {0}")]
    InvalidResponse(String),

    /// The router call itself raised an exception on the server.
    #[error("{router}.{method} failed: {message}")]
    RouterException {
        router: &'static str,
        method: String,
        message: String,
    },

    /// A configured value cannot be sent as an HTTP header.
    #[error("Invalid header value for {0}")]
    InvalidHeader(&'static str),

    /// No device with the given name is known to Zenoss.
    #[error("Unable to find a device in Zenoss for {0}")]
    DeviceNotFound(String),

    /// No device class was given and none is known for this kernel.
    #[error("No default device class for kernel '{0}'; pass one explicitly")]
    UnknownDeviceClass(String),
}

impl ClientError {
    /// Check if this error indicates an authentication problem.
    pub fn is_auth_error(&self) -> bool {
        matches!(
            self,
            Self::Unauthorized { .. }
                | Self::AuthFailed(_)
                | Self::Config(ConfigError::MissingCredentials)
        )
    }

    /// Check if this error means the requested resource does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::DeviceNotFound(_) | Self::ApiError { status: 404, .. })
    }
}
