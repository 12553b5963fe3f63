//! CLI exit codes for scripting and automation.
//!
//! Responsibilities:
//! - Define structured exit codes that scripts can use to distinguish error types.
//! - Map `ClientError` and `ConfigError` values to exit codes.
//!
//! Does NOT handle:
//! - Error message formatting (handled by anyhow Display).
//!
//! Invariants:
//! - Exit codes 1-5 are reserved for specific error categories.
//! - Exit code 130 is reserved for SIGINT (128 + SIGINT).

use zenoss_client::ClientError;
use zenoss_config::ConfigError;

/// Structured exit codes for zenoss-cli.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    Success = 0,

    /// Unhandled or generic failure.
    GeneralError = 1,

    /// Credentials missing or rejected (401, login page).
    AuthenticationFailed = 2,

    /// Network, timeout, or DNS failure.
    ConnectionError = 3,

    /// The named device does not exist.
    NotFound = 4,

    /// Bad input or an unexpected response shape.
    ValidationError = 5,

    /// SIGINT/Ctrl+C (128 + 2).
    Interrupted = 130,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

impl From<&ConfigError> for ExitCode {
    fn from(err: &ConfigError) -> Self {
        match err {
            ConfigError::MissingCredentials => ExitCode::AuthenticationFailed,
            ConfigError::MissingHostname
            | ConfigError::InvalidHostname { .. }
            | ConfigError::InvalidValue { .. }
            | ConfigError::InvalidTimeout { .. }
            | ConfigError::ProfileNotFound(_) => ExitCode::ValidationError,
            _ => ExitCode::GeneralError,
        }
    }
}

impl From<&ClientError> for ExitCode {
    fn from(err: &ClientError) -> Self {
        if err.is_auth_error() {
            return ExitCode::AuthenticationFailed;
        }
        if err.is_not_found() {
            return ExitCode::NotFound;
        }

        match err {
            ClientError::Config(e) => Self::from(e),

            ClientError::Unauthorized { .. } | ClientError::AuthFailed(_) => {
                ExitCode::AuthenticationFailed
            }
            ClientError::ApiError { status: 401, .. } => ExitCode::AuthenticationFailed,

            ClientError::HttpError(e) if e.is_connect() || e.is_timeout() => {
                ExitCode::ConnectionError
            }

            ClientError::DeviceNotFound(_) => ExitCode::NotFound,
            ClientError::ApiError { status: 404, .. } => ExitCode::NotFound,

            ClientError::UnknownDeviceClass(_)
            | ClientError::InvalidResponse(_)
            | ClientError::InvalidHeader(_)
            | ClientError::Serialization(_) => ExitCode::ValidationError,
            ClientError::ApiError { status: 400, .. } => ExitCode::ValidationError,

            ClientError::HttpError(_)
            | ClientError::ApiError { .. }
            | ClientError::RouterException { .. } => ExitCode::GeneralError,
        }
    }
}

/// Returned when the user interrupts a running command.
#[derive(Debug, thiserror::Error)]
#[error("Operation cancelled")]
pub struct Cancelled;

/// Extract an exit code from an anyhow error chain.
pub trait ExitCodeExt {
    /// Returns `GeneralError` when no known error type is in the chain.
    fn exit_code(&self) -> ExitCode;
}

impl ExitCodeExt for anyhow::Error {
    fn exit_code(&self) -> ExitCode {
        for cause in self.chain() {
            if let Some(client_err) = cause.downcast_ref::<ClientError>() {
                return ExitCode::from(client_err);
            }
            if let Some(config_err) = cause.downcast_ref::<ConfigError>() {
                return ExitCode::from(config_err);
            }
            if cause.is::<Cancelled>() {
                return ExitCode::Interrupted;
            }
        }
        ExitCode::GeneralError
    }
}
