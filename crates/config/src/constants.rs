//! Centralized constants for the Zenoss client workspace.
//!
//! Default values and well-known configuration keys shared across crates.

// =============================================================================
// Configuration Keys
// =============================================================================

/// Provider key holding the Zenoss host (optionally with scheme and port).
pub const KEY_HOSTNAME: &str = "hostname";

/// Provider key holding the API key sent as `z-api-key`.
pub const KEY_API_KEY: &str = "api_key";

/// Provider key holding the basic-auth username.
pub const KEY_USERNAME: &str = "username";

/// Provider key holding the basic-auth password.
pub const KEY_PASSWORD: &str = "password";

// =============================================================================
// Connection & Timeout Defaults
// =============================================================================

/// Default HTTP request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Maximum allowed request timeout in seconds (1 hour).
pub const MAX_TIMEOUT_SECS: u64 = 3600;

/// Default maximum number of HTTP redirects to follow.
pub const DEFAULT_MAX_REDIRECTS: usize = 5;

// =============================================================================
// Device Defaults
// =============================================================================

/// Collector assigned to newly added devices when none is given.
pub const DEFAULT_COLLECTOR: &str = "localhost";

/// Production state assigned to newly added devices (Production).
pub const DEFAULT_PRODUCTION_STATE: i32 = 1000;

/// Profile directory name used with the `directories` crate.
pub const APP_DIR_NAME: &str = "zenoss-client";
