//! Tests for the configuration loader builder.
//!
//! Responsibilities:
//! - Test builder methods, credential selection, and validation.
//! - Test profile loading from files.
//! - Test environment variable handling and precedence.
//!
//! Invariants:
//! - Tests use `serial_test` to prevent environment variable pollution.
//! - Tests use `env_lock()` for additional synchronization.
//! - Temporary directories are cleaned up automatically via `tempfile`.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

pub mod env_tests;
pub mod validation_tests;

const ZENOSS_VARS: [&str; 7] = [
    "ZENOSS_HOSTNAME",
    "ZENOSS_API_KEY",
    "ZENOSS_USERNAME",
    "ZENOSS_PASSWORD",
    "ZENOSS_TIMEOUT",
    "ZENOSS_PROFILE",
    "ZENOSS_CONFIG_PATH",
];

/// Returns the global test lock for environment variable isolation.
pub fn env_lock() -> &'static Mutex<()> {
    crate::test_util::global_test_lock()
}

/// Run `f` with every `ZENOSS_*` variable cleared, then the given overrides applied.
pub fn with_zenoss_env<F: FnOnce()>(overrides: &[(&str, &str)], f: F) {
    let vars: Vec<(&str, Option<&str>)> = ZENOSS_VARS
        .iter()
        .map(|name| {
            let value = overrides
                .iter()
                .find(|(k, _)| k == name)
                .map(|(_, v)| *v);
            (*name, value)
        })
        .collect();
    temp_env::with_vars(vars, f);
}

/// Write a profile file with a `dev` (basic auth) and a `cloud` (API key) profile.
pub fn create_test_config_file(dir: &Path) -> PathBuf {
    write_config_file(
        dir,
        r#"{
            "profiles": {
                "dev": {
                    "hostname": "zenoss-dev.example.com",
                    "username": "dev-user",
                    "password": "dev-pass",
                    "timeout_seconds": 45
                },
                "cloud": {
                    "hostname": "example.zenoss.io",
                    "api_key": "cloud-key"
                }
            }
        }"#,
    )
}

pub fn write_config_file(dir: &Path, content: &str) -> PathBuf {
    let path = dir.join("config.json");
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(content.as_bytes()).unwrap();
    path
}
