//! Shared test utilities for zenoss-cli integration tests.
//!
//! Invariants / Assumptions:
//! - Commands built here never read a local `.env` or the host's `ZENOSS_*` variables.

use assert_cmd::Command;

#[allow(dead_code)]
pub const API_KEY: &str = "test-api-key";

/// Returns a hermetic `zenoss-cli` command with no configuration set.
pub fn zenoss_cmd_unconfigured() -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("zenoss-cli");

    cmd.env("DOTENV_DISABLED", "1");

    cmd.env_remove("ZENOSS_HOSTNAME")
        .env_remove("ZENOSS_API_KEY")
        .env_remove("ZENOSS_USERNAME")
        .env_remove("ZENOSS_PASSWORD")
        .env_remove("ZENOSS_TIMEOUT")
        .env_remove("ZENOSS_PROFILE")
        .env_remove("ZENOSS_CONFIG_PATH")
        .env_remove("ZENOSS_OTLP_ENDPOINT")
        .env_remove("ZENOSS_METRICS_BIND")
        .env_remove("RUST_LOG");

    cmd
}

/// Returns a hermetic `zenoss-cli` command authenticated with an API key.
#[allow(dead_code)]
pub fn zenoss_cmd_with_hostname(hostname: &str) -> Command {
    let mut cmd = zenoss_cmd_unconfigured();
    cmd.env("ZENOSS_HOSTNAME", hostname);
    cmd.env("ZENOSS_API_KEY", API_KEY);
    cmd
}
