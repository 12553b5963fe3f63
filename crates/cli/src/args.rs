//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Provide config path resolution helpers.
//!
//! Non-responsibilities:
//! - Does not execute commands (see `dispatch` module).

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use zenoss_client::ProductionState;
use zenoss_config::env_var_or_none;

use crate::formatters::OutputFormat;

#[derive(Parser)]
#[command(name = "zenoss-cli")]
#[command(about = "Zenoss CLI - Find and manage Zenoss devices from the command line", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  zenoss-cli find-device web01.example.com\n  zenoss-cli --output yaml find-device web01.example.com\n  zenoss-cli device-exists web01.example.com\n  zenoss-cli add-device web02.example.com --device-class /Server/Linux --prod-state pre-production\n  zenoss-cli set-prod-state web01.example.com maintenance\n  zenoss-cli --profile prod find-device db01\n"
)]
pub struct Cli {
    /// Zenoss hostname, optionally with an http:// or https:// scheme
    #[arg(long, global = true, env = "ZENOSS_HOSTNAME")]
    pub hostname: Option<String>,

    /// Username for basic authentication
    #[arg(short, long, global = true, env = "ZENOSS_USERNAME")]
    pub username: Option<String>,

    /// Password for basic authentication
    #[arg(short, long, global = true, env = "ZENOSS_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,

    /// API key sent as z-api-key (preferred over username/password)
    #[arg(short, long, global = true, env = "ZENOSS_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Request timeout in seconds
    #[arg(long, global = true, env = "ZENOSS_TIMEOUT")]
    pub timeout: Option<u64>,

    /// Profile name to load from config file
    #[arg(long, global = true, env = "ZENOSS_PROFILE")]
    pub profile: Option<String>,

    /// Path to a custom configuration file (overrides default location)
    #[arg(long, global = true, env = "ZENOSS_CONFIG_PATH", value_name = "FILE")]
    pub config_path: Option<PathBuf>,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,

    /// OTLP endpoint for exporting traces (e.g., http://localhost:4317)
    #[arg(long, global = true, env = "ZENOSS_OTLP_ENDPOINT")]
    pub otlp_endpoint: Option<String>,

    /// Service name reported with exported traces
    #[arg(long, global = true, env = "OTEL_SERVICE_NAME")]
    pub otel_service_name: Option<String>,

    /// Serve Prometheus metrics on this address (e.g., 127.0.0.1:9090)
    #[arg(long, global = true, env = "ZENOSS_METRICS_BIND", value_name = "ADDR")]
    pub metrics_bind: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Find a device by exact name and print it with the listing hash
    FindDevice {
        /// Device name as known to Zenoss
        name: String,
    },

    /// Print whether a device exists
    DeviceExists {
        /// Device name as known to Zenoss
        name: String,
    },

    /// Add a device and have Zenoss model it
    AddDevice {
        /// Device name (usually the fully qualified hostname)
        name: String,

        /// Device class path; defaults to /Server/Linux on Linux hosts
        #[arg(long, value_name = "CLASS")]
        device_class: Option<String>,

        /// Collector to monitor the device from
        #[arg(long, default_value = "localhost")]
        collector: String,

        /// Initial production state (name or integer)
        #[arg(long, default_value = "production", allow_hyphen_values = true)]
        prod_state: ProductionState,
    },

    /// Change a device's production state
    SetProdState {
        /// Device name as known to Zenoss
        name: String,

        /// New production state: production, pre-production, test, maintenance,
        /// decommissioned, or an integer
        #[arg(allow_hyphen_values = true)]
        state: ProductionState,
    },
}

/// Returns true if the path is empty or contains only whitespace.
pub(crate) fn path_is_blank(path: &Path) -> bool {
    path.to_string_lossy().trim().is_empty()
}

/// Ignore blank config paths so an empty flag or variable cannot clobber the default.
pub fn resolve_config_path(path: Option<PathBuf>) -> Option<PathBuf> {
    path.filter(|p| !path_is_blank(p)).or_else(|| {
        env_var_or_none("ZENOSS_CONFIG_PATH")
            .map(PathBuf::from)
            .filter(|p| !path_is_blank(p))
    })
}
