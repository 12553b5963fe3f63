//! Zenoss CLI - look up and manage Zenoss devices from the command line.
//!
//! Responsibilities:
//! - Parse command-line arguments and environment variables.
//! - Assemble configuration and run device commands through the client library.
//! - Translate failures into structured exit codes.
//!
//! Does NOT handle:
//! - Router requests or response decoding (see `crates/client`).
//!
//! Invariants:
//! - `load_dotenv()` runs BEFORE CLI parsing so `.env` values feed clap env defaults.
//! - Logs go to stderr; stdout carries only command output.

mod args;
mod commands;
mod dispatch;
mod error;
mod formatters;

use args::Cli;
use clap::Parser;
use dispatch::run_command;
use error::{Cancelled, ExitCode, ExitCodeExt};
use zenoss_client::{MetricsCollector, MetricsExporter, TracingConfig, ZenossClient};
use zenoss_config::{Config, ConfigError, ConfigLoader};

#[tokio::main]
async fn main() {
    if let Err(e) = ConfigLoader::new().load_dotenv() {
        eprintln!("Failed to load environment: {}", e);
        std::process::exit(ExitCode::GeneralError.as_i32());
    }

    let cli = Cli::parse();

    let mut tracing_config = TracingConfig::new().with_service_name(
        cli.otel_service_name
            .clone()
            .unwrap_or_else(|| "zenoss-cli".to_string()),
    );
    if let Some(ref endpoint) = cli.otlp_endpoint {
        tracing_config = tracing_config.with_otlp_endpoint(endpoint);
    }
    let tracing_guard = match tracing_config.init() {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize tracing: {}", e);
            std::process::exit(ExitCode::GeneralError.as_i32());
        }
    };

    let metrics = match cli.metrics_bind.as_deref() {
        Some(bind_addr) => match MetricsExporter::install(bind_addr) {
            Ok(exporter) => {
                tracing::debug!(addr = %exporter.bind_addr(), "Metrics exporter installed");
                Some(MetricsCollector::new())
            }
            Err(e) => {
                eprintln!("Failed to start metrics exporter: {}", e);
                std::process::exit(ExitCode::GeneralError.as_i32());
            }
        },
        None => None,
    };

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to build configuration: {:#}", e);
            std::process::exit(ExitCode::from(&e).as_i32());
        }
    };

    let mut builder = ZenossClient::builder().from_config(&config);
    if let Some(metrics) = metrics {
        builder = builder.metrics(metrics);
    }

    let exit_code = match builder.build() {
        Ok(client) => {
            let run = run_command(cli.command, &client, cli.output);
            let result = tokio::select! {
                res = run => res,
                Ok(()) = tokio::signal::ctrl_c() => Err(Cancelled.into()),
            };
            match result {
                Ok(()) => ExitCode::Success,
                Err(e) => {
                    eprintln!("{:#}", e);
                    e.exit_code()
                }
            }
        }
        Err(e) => {
            eprintln!("Failed to create client: {:#}", e);
            ExitCode::from(&e)
        }
    };

    tracing_guard.shutdown();
    std::process::exit(exit_code.as_i32());
}

/// Merge profile file, environment and command-line values into a validated config.
///
/// Later sources win: profile, then `ZENOSS_*` variables, then flags.
fn load_config(cli: &Cli) -> Result<Config, ConfigError> {
    let mut loader = ConfigLoader::new();

    if let Some(path) = args::resolve_config_path(cli.config_path.clone()) {
        loader = loader.with_config_path(path);
    }
    if let Some(ref profile_name) = cli.profile {
        loader = loader.with_profile_name(profile_name.clone());
    }

    loader = loader.from_profile()?.from_env()?;

    if let Some(ref hostname) = cli.hostname {
        loader = loader.with_hostname(hostname.clone());
    }
    if let Some(ref username) = cli.username {
        loader = loader.with_username(username.clone());
    }
    if let Some(ref password) = cli.password {
        loader = loader.with_password(password.clone());
    }
    if let Some(ref api_key) = cli.api_key {
        loader = loader.with_api_key(api_key.clone());
    }
    if let Some(timeout_secs) = cli.timeout {
        loader = loader.with_timeout(std::time::Duration::from_secs(timeout_secs));
    }

    loader.build()
}
