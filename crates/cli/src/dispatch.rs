//! Command dispatch logic.
//!
//! Responsibilities:
//! - Route parsed subcommands to their handlers.
//!
//! Does NOT handle:
//! - CLI structure definitions (see `args` module).
//! - Configuration loading (see `main()`).

use anyhow::Result;
use zenoss_client::{AddDeviceOptions, ZenossClient};

use crate::args::Commands;
use crate::commands;
use crate::formatters::OutputFormat;

/// Dispatch a subcommand to its handler.
pub(crate) async fn run_command(
    command: Commands,
    client: &ZenossClient,
    output: OutputFormat,
) -> Result<()> {
    match command {
        Commands::FindDevice { name } => {
            commands::devices::find_device(client, &name, output).await?;
        }
        Commands::DeviceExists { name } => {
            commands::devices::device_exists(client, &name, output).await?;
        }
        Commands::AddDevice {
            name,
            device_class,
            collector,
            prod_state,
        } => {
            let options = AddDeviceOptions {
                device_class,
                collector,
                production_state: prod_state,
            };
            commands::devices::add_device(client, &name, &options, output).await?;
        }
        Commands::SetProdState { name, state } => {
            commands::devices::set_prod_state(client, &name, state, output).await?;
        }
    }

    Ok(())
}
