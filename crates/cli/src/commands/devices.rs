//! Device command implementations.

use anyhow::{Context, Result};
use tracing::info;
use zenoss_client::{AddDeviceOptions, ClientError, ProductionState, ZenossClient};

use crate::formatters::{OutputFormat, get_formatter};

pub async fn find_device(client: &ZenossClient, name: &str, output: OutputFormat) -> Result<()> {
    let device = client
        .find_device(name)
        .await
        .with_context(|| format!("Failed to look up device '{}'", name))?
        .ok_or_else(|| ClientError::DeviceNotFound(name.to_string()))?;

    print!("{}", get_formatter(output).format_device(&device)?);
    Ok(())
}

pub async fn device_exists(client: &ZenossClient, name: &str, output: OutputFormat) -> Result<()> {
    let exists = client
        .device_exists(name)
        .await
        .with_context(|| format!("Failed to look up device '{}'", name))?;

    print!("{}", get_formatter(output).format_exists(name, exists)?);
    Ok(())
}

pub async fn add_device(
    client: &ZenossClient,
    name: &str,
    options: &AddDeviceOptions,
    output: OutputFormat,
) -> Result<()> {
    info!(device = name, collector = %options.collector, "Adding device");

    let result = client
        .add_device(name, options)
        .await
        .with_context(|| format!("Failed to add device '{}'", name))?;

    print!("{}", get_formatter(output).format_router_result(&result)?);
    Ok(())
}

pub async fn set_prod_state(
    client: &ZenossClient,
    name: &str,
    state: ProductionState,
    output: OutputFormat,
) -> Result<()> {
    let result = client
        .set_prod_state(name, state)
        .await
        .with_context(|| format!("Failed to set production state of '{}' to {}", name, state))?;

    print!("{}", get_formatter(output).format_router_result(&result)?);
    Ok(())
}
