//! `DeviceRouter` methods.

use reqwest::Method;
use serde::Serialize;
use serde_json::Value;

use crate::endpoints::{Router, router_request};
use crate::error::{ClientError, Result};
use crate::metrics::MetricsCollector;
use crate::models::{AddDeviceParams, DeviceList, GetDevicesParams, ProductionStateUpdate};
use crate::session::Session;

/// Router methods take their parameters as a one-element array.
fn rpc_data<T: Serialize>(params: T) -> Result<Value> {
    Ok(serde_json::to_value([params])?)
}

/// List every device under `/zport/dmd/Devices`.
pub async fn get_devices(
    session: &Session,
    metrics: Option<&MetricsCollector>,
) -> Result<DeviceList> {
    let data = rpc_data(GetDevicesParams::default())?;
    let result = router_request(
        session,
        Method::GET,
        Router::Device,
        "getDevices",
        data,
        metrics,
    )
    .await?;

    serde_json::from_value(result)
        .map_err(|e| ClientError::InvalidResponse(format!("Failed to parse device list: {}", e)))
}

/// Add and model a device.
pub async fn add_device(
    session: &Session,
    params: AddDeviceParams,
    metrics: Option<&MetricsCollector>,
) -> Result<Value> {
    router_request(
        session,
        Method::POST,
        Router::Device,
        "addDevice",
        rpc_data(params)?,
        metrics,
    )
    .await
}

/// Change the production state of the given devices.
pub async fn set_production_state(
    session: &Session,
    update: ProductionStateUpdate,
    metrics: Option<&MetricsCollector>,
) -> Result<Value> {
    router_request(
        session,
        Method::POST,
        Router::Device,
        "setProductionState",
        rpc_data(update)?,
        metrics,
    )
    .await
}
