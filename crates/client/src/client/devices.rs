//! Device methods for [`ZenossClient`].
//!
//! # What this module handles:
//! - Looking a device up by exact name
//! - Adding a device and changing its production state
//!
//! # What this module does NOT handle:
//! - Router HTTP calls (in [`crate::endpoints::devices`])

use serde_json::Value;
use tracing::info;

use crate::client::ZenossClient;
use crate::endpoints;
use crate::error::{ClientError, Result};
use crate::models::{
    AddDeviceOptions, AddDeviceParams, FoundDevice, ProductionState, ProductionStateUpdate,
    device_class_for_kernel,
};

impl ZenossClient {
    /// Find the first device named exactly `name`.
    ///
    /// Returns the device record together with the listing hash, or `None`.
    pub async fn find_device(&self, name: &str) -> Result<Option<FoundDevice>> {
        let session = self.session()?;
        let devices = endpoints::devices::get_devices(&session, self.metrics.as_ref()).await?;

        let found = devices.find(name);
        match found {
            Some(_) => info!(device = name, "Found device in Zenoss"),
            None => info!(device = name, "Unable to find device in Zenoss"),
        }
        if let Some(m) = &self.metrics {
            m.record_device_lookup(found.is_some());
        }
        Ok(found)
    }

    /// Whether a device named `name` exists.
    pub async fn device_exists(&self, name: &str) -> Result<bool> {
        Ok(self.find_device(name).await?.is_some())
    }

    /// Add a device and have Zenoss model it.
    ///
    /// Without an explicit device class, one is derived from the local kernel.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::UnknownDeviceClass`] when no class was given and
    /// none is known for this kernel.
    pub async fn add_device(&self, name: &str, options: &AddDeviceOptions) -> Result<Value> {
        self.add_device_for_kernel(name, options, std::env::consts::OS)
            .await
    }

    pub(crate) async fn add_device_for_kernel(
        &self,
        name: &str,
        options: &AddDeviceOptions,
        kernel: &str,
    ) -> Result<Value> {
        let device_class = match &options.device_class {
            Some(class) => class.clone(),
            None => device_class_for_kernel(kernel)
                .map(str::to_string)
                .ok_or_else(|| ClientError::UnknownDeviceClass(kernel.to_string()))?,
        };

        info!(device = name, device_class = %device_class, "Adding device to Zenoss");

        let params = AddDeviceParams {
            device_name: name.to_string(),
            device_class,
            model: true,
            collector: options.collector.clone(),
            production_state: options.production_state,
        };
        let session = self.session()?;
        endpoints::devices::add_device(&session, params, self.metrics.as_ref()).await
    }

    /// Set the production state of an existing device.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::DeviceNotFound`] when no device has this name and
    /// [`ClientError::InvalidResponse`] when the listing omits its `uid`.
    pub async fn set_prod_state(&self, name: &str, state: ProductionState) -> Result<Value> {
        let found = self
            .find_device(name)
            .await?
            .ok_or_else(|| ClientError::DeviceNotFound(name.to_string()))?;

        let uid = found.device.uid.ok_or_else(|| {
            ClientError::InvalidResponse(format!("Device '{}' has no uid in Zenoss listing", name))
        })?;

        info!(device = name, prod_state = state.0, "Setting production state");

        let update = ProductionStateUpdate {
            uids: vec![uid],
            prod_state: state,
            hashcheck: found.hash,
        };
        let session = self.session()?;
        endpoints::devices::set_production_state(&session, update, self.metrics.as_ref()).await
    }
}
