//! Data models for Zenoss router requests and responses.

pub mod device;
pub mod rpc;

pub use device::{
    AddDeviceOptions, AddDeviceParams, DeviceList, DeviceRecord, FoundDevice, GetDevicesParams,
    ParseProductionStateError, ProductionState, ProductionStateUpdate, device_class_for_kernel,
};
pub use rpc::{AuthErrorBody, RpcRequest, RpcResponse};
