//! Zenoss JSON API client.
//!
//! This crate builds short-lived authenticated sessions against a Zenoss
//! instance and exposes device operations on top of the Zenoss router API.
//! Configuration is injected through [`zenoss_config::ConfigProvider`], and
//! requests authenticate with either an API key (`z-api-key` header) or HTTP
//! basic auth.

pub mod client;
pub mod endpoints;
pub mod error;
pub mod metrics;
pub mod metrics_exporter;
pub mod models;
pub mod session;
#[cfg(any(test, feature = "test-utils"))]
pub mod testing;
pub mod tracing;

pub use client::ZenossClient;
pub use client::builder::ZenossClientBuilder;
pub use endpoints::Router;
pub use error::{ClientError, Result};
pub use crate::metrics::{ErrorCategory, MetricsCollector};
pub use metrics_exporter::MetricsExporter;
pub use models::{
    AddDeviceOptions, DeviceList, DeviceRecord, FoundDevice, ProductionState,
    device_class_for_kernel,
};
pub use session::{Session, SessionOptions};
pub use crate::tracing::{TracingConfig, TracingGuard};
