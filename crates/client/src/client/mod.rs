//! Zenoss API client.
//!
//! [`ZenossClient`] holds an injected [`ConfigProvider`] and builds a fresh
//! [`Session`] for every operation, so configuration changes made through the
//! provider are picked up by the next call.
//!
//! # Submodules
//! - [`builder`]: Client construction
//! - `devices`: Device lookup and mutation methods
//!
//! # What this module does NOT handle:
//! - Header and auth selection (see [`crate::session`])
//! - Envelope encoding and response decoding (see [`crate::endpoints`])

pub mod builder;
mod devices;

use reqwest::Method;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;
use zenoss_config::ConfigProvider;

use crate::endpoints::{self, Router};
use crate::error::Result;
use crate::metrics::MetricsCollector;
use crate::session::{Session, SessionOptions};

/// Zenoss JSON API client.
///
/// # Creating a Client
///
/// ```rust,ignore
/// use std::collections::HashMap;
/// use zenoss_client::ZenossClient;
///
/// let mut config = HashMap::new();
/// config.insert("hostname".to_string(), "zenoss.example.com".to_string());
/// config.insert("api_key".to_string(), "FFFFFFFF".to_string());
///
/// let client = ZenossClient::builder().provider(config).build()?;
/// let device = client.find_device("web01").await?;
/// ```
#[derive(Clone)]
pub struct ZenossClient {
    pub(crate) provider: Arc<dyn ConfigProvider>,
    pub(crate) options: SessionOptions,
    pub(crate) metrics: Option<MetricsCollector>,
}

impl fmt::Debug for ZenossClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ZenossClient")
            .field("options", &self.options)
            .field("metrics", &self.metrics)
            .finish_non_exhaustive()
    }
}

impl ZenossClient {
    /// Create a new client builder.
    pub fn builder() -> builder::ZenossClientBuilder {
        builder::ZenossClientBuilder::new()
    }

    /// Create a client with default options reading from `provider`.
    pub fn new(provider: Arc<dyn ConfigProvider>) -> Self {
        Self {
            provider,
            options: SessionOptions::default(),
            metrics: None,
        }
    }

    /// Build a session from the current provider values.
    pub fn session(&self) -> Result<Session> {
        Session::from_provider(self.provider.as_ref(), &self.options)
    }

    /// Session options applied to each call.
    pub fn options(&self) -> &SessionOptions {
        &self.options
    }

    /// Call an arbitrary router method and return its `result`.
    pub async fn router_request(
        &self,
        http_method: Method,
        router: Router,
        method: &str,
        data: Value,
    ) -> Result<Value> {
        let session = self.session()?;
        endpoints::router_request(
            &session,
            http_method,
            router,
            method,
            data,
            self.metrics.as_ref(),
        )
        .await
    }
}
