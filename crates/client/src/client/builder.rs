//! Client builder for constructing [`ZenossClient`] instances.
//!
//! # Invariants
//! - A provider must be supplied, directly or through [`ZenossClientBuilder::from_config`].
//! - The timeout must be non-zero.

use std::sync::Arc;
use std::time::Duration;
use zenoss_config::constants::DEFAULT_TIMEOUT_SECS;
use zenoss_config::{Config, ConfigError, ConfigProvider};

use crate::client::ZenossClient;
use crate::error::Result;
use crate::metrics::MetricsCollector;
use crate::session::SessionOptions;

/// Builder for creating a new [`ZenossClient`].
pub struct ZenossClientBuilder {
    provider: Option<Arc<dyn ConfigProvider>>,
    timeout: Duration,
    metrics: Option<MetricsCollector>,
}

impl Default for ZenossClientBuilder {
    fn default() -> Self {
        Self {
            provider: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            metrics: None,
        }
    }
}

impl ZenossClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the configuration provider.
    pub fn provider<P>(mut self, provider: P) -> Self
    where
        P: ConfigProvider + 'static,
    {
        self.provider = Some(Arc::new(provider));
        self
    }

    /// Set an already shared configuration provider.
    pub fn shared_provider(mut self, provider: Arc<dyn ConfigProvider>) -> Self {
        self.provider = Some(provider);
        self
    }

    /// Set the request timeout. Default is 30 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the metrics collector for router call tracking.
    pub fn metrics(mut self, metrics: MetricsCollector) -> Self {
        self.metrics = Some(metrics);
        self
    }

    /// Use a loaded [`Config`] as the provider and take its timeout.
    pub fn from_config(mut self, config: &Config) -> Self {
        self.timeout = config.connection.timeout;
        self.provider = Some(Arc::new(config.clone()));
        self
    }

    /// Build the [`ZenossClient`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingHostname`] if no provider was given and
    /// [`ConfigError::InvalidTimeout`] for a zero timeout.
    pub fn build(self) -> Result<ZenossClient> {
        let provider = self.provider.ok_or(ConfigError::MissingHostname)?;

        if self.timeout.is_zero() {
            return Err(ConfigError::InvalidTimeout {
                message: "timeout must be greater than 0 seconds".to_string(),
            }
            .into());
        }

        Ok(ZenossClient {
            provider,
            options: SessionOptions {
                timeout: self.timeout,
            },
            metrics: self.metrics,
        })
    }
}
