//! Tracing subscriber and OpenTelemetry setup.
//!
//! Installs a `tracing-subscriber` registry filtered by `RUST_LOG`, optionally
//! with an OTLP exporter layer, and propagates W3C trace context on outgoing
//! router requests.
//!
//! # Usage
//!
//! ```rust,ignore
//! use zenoss_client::tracing::TracingConfig;
//!
//! let guard = TracingConfig::new()
//!     .with_otlp_endpoint("http://localhost:4317")
//!     .with_service_name("zenoss-cli")
//!     .init()?;
//! // Run application...
//! guard.shutdown();
//! ```

use opentelemetry::trace::TracerProvider;
use opentelemetry_sdk::trace::SdkTracerProvider;
use std::time::Duration;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable read for the default OTLP endpoint.
pub const OTLP_ENDPOINT_ENV: &str = "ZENOSS_OTLP_ENDPOINT";

const TRACER_NAME: &str = "zenoss-client";

/// Configuration for logging and OpenTelemetry tracing.
#[derive(Debug, Clone)]
pub struct TracingConfig {
    /// OTLP endpoint (e.g., "http://localhost:4317")
    pub otlp_endpoint: Option<String>,
    pub service_name: String,
    pub service_version: String,
    /// Whether to write formatted events to stderr
    pub enable_stdout: bool,
    /// Default filter directive when `RUST_LOG` is unset
    pub default_filter: String,
    /// Export timeout for the OTLP exporter
    pub timeout: Duration,
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self {
            otlp_endpoint: zenoss_config::env_var_or_none(OTLP_ENDPOINT_ENV),
            service_name: TRACER_NAME.to_string(),
            service_version: env!("CARGO_PKG_VERSION").to_string(),
            enable_stdout: true,
            default_filter: "warn".to_string(),
            timeout: Duration::from_secs(5),
        }
    }
}

impl TracingConfig {
    /// Create a new config with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_otlp_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.otlp_endpoint = Some(endpoint.into());
        self
    }

    pub fn with_service_name(mut self, name: impl Into<String>) -> Self {
        self.service_name = name.into();
        self
    }

    pub fn with_stdout(mut self, enable: bool) -> Self {
        self.enable_stdout = enable;
        self
    }

    pub fn with_default_filter(mut self, filter: impl Into<String>) -> Self {
        self.default_filter = filter.into();
        self
    }

    /// Initialize the global tracing subscriber.
    ///
    /// The returned guard must be held until shutdown so pending spans are
    /// exported.
    ///
    /// # Errors
    /// Returns an error if the OTLP pipeline fails to initialize.
    pub fn init(&self) -> Result<TracingGuard, TracingError> {
        use tracing_subscriber::fmt;

        let env_filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(&self.default_filter));

        let provider = match self.otlp_endpoint.as_deref() {
            Some(endpoint) => Some(self.create_tracer_provider(endpoint)?),
            None => None,
        };

        let otel_layer = provider
            .as_ref()
            .map(|p| tracing_opentelemetry::layer().with_tracer(p.tracer(TRACER_NAME)));
        let fmt_layer = self
            .enable_stdout
            .then(|| fmt::layer().with_writer(std::io::stderr));

        tracing_subscriber::registry()
            .with(env_filter)
            .with(otel_layer)
            .with(fmt_layer)
            .try_init()
            .map_err(|e| TracingError::InitError(e.to_string()))?;

        Ok(TracingGuard { provider })
    }

    fn create_tracer_provider(&self, endpoint: &str) -> Result<SdkTracerProvider, TracingError> {
        use opentelemetry_otlp::{Protocol, WithExportConfig};
        use opentelemetry_sdk::trace::{BatchSpanProcessor, Sampler};

        let otlp_exporter = opentelemetry_otlp::SpanExporter::builder()
            .with_tonic()
            .with_endpoint(endpoint)
            .with_timeout(self.timeout)
            .with_protocol(Protocol::Grpc)
            .build()
            .map_err(|e| TracingError::InitError(e.to_string()))?;

        let batch_processor = BatchSpanProcessor::builder(otlp_exporter).build();

        let resource = opentelemetry_sdk::Resource::builder()
            .with_attributes(vec![
                opentelemetry::KeyValue::new("service.name", self.service_name.clone()),
                opentelemetry::KeyValue::new("service.version", self.service_version.clone()),
            ])
            .build();

        Ok(SdkTracerProvider::builder()
            .with_span_processor(batch_processor)
            .with_resource(resource)
            .with_sampler(Sampler::ParentBased(Box::new(Sampler::AlwaysOn)))
            .build())
    }
}

/// Keeps the tracer provider alive until shutdown.
pub struct TracingGuard {
    provider: Option<SdkTracerProvider>,
}

impl TracingGuard {
    /// Flush pending spans and shut the exporter down.
    pub fn shutdown(&self) {
        if let Some(ref provider) = self.provider
            && let Err(e) = provider.shutdown()
        {
            eprintln!("Failed to shut down tracer provider: {e}");
        }
    }
}

/// Errors that can occur during tracing initialization.
#[derive(Debug, thiserror::Error)]
pub enum TracingError {
    #[error("Failed to initialize tracing: {0}")]
    InitError(String),
}

/// Inject the current `tracing` span's OpenTelemetry context into request
/// headers (W3C `traceparent`).
///
/// Without an OpenTelemetry layer, or outside any span, no header is added.
pub fn inject_trace_context(builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
    use opentelemetry::propagation::TextMapPropagator;
    use opentelemetry_sdk::propagation::TraceContextPropagator;
    use std::collections::HashMap;
    use tracing_opentelemetry::OpenTelemetrySpanExt;

    let context = ::tracing::Span::current().context();

    let propagator = TraceContextPropagator::new();
    let mut headers = HashMap::new();
    propagator.inject_context(&context, &mut headers);

    headers
        .into_iter()
        .fold(builder, |builder, (key, value)| builder.header(key, value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_methods() {
        let config = TracingConfig::new()
            .with_otlp_endpoint("http://localhost:4317")
            .with_service_name("zenoss-cli")
            .with_stdout(false)
            .with_default_filter("debug");

        assert_eq!(config.otlp_endpoint.as_deref(), Some("http://localhost:4317"));
        assert_eq!(config.service_name, "zenoss-cli");
        assert!(!config.enable_stdout);
        assert_eq!(config.default_filter, "debug");
    }

    #[test]
    fn test_inject_inside_otel_span_adds_traceparent() {
        use ::tracing::subscriber::with_default;

        let provider = SdkTracerProvider::builder().build();
        let subscriber = tracing_subscriber::registry()
            .with(tracing_opentelemetry::layer().with_tracer(provider.tracer(TRACER_NAME)));

        let request = with_default(subscriber, || {
            let span = ::tracing::info_span!("zenoss.router_request");
            let _entered = span.enter();
            inject_trace_context(reqwest::Client::new().get("http://localhost/"))
                .build()
                .unwrap()
        });

        let traceparent = request.headers().get("traceparent").unwrap();
        assert!(traceparent.to_str().unwrap().starts_with("00-"));
    }

    #[test]
    fn test_inject_without_active_span_adds_no_traceparent() {
        let client = reqwest::Client::new();
        let request = inject_trace_context(client.get("http://localhost/"))
            .build()
            .unwrap();
        assert!(request.headers().get("traceparent").is_none());
    }
}
