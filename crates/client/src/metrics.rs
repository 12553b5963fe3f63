//! Metrics collection for Zenoss router calls.
//!
//! Records per-call counters, latency histograms and categorized errors
//! through the `metrics` crate facade.
//!
//! # What this module does NOT handle:
//! - Metrics exposition (see [`crate::metrics_exporter`])
//! - Persistent storage of metrics
//!
//! # Invariants
//! - All metrics use the label names `router`, `method`, `status`, `error_category`
//! - Recording is infallible and a no-op when no recorder is installed

use crate::error::ClientError;
use std::time::Duration;

/// Metric name for request duration histogram.
pub const METRIC_REQUEST_DURATION: &str = "zenoss_api_request_duration_seconds";

/// Metric name for total request counter.
pub const METRIC_REQUESTS_TOTAL: &str = "zenoss_api_requests_total";

/// Metric name for error counter.
pub const METRIC_ERRORS_TOTAL: &str = "zenoss_api_errors_total";

/// Metric name for device lookup counter.
pub const METRIC_DEVICE_LOOKUPS: &str = "zenoss_device_lookups_total";

/// Error categories for metrics labeling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Transport-level errors (connection refused, DNS, timeouts)
    Transport,
    /// Credential rejected (401 or login page)
    Auth,
    /// HTTP 4xx client errors
    Http4xx,
    /// HTTP 5xx server errors
    Http5xx,
    /// Router raised an exception or returned an unexpected shape
    Api,
    /// Unknown/unclassified errors
    Unknown,
}

impl ErrorCategory {
    /// Returns the string label for this error category.
    pub const fn as_str(&self) -> &'static str {
        match self {
            ErrorCategory::Transport => "transport",
            ErrorCategory::Auth => "auth",
            ErrorCategory::Http4xx => "http_4xx",
            ErrorCategory::Http5xx => "http_5xx",
            ErrorCategory::Api => "api",
            ErrorCategory::Unknown => "unknown",
        }
    }
}

impl From<&ClientError> for ErrorCategory {
    fn from(error: &ClientError) -> Self {
        match error {
            ClientError::Unauthorized { .. } | ClientError::AuthFailed(_) => ErrorCategory::Auth,
            ClientError::ApiError { status, .. } => {
                if (400..500).contains(status) {
                    ErrorCategory::Http4xx
                } else if (500..600).contains(status) {
                    ErrorCategory::Http5xx
                } else {
                    ErrorCategory::Api
                }
            }
            ClientError::HttpError(e) if e.is_connect() || e.is_timeout() => {
                ErrorCategory::Transport
            }
            ClientError::RouterException { .. } | ClientError::InvalidResponse(_) => {
                ErrorCategory::Api
            }
            _ => ErrorCategory::Unknown,
        }
    }
}

/// Metrics collector for Zenoss router calls.
///
/// Thin wrapper around the `metrics` macros that keeps label names consistent.
///
/// # Example
///
/// ```rust,ignore
/// use zenoss_client::metrics::MetricsCollector;
///
/// let collector = MetricsCollector::new();
/// collector.record_request("DeviceRouter", "getDevices");
/// ```
#[derive(Debug, Clone, Default)]
pub struct MetricsCollector {
    enabled: bool,
}

impl MetricsCollector {
    /// Create an enabled metrics collector.
    pub fn new() -> Self {
        Self { enabled: true }
    }

    /// Create a collector that records nothing.
    pub fn disabled() -> Self {
        Self { enabled: false }
    }

    /// Check if metrics collection is enabled.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Record the duration of a router call.
    ///
    /// `status` is `None` when the request failed before a response arrived.
    pub fn record_request_duration(
        &self,
        router: &str,
        method: &str,
        duration: Duration,
        status: Option<u16>,
    ) {
        if !self.enabled {
            return;
        }

        let status_label = status.map_or("error".to_string(), |s| s.to_string());

        metrics::histogram!(METRIC_REQUEST_DURATION,
            "router" => router.to_string(),
            "method" => method.to_string(),
            "status" => status_label,
        )
        .record(duration.as_secs_f64());
    }

    /// Record a router call attempt.
    pub fn record_request(&self, router: &str, method: &str) {
        if !self.enabled {
            return;
        }

        metrics::counter!(METRIC_REQUESTS_TOTAL,
            "router" => router.to_string(),
            "method" => method.to_string(),
        )
        .increment(1);
    }

    /// Record an error.
    pub fn record_error(&self, router: &str, method: &str, category: ErrorCategory) {
        if !self.enabled {
            return;
        }

        metrics::counter!(METRIC_ERRORS_TOTAL,
            "router" => router.to_string(),
            "method" => method.to_string(),
            "error_category" => category.as_str(),
        )
        .increment(1);
    }

    /// Record an error, categorizing it automatically.
    pub fn record_client_error(&self, router: &str, method: &str, error: &ClientError) {
        self.record_error(router, method, ErrorCategory::from(error));
    }

    /// Record the outcome of a device lookup.
    pub fn record_device_lookup(&self, found: bool) {
        if !self.enabled {
            return;
        }
        let outcome = if found { "found" } else { "not_found" };
        metrics::counter!(METRIC_DEVICE_LOOKUPS, "outcome" => outcome).increment(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_category_as_str() {
        assert_eq!(ErrorCategory::Transport.as_str(), "transport");
        assert_eq!(ErrorCategory::Auth.as_str(), "auth");
        assert_eq!(ErrorCategory::Http4xx.as_str(), "http_4xx");
        assert_eq!(ErrorCategory::Http5xx.as_str(), "http_5xx");
        assert_eq!(ErrorCategory::Api.as_str(), "api");
        assert_eq!(ErrorCategory::Unknown.as_str(), "unknown");
    }

    #[test]
    fn test_error_categorization() {
        let unauthorized = ClientError::Unauthorized {
            message: "Invalid token".to_string(),
            errors: vec![],
        };
        assert_eq!(ErrorCategory::from(&unauthorized), ErrorCategory::Auth);

        let api_404 = ClientError::ApiError {
            status: 404,
            url: "test".to_string(),
            message: "not found".to_string(),
        };
        assert_eq!(ErrorCategory::from(&api_404), ErrorCategory::Http4xx);

        let api_503 = ClientError::ApiError {
            status: 503,
            url: "test".to_string(),
            message: "unavailable".to_string(),
        };
        assert_eq!(ErrorCategory::from(&api_503), ErrorCategory::Http5xx);

        let exception = ClientError::RouterException {
            router: "DeviceRouter",
            method: "getDevices".to_string(),
            message: "boom".to_string(),
        };
        assert_eq!(ErrorCategory::from(&exception), ErrorCategory::Api);

        let not_found = ClientError::DeviceNotFound("web01".to_string());
        assert_eq!(ErrorCategory::from(&not_found), ErrorCategory::Unknown);
    }

    #[test]
    fn test_metrics_collector_enabled() {
        assert!(MetricsCollector::new().is_enabled());
        assert!(!MetricsCollector::disabled().is_enabled());
        assert!(!MetricsCollector::default().is_enabled());
    }

    #[test]
    fn test_recording_without_recorder_is_noop() {
        let collector = MetricsCollector::new();
        collector.record_request("DeviceRouter", "getDevices");
        collector.record_request_duration(
            "DeviceRouter",
            "getDevices",
            Duration::from_millis(5),
            Some(200),
        );
        collector.record_error("DeviceRouter", "getDevices", ErrorCategory::Api);
        collector.record_device_lookup(true);
    }
}
