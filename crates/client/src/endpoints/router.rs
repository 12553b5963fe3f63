//! Router table and the shared request/response path.
//!
//! Responsibilities:
//! - Map each router to its action name and URL segment.
//! - Send the RPC envelope with the session's headers and auth inside a
//!   `zenoss.router_request` span, so the trace context reaches Zenoss.
//! - Turn HTTP status, login-page bodies and exception envelopes into [`ClientError`]s.
//!
//! Invariants:
//! - A 2xx body containing the Zenoss login form is an authentication failure.
//! - Only the envelope's `result` is returned to callers.

use reqwest::{Method, StatusCode};
use serde_json::Value;
use std::fmt;
use std::time::Instant;
use tracing::{Instrument, debug, info_span};

use crate::error::{ClientError, Result};
use crate::metrics::MetricsCollector;
use crate::models::{AuthErrorBody, RpcRequest, RpcResponse};
use crate::session::Session;

/// Marker of the login form Zenoss serves when credentials are rejected.
const LOGIN_FORM_MARKER: &str = r#"name="__ac_name""#;

/// Zenoss JSON API routers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Router {
    Messaging,
    Events,
    Process,
    Service,
    Device,
    Network,
    Template,
    DetailNav,
    Report,
    Mib,
    ZenPack,
}

impl Router {
    pub const ALL: [Router; 11] = [
        Router::Messaging,
        Router::Events,
        Router::Process,
        Router::Service,
        Router::Device,
        Router::Network,
        Router::Template,
        Router::DetailNav,
        Router::Report,
        Router::Mib,
        Router::ZenPack,
    ];

    /// Action name sent in the envelope.
    pub const fn action(&self) -> &'static str {
        match self {
            Router::Messaging => "MessagingRouter",
            Router::Events => "EventsRouter",
            Router::Process => "ProcessRouter",
            Router::Service => "ServiceRouter",
            Router::Device => "DeviceRouter",
            Router::Network => "NetworkRouter",
            Router::Template => "TemplateRouter",
            Router::DetailNav => "DetailNavRouter",
            Router::Report => "ReportRouter",
            Router::Mib => "MibRouter",
            Router::ZenPack => "ZenPackRouter",
        }
    }

    /// URL segment in front of `_router`.
    pub const fn segment(&self) -> &'static str {
        match self {
            Router::Messaging => "messaging",
            Router::Events => "evconsole",
            Router::Process => "process",
            Router::Service => "service",
            Router::Device => "device",
            Router::Network => "network",
            Router::Template => "template",
            Router::DetailNav => "detailnav",
            Router::Report => "report",
            Router::Mib => "mib",
            Router::ZenPack => "zenpack",
        }
    }

    /// Path of the router endpoint relative to the base URL.
    pub fn path(&self) -> String {
        format!("/zport/dmd/{}_router", self.segment())
    }
}

impl fmt::Display for Router {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.action())
    }
}

/// Call `router.method` with `data` and return the envelope's `result`.
pub async fn router_request(
    session: &Session,
    http_method: Method,
    router: Router,
    method: &str,
    data: Value,
    metrics: Option<&MetricsCollector>,
) -> Result<Value> {
    let url = session.url(&router.path());
    let envelope = RpcRequest::new(router.action(), method, &data);

    debug!(router = %router, method, http_method = %http_method, "Sending router request");

    if let Some(m) = metrics {
        m.record_request(router.action(), method);
    }
    let started = Instant::now();

    let span = info_span!(
        "zenoss.router_request",
        router = router.action(),
        method,
        http_status = tracing::field::Empty,
    );

    let outcome = async {
        let response = session
            .request(http_method, &url)
            .json(&envelope)
            .send()
            .await?;
        let status = response.status();
        tracing::Span::current().record("http_status", status.as_u16());
        let body = response.text().await?;
        Ok::<_, ClientError>((status, body))
    }
    .instrument(span)
    .await;

    let result = match outcome {
        Ok((status, body)) => {
            if let Some(m) = metrics {
                m.record_request_duration(
                    router.action(),
                    method,
                    started.elapsed(),
                    Some(status.as_u16()),
                );
            }
            decode_router_response(status, &url, &body, router, method)
        }
        Err(e) => {
            if let Some(m) = metrics {
                m.record_request_duration(router.action(), method, started.elapsed(), None);
            }
            Err(e)
        }
    };

    if let (Err(e), Some(m)) = (&result, metrics) {
        m.record_client_error(router.action(), method, e);
    }
    result
}

/// Interpret a raw router response.
pub fn decode_router_response(
    status: StatusCode,
    url: &str,
    body: &str,
    router: Router,
    method: &str,
) -> Result<Value> {
    if status == StatusCode::UNAUTHORIZED {
        return Err(match serde_json::from_str::<AuthErrorBody>(body) {
            Ok(parsed) => ClientError::Unauthorized {
                message: parsed.message,
                errors: parsed.errors,
            },
            Err(_) => ClientError::Unauthorized {
                message: body.to_string(),
                errors: Vec::new(),
            },
        });
    }

    if !status.is_success() {
        return Err(ClientError::ApiError {
            status: status.as_u16(),
            url: url.to_string(),
            message: body.to_string(),
        });
    }

    if body.contains(LOGIN_FORM_MARKER) {
        return Err(ClientError::AuthFailed(
            "Zenoss returned its login page; check the username and password".to_string(),
        ));
    }

    let envelope: RpcResponse = serde_json::from_str(body).map_err(|e| {
        ClientError::InvalidResponse(format!("{}.{} returned non-JSON body: {}", router, method, e))
    })?;

    if envelope.is_exception() {
        return Err(ClientError::RouterException {
            router: router.action(),
            method: method.to_string(),
            message: envelope
                .message
                .unwrap_or_else(|| "unknown exception".to_string()),
        });
    }

    envelope.result.ok_or_else(|| {
        ClientError::InvalidResponse(format!("{}.{} response has no result", router, method))
    })
}
