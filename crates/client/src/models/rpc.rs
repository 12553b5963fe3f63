//! Router RPC envelopes.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::AuthErrorDetail;

/// Transaction id sent with every call; Zenoss echoes it back unchecked.
pub const RPC_TID: u32 = 1;

/// Body posted to a `*_router` endpoint.
#[derive(Debug, Serialize)]
pub struct RpcRequest<'a> {
    pub action: &'a str,
    pub method: &'a str,
    pub data: &'a Value,
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub tid: u32,
}

impl<'a> RpcRequest<'a> {
    pub fn new(action: &'a str, method: &'a str, data: &'a Value) -> Self {
        Self {
            action,
            method,
            data,
            kind: "rpc",
            tid: RPC_TID,
        }
    }
}

/// Decoded router response.
///
/// Successful calls carry `result`; server-side failures come back as
/// `{"type": "exception", "message": ...}`.
#[derive(Debug, Deserialize)]
pub struct RpcResponse {
    #[serde(default)]
    pub result: Option<Value>,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl RpcResponse {
    pub fn is_exception(&self) -> bool {
        self.kind.as_deref() == Some("exception")
    }
}

/// Body of a 401 response.
#[derive(Debug, Deserialize)]
pub struct AuthErrorBody {
    pub message: String,
    #[serde(default)]
    pub errors: Vec<AuthErrorDetail>,
}
