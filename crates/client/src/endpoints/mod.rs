//! Zenoss router endpoints.
//!
//! Every call is a JSON-RPC style envelope sent to
//! `{base}/zport/dmd/{segment}_router`. [`router`] owns the envelope and
//! response handling; [`devices`] wraps the `DeviceRouter` methods.

pub mod devices;
mod router;

pub use router::{Router, decode_router_response, router_request};
