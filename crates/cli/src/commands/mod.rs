//! CLI command implementations.

pub mod devices;
