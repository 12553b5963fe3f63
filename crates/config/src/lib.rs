//! Configuration management for the Zenoss client.
//!
//! This crate provides the [`ConfigProvider`] abstraction the client reads its
//! settings through, the [`Credential`] union, and a loader that assembles a
//! [`Config`] from `.env` files, environment variables, JSON profile files and
//! explicit overrides.

pub mod constants;
mod loader;
mod provider;
pub mod types;

pub use loader::{ConfigError, ConfigLoader, env_var_or_none};
pub use provider::ConfigProvider;
pub use types::{
    Config, ConnectionConfig, Credential, ProfileConfig, ProfileFile, base_url_from_hostname,
};
