//! Configuration types for the Zenoss client.

mod auth;
mod connection;
mod profile;

pub use auth::Credential;
pub use connection::{Config, ConnectionConfig, base_url_from_hostname};
pub use profile::{ProfileConfig, ProfileFile};
