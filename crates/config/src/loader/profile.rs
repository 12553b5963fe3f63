//! Profile file loading for configuration.
//!
//! Invariants:
//! - The profile name comes from the loader, falling back to `ZENOSS_PROFILE`.
//! - The file path comes from the loader, then `ZENOSS_CONFIG_PATH`, then the platform config dir.
//! - Missing profiles are recorded for later error handling in build().
//! - Blank profile values are treated as unset.

use secrecy::{ExposeSecret, SecretString};
use std::path::PathBuf;
use std::time::Duration;

use super::builder::ConfigLoader;
use super::env::{env_var_or_none, non_blank};
use super::error::ConfigError;
use crate::constants::APP_DIR_NAME;
use crate::types::{ProfileConfig, ProfileFile};

/// Returns the default path to the profile file.
///
/// - Linux/macOS: `~/.config/zenoss-client/config.json`
/// - Windows: `%AppData%\zenoss-client\config.json`
pub(crate) fn default_config_path() -> Result<PathBuf, ConfigError> {
    let proj_dirs = directories::ProjectDirs::from("", "", APP_DIR_NAME).ok_or_else(|| {
        ConfigError::ConfigDirUnavailable("Failed to determine project directories".to_string())
    })?;

    Ok(proj_dirs.config_dir().join("config.json"))
}

/// Apply profile configuration from a profile file to the loader.
pub fn apply_profile(loader: &mut ConfigLoader) -> Result<(), ConfigError> {
    let profile_name = match loader
        .profile_name()
        .cloned()
        .or_else(|| env_var_or_none("ZENOSS_PROFILE"))
    {
        Some(name) => name,
        None => return Ok(()),
    };

    let config_path = match loader
        .config_path()
        .cloned()
        .or_else(|| env_var_or_none("ZENOSS_CONFIG_PATH").map(PathBuf::from))
    {
        Some(path) => path,
        None => default_config_path()?,
    };

    if !config_path.exists() {
        tracing::debug!(path = %config_path.display(), "Profile file does not exist");
        loader.set_profile_missing(Some(profile_name));
        return Ok(());
    }

    let file = ProfileFile::load(&config_path)?;
    match file.profile(&profile_name) {
        Some(profile) => {
            tracing::debug!(profile = %profile_name, "Applying profile");
            apply_profile_config(loader, profile);
        }
        None => loader.set_profile_missing(Some(profile_name)),
    }

    Ok(())
}

fn apply_profile_config(loader: &mut ConfigLoader, profile: &ProfileConfig) {
    if let Some(hostname) = profile.hostname.clone().and_then(non_blank) {
        loader.set_hostname(Some(hostname));
    }
    if let Some(username) = profile.username.clone().and_then(non_blank) {
        loader.set_username(Some(username));
    }
    if let Some(password) = non_blank_secret(profile.password.as_ref()) {
        loader.set_password(Some(password));
    }
    if let Some(api_key) = non_blank_secret(profile.api_key.as_ref()) {
        loader.set_api_key(Some(api_key));
    }
    if let Some(secs) = profile.timeout_seconds {
        loader.set_timeout(Some(Duration::from_secs(secs)));
    }
}

fn non_blank_secret(secret: Option<&SecretString>) -> Option<SecretString> {
    secret
        .and_then(|s| non_blank(s.expose_secret().to_string()))
        .map(|s| SecretString::new(s.into()))
}
