//! Validation tests for `ConfigLoader::build`.

use std::time::Duration;

use serial_test::serial;

use super::env_lock;
use crate::loader::builder::ConfigLoader;
use crate::loader::error::ConfigError;

#[test]
#[serial]
fn test_missing_hostname() {
    let _lock = env_lock().lock().unwrap();
    let result = ConfigLoader::new()
        .with_api_key("key".to_string())
        .build();
    assert!(matches!(result, Err(ConfigError::MissingHostname)));
}

#[test]
#[serial]
fn test_blank_hostname_is_missing() {
    let _lock = env_lock().lock().unwrap();
    let result = ConfigLoader::new()
        .with_hostname("   ".to_string())
        .with_api_key("key".to_string())
        .build();
    assert!(matches!(result, Err(ConfigError::MissingHostname)));
}

#[test]
#[serial]
fn test_missing_credentials() {
    let _lock = env_lock().lock().unwrap();
    let result = ConfigLoader::new()
        .with_hostname("zenoss".to_string())
        .with_username("admin".to_string())
        .build();
    assert!(matches!(result, Err(ConfigError::MissingCredentials)));
}

#[test]
#[serial]
fn test_blank_credentials_are_missing() {
    let _lock = env_lock().lock().unwrap();
    let result = ConfigLoader::new()
        .with_hostname("zenoss".to_string())
        .with_api_key(" ".to_string())
        .with_username("admin".to_string())
        .with_password("\t".to_string())
        .build();
    assert!(matches!(result, Err(ConfigError::MissingCredentials)));
}

#[test]
#[serial]
fn test_invalid_hostname_rejected() {
    let _lock = env_lock().lock().unwrap();
    let result = ConfigLoader::new()
        .with_hostname("not a host".to_string())
        .with_api_key("key".to_string())
        .build();
    assert!(matches!(result, Err(ConfigError::InvalidHostname { .. })));
}

#[test]
#[serial]
fn test_timeout_bounds() {
    let _lock = env_lock().lock().unwrap();
    let zero = ConfigLoader::new()
        .with_hostname("zenoss".to_string())
        .with_api_key("key".to_string())
        .with_timeout(Duration::from_secs(0))
        .build();
    assert!(matches!(zero, Err(ConfigError::InvalidTimeout { .. })));

    let huge = ConfigLoader::new()
        .with_hostname("zenoss".to_string())
        .with_api_key("key".to_string())
        .with_timeout(Duration::from_secs(7200))
        .build();
    assert!(matches!(huge, Err(ConfigError::InvalidTimeout { .. })));
}
