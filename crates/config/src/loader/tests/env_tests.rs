//! Environment variable tests for the configuration loader.

use std::time::Duration;

use secrecy::ExposeSecret;
use serial_test::serial;

use super::{env_lock, with_zenoss_env};
use crate::loader::builder::ConfigLoader;
use crate::loader::error::ConfigError;
use crate::types::Credential;

#[test]
#[serial]
fn test_env_vars_applied() {
    let _lock = env_lock().lock().unwrap();
    with_zenoss_env(
        &[
            ("ZENOSS_HOSTNAME", "zenoss.example.com"),
            ("ZENOSS_USERNAME", "username"),
            ("ZENOSS_PASSWORD", "password"),
            ("ZENOSS_TIMEOUT", "90"),
        ],
        || {
            let config = ConfigLoader::new().from_env().unwrap().build().unwrap();
            assert_eq!(config.connection.hostname, "zenoss.example.com");
            assert_eq!(config.connection.timeout, Duration::from_secs(90));
            match config.credential {
                Credential::UserPass { username, password } => {
                    assert_eq!(username, "username");
                    assert_eq!(password.expose_secret(), "password");
                }
                other => panic!("Expected UserPass, got {:?}", other),
            }
        },
    );
}

#[test]
#[serial]
fn test_invalid_timeout_env_var() {
    let _lock = env_lock().lock().unwrap();
    with_zenoss_env(&[("ZENOSS_TIMEOUT", "soon")], || {
        let result = ConfigLoader::new().from_env();
        assert!(matches!(
            result,
            Err(ConfigError::InvalidValue { ref var, .. }) if var == "ZENOSS_TIMEOUT"
        ));
    });
}

#[test]
#[serial]
fn test_empty_env_vars_ignored() {
    let _lock = env_lock().lock().unwrap();
    with_zenoss_env(&[("ZENOSS_API_KEY", ""), ("ZENOSS_USERNAME", "  ")], || {
        let config = ConfigLoader::new()
            .with_hostname("zenoss".to_string())
            .with_username("admin".to_string())
            .with_password("password".to_string())
            .from_env()
            .unwrap()
            .build()
            .unwrap();
        match config.credential {
            Credential::UserPass { username, .. } => assert_eq!(username, "admin"),
            other => panic!("Expected UserPass, got {:?}", other),
        }
    });
}
