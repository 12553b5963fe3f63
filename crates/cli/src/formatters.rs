//! Output formatters for CLI commands.
//!
//! Responsibilities:
//! - Render device lookups and router results as JSON, YAML, or a plain table.
//!
//! Does NOT handle:
//! - Printing (formatters return strings).
//!
//! Invariants:
//! - JSON and YAML output is the serialized value, unchanged.
//! - Table output uses `Key: value` lines; missing values render as `N/A`.

use anyhow::Result;
use clap::ValueEnum;
use serde_json::Value;
use zenoss_client::FoundDevice;

/// Representation of missing or null values in table output.
pub const DEFAULT_MISSING_VALUE: &str = "N/A";

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Yaml,
    Table,
}

/// Formatter trait for the resources the CLI prints.
pub trait Formatter {
    /// Format a found device with its listing hash.
    fn format_device(&self, device: &FoundDevice) -> Result<String>;

    /// Format the answer to "does this device exist".
    fn format_exists(&self, name: &str, exists: bool) -> Result<String>;

    /// Format the `result` of a mutating router call.
    fn format_router_result(&self, result: &Value) -> Result<String>;
}

/// Get the formatter for an output format.
pub fn get_formatter(format: OutputFormat) -> Box<dyn Formatter> {
    match format {
        OutputFormat::Json => Box::new(JsonFormatter),
        OutputFormat::Yaml => Box::new(YamlFormatter),
        OutputFormat::Table => Box::new(TableFormatter),
    }
}

/// JSON formatter.
pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn format_device(&self, device: &FoundDevice) -> Result<String> {
        Ok(format!("{}\n", serde_json::to_string_pretty(device)?))
    }

    fn format_exists(&self, name: &str, exists: bool) -> Result<String> {
        let value = serde_json::json!({ "name": name, "exists": exists });
        Ok(format!("{}\n", serde_json::to_string_pretty(&value)?))
    }

    fn format_router_result(&self, result: &Value) -> Result<String> {
        Ok(format!("{}\n", serde_json::to_string_pretty(result)?))
    }
}

/// YAML formatter.
pub struct YamlFormatter;

impl Formatter for YamlFormatter {
    fn format_device(&self, device: &FoundDevice) -> Result<String> {
        Ok(serde_yaml::to_string(device)?)
    }

    fn format_exists(&self, name: &str, exists: bool) -> Result<String> {
        let value = serde_json::json!({ "name": name, "exists": exists });
        Ok(serde_yaml::to_string(&value)?)
    }

    fn format_router_result(&self, result: &Value) -> Result<String> {
        Ok(serde_yaml::to_string(result)?)
    }
}

/// Table formatter.
pub struct TableFormatter;

impl TableFormatter {
    fn scalar(value: &Value) -> String {
        match value {
            Value::Null => DEFAULT_MISSING_VALUE.to_string(),
            Value::String(s) if s.is_empty() => DEFAULT_MISSING_VALUE.to_string(),
            Value::String(s) => s.clone(),
            other => other.to_string(),
        }
    }

    fn key_values(object: &serde_json::Map<String, Value>) -> String {
        let mut keys: Vec<&String> = object.keys().collect();
        keys.sort();
        keys.into_iter()
            .map(|key| format!("{}: {}\n", key, Self::scalar(&object[key.as_str()])))
            .collect()
    }
}

impl Formatter for TableFormatter {
    fn format_device(&self, device: &FoundDevice) -> Result<String> {
        let mut output = String::new();
        output.push_str(&format!("Name: {}\n", device.device.name));
        output.push_str(&format!(
            "UID: {}\n",
            device
                .device
                .uid
                .as_deref()
                .unwrap_or(DEFAULT_MISSING_VALUE)
        ));
        output.push_str(&format!("Hash: {}\n", device.hash));
        output.push_str(&Self::key_values(&device.device.extra));
        Ok(output)
    }

    fn format_exists(&self, name: &str, exists: bool) -> Result<String> {
        Ok(if exists {
            format!("Device '{}' exists.\n", name)
        } else {
            format!("Device '{}' does not exist.\n", name)
        })
    }

    fn format_router_result(&self, result: &Value) -> Result<String> {
        Ok(match result {
            Value::Object(object) if object.is_empty() => "No result returned.\n".to_string(),
            Value::Object(object) => Self::key_values(object),
            other => format!("{}\n", Self::scalar(other)),
        })
    }
}
