//! Configuration loading and database URL resolution

use crate::{Error, Result};
use std::path::Path;

/// Database URL resolution priority order:
/// 1. Command-line argument (highest priority)
/// 2. Environment variable
/// 3. TOML config file (`database_url` key)
///
/// The database URL is required: the gateway refuses to start without one,
/// so resolution fails with a configuration error when no source provides it.
pub fn resolve_database_url(
    cli_arg: Option<&str>,
    env_var_name: &str,
    config_file: Option<&Path>,
) -> Result<String> {
    // Priority 1: Command-line argument
    if let Some(url) = cli_arg {
        if !url.is_empty() {
            return Ok(url.to_string());
        }
    }

    // Priority 2: Environment variable
    if let Ok(url) = std::env::var(env_var_name) {
        if !url.is_empty() {
            return Ok(url);
        }
    }

    // Priority 3: TOML config file
    if let Some(path) = config_file {
        if let Some(url) = read_config_key(path, "database_url") {
            return Ok(url);
        }
    }

    Err(Error::Config(
        "You must provide a database URL (--database-url, environment, or config file)"
            .to_string(),
    ))
}

/// Resolve the listen port: CLI argument, then config file, then default
pub fn resolve_port(cli_arg: Option<u16>, config_file: Option<&Path>, default: u16) -> u16 {
    if let Some(port) = cli_arg {
        return port;
    }

    if let Some(path) = config_file {
        if let Ok(content) = std::fs::read_to_string(path) {
            if let Ok(config) = toml::from_str::<toml::Value>(&content) {
                if let Some(port) = config.get("port").and_then(|v| v.as_integer()) {
                    if (1..=u16::MAX as i64).contains(&port) {
                        return port as u16;
                    }
                }
            }
        }
    }

    default
}

/// Read a single string key from a TOML config file, if present
fn read_config_key(path: &Path, key: &str) -> Option<String> {
    let content = std::fs::read_to_string(path).ok()?;
    let config = toml::from_str::<toml::Value>(&content).ok()?;
    config
        .get(key)
        .and_then(|v| v.as_str())
        .map(|s| s.to_string())
}
