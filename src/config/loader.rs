//! Multi-source config loading.
//!
//! Sources are merged lowest to highest priority:
//! 1. Built-in defaults
//! 2. User config: `<config dir>/tca-mcp/config.yaml`
//! 3. Project config: `.tca-mcp.yaml` in the project root
//! 4. Explicit `--config` path
//! 5. Environment: `TCA_MCP_LOG`, `TCA_MCP_DISABLED_RULES`
//!
//! YAML layers are deep-merged as `serde_yaml::Value` before deserializing,
//! so a file that only sets `lint:` leaves `logging:` from lower layers intact.

use std::path::{Path, PathBuf};

use serde_yaml::Value;

use super::schema::TcaMcpConfig;
use crate::error::{Result, TcaMcpError};

pub const PROJECT_CONFIG_FILE: &str = ".tca-mcp.yaml";
pub const ENV_LOG: &str = "TCA_MCP_LOG";
pub const ENV_DISABLED_RULES: &str = "TCA_MCP_DISABLED_RULES";

/// Location of the per-user config file, if the platform has a config dir.
pub fn user_config_path() -> Option<PathBuf> {
    directories::ProjectDirs::from("", "", "tca-mcp").map(|d| d.config_dir().join("config.yaml"))
}

/// Load and merge configuration from every source.
///
/// Missing files at the default locations are skipped. A missing `explicit`
/// path is an error, as is any file that fails to parse.
pub fn load_config(explicit: Option<&Path>, project_root: Option<&Path>) -> Result<TcaMcpConfig> {
    let mut merged = Value::Mapping(Default::default());

    if let Some(path) = user_config_path() {
        if let Some(layer) = read_layer(&path)? {
            merge_values(&mut merged, layer);
        }
    }

    if let Some(root) = project_root {
        if let Some(layer) = read_layer(&root.join(PROJECT_CONFIG_FILE))? {
            merge_values(&mut merged, layer);
        }
    }

    if let Some(path) = explicit {
        match read_layer(path)? {
            Some(layer) => merge_values(&mut merged, layer),
            None => {
                return Err(TcaMcpError::Config(format!(
                    "config file not found: {}",
                    path.display()
                )))
            }
        }
    }

    let config: TcaMcpConfig = serde_yaml::from_value(merged)?;
    Ok(apply_env_overrides(config, |key| std::env::var(key).ok()))
}

/// Apply environment overrides on top of a loaded config.
///
/// `lookup` abstracts `std::env::var` so tests stay hermetic.
pub fn apply_env_overrides<F>(mut config: TcaMcpConfig, lookup: F) -> TcaMcpConfig
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(filter) = lookup(ENV_LOG).filter(|v| !v.trim().is_empty()) {
        config.logging.filter = filter.trim().to_string();
    }
    if let Some(rules) = lookup(ENV_DISABLED_RULES) {
        for rule in rules.split(',').map(str::trim).filter(|r| !r.is_empty()) {
            if config.is_rule_enabled(rule) {
                config.lint.disabled_rules.push(rule.to_string());
            }
        }
    }
    config
}

fn read_layer(path: &Path) -> Result<Option<Value>> {
    if !path.is_file() {
        return Ok(None);
    }
    let text = std::fs::read_to_string(path)?;
    if text.trim().is_empty() {
        return Ok(None);
    }
    let value: Value = serde_yaml::from_str(&text)?;
    tracing::debug!(path = %path.display(), "loaded config layer");
    Ok(Some(value))
}

/// Deep-merge `overlay` into `base`. Mappings merge key by key; any other
/// value in `overlay` replaces the one in `base`.
fn merge_values(base: &mut Value, overlay: Value) {
    match (base, overlay) {
        (Value::Mapping(base_map), Value::Mapping(overlay_map)) => {
            for (key, value) in overlay_map {
                match base_map.get_mut(&key) {
                    Some(existing) => merge_values(existing, value),
                    None => {
                        base_map.insert(key, value);
                    }
                }
            }
        }
        (slot, value) => *slot = value,
    }
}
