//! Configuration data structures for tca-mcp.
//!
//! Defines the YAML config format: logging filter and lint rule toggles.
//! Every section is optional so partial files merge cleanly over defaults.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Top-level config
// ---------------------------------------------------------------------------

/// Root configuration for the server and CLI.
///
/// Loaded once at startup from YAML files and environment variables.
/// See [`crate::config::loader`] for the merge order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TcaMcpConfig {
    /// Config format version (currently "1.0").
    #[serde(default = "default_version")]
    pub version: String,

    /// Logging setup.
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Code analyzer setup.
    #[serde(default)]
    pub lint: LintConfig,
}

impl Default for TcaMcpConfig {
    fn default() -> Self {
        Self {
            version: default_version(),
            logging: LoggingConfig::default(),
            lint: LintConfig::default(),
        }
    }
}

impl TcaMcpConfig {
    /// Whether the lint rule with this id should run (defaults to true).
    pub fn is_rule_enabled(&self, rule_id: &str) -> bool {
        !self.lint.disabled_rules.iter().any(|r| r == rule_id)
    }
}

// ---------------------------------------------------------------------------
// LoggingConfig
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// `tracing_subscriber::EnvFilter` directive. `RUST_LOG` takes precedence.
    #[serde(default = "default_filter")]
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_filter(),
        }
    }
}

// ---------------------------------------------------------------------------
// LintConfig
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LintConfig {
    /// Rule ids to skip, e.g. `uncontrolled-dependency`.
    #[serde(default)]
    pub disabled_rules: Vec<String>,
}

// ---------------------------------------------------------------------------
// Defaults
// ---------------------------------------------------------------------------

fn default_version() -> String {
    "1.0".to_string()
}

fn default_filter() -> String {
    "tca_mcp=info".to_string()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_config() {
        let config = TcaMcpConfig::default();
        assert_eq!(config.version, "1.0");
        assert_eq!(config.logging.filter, "tca_mcp=info");
        assert!(config.lint.disabled_rules.is_empty());
    }

    #[test]
    fn test_empty_yaml_uses_defaults() {
        let config: TcaMcpConfig = serde_yaml::from_str("{}").unwrap();
        assert_eq!(config, TcaMcpConfig::default());
    }

    #[test]
    fn test_full_yaml_config() {
        let yaml = r#"
version: "1.0"
logging:
  filter: "tca_mcp=debug"
lint:
  disabled_rules:
    - uncontrolled-dependency
    - deprecated-view-store
"#;
        let config: TcaMcpConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.logging.filter, "tca_mcp=debug");
        assert!(!config.is_rule_enabled("uncontrolled-dependency"));
        assert!(!config.is_rule_enabled("deprecated-view-store"));
        assert!(config.is_rule_enabled("direct-network-call"));
    }

    #[test]
    fn test_lint_only_yaml_keeps_logging_default() {
        let yaml = "lint:\n  disabled_rules: [missing-cancellation]\n";
        let config: TcaMcpConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.logging, LoggingConfig::default());
        assert_eq!(config.lint.disabled_rules, vec!["missing-cancellation"]);
    }

    #[test]
    fn test_invalid_yaml_returns_error() {
        let result: Result<TcaMcpConfig, _> = serde_yaml::from_str("{{invalid yaml}}");
        assert!(result.is_err());
    }

    #[test]
    fn test_serde_yaml_roundtrip() {
        let mut config = TcaMcpConfig::default();
        config.lint.disabled_rules.push("unstructured-task".into());
        let yaml = serde_yaml::to_string(&config).unwrap();
        let back: TcaMcpConfig = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(back, config);
    }
}
