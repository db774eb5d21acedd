//! # Report Configuration
//!
//! Where the report text comes from and where the JSON goes.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Command line flags (highest priority, applied by the binary)       │
//! │     --output report.json                                               │
//! │                                                                         │
//! │  2. Environment Variables                                              │
//! │     MUTATION_REPORT_COMMAND=/opt/venv/bin/mutmut                       │
//! │     MUTATION_REPORT_OUTPUT=target/mut.json                             │
//! │                                                                         │
//! │  3. TOML Config File                                                   │
//! │     --config <path>, or report.toml in the platform config dir         │
//! │                                                                         │
//! │  4. Default Values (lowest priority)                                   │
//! │     mutmut results → mut.json                                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! [tool]
//! command = "mutmut"
//! args = ["results"]
//!
//! [output]
//! path = "mut.json"
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::{debug, info};

use crate::error::{ReportError, ReportResult};

/// Environment variable overriding [`ToolSettings::command`].
pub const ENV_COMMAND: &str = "MUTATION_REPORT_COMMAND";

/// Environment variable overriding [`OutputSettings::path`].
pub const ENV_OUTPUT: &str = "MUTATION_REPORT_OUTPUT";

// =============================================================================
// Tool Settings
// =============================================================================

/// How to invoke the mutation tool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolSettings {
    /// Executable name or path.
    #[serde(default = "default_command")]
    pub command: String,

    /// Arguments that make the tool print its results.
    #[serde(default = "default_args")]
    pub args: Vec<String>,
}

fn default_command() -> String {
    "mutmut".to_string()
}

fn default_args() -> Vec<String> {
    vec!["results".to_string()]
}

impl Default for ToolSettings {
    fn default() -> Self {
        ToolSettings {
            command: default_command(),
            args: default_args(),
        }
    }
}

// =============================================================================
// Output Settings
// =============================================================================

/// Where the JSON document is written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputSettings {
    /// Output file path.
    #[serde(default = "default_output_path")]
    pub path: PathBuf,
}

fn default_output_path() -> PathBuf {
    PathBuf::from("mut.json")
}

impl Default for OutputSettings {
    fn default() -> Self {
        OutputSettings {
            path: default_output_path(),
        }
    }
}

// =============================================================================
// Report Configuration
// =============================================================================

/// Complete converter configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Mutation tool invocation.
    #[serde(default)]
    pub tool: ToolSettings,

    /// JSON output.
    #[serde(default)]
    pub output: OutputSettings,
}

impl ReportConfig {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (explicit path, else `report.toml` in the config dir)
    /// 3. Environment variables
    ///
    /// An explicit path that does not exist is an error; a missing default
    /// file is not.
    pub fn load(config_path: Option<PathBuf>) -> ReportResult<Self> {
        let mut config = match config_path {
            Some(path) => {
                info!(?path, "Loading report config from file");
                Self::from_toml_str(&std::fs::read_to_string(&path)?)?
            }
            None => match Self::default_config_path() {
                Some(path) if path.exists() => {
                    info!(?path, "Loading report config from file");
                    Self::from_toml_str(&std::fs::read_to_string(&path)?)?
                }
                path => {
                    debug!(?path, "Config file not found, using defaults");
                    Self::default()
                }
            },
        };

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Parses a TOML document; missing sections fall back to defaults.
    pub fn from_toml_str(contents: &str) -> ReportResult<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> ReportResult<()> {
        if self.tool.command.trim().is_empty() {
            return Err(ReportError::InvalidConfig(
                "tool.command must not be empty".into(),
            ));
        }

        if self.output.path.as_os_str().is_empty() {
            return Err(ReportError::InvalidConfig(
                "output.path must not be empty".into(),
            ));
        }

        Ok(())
    }

    /// Applies environment variable overrides.
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Applies overrides from any key lookup (the environment in
    /// production, a map in tests).
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(command) = lookup(ENV_COMMAND) {
            debug!(command = %command, "Overriding tool command from environment");
            self.tool.command = command;
        }

        if let Some(path) = lookup(ENV_OUTPUT) {
            debug!(path = %path, "Overriding output path from environment");
            self.output.path = PathBuf::from(path);
        }
    }

    /// Returns the default config file path.
    fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "billing", "mutation-report")
            .map(|dirs| dirs.config_dir().join("report.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_default_config() {
        let config = ReportConfig::default();
        assert_eq!(config.tool.command, "mutmut");
        assert_eq!(config.tool.args, vec!["results".to_string()]);
        assert_eq!(config.output.path, PathBuf::from("mut.json"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = ReportConfig::from_toml_str("[output]\npath = \"out/report.json\"\n").unwrap();
        assert_eq!(config.tool, ToolSettings::default());
        assert_eq!(config.output.path, PathBuf::from("out/report.json"));
    }

    #[test]
    fn test_invalid_toml() {
        let err = ReportConfig::from_toml_str("[tool\ncommand = 1").unwrap_err();
        assert!(matches!(err, ReportError::ConfigParse(_)));
    }

    #[test]
    fn test_config_validation() {
        let mut config = ReportConfig::default();
        config.tool.command = "  ".to_string();
        assert!(config.validate().is_err());

        config.tool.command = "mutmut".to_string();
        config.output.path = PathBuf::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_overrides() {
        let env: HashMap<&str, &str> = [
            (ENV_COMMAND, "/opt/venv/bin/mutmut"),
            (ENV_OUTPUT, "target/mut.json"),
        ]
        .into_iter()
        .collect();

        let mut config = ReportConfig::default();
        config.apply_overrides(|key| env.get(key).map(|value| value.to_string()));

        assert_eq!(config.tool.command, "/opt/venv/bin/mutmut");
        assert_eq!(config.output.path, PathBuf::from("target/mut.json"));
        assert_eq!(config.tool.args, default_args());
    }

    #[test]
    fn test_toml_serialization() {
        let config = ReportConfig::default();
        let text = toml::to_string_pretty(&config).unwrap();
        assert_eq!(ReportConfig::from_toml_str(&text).unwrap(), config);
    }
}
