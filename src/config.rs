//! Configuration management for routerlab.
//!
//! Loads settings from a TOML file. Every section is optional; a missing
//! file yields the defaults.

use crate::error::{Result, SimError};
use crate::presenter::PresenterOptions;
use crate::scenario::Scenario;
use crate::session::DEFAULT_HOSTNAME;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure for routerlab.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Config {
    /// Initial device settings.
    #[serde(default)]
    pub device: DeviceConfig,

    /// Output rendering settings.
    #[serde(default)]
    pub presenter: PresenterOptions,

    /// Lab addressing shown in the interactive UI.
    #[serde(default)]
    pub scenario: Scenario,

    /// Line server settings.
    #[serde(default)]
    pub server: ServerConfig,
}

/// Initial device settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DeviceConfig {
    /// Hostname each new session starts with.
    #[serde(default = "default_hostname")]
    pub hostname: String,
}

fn default_hostname() -> String {
    DEFAULT_HOSTNAME.to_string()
}

impl Default for DeviceConfig {
    fn default() -> Self {
        Self {
            hostname: default_hostname(),
        }
    }
}

/// Framing used by the line server.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WireFormat {
    /// Output lines followed by the prompt.
    #[default]
    Text,
    /// One `{"output": [...], "prompt": "..."}` object per command.
    Json,
}

/// Line server configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ServerConfig {
    /// Address to listen on.
    #[serde(default = "default_bind")]
    pub bind: String,

    #[serde(default)]
    pub format: WireFormat,
}

fn default_bind() -> String {
    "127.0.0.1:2323".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
            format: WireFormat::default(),
        }
    }
}

impl Config {
    /// Returns the default config file path for the current platform.
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("routerlab")
            .join("config.toml")
    }

    /// Loads configuration from a TOML file.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .map_err(|e| SimError::config(format!("Failed to read config file: {e}")))?;

        Self::parse_toml(&content, path)
    }

    /// Parses configuration from a TOML string.
    fn parse_toml(content: &str, path: &Path) -> Result<Self> {
        toml::from_str(content).map_err(|e| {
            SimError::config(format!(
                "Configuration error in {}:\n  {}",
                path.display(),
                e
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::device::InterfaceId;
    use crate::presenter::AclLabelPolicy;

    fn parse(toml: &str) -> Result<Config> {
        Config::parse_toml(toml, Path::new("test.toml"))
    }

    #[test]
    fn test_parse_valid_config() {
        let toml = r#"
[device]
hostname = "BR1"

[presenter]
acl_labels = "by-range"
transcript_limit = 500

[scenario.lan]
network = "172.16.0.0"
netmask = "255.255.0.0"
interface = "g0/0"
address = "172.16.0.1"

[server]
bind = "0.0.0.0:4000"
format = "json"
"#;

        let config = parse(toml).unwrap();
        assert_eq!(config.device.hostname, "BR1");
        assert_eq!(config.presenter.acl_labels, AclLabelPolicy::ByRange);
        assert_eq!(config.presenter.transcript_limit, Some(500));
        assert_eq!(config.scenario.lan.network, "172.16.0.0");
        assert_eq!(config.scenario.lan.peer, None);
        assert_eq!(config.scenario.wan, Scenario::default().wan);
        assert_eq!(config.server.bind, "0.0.0.0:4000");
        assert_eq!(config.server.format, WireFormat::Json);
    }

    #[test]
    fn test_parse_empty_config() {
        let config = parse("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.device.hostname, "Router");
        assert_eq!(config.presenter.acl_labels, AclLabelPolicy::Uniform);
        assert_eq!(config.server.format, WireFormat::Text);
    }

    #[test]
    fn test_long_interface_name_accepted() {
        let toml = r#"
[scenario.isp]
network = "198.51.100.0"
netmask = "255.255.255.252"
interface = "gigabitethernet0/2"
address = "198.51.100.2"
peer = "198.51.100.1"
"#;
        let config = parse(toml).unwrap();
        assert_eq!(config.scenario.isp.interface, InterfaceId::G0_2);
    }

    #[test]
    fn test_parse_invalid_toml() {
        let result = parse("[device\nhostname = ");
        assert!(result.is_err());
        let err = result.unwrap_err().to_string();
        assert!(err.contains("Configuration error"));
    }

    #[test]
    fn test_unknown_acl_policy_rejected() {
        let result = parse("[presenter]\nacl_labels = \"sometimes\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_load_nonexistent_file() {
        let config = Config::load_from_file(Path::new("/nonexistent/config.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_from_tempfile() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[device]\nhostname = \"HQ\"\n").unwrap();
        let config = Config::load_from_file(&path).unwrap();
        assert_eq!(config.device.hostname, "HQ");
    }

    #[test]
    fn test_default_path() {
        let path = Config::default_path();
        assert!(path.ends_with("routerlab/config.toml"));
    }
}
