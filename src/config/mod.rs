use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Log configuration
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct LogConfig {
  /// Log file path, if not set, logs will be printed to stdout
  pub file: Option<PathBuf>,
  /// Log level, default is "info"
  #[serde(default = "default_log_level")]
  pub level: String,
}

fn default_log_level() -> String {
  "info".to_string()
}

impl Default for LogConfig {
  fn default() -> Self {
    Self {
      file: None,
      level: default_log_level(),
    }
  }
}

/// kvstore configuration
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Config {
  /// HTTP listening address
  #[serde(default = "default_server_addr")]
  pub server_addr: String,

  /// Backing snapshot file
  #[serde(default = "default_data_path")]
  pub data_path: PathBuf,

  /// Log configuration
  #[serde(default)]
  pub log: LogConfig,
}

fn default_server_addr() -> String {
  "0.0.0.0:8080".to_string()
}

fn default_data_path() -> PathBuf {
  PathBuf::from("data/store.json")
}

impl Default for Config {
  fn default() -> Self {
    Self {
      server_addr: default_server_addr(),
      data_path: default_data_path(),
      log: LogConfig::default(),
    }
  }
}

impl Config {
  /// Load configuration from TOML file
  pub fn from_file(path: &str) -> anyhow::Result<Self> {
    let config_str =
      fs::read_to_string(path).with_context(|| format!("Failed to read config file '{}'", path))?;

    let config: Config = toml::from_str(&config_str)
      .with_context(|| format!("Failed to parse config file '{}'", path))?;

    Ok(config)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_full_config() {
    let config_str = r#"
server_addr = "127.0.0.1:9000"
data_path = "/var/lib/kvstore/store.json"

[log]
level = "debug"
file = "/var/log/kvstore.log"
"#;

    let config: Config = toml::from_str(config_str).unwrap();
    assert_eq!(config.server_addr, "127.0.0.1:9000");
    assert_eq!(config.data_path, PathBuf::from("/var/lib/kvstore/store.json"));
    assert_eq!(config.log.level, "debug");
    assert_eq!(config.log.file, Some(PathBuf::from("/var/log/kvstore.log")));
  }

  #[test]
  fn test_empty_config_uses_defaults() {
    let config: Config = toml::from_str("").unwrap();
    assert_eq!(config, Config::default());
    assert_eq!(config.server_addr, "0.0.0.0:8080");
    assert_eq!(config.data_path, PathBuf::from("data/store.json"));
    assert_eq!(config.log.level, "info");
    assert!(config.log.file.is_none());
  }

  #[test]
  fn test_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("kvstore.toml");
    fs::write(&path, "data_path = \"elsewhere/db.json\"\n").unwrap();

    let config = Config::from_file(path.to_str().unwrap()).unwrap();
    assert_eq!(config.data_path, PathBuf::from("elsewhere/db.json"));
    assert_eq!(config.server_addr, "0.0.0.0:8080");
  }

  #[test]
  fn test_from_missing_file() {
    let err = Config::from_file("/nonexistent/kvstore.toml").unwrap_err();
    assert!(err.to_string().contains("Failed to read config file"));
  }
}
