use std::fs;

use serde::{Serialize, Deserialize};

use lighthouse_client::{LighthouseClient, DEFAULT_HOST};
use lighthouse_error::io::IoResult;

use crate::models::{Cli, DisplayFormat};

/// ## UserConfig
///
/// Preferences of the user, stored in `$HOME/.lighthouse/conf.yml`
///
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UserConfig {
  #[serde(default = "default_host")]
  pub host: String,
  #[serde(default)]
  pub display_format: DisplayFormat,
}

fn default_host() -> String {
  DEFAULT_HOST.to_owned()
}

impl Default for UserConfig {
  fn default() -> Self {
    Self {
      host: default_host(),
      display_format: DisplayFormat::default(),
    }
  }
}

impl UserConfig {
  /// Read the configuration of the current user.
  /// A missing or invalid file gives the default configuration.
  pub fn new() -> Self {
    let home_path = match std::env::var("HOME") {
      Ok(home) => home,
      Err(_) => return UserConfig::default(),
    };
    Self::from_path(&format!("{home_path}/.lighthouse/conf.yml"))
  }

  pub fn from_path(path: &str) -> Self {
    let s = match fs::read_to_string(path) {
      Ok(s) => s,
      Err(_) => return UserConfig::default(),
    };
    match serde_yaml::from_str::<UserConfig>(&s) {
      Ok(config) => config,
      Err(err) => {
        log::warn!("Ignoring invalid config {path}: {err}");
        UserConfig::default()
      }
    }
  }
}

/// ## DashboardConfig
///
/// Settings of one run, command line arguments take precedence
/// over the user configuration.
///
pub struct DashboardConfig {
  /// Lighthouse host to use
  pub host: String,
  /// Client generated from the host
  pub client: LighthouseClient,
  pub display_format: DisplayFormat,
}

impl DashboardConfig {
  pub fn new(args: &Cli, user_config: UserConfig) -> IoResult<Self> {
    let host = args.host.clone().unwrap_or(user_config.host);
    let client = LighthouseClient::connect_to(&host)?;
    Ok(Self {
      host,
      client,
      display_format: args.output.unwrap_or(user_config.display_format),
    })
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  use clap::Parser;

  /// A config file path unique to this test process
  fn temp_config(name: &str) -> std::path::PathBuf {
    std::env::temp_dir()
      .join(format!("lighthouse-{name}-{}.yml", std::process::id()))
  }

  #[test]
  fn read_user_config() {
    let path = temp_config("conf");
    fs::write(&path, "Host: unix:///run/lighthouse.sock\nDisplayFormat: yaml\n")
      .unwrap();
    let config = UserConfig::from_path(&path.display().to_string());
    assert_eq!(config.host, "unix:///run/lighthouse.sock");
    assert_eq!(config.display_format, DisplayFormat::Yaml);
    fs::remove_file(&path).unwrap();
  }

  #[test]
  fn missing_or_invalid_config_is_default() {
    assert_eq!(
      UserConfig::from_path("/nonexistent/lighthouse/conf.yml"),
      UserConfig::default()
    );
    let path = temp_config("conf-invalid");
    fs::write(&path, "DisplayFormat: [").unwrap();
    let config = UserConfig::from_path(&path.display().to_string());
    assert_eq!(config, UserConfig::default());
    fs::remove_file(&path).unwrap();
  }

  #[test]
  fn arguments_override_user_config() {
    let user_config = UserConfig {
      host: "http://10.0.0.2:8080".to_owned(),
      display_format: DisplayFormat::Yaml,
    };
    let args =
      Cli::parse_from(["lighthouse", "-H", "http://127.0.0.1:9000", "-o", "json"]);
    let config = DashboardConfig::new(&args, user_config.clone()).unwrap();
    assert_eq!(config.host, "http://127.0.0.1:9000");
    assert_eq!(config.display_format, DisplayFormat::Json);
    let args = Cli::parse_from(["lighthouse", "-H", "http://10.0.0.2:8080"]);
    let config = DashboardConfig::new(&args, user_config).unwrap();
    assert_eq!(config.client.url, "http://10.0.0.2:8080");
    assert_eq!(config.display_format, DisplayFormat::Yaml);
  }

  #[test]
  fn invalid_host() {
    let args = Cli::parse_from(["lighthouse", "-H", "tcp://10.0.0.2"]);
    assert!(DashboardConfig::new(&args, UserConfig::default()).is_err());
  }
}
