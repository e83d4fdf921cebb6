//! Configuration file support for infrabot-relay.
//!
//! Provides YAML-based configuration through `infrabot-relay.config.yml`
//! files, and resolves the effective settings from command-line flags,
//! environment variables (applied by clap), the config file and defaults.

use anyhow::Context;
use serde::Deserialize;
use std::collections::HashMap;
use std::net::{IpAddr, SocketAddr};
use std::path::Path;

use crate::provisioning::domain::BackendMode;
use crate::shared::{ConfigError, Result};

pub const CONFIG_FILENAME: &str = "infrabot-relay.config.yml";

/// Environment variable naming the InfraBot service base URL.
pub const UPSTREAM_URL_ENV: &str = "INFRABOT_API_URL";
pub const MODE_ENV: &str = "INFRABOT_RELAY_MODE";
pub const RELAY_URL_ENV: &str = "INFRABOT_RELAY_URL";

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_UPSTREAM_URL: &str = "http://localhost:8000";
pub const DEFAULT_RELAY_URL: &str = "http://127.0.0.1:5000";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub upstream_url: Option<String>,
    pub mode: Option<String>,
    pub relay_url: Option<String>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Server values given on the command line or through the environment.
#[derive(Debug, Default, Clone)]
pub struct Overrides {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub upstream_url: Option<String>,
    pub mode: Option<BackendMode>,
}

/// Effective server settings after merging every source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub host: String,
    pub port: u16,
    pub upstream_url: String,
    pub mode: BackendMode,
}

impl Settings {
    /// Merges overrides over the config file over defaults, then validates.
    pub fn resolve(overrides: &Overrides, file: Option<&ConfigFile>) -> Result<Self> {
        let file_mode = match file.and_then(|f| f.mode.as_deref()) {
            Some(mode) => Some(mode.parse::<BackendMode>().map_err(|e| ConfigError::Invalid {
                message: e,
                hint: "Set 'mode' to either live or mock.".to_string(),
            })?),
            None => None,
        };

        let settings = Self {
            host: overrides
                .host
                .clone()
                .or_else(|| file.and_then(|f| f.host.clone()))
                .unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port: overrides
                .port
                .or_else(|| file.and_then(|f| f.port))
                .unwrap_or(DEFAULT_PORT),
            upstream_url: overrides
                .upstream_url
                .clone()
                .or_else(|| file.and_then(|f| f.upstream_url.clone()))
                .unwrap_or_else(|| DEFAULT_UPSTREAM_URL.to_string()),
            mode: overrides.mode.or(file_mode).unwrap_or_default(),
        };

        settings.validate()?;
        Ok(settings)
    }

    /// Socket address the relay binds to
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        let ip: IpAddr = self.host.parse().map_err(|_| ConfigError::Invalid {
            message: format!("host '{}' is not an IP address", self.host),
            hint: "Use an address such as 127.0.0.1 or 0.0.0.0.".to_string(),
        })?;
        Ok(SocketAddr::new(ip, self.port))
    }

    fn validate(&self) -> Result<()> {
        if self.port == 0 {
            return Err(ConfigError::Invalid {
                message: "port must be between 1 and 65535".to_string(),
                hint: format!("Omit 'port' to use the default ({}).", DEFAULT_PORT),
            }
            .into());
        }

        require_http_url("upstream_url", &self.upstream_url, DEFAULT_UPSTREAM_URL)
    }
}

/// Settings of the client subcommands. Only `relay_url` is read, so the
/// server keys of a shared config file are never validated here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientSettings {
    pub relay_url: String,
}

impl ClientSettings {
    pub fn resolve(relay_url: Option<&str>, file: Option<&ConfigFile>) -> Result<Self> {
        let relay_url = relay_url
            .map(str::to_string)
            .or_else(|| file.and_then(|f| f.relay_url.clone()))
            .unwrap_or_else(|| DEFAULT_RELAY_URL.to_string());

        require_http_url("relay_url", &relay_url, DEFAULT_RELAY_URL)?;
        Ok(Self { relay_url })
    }
}

fn require_http_url(name: &str, url: &str, example: &str) -> Result<()> {
    if url.starts_with("http://") || url.starts_with("https://") {
        return Ok(());
    }

    Err(ConfigError::Invalid {
        message: format!("{} '{}' is not an http(s) URL", name, url),
        hint: format!("Use a base URL such as {}.", example),
    }
    .into())
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
        path: path.to_path_buf(),
        details: e.to_string(),
    })?;

    let config: ConfigFile =
        serde_yaml_ng::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            details: e.to_string(),
        })?;

    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)
        .with_context(|| format!("Auto-discovered config {} is unusable", config_path.display()))?;
    Ok(Some(config))
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    let mut keys: Vec<&String> = config.unknown_fields.keys().collect();
    keys.sort();
    for key in keys {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}
