/*
[INPUT]:  Optional YAML configuration file and KANTOR_* environment variables
[OUTPUT]: Parsed CLI configuration and derived client settings
[POS]:    Configuration layer - client setup
[UPDATE]: When adding new configuration options
*/

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result, anyhow};
use kantor_adapter::ClientConfig;
use kantor_adapter::http::client::DEFAULT_BASE_URL;
use serde::{Deserialize, Serialize};

/// Environment variable prefix, e.g. `KANTOR_BASE_URL`
pub const ENV_PREFIX: &str = "KANTOR";

/// Top-level configuration for the kantor CLI
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct CliConfig {
    /// Backend origin all API paths are appended to
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Directory holding the session token file
    #[serde(default)]
    pub token_dir: Option<PathBuf>,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            token_dir: None,
            timeout_secs: default_timeout_secs(),
            connect_timeout_secs: default_connect_timeout_secs(),
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_connect_timeout_secs() -> u64 {
    10
}

impl CliConfig {
    /// Load configuration: file (explicit, or the per-user default if it
    /// exists), then `KANTOR_*` environment overrides.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut builder = config::Config::builder();

        match path {
            Some(path) => {
                builder = builder.add_source(config::File::from(path).required(true));
            }
            None => {
                if let Some(default_path) = default_config_path() {
                    builder = builder.add_source(config::File::from(default_path).required(false));
                }
            }
        }

        let config = builder
            .add_source(config::Environment::with_prefix(ENV_PREFIX).try_parsing(true))
            .build()
            .context("read configuration")?;

        config
            .try_deserialize()
            .context("parse configuration")
    }

    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            base_url: self.base_url.clone(),
            timeout: Duration::from_secs(self.timeout_secs),
            connect_timeout: Duration::from_secs(self.connect_timeout_secs),
        }
    }

    /// Token directory, defaulting to the per-user data directory
    pub fn resolve_token_dir(&self) -> Result<PathBuf> {
        if let Some(dir) = &self.token_dir {
            return Ok(dir.clone());
        }
        dirs::data_dir()
            .map(|dir| dir.join("kantor"))
            .ok_or_else(|| anyhow!("Could not determine data directory"))
    }
}

/// `<config dir>/kantor/config.yaml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("kantor").join("config.yaml"))
}
