//! Layered configuration
//!
//! Precedence (lowest first): built-in defaults, `config.toml`, `PROBLEMDESK_*`
//! environment variables, command-line flags.

use config::{Config, ConfigError, Environment, File};
use directories::ProjectDirs;
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const DEFAULT_API_URL: &str = "http://127.0.0.1:3001";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const ENV_PREFIX: &str = "PROBLEMDESK";

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable, colored
    Pretty,
    /// One JSON object per line
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Settings {
    /// Base URL of the problem API
    pub api_url: String,
    /// Per-request timeout
    pub timeout_secs: u64,
    pub log_format: LogFormat,
}

impl Settings {
    /// Load settings from `file` (or the default location) and the process environment
    pub fn load(file: Option<&Path>) -> Result<Self, ConfigError> {
        let path = file.map(Path::to_path_buf).or_else(default_config_path);
        Self::build(path.as_deref(), Environment::with_prefix(ENV_PREFIX))
    }

    fn build(file: Option<&Path>, env: Environment) -> Result<Self, ConfigError> {
        let mut builder = Config::builder()
            .set_default("api_url", DEFAULT_API_URL)?
            .set_default("timeout_secs", DEFAULT_TIMEOUT_SECS)?
            .set_default("log_format", "pretty")?;

        if let Some(path) = file {
            builder = builder.add_source(File::from(path).required(false));
        }

        builder
            .add_source(env.try_parsing(true))
            .build()?
            .try_deserialize()
    }

    /// Apply command-line flags on top of the loaded layers
    pub fn override_with(
        mut self,
        api_url: Option<String>,
        timeout_secs: Option<u64>,
        log_format: Option<LogFormat>,
    ) -> Self {
        if let Some(url) = api_url {
            self.api_url = url;
        }
        if let Some(secs) = timeout_secs {
            self.timeout_secs = secs;
        }
        if let Some(format) = log_format {
            self.log_format = format;
        }
        self
    }
}

/// `<platform config dir>/problemdesk/config.toml`
pub fn default_config_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "problemdesk").map(|dirs| dirs.config_dir().join("config.toml"))
}
