//! Configuration file support.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Base URL of the service the client was written against.
const DEFAULT_SERVER_URL: &str = "https://notes-backend-1-2umi.onrender.com";

/// Application configuration loaded from the config file.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Base URL of the note service
    pub server: Option<String>,
}

impl Config {
    /// Load configuration from `config.toml` in the given directory.
    ///
    /// Returns default config if the file doesn't exist.
    pub fn load(config_dir: &Path) -> Result<Self> {
        let config_path = config_dir.join("config.toml");

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&config_path)
            .with_context(|| format!("failed to read config file: {}", config_path.display()))?;

        toml::from_str(&contents)
            .with_context(|| format!("failed to parse config file: {}", config_path.display()))
    }

    /// Returns the default configuration directory.
    ///
    /// Default: `~/.config/jot`
    pub fn default_config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("jot")
    }

    /// Resolve the server base URL, with CLI argument taking precedence.
    ///
    /// Precedence order:
    /// 1. CLI `--server` argument
    /// 2. Config file `server` setting
    /// 3. Built-in default
    pub fn server_url(&self, cli_server: Option<&String>) -> String {
        cli_server
            .cloned()
            .or_else(|| self.server.clone())
            .unwrap_or_else(|| DEFAULT_SERVER_URL.to_string())
    }
}
