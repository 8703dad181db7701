use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub defaults: DefaultsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultsConfig {
    /// Default rename prefix when the CLI is given none
    #[serde(default)]
    pub prefix: Option<String>,

    /// Default output format: "summary" or "json"
    #[serde(default = "default_output")]
    pub output: String,

    /// Whether `rename` creates missing caption companions first
    #[serde(default = "default_true")]
    pub create_missing_captions: bool,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            prefix: None,
            output: default_output(),
            create_missing_captions: true,
        }
    }
}

fn default_output() -> String {
    "summary".to_string()
}

fn default_true() -> bool {
    true
}

impl Config {
    /// Load config from .pairkit.toml in the current directory if it exists
    pub fn load() -> Result<Self> {
        if let Ok(cwd) = std::env::current_dir() {
            let config_path = cwd.join(".pairkit.toml");
            if config_path.exists() {
                return Self::load_from_path(&config_path);
            }
        }

        Ok(Self::default())
    }

    /// Load config from a specific path
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }
}
