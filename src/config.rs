use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::packer::LengthPolicy;

#[derive(Debug, Deserialize, Default, Clone)]
pub struct Config {
    #[serde(default)]
    pub packer: PackerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct PackerConfig {
    /// 画像のアスペクト比で x/y を補正するか
    #[serde(default)]
    pub normalize_aspect_ratio: bool,
    /// 固定長と異なるランドマーク列の扱い ("strict" / "truncate")
    #[serde(default)]
    pub length_policy: LengthPolicy,
}

impl Default for PackerConfig {
    fn default() -> Self {
        Self {
            normalize_aspect_ratio: false,
            length_policy: LengthPolicy::default(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    /// trace|debug|info|warn|error|off, RUST_LOG が優先
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String { "info".to_string() }

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content).context("Failed to parse config")?;
        Ok(config)
    }

    /// 読めなければデフォルト値
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Self {
        match Self::load(path.as_ref()) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(path = %path.as_ref().display(), error = %e, "using default config");
                Self::default()
            }
        }
    }
}
