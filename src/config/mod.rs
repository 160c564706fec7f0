// ABOUTME: Configuration management for the trade-in storefront
// Handles API client settings, mock server settings, and catalog presentation

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct AppConfig {
    /// Where the TUI and scripted commands send requests
    #[serde(default)]
    pub api: ApiConfig,

    /// Mock API server settings
    #[serde(default)]
    pub server: ServerConfig,

    /// Catalog grid behaviour
    #[serde(default)]
    pub catalog: CatalogConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the trade-in API (no trailing slash needed)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// The single origin allowed by CORS
    #[serde(default = "default_allowed_origin")]
    pub allowed_origin: String,

    /// Directory served under `/images`
    #[serde(default = "default_images_dir")]
    pub images_dir: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            allowed_origin: default_allowed_origin(),
            images_dir: default_images_dir(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Artificial delay before the listing fetch (UI testing aid)
    #[serde(default)]
    pub load_delay_ms: u64,

    /// Skeleton tiles shown while the catalog is loading
    #[serde(default = "default_placeholder_count")]
    pub placeholder_count: usize,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            load_delay_ms: 0,
            placeholder_count: default_placeholder_count(),
        }
    }
}

fn default_base_url() -> String {
    "http://localhost:3001".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3001
}

fn default_allowed_origin() -> String {
    "https://reuz-2.onrender.com".to_string()
}

fn default_images_dir() -> PathBuf {
    PathBuf::from("images")
}

fn default_placeholder_count() -> usize {
    8
}

impl AppConfig {
    /// Load configuration, then apply environment overrides. An explicit
    /// file replaces the default search path entirely.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let mut config = match explicit {
            Some(path) => Self::load_from_file(path)?,
            None => Self::load_layers()?,
        };
        config.apply_env_overrides(|key| std::env::var(key).ok());
        Ok(config)
    }

    /// Merge every config file found on the default search path
    fn load_layers() -> Result<Self> {
        let mut merged = toml::Value::Table(toml::map::Map::new());

        for path in Self::get_config_paths() {
            if path.exists() {
                let content = fs::read_to_string(&path)
                    .with_context(|| format!("Failed to read config from {}", path.display()))?;
                let layer: toml::Value = toml::from_str(&content)
                    .with_context(|| format!("Failed to parse config from {}", path.display()))?;
                merge_values(&mut merged, layer);
                debug!("Loaded config layer from {}", path.display());
            }
        }

        merged.try_into().context("Invalid merged configuration")
    }

    /// Parse one TOML file; missing keys fall back to defaults
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        let config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config from {}", path.display()))?;
        debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Get configuration file paths, lowest precedence first
    fn get_config_paths() -> Vec<PathBuf> {
        let mut paths = vec![PathBuf::from("/etc/tradein/config.toml")];

        if let Ok(config_dir) = Self::get_user_config_dir() {
            paths.push(config_dir.join("config.toml"));
        }

        if let Ok(cwd) = std::env::current_dir() {
            paths.push(cwd.join(".tradein").join("config.toml"));
        }

        paths
    }

    /// Get user configuration directory
    fn get_user_config_dir() -> Result<PathBuf> {
        let home_dir = dirs::home_dir().context("Failed to get home directory")?;
        Ok(home_dir.join(".tradein").join("config"))
    }

    /// Apply `TRADEIN_*` overrides; the lookup is injected so tests stay hermetic
    pub fn apply_env_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup("TRADEIN_API_URL").filter(|v| !v.is_empty()) {
            self.api.base_url = url;
        }
        if let Some(raw) = lookup("TRADEIN_PORT") {
            match raw.parse() {
                Ok(port) => self.server.port = port,
                Err(e) => warn!("Ignoring TRADEIN_PORT={:?}: {}", raw, e),
            }
        }
        if let Some(origin) = lookup("TRADEIN_ALLOWED_ORIGIN").filter(|v| !v.is_empty()) {
            self.server.allowed_origin = origin;
        }
    }
}

/// Overlay `layer` onto `base`, recursing into tables so a file that sets one
/// key leaves the rest of its section untouched
fn merge_values(base: &mut toml::Value, layer: toml::Value) {
    match (base, layer) {
        (toml::Value::Table(base), toml::Value::Table(layer)) => {
            for (key, value) in layer {
                match base.get_mut(&key) {
                    Some(existing) => merge_values(existing, value),
                    None => {
                        base.insert(key, value);
                    }
                }
            }
        }
        (base, layer) => *base = layer,
    }
}
