//! CLI configuration

use std::path::{Path, PathBuf};

use anyhow::Context;
use arbor_api::ServiceOptions;
use arbor_core::limits::{DEFAULT_PAGE_LIMIT, MAX_ANCESTOR_HOPS};
use arbor_core::Namespaces;
use serde::{Deserialize, Serialize};

/// Get default config directory
pub fn config_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".arbor")
}

/// Get default config file path
pub fn default_config_path() -> PathBuf {
    config_dir().join("config.toml")
}

/// Configuration for the CLI
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// JSON dataset served by the in-memory backend
    pub data_file: PathBuf,

    /// Values per node and property when the request does not say
    pub default_limit: usize,

    /// Bound on ancestor-chain length
    pub max_ancestor_hops: usize,

    pub namespaces: Namespaces,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: config_dir().join("graph.json"),
            default_limit: DEFAULT_PAGE_LIMIT,
            max_ancestor_hops: MAX_ANCESTOR_HOPS,
            namespaces: Namespaces::default(),
        }
    }
}

impl Config {
    /// Load from `path` (or the default location); a missing file yields defaults
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let path = path.map(Path::to_path_buf).unwrap_or_else(default_config_path);
        if !path.exists() {
            tracing::debug!("No config at {:?}, using defaults", path);
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        toml::from_str(&raw).with_context(|| format!("Invalid config {}", path.display()))
    }

    /// Write to `path`, creating parent directories
    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, self.to_toml()?)?;
        Ok(())
    }

    pub fn to_toml(&self) -> anyhow::Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Known config keys
    pub fn keys() -> &'static [&'static str] {
        &[
            "data_file",
            "default_limit",
            "max_ancestor_hops",
            "namespaces.observation_prefix",
            "namespaces.custom_group_prefix",
            "namespaces.hierarchy_root",
        ]
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "data_file" => Some(self.data_file.display().to_string()),
            "default_limit" => Some(self.default_limit.to_string()),
            "max_ancestor_hops" => Some(self.max_ancestor_hops.to_string()),
            "namespaces.observation_prefix" => Some(self.namespaces.observation_prefix.clone()),
            "namespaces.custom_group_prefix" => Some(self.namespaces.custom_group_prefix.clone()),
            "namespaces.hierarchy_root" => Some(self.namespaces.hierarchy_root.clone()),
            _ => None,
        }
    }

    pub fn service_options(&self) -> ServiceOptions {
        ServiceOptions {
            namespaces: self.namespaces.clone(),
            max_ancestor_hops: self.max_ancestor_hops,
        }
    }
}
