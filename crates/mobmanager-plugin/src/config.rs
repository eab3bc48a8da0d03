//! Plugin configuration, loaded from `mobmanager.toml`.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;
use tracing::warn;

use mobmanager_taxonomy::{KindId, Taxonomy};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Debug, Default, Deserialize)]
pub struct PluginConfig {
    #[serde(default)]
    pub limiter: LimiterSection,
    #[serde(default)]
    pub logging: LoggingSection,
}

#[derive(Debug, Deserialize)]
pub struct LimiterSection {
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// Canonical kind names excluded from category-based culling.
    #[serde(default)]
    pub ignored_mobs: Vec<String>,
    /// Names of the worlds the limiter manages.
    #[serde(default)]
    pub worlds: Vec<String>,
}

fn default_enabled() -> bool {
    true
}

impl Default for LimiterSection {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            ignored_mobs: Vec::new(),
            worlds: Vec::new(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct LoggingSection {
    /// Filter string for the host's tracing subscriber.
    #[serde(default = "default_level")]
    pub level: String,
}

fn default_level() -> String {
    "info".into()
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self {
            level: default_level(),
        }
    }
}

impl PluginConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Ok(Self::from_toml(&fs::read_to_string(path)?)?)
    }

    pub fn from_toml(contents: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }

    /// Resolve the configured ignore list against the registry. Names that
    /// do not resolve are warned about and dropped rather than silently
    /// matching `UNKNOWN`.
    pub fn resolve_ignored_mobs(&self, taxonomy: &Taxonomy) -> HashSet<KindId> {
        let mut ignored = HashSet::new();
        for name in &self.limiter.ignored_mobs {
            let kind = taxonomy.by_name(name);
            if kind.id() == taxonomy.unknown().id() {
                warn!(name = %name, "unknown mob name in ignored_mobs, dropping");
            } else {
                ignored.insert(kind.id());
            }
        }
        ignored
    }
}
