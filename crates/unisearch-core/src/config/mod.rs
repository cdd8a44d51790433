//! Configuration management

use crate::error::{Result, UnisearchError};
use crate::filters::{builtin_definitions, FilterDefinition, FilterDefinitions};
use crate::search::DEFAULT_LIMIT;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Filters recognized in addition to the built-ins. A custom definition
    /// with a built-in name replaces the built-in.
    #[serde(default)]
    pub custom_filters: Vec<FilterDefinition>,

    /// Entries requested per provider when a query sets no limit.
    /// `UNISEARCH_DEFAULT_LIMIT` overrides the file value.
    #[serde(default = "default_limit")]
    pub default_limit: usize,
}

/// Env var overriding `default_limit`
pub const DEFAULT_LIMIT_ENV: &str = "UNISEARCH_DEFAULT_LIMIT";

impl Default for Config {
    fn default() -> Self {
        Self {
            custom_filters: Vec::new(),
            default_limit: DEFAULT_LIMIT,
        }
    }
}

fn default_limit() -> usize {
    DEFAULT_LIMIT
}

impl Config {
    /// Load config from `$UNISEARCH_CONFIG` or the default path
    pub fn load() -> Result<Self> {
        let path = std::env::var("UNISEARCH_CONFIG")
            .map(PathBuf::from)
            .unwrap_or_else(|_| Self::default_path());
        Self::load_from(&path)
    }

    /// Load config from `path`; a missing file yields the defaults.
    /// Env overrides are applied on top and the result is validated.
    pub fn load_from(path: &Path) -> Result<Self> {
        let config = if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = serde_yaml::from_str(&content)?;
            tracing::debug!(
                "Loaded config from {} ({} custom filters)",
                path.display(),
                config.custom_filters.len()
            );
            config
        } else {
            Config::default()
        };

        let config =
            config.with_limit_override(std::env::var(DEFAULT_LIMIT_ENV).ok().as_deref())?;
        config.validate()?;
        Ok(config)
    }

    fn with_limit_override(mut self, raw: Option<&str>) -> Result<Self> {
        if let Some(raw) = raw {
            self.default_limit = raw.trim().parse().map_err(|_| {
                UnisearchError::Config(format!(
                    "{} is not a valid limit: {:?}",
                    DEFAULT_LIMIT_ENV, raw
                ))
            })?;
        }
        Ok(self)
    }

    /// Save config to `path`, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_yaml::to_string(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Get default config path
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(crate::CONFIG_DIR_NAME)
            .join("config.yml")
    }

    /// Built-in definitions extended with the configured custom filters
    pub fn filter_definitions(&self) -> FilterDefinitions {
        let mut definitions = builtin_definitions();
        for definition in &self.custom_filters {
            definitions.insert(definition.name.clone(), definition.clone());
        }
        definitions
    }

    fn validate(&self) -> Result<()> {
        if let Some(def) = self.custom_filters.iter().find(|d| d.name.trim().is_empty()) {
            return Err(UnisearchError::Config(format!(
                "custom filter of type {} has an empty name",
                def.filter_type
            )));
        }
        if self.default_limit == 0 {
            return Err(UnisearchError::Config(
                "default_limit must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}
