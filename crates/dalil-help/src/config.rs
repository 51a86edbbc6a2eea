//! Viewer configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use config::{Config, Environment, File};
use dalil_i18n::TranslationCatalog;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::Result;

/// Settings for a hosting view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HelpConfig {
    /// Display language code; unrecognized codes render raw keys
    pub language: String,
    /// Section opened on start
    pub section: String,
    /// Catalog file (YAML or JSON) replacing the built-in strings
    pub catalog_path: Option<PathBuf>,
}

impl Default for HelpConfig {
    fn default() -> Self {
        Self {
            language: "fr".to_string(),
            section: "technical-support".to_string(),
            catalog_path: None,
        }
    }
}

impl HelpConfig {
    /// Load the configured catalog, if one is set
    pub fn load_catalog(&self) -> Result<Option<TranslationCatalog>> {
        match &self.catalog_path {
            Some(path) => {
                info!(path = %path.display(), "Loading translation catalog");
                Ok(Some(TranslationCatalog::from_path(path)?))
            }
            None => Ok(None),
        }
    }
}

/// Layers an optional config file and environment variables
pub struct ConfigLoader {
    config_path: PathBuf,
    env_prefix: String,
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self::with_path(Self::default_config_path())
    }

    pub fn with_path(path: PathBuf) -> Self {
        Self {
            config_path: path,
            env_prefix: "DALIL_HELP".to_string(),
        }
    }

    pub fn with_env_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// `<config dir>/dalil/help.toml`
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("dalil")
            .join("help.toml")
    }

    /// Read the file (if present) then apply `<PREFIX>_*` overrides
    pub fn load(&self) -> Result<HelpConfig> {
        let config = Config::builder()
            .add_source(File::from(self.config_path.clone()).required(false))
            .add_source(Environment::with_prefix(&self.env_prefix))
            .build()?;
        let help_config: HelpConfig = config.try_deserialize()?;
        debug!(?help_config, path = %self.config_path.display(), "Loaded help config");
        Ok(help_config)
    }

    pub fn save(&self, help_config: &HelpConfig) -> Result<()> {
        let toml = toml::to_string(help_config)?;
        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.config_path, toml)?;
        Ok(())
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}
