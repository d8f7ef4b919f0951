//! Generator settings: endpoints, output path and client identity.
//!
//! The defaults are the values every run has always used, so a bare
//! invocation needs no configuration. An optional TOML file overrides any of
//! them:
//!
//! ```toml
//! items_url = "https://api.hypixel.net/v2/resources/skyblock/items"
//! bazaar_url = "https://api.hypixel.net/v2/skyblock/bazaar"
//! output = "data/bazaar-conversions.json"
//! user_agent = "bazaar-utils-generator"
//! ```

use std::path::{Path, PathBuf};

use bazaar_names_api::{Endpoints, USER_AGENT};
use serde::Deserialize;

use crate::error::GenerateError;

/// File name of the generated table.
pub const OUTPUT_FILE_NAME: &str = "bazaar-conversions.json";

/// Everything a generation run needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    pub endpoints: Endpoints,
    pub output_path: PathBuf,
    pub user_agent: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            endpoints: Endpoints::default(),
            output_path: default_output_path(),
            user_agent: USER_AGENT.to_string(),
        }
    }
}

/// `bazaar-conversions.json` in the current working directory.
pub fn default_output_path() -> PathBuf {
    std::env::current_dir()
        .unwrap_or_else(|_| PathBuf::from("."))
        .join(OUTPUT_FILE_NAME)
}

/// Keys accepted in a config file. All optional.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigFile {
    pub items_url: Option<String>,
    pub bazaar_url: Option<String>,
    pub output: Option<PathBuf>,
    pub user_agent: Option<String>,
}

impl ConfigFile {
    pub fn load(path: &Path) -> Result<Self, GenerateError> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            GenerateError::config(format!("cannot read {}: {e}", path.display()))
        })?;
        toml::from_str(&contents)
            .map_err(|e| GenerateError::config(format!("invalid {}: {e}", path.display())))
    }
}

impl GeneratorConfig {
    /// Defaults overlaid with the keys present in the TOML file at `path`.
    pub fn from_file(path: &Path) -> Result<Self, GenerateError> {
        let mut config = Self::default();
        config.apply(ConfigFile::load(path)?);
        Ok(config)
    }

    /// Overlay the keys set in `file`.
    pub fn apply(&mut self, file: ConfigFile) {
        if let Some(url) = file.items_url {
            self.endpoints.items_url = url;
        }
        if let Some(url) = file.bazaar_url {
            self.endpoints.bazaar_url = url;
        }
        if let Some(path) = file.output {
            self.output_path = path;
        }
        if let Some(agent) = file.user_agent {
            self.user_agent = agent;
        }
    }
}
