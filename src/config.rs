//! Configuration (Figment-based)
//!
//! Sources, later ones win:
//! 1. Built-in defaults
//! 2. `pitchcheck.toml` in the working directory, or an explicit path
//! 3. Environment variables (`PITCHCHECK_*`, nested keys split on `__`)

use std::path::{Path, PathBuf};

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::bio_analyzer::ScoreWeights;
use crate::error::{PitchError, Result};

pub const DEFAULT_CONFIG_FILE: &str = "pitchcheck.toml";
pub const ENV_PREFIX: &str = "PITCHCHECK_";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub scoring: ScoringConfig,
    pub generation: GenerationConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// Compute scores even when `--score` is not passed.
    pub enabled: bool,
    pub weights: ScoreWeights,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    /// Fixed seed for template selection; unset means a fresh thread RNG.
    pub seed: Option<u64>,
}

impl Config {
    pub fn validate(&self) -> Result<()> {
        self.scoring.weights.validate()
    }
}

pub struct ConfigLoader;

impl ConfigLoader {
    /// defaults → config file → env vars
    ///
    /// An explicit `path` must exist; the default file is optional.
    pub fn load(path: Option<&Path>) -> Result<Config> {
        let mut figment = Figment::new().merge(Serialized::defaults(Config::default()));

        match path {
            Some(path) => {
                if !path.exists() {
                    return Err(PitchError::Config(format!(
                        "Config file not found: {}",
                        path.display()
                    )));
                }
                debug!("Loading config from: {}", path.display());
                figment = figment.merge(Toml::file(path));
            }
            None => {
                let default_path = Self::default_config_path();
                if default_path.exists() {
                    debug!("Loading config from: {}", default_path.display());
                    figment = figment.merge(Toml::file(&default_path));
                }
            }
        }

        // PITCHCHECK_SCORING__ENABLED -> scoring.enabled
        figment = figment.merge(Env::prefixed(ENV_PREFIX).split("__").lowercase(true));

        Self::extract(figment)
    }

    /// Defaults plus one file, ignoring the environment.
    pub fn load_from_file(path: &Path) -> Result<Config> {
        let figment = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(path));
        Self::extract(figment)
    }

    pub fn default_config_path() -> PathBuf {
        PathBuf::from(DEFAULT_CONFIG_FILE)
    }

    fn extract(figment: Figment) -> Result<Config> {
        let config: Config = figment
            .extract()
            .map_err(|e| PitchError::Config(format!("Configuration error: {e}")))?;
        config.validate()?;
        Ok(config)
    }
}
