//! Configuration file support for dosecalc.
//!
//! Configuration is loaded from `$XDG_CONFIG_HOME/dosecalc/config.toml`.

use crate::{build_default_rules, DrugRule, Error, Locale, Result, RuleTable};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub calculation: CalculationConfig,

    #[serde(default)]
    pub display: DisplayConfig,

    /// Extra drug rules, or overrides of built-in ones, keyed by drug id
    #[serde(default)]
    pub drugs: BTreeMap<String, DrugRule>,
}

/// Calculation parameters
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CalculationConfig {
    #[serde(default = "default_rounding_step")]
    pub rounding_step: u32,
}

impl Default for CalculationConfig {
    fn default() -> Self {
        Self {
            rounding_step: default_rounding_step(),
        }
    }
}

/// Output presentation
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct DisplayConfig {
    #[serde(default)]
    pub language: Locale,
}

fn default_rounding_step() -> u32 {
    crate::DEFAULT_ROUNDING_STEP
}

impl Config {
    /// Load configuration from the standard config path
    pub fn load() -> Result<Self> {
        match Self::default_config_path() {
            Ok(config_path) if config_path.exists() => Self::load_from(&config_path),
            Ok(config_path) => {
                tracing::debug!(
                    "No config file found at {:?}, using defaults",
                    config_path
                );
                Ok(Self::default())
            }
            Err(e) => {
                tracing::warn!("{}. Using defaults.", e);
                Ok(Self::default())
            }
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        config.validate()?;
        tracing::info!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Get the default config file path
    pub fn default_config_path() -> Result<PathBuf> {
        let base = dirs::config_dir()
            .ok_or_else(|| Error::Config("Unable to determine config directory".into()))?;
        Ok(base.join("dosecalc").join("config.toml"))
    }

    /// Save the current configuration to a specific path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, contents)?;
        tracing::info!("Saved config to {:?}", path);
        Ok(())
    }

    /// Check settings that serde cannot
    pub fn validate(&self) -> Result<()> {
        if self.calculation.rounding_step == 0 {
            return Err(Error::Config("rounding_step must be at least 1".into()));
        }

        let custom: RuleTable = self
            .drugs
            .iter()
            .map(|(id, rule)| (id.clone(), rule.clone()))
            .collect();
        let errors = custom.validate();
        if !errors.is_empty() {
            return Err(Error::RuleValidation(errors.join("; ")));
        }

        Ok(())
    }

    /// Built-in rules merged with the rules from `[drugs]`
    pub fn rule_table(&self) -> Result<RuleTable> {
        self.validate()?;

        let mut rules = build_default_rules();
        for (id, rule) in &self.drugs {
            if rules.insert(id.clone(), rule.clone()).is_some() {
                tracing::info!("Config overrides built-in rule for '{}'", id);
            } else {
                tracing::debug!("Config adds rule for '{}'", id);
            }
        }
        Ok(rules)
    }
}
