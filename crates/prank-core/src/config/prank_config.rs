//! Top-level prank configuration with layered resolution.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{defaults, EngineConfig, LoggingConfig};
use crate::errors::ConfigError;
use crate::options::RequestOptions;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Overrides supplied by the embedding program
/// 2. Environment variables (`PRANK_*`)
/// 3. Project config (`prank.toml` in the project root)
/// 4. User config (`~/.prank/config.toml`)
/// 5. Compiled defaults
///
/// `[cards.<name>]` tables hold static per-card options (adjustments,
/// `enabled`, `timeout_ms`, point bounds); they become that card's default
/// [`RequestOptions`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PrankConfig {
    pub engine: EngineConfig,
    pub logging: LoggingConfig,
    pub cards: BTreeMap<String, toml::Table>,
}

/// Highest-priority overrides, applied after every file and env layer.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub threads: Option<usize>,
    pub default_timeout_ms: Option<u64>,
    pub log_filter: Option<String>,
}

impl PrankConfig {
    /// Load configuration with layered resolution rooted at `root`.
    pub fn load(root: &Path, overrides: Option<&ConfigOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Layer 4 (lowest priority): user config
        if let Some(user_config_path) = Self::user_config_path() {
            if user_config_path.exists() {
                Self::merge_toml_file(&mut config, &user_config_path)?;
            }
        }

        // Layer 3: project config
        let project_config_path = root.join(defaults::PROJECT_CONFIG_FILENAME);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        // Layer 2: environment variables
        Self::apply_env_overrides(&mut config)?;

        // Layer 1 (highest priority): embedding overrides
        if let Some(overrides) = overrides {
            Self::apply_overrides(&mut config, overrides);
        }

        Self::validate(&config)?;

        Ok(config)
    }

    /// Load configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        Self::validate(&config)?;
        Ok(config)
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(config: &PrankConfig) -> Result<(), ConfigError> {
        if config.engine.threads == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "engine.threads".to_string(),
                message: "must be greater than 0 (omit it to use one thread per CPU)"
                    .to_string(),
            });
        }
        if config.engine.default_timeout_ms == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "engine.default_timeout_ms".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        for name in config.cards.keys() {
            config.card_options(name)?;
        }
        Ok(())
    }

    /// Static options configured for `card_name`; empty when none are set.
    pub fn card_options(&self, card_name: &str) -> Result<RequestOptions, ConfigError> {
        let Some(table) = self.cards.get(card_name) else {
            return Ok(RequestOptions::default());
        };

        let mut builder = RequestOptions::builder();
        for (key, value) in table {
            let text = match value {
                toml::Value::String(s) => s.clone(),
                toml::Value::Integer(i) => i.to_string(),
                toml::Value::Float(f) => f.to_string(),
                toml::Value::Boolean(b) => b.to_string(),
                other => {
                    return Err(ConfigError::InvalidValue {
                        field: format!("cards.{card_name}.{key}"),
                        message: format!("expected a scalar, got {}", other.type_str()),
                    })
                }
            };
            builder = builder.set(key.clone(), text);
        }

        builder.build().map_err(|e| match e {
            ConfigError::InvalidValue { field, message } => ConfigError::InvalidValue {
                field: format!("cards.{card_name}.{field}"),
                message,
            },
            other => other,
        })
    }

    /// Returns the user config path: `~/.prank/config.toml`.
    fn user_config_path() -> Option<PathBuf> {
        home_dir().map(|h| {
            h.join(defaults::USER_CONFIG_DIR)
                .join(defaults::USER_CONFIG_FILENAME)
        })
    }

    /// Merge a TOML file into the existing config.
    fn merge_toml_file(config: &mut PrankConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: PrankConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, file_config);
        Ok(())
    }

    /// Merge `other` into `base`; `other` wins wherever it sets a value.
    /// Card tables merge key by key.
    fn merge(base: &mut PrankConfig, other: PrankConfig) {
        if other.engine.threads.is_some() {
            base.engine.threads = other.engine.threads;
        }
        if other.engine.default_timeout_ms.is_some() {
            base.engine.default_timeout_ms = other.engine.default_timeout_ms;
        }
        if other.logging.filter.is_some() {
            base.logging.filter = other.logging.filter;
        }
        for (card, table) in other.cards {
            base.cards.entry(card).or_default().extend(table);
        }
    }

    /// Apply environment variable overrides.
    /// Unparseable values are rejected rather than ignored.
    fn apply_env_overrides(config: &mut PrankConfig) -> Result<(), ConfigError> {
        if let Ok(val) = std::env::var(defaults::ENV_ENGINE_THREADS) {
            config.engine.threads = Some(parse_env(defaults::ENV_ENGINE_THREADS, &val)?);
        }
        if let Ok(val) = std::env::var(defaults::ENV_ENGINE_DEFAULT_TIMEOUT_MS) {
            config.engine.default_timeout_ms =
                Some(parse_env(defaults::ENV_ENGINE_DEFAULT_TIMEOUT_MS, &val)?);
        }
        if let Ok(val) = std::env::var(defaults::ENV_LOG_FILTER) {
            config.logging.filter = Some(val);
        }
        Ok(())
    }

    fn apply_overrides(config: &mut PrankConfig, overrides: &ConfigOverrides) {
        if let Some(v) = overrides.threads {
            config.engine.threads = Some(v);
        }
        if let Some(v) = overrides.default_timeout_ms {
            config.engine.default_timeout_ms = Some(v);
        }
        if let Some(ref v) = overrides.log_filter {
            config.logging.filter = Some(v.clone());
        }
    }
}

fn parse_env<T: std::str::FromStr>(var: &str, raw: &str) -> Result<T, ConfigError>
where
    T::Err: std::fmt::Display,
{
    raw.trim().parse::<T>().map_err(|e| ConfigError::InvalidValue {
        field: var.to_string(),
        message: format!("`{raw}`: {e}"),
    })
}

/// Cross-platform home directory resolution.
fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
}
