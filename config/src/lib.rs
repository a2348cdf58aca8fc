//! Configuration loading for Tether.
//!
//! The config file is optional TOML. Lookup order: an explicit path from the
//! caller, then `$TETHER_CONFIG`, then `~/.tether/config.toml`. Every field is
//! optional; anything left out falls back to the built-in defaults.

use serde::Deserialize;
use std::{
    env, fs,
    path::{Path, PathBuf},
    time::Duration,
};
use thiserror::Error;

use tether_handoff::{DEFAULT_SELECT_DELAYS, SOURCE_COUNT};
use tether_ticker::TickerSettings;

pub const CONFIG_ENV_VAR: &str = "TETHER_CONFIG";

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TetherConfig {
    pub ticker: Option<TickerConfig>,
    pub select: Option<SelectConfig>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config at {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("invalid config: {0}")]
    Invalid(String),
}

impl ConfigError {
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match self {
            ConfigError::Read { path, .. } | ConfigError::Parse { path, .. } => Some(path),
            ConfigError::Invalid(_) => None,
        }
    }
}

/// `[ticker]` section. Durations are in milliseconds.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TickerConfig {
    pub short_interval_ms: Option<u64>,
    pub long_interval_ms: Option<u64>,
    pub deadline_ms: Option<u64>,
    pub short_label: Option<String>,
    pub long_label: Option<String>,
}

/// `[select]` section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SelectConfig {
    /// Per-source delays in milliseconds, one per source.
    pub delays_ms: Option<Vec<u64>>,
}

impl TetherConfig {
    /// Load from the default location. A missing file is `Ok(None)`.
    pub fn load() -> Result<Option<Self>, ConfigError> {
        match config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(None),
        }
    }

    /// Load from `path`. A missing file is `Ok(None)`.
    pub fn load_from(path: &Path) -> Result<Option<Self>, ConfigError> {
        if !path.exists() {
            return Ok(None);
        }

        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) => {
                tracing::warn!("Failed to read config at {:?}: {}", path, err);
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source: err,
                });
            }
        };

        match Self::parse(&content) {
            Ok(config) => Ok(Some(config)),
            Err(err) => {
                tracing::warn!("Failed to parse config at {:?}: {}", path, err);
                Err(ConfigError::Parse {
                    path: path.to_path_buf(),
                    source: err,
                })
            }
        }
    }

    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Ticker settings with file values layered over the defaults.
    ///
    /// Not validated: callers layer their own overrides on top and validate
    /// the final result once.
    #[must_use]
    pub fn ticker_settings(&self) -> TickerSettings {
        let mut settings = TickerSettings::default();
        if let Some(ticker) = &self.ticker {
            if let Some(ms) = ticker.short_interval_ms {
                settings.short_interval = Duration::from_millis(ms);
            }
            if let Some(ms) = ticker.long_interval_ms {
                settings.long_interval = Duration::from_millis(ms);
            }
            if let Some(ms) = ticker.deadline_ms {
                settings.deadline = Duration::from_millis(ms);
            }
            if let Some(label) = &ticker.short_label {
                settings.short_label.clone_from(label);
            }
            if let Some(label) = &ticker.long_label {
                settings.long_label.clone_from(label);
            }
        }
        settings
    }

    /// Select delays from the file, or the defaults when unset.
    pub fn select_delays(&self) -> Result<[Duration; SOURCE_COUNT], ConfigError> {
        match self.select.as_ref().and_then(|s| s.delays_ms.as_deref()) {
            Some(raw) => fixed_delays(raw).ok_or_else(|| {
                ConfigError::Invalid(format!(
                    "[select] delays_ms needs exactly {SOURCE_COUNT} entries, got {}",
                    raw.len()
                ))
            }),
            None => Ok(DEFAULT_SELECT_DELAYS),
        }
    }
}

/// Convert a millisecond list (e.g. from the command line) into one delay per
/// select source.
pub fn delays_from_millis(raw: &[u64]) -> Result<[Duration; SOURCE_COUNT], ConfigError> {
    fixed_delays(raw).ok_or_else(|| {
        ConfigError::Invalid(format!(
            "select needs exactly {SOURCE_COUNT} delays, got {}",
            raw.len()
        ))
    })
}

fn fixed_delays(raw: &[u64]) -> Option<[Duration; SOURCE_COUNT]> {
    let millis: [u64; SOURCE_COUNT] = raw.try_into().ok()?;
    Some(millis.map(Duration::from_millis))
}

#[must_use]
pub fn config_path() -> Option<PathBuf> {
    if let Some(path) = env::var_os(CONFIG_ENV_VAR).filter(|p| !p.is_empty()) {
        return Some(PathBuf::from(path));
    }
    dirs::home_dir().map(|home| home.join(".tether").join("config.toml"))
}
