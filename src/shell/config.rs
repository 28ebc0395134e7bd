// Settings for the standings binary, read from the environment.
//
// STANDINGS_INPUT      path to the saved leaderboard document (required)
// STANDINGS_YEAR       event year, defaults to the document's `event`
// STANDINGS_OVERRIDES  path to a JSON array of overrides, applied in order

use std::fs;
use std::path::PathBuf;

use thiserror::Error;

use crate::modules::standings::core::overrides::Override;
use crate::modules::standings::core::raw::RawLeaderboard;

pub const INPUT_KEY: &str = "STANDINGS_INPUT";
pub const YEAR_KEY: &str = "STANDINGS_YEAR";
pub const OVERRIDES_KEY: &str = "STANDINGS_OVERRIDES";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required setting {0}")]
    Missing(&'static str),

    #[error("{key} must be a year, got {value:?}")]
    InvalidYear { key: &'static str, value: String },

    #[error("overrides unavailable at {path}")]
    OverridesUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("overrides file is malformed: {0}")]
    MalformedOverrides(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub input: PathBuf,
    pub year: Option<i32>,
    pub overrides: Vec<Override>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let present = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let input = present(INPUT_KEY)
            .map(PathBuf::from)
            .ok_or(ConfigError::Missing(INPUT_KEY))?;

        let year = present(YEAR_KEY)
            .map(|value| {
                value.trim().parse::<i32>().map_err(|_| ConfigError::InvalidYear {
                    key: YEAR_KEY,
                    value,
                })
            })
            .transpose()?;

        let overrides = match present(OVERRIDES_KEY) {
            Some(path) => load_overrides(PathBuf::from(path))?,
            None => Vec::new(),
        };

        Ok(Self {
            input,
            year,
            overrides,
        })
    }

    /// The configured year, or the one named by the document itself.
    pub fn resolve_year(&self, leaderboard: &RawLeaderboard) -> Result<i32, ConfigError> {
        self.year
            .or_else(|| leaderboard.event_year())
            .ok_or_else(|| ConfigError::InvalidYear {
                key: YEAR_KEY,
                value: leaderboard.event.clone(),
            })
    }
}

fn load_overrides(path: PathBuf) -> Result<Vec<Override>, ConfigError> {
    let text = fs::read_to_string(&path)
        .map_err(|source| ConfigError::OverridesUnavailable { path, source })?;
    Ok(serde_json::from_str(&text)?)
}
