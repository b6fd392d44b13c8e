use std::env;
use std::path::PathBuf;
use std::time::Duration;

use log::LevelFilter;

use crate::error::ConfigError;
use crate::model::PlayerId;

pub const DEFAULT_BASE_URL: &str = "https://fsa-puppy-bowl.herokuapp.com/api";
pub const DEFAULT_COHORT: &str = "2306-FTB-ET-WEB-PT";
const DEFAULT_TIMEOUT_SECS: u64 = 10;
const DEFAULT_LOG_FILE: &str = "puppy_bowl.log";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
    pub cohort: String,
    pub timeout: Duration,
    pub log_file: PathBuf,
    pub log_level: LevelFilter,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            cohort: DEFAULT_COHORT.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
            log_level: LevelFilter::Info,
        }
    }
}

impl ClientConfig {
    /// Reads `PUPPY_BOWL_*` variables from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let opt = |key: &str| {
            lookup(key).and_then(|val| {
                let val = val.trim().to_string();
                if val.is_empty() { None } else { Some(val) }
            })
        };

        let mut config = Self::default();
        if let Some(base) = opt("PUPPY_BOWL_BASE_URL") {
            if !base.starts_with("http://") && !base.starts_with("https://") {
                return Err(ConfigError::InvalidBaseUrl(base));
            }
            config.base_url = base.trim_end_matches('/').to_string();
        }
        if let Some(cohort) = opt("PUPPY_BOWL_COHORT") {
            config.cohort = cohort;
        }
        if let Some(raw) = opt("PUPPY_BOWL_TIMEOUT_SECS") {
            let secs = raw
                .parse::<u64>()
                .map_err(|_| ConfigError::InvalidTimeout(raw.clone()))?;
            config.timeout = Duration::from_secs(secs.max(1));
        }
        if let Some(path) = opt("PUPPY_BOWL_LOG_FILE") {
            config.log_file = PathBuf::from(path);
        }
        if let Some(level) = opt("PUPPY_BOWL_LOG_LEVEL") {
            config.log_level = level
                .parse::<LevelFilter>()
                .map_err(|_| ConfigError::InvalidLogLevel(level.clone()))?;
        }
        Ok(config)
    }

    pub fn api_url(&self) -> String {
        format!("{}/{}", self.base_url, self.cohort)
    }

    pub fn players_url(&self) -> String {
        format!("{}/players", self.api_url())
    }

    pub fn player_url(&self, id: PlayerId) -> String {
        format!("{}/players/{id}", self.api_url())
    }

    pub fn teams_url(&self) -> String {
        format!("{}/teams", self.api_url())
    }
}
