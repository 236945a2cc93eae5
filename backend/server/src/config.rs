use std::{env, fmt::Display, str::FromStr};

use thiserror::Error;
use tracing::{info, warn};

#[derive(Error, Debug)]
#[error("Invalid {key} value {value:?}: {reason}")]
pub struct ConfigError {
    key: &'static str,
    value: String,
    reason: String,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub seed_articles: bool,
    pub max_body_bytes: usize,
    pub cors_max_age_secs: u64,
}

impl Config {
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_with(|key| env::var(key).ok())
    }

    fn load_with(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        Ok(Self {
            port: try_load(&lookup, "RUST_PORT", "5000")?,
            seed_articles: try_load(&lookup, "SEED_ARTICLES", "true")?,
            max_body_bytes: try_load(&lookup, "MAX_BODY_BYTES", "1048576")?,
            cors_max_age_secs: try_load(&lookup, "CORS_MAX_AGE_SECS", "3600")?,
        })
    }
}

fn try_load<T: FromStr>(
    lookup: impl Fn(&str) -> Option<String>,
    key: &'static str,
    default: &str,
) -> Result<T, ConfigError>
where
    T::Err: Display,
{
    let value = lookup(key).unwrap_or_else(|| {
        info!("{key} not set, using default: {default}");
        default.to_string()
    });

    let parsed = value.trim().parse::<T>();

    parsed.map_err(|e| {
        warn!("Invalid {key} value: {e}");

        ConfigError {
            key,
            reason: e.to_string(),
            value,
        }
    })
}
