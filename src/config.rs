//! Environment-driven configuration.
//!
//! Values come from the process environment, with a `.env` file loaded
//! first when present.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use rust_decimal::Decimal;

use crate::booking::FeeRates;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_WARM_INTERVAL_SECS: u64 = 10 * 60;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{key} has invalid value {value:?}: {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}

/// Runtime settings for the service
#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: SocketAddr,
    /// Postgres booking store; the in-memory store is used when unset.
    pub database_url: Option<String>,
    /// JSON fixture for the in-memory store; the bundled demo data when unset.
    pub seed_file: Option<PathBuf>,
    pub fee_rates: FeeRates,
    pub cache_warm_interval: Duration,
}

impl Config {
    /// Load from `.env` and the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        if let Err(e) = dotenvy::dotenv() {
            if !e.not_found() {
                tracing::warn!("Failed to load .env: {}", e);
            }
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let bind_addr = match get("BIND_ADDR") {
            Some(value) => value.parse::<SocketAddr>().map_err(|e| {
                ConfigError::Invalid {
                    key: "BIND_ADDR",
                    value: value.clone(),
                    reason: e.to_string(),
                }
            })?,
            None => DEFAULT_BIND_ADDR
                .parse::<SocketAddr>()
                .map_err(|e| ConfigError::Invalid {
                    key: "BIND_ADDR",
                    value: DEFAULT_BIND_ADDR.to_string(),
                    reason: e.to_string(),
                })?,
        };

        let defaults = FeeRates::default();
        let fee_rates = FeeRates {
            cleaning_rate: parse_rate("CLEANING_FEE_RATE", get("CLEANING_FEE_RATE"))?
                .unwrap_or(defaults.cleaning_rate),
            service_rate: parse_rate("SERVICE_FEE_RATE", get("SERVICE_FEE_RATE"))?
                .unwrap_or(defaults.service_rate),
        };

        let cache_warm_interval = match get("CACHE_WARM_INTERVAL_SECS") {
            Some(value) => {
                let secs: u64 = value.parse().map_err(|e: std::num::ParseIntError| {
                    ConfigError::Invalid {
                        key: "CACHE_WARM_INTERVAL_SECS",
                        value: value.clone(),
                        reason: e.to_string(),
                    }
                })?;
                if secs == 0 {
                    return Err(ConfigError::Invalid {
                        key: "CACHE_WARM_INTERVAL_SECS",
                        value,
                        reason: "must be positive".to_string(),
                    });
                }
                Duration::from_secs(secs)
            }
            None => Duration::from_secs(DEFAULT_WARM_INTERVAL_SECS),
        };

        Ok(Self {
            bind_addr,
            database_url: get("DATABASE_URL"),
            seed_file: get("SEED_FILE").map(PathBuf::from),
            fee_rates,
            cache_warm_interval,
        })
    }
}

/// Fee rates are fractions in `[0, 1]`
fn parse_rate(key: &'static str, value: Option<String>) -> Result<Option<Decimal>, ConfigError> {
    let Some(value) = value else {
        return Ok(None);
    };
    let rate: Decimal = value.trim().parse().map_err(|e: rust_decimal::Error| ConfigError::Invalid {
        key,
        value: value.clone(),
        reason: e.to_string(),
    })?;
    if rate < Decimal::ZERO || rate > Decimal::ONE {
        return Err(ConfigError::Invalid {
            key,
            value,
            reason: "must be between 0 and 1".to_string(),
        });
    }
    Ok(Some(rate))
}
