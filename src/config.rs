//! Service configuration from environment variables
//!
//! A `.env` file in the working directory is read first when present.

use crate::analytics::MarketConfig;
use crate::domain::RateTable;
use crate::errors::ServerError;
use crate::geo::RegionResolver;
use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";
const DEFAULT_MAX_WORKERS: usize = 8;
const DEFAULT_MAX_BODY_BYTES: usize = 10 * 1024 * 1024;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub max_workers: usize,
    /// Largest request body the analytics endpoints will read.
    pub max_body_bytes: usize,
    /// Optional JSON rate table replacing the built-in EUR multipliers.
    pub rates_file: Option<PathBuf>,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// Environment variables:
    /// - `INSIGHTS_BIND_ADDR` (default: 127.0.0.1:3000)
    /// - `INSIGHTS_MAX_WORKERS` (default: 8)
    /// - `INSIGHTS_MAX_BODY_BYTES` (default: 10485760)
    /// - `INSIGHTS_RATES_FILE` (default: built-in rates)
    pub fn from_env() -> Result<Self, ServerError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Reads settings through `lookup`, so tests need not touch the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ServerError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bind_raw = lookup("INSIGHTS_BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_raw
            .parse::<SocketAddr>()
            .map_err(|e| ServerError::Config(format!("invalid INSIGHTS_BIND_ADDR {bind_raw:?}: {e}")))?;

        Ok(Self {
            bind_addr,
            max_workers: lookup("INSIGHTS_MAX_WORKERS")
                .and_then(|s| s.parse::<usize>().ok())
                .filter(|n| *n > 0)
                .unwrap_or(DEFAULT_MAX_WORKERS),
            max_body_bytes: lookup("INSIGHTS_MAX_BODY_BYTES")
                .and_then(|s| s.parse::<usize>().ok())
                .filter(|n| *n > 0)
                .unwrap_or(DEFAULT_MAX_BODY_BYTES),
            rates_file: lookup("INSIGHTS_RATES_FILE")
                .filter(|s| !s.trim().is_empty())
                .map(PathBuf::from),
        })
    }

    /// Builds the aggregator tables, loading the rate file if one is configured.
    pub fn market_config(&self) -> Result<MarketConfig, ServerError> {
        let rates = match &self.rates_file {
            Some(path) => RateTable::from_json_file(path)?,
            None => RateTable::default(),
        };
        Ok(MarketConfig {
            regions: RegionResolver::default(),
            rates,
        })
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            max_workers: DEFAULT_MAX_WORKERS,
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
            rates_file: None,
        }
    }
}

/// Deployment environment name, from `APP_ENV`.
pub fn get_environment() -> String {
    env::var("APP_ENV").unwrap_or_else(|_| "development".to_string())
}
