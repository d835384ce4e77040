// src/domain/currency.rs

use crate::errors::ServerError;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

pub const BASE_CURRENCY: &str = "EUR";

/// Fixed multipliers into EUR. This is a coarse normalisation for grouping
/// listings priced in different currencies, not an exchange-rate feed.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct RateTable {
    rates: BTreeMap<String, f64>,
}

impl RateTable {
    /// Builds a table from `code -> rate` pairs. Codes are upper-cased and EUR is pinned to 1.
    pub fn new<I, S>(rates: I) -> Result<Self, ServerError>
    where
        I: IntoIterator<Item = (S, f64)>,
        S: AsRef<str>,
    {
        let mut table = BTreeMap::new();
        for (code, rate) in rates {
            let code = code.as_ref().trim().to_ascii_uppercase();
            if code.is_empty() {
                return Err(ServerError::Config("empty currency code in rate table".into()));
            }
            if !rate.is_finite() || rate <= 0.0 {
                return Err(ServerError::Config(format!(
                    "rate for {code} must be a positive number, got {rate}"
                )));
            }
            table.insert(code, rate);
        }
        table.insert(BASE_CURRENCY.to_string(), 1.0);
        Ok(Self { rates: table })
    }

    /// Loads a JSON object such as `{"GBP": 1.15, "USD": 0.85}`.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ServerError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|e| {
            ServerError::Config(format!("failed to read rate table {}: {e}", path.display()))
        })?;
        let rates: BTreeMap<String, f64> = serde_json::from_str(&raw).map_err(|e| {
            ServerError::Config(format!("invalid rate table {}: {e}", path.display()))
        })?;
        Self::new(rates)
    }

    /// Rate for a currency code; unknown or missing codes pass through at 1.
    pub fn rate(&self, currency: Option<&str>) -> f64 {
        currency
            .map(|c| c.trim().to_ascii_uppercase())
            .and_then(|c| self.rates.get(&c).copied())
            .unwrap_or(1.0)
    }

    pub fn convert_to_eur(&self, price: f64, currency: Option<&str>) -> f64 {
        price * self.rate(currency)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.rates.iter().map(|(code, rate)| (code.as_str(), *rate))
    }
}

impl Default for RateTable {
    fn default() -> Self {
        let rates = [("EUR", 1.0), ("GBP", 1.15), ("USD", 0.85)]
            .into_iter()
            .map(|(code, rate)| (code.to_string(), rate))
            .collect();
        Self { rates }
    }
}
