//! Runtime configuration from environment variables (`.env` is loaded by main)

use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use tracing::warn;

use crate::pricing::Currency;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_DATASET_PATH: &str = "data/gujarat-attractions.json";
const DEFAULT_BOOKING_TTL_SECS: u64 = 30 * 60;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub dataset_path: PathBuf,
    pub booking_ttl: Duration,
    pub currency: Currency,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            dataset_path: PathBuf::from(DEFAULT_DATASET_PATH),
            booking_ttl: Duration::from_secs(DEFAULT_BOOKING_TTL_SECS),
            currency: Currency::default(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; unset keys keep their defaults
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let currency = Currency {
            code: lookup("CURRENCY_CODE").unwrap_or(defaults.currency.code),
            symbol: lookup("CURRENCY_SYMBOL").unwrap_or(defaults.currency.symbol),
        };

        Self {
            host: lookup("HOST").unwrap_or(defaults.host),
            port: parse_or("PORT", lookup("PORT"), defaults.port),
            dataset_path: lookup("DATASET_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.dataset_path),
            booking_ttl: Duration::from_secs(parse_or(
                "BOOKING_TTL_SECS",
                lookup("BOOKING_TTL_SECS"),
                DEFAULT_BOOKING_TTL_SECS,
            )),
            currency,
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_or<T: FromStr + Copy>(key: &str, raw: Option<String>, default: T) -> T {
    match raw {
        Some(value) => value.trim().parse().unwrap_or_else(|_| {
            warn!("Invalid {} value {:?}, using default", key, value);
            default
        }),
        None => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup(&[]));
        assert_eq!(config.bind_addr(), "0.0.0.0:3000");
        assert_eq!(config.dataset_path, PathBuf::from("data/gujarat-attractions.json"));
        assert_eq!(config.booking_ttl, Duration::from_secs(1800));
        assert_eq!(config.currency.symbol, "₹");
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup(&[
            ("HOST", "127.0.0.1"),
            ("PORT", "8080"),
            ("DATASET_PATH", "/srv/data.json"),
            ("BOOKING_TTL_SECS", "60"),
            ("CURRENCY_SYMBOL", "Rs. "),
        ]));
        assert_eq!(config.bind_addr(), "127.0.0.1:8080");
        assert_eq!(config.dataset_path, PathBuf::from("/srv/data.json"));
        assert_eq!(config.booking_ttl, Duration::from_secs(60));
        assert_eq!(config.currency.symbol, "Rs. ");
        assert_eq!(config.currency.code, "INR");
    }

    #[test]
    fn test_invalid_numbers_fall_back() {
        let config = Config::from_lookup(lookup(&[("PORT", "http"), ("BOOKING_TTL_SECS", "-5")]));
        assert_eq!(config.port, 3000);
        assert_eq!(config.booking_ttl, Duration::from_secs(1800));
    }
}
