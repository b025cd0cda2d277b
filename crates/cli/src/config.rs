//! Driver configuration, read from the environment with defaults.

use std::path::PathBuf;

use stockledger_core::Quantity;
use stockledger_inventory::{DEFAULT_LEDGER_PATH, DEFAULT_LOW_STOCK_THRESHOLD};

pub const PATH_ENV: &str = "STOCKLEDGER_PATH";
pub const THRESHOLD_ENV: &str = "STOCKLEDGER_LOW_STOCK_THRESHOLD";

#[derive(Debug, Clone, PartialEq)]
pub struct DemoConfig {
    /// Ledger file the demo saves to and loads from.
    pub path: PathBuf,
    pub low_stock_threshold: Quantity,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_LEDGER_PATH),
            low_stock_threshold: DEFAULT_LOW_STOCK_THRESHOLD,
        }
    }
}

impl DemoConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup. Malformed values are
    /// reported and replaced by the default.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(path) = lookup(PATH_ENV).filter(|p| !p.trim().is_empty()) {
            config.path = PathBuf::from(path);
        }

        if let Some(raw) = lookup(THRESHOLD_ENV) {
            match parse_threshold(&raw) {
                Some(threshold) => config.low_stock_threshold = threshold,
                None => tracing::warn!(
                    value = %raw,
                    "{THRESHOLD_ENV} is not a number; using {DEFAULT_LOW_STOCK_THRESHOLD}"
                ),
            }
        }

        config
    }
}

fn parse_threshold(raw: &str) -> Option<Quantity> {
    let raw = raw.trim();
    if let Ok(v) = raw.parse::<i64>() {
        return Some(Quantity::Int(v));
    }
    raw.parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .map(Quantity::Float)
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
    fn defaults_without_environment() {
        let config = DemoConfig::from_lookup(lookup(&[]));
        assert_eq!(config, DemoConfig::default());
        assert_eq!(config.path, PathBuf::from("inventory.json"));
        assert_eq!(config.low_stock_threshold, Quantity::Int(5));
    }

    #[test]
    fn reads_overrides() {
        let config = DemoConfig::from_lookup(lookup(&[
            (PATH_ENV, "/tmp/stock.json"),
            (THRESHOLD_ENV, "2.5"),
        ]));
        assert_eq!(config.path, PathBuf::from("/tmp/stock.json"));
        assert_eq!(config.low_stock_threshold, Quantity::Float(2.5));
    }

    #[test]
    fn malformed_threshold_falls_back() {
        let config = DemoConfig::from_lookup(lookup(&[(THRESHOLD_ENV, "lots"), (PATH_ENV, " ")]));
        assert_eq!(config, DemoConfig::default());
    }
}
