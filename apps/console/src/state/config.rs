//! # Configuration State
//!
//! Stores application configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`SHOPDESK_*`)
//! 2. Defaults (this file)
//!
//! ## Thread Safety
//! Configuration is read-only after initialization, so no mutex needed.

use serde::{Deserialize, Serialize};
use shopdesk_core::{DEFAULT_LOW_STOCK_THRESHOLD, VAT_PERCENT_OPTIONS};
use tracing::warn;

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigState {
    /// Store name (shown in the header and on receipts)
    pub store_name: String,

    /// Currency code (ISO 4217)
    pub currency_code: String,

    /// Currency symbol (for display)
    pub currency_symbol: String,

    /// Number of decimal places for currency
    pub currency_decimals: u8,

    /// VAT percentages offered at the terminal
    pub vat_options: Vec<u32>,

    /// VAT preselected at the terminal, one of `vat_options`
    pub default_vat_percent: u32,

    /// Products at or below this stock count are flagged
    pub low_stock_threshold: i64,
}

impl Default for ConfigState {
    /// Returns default configuration suitable for development.
    ///
    /// ## Default Values
    /// - Store: "Shopdesk POS"
    /// - Currency: USD ($)
    /// - VAT: 0% preselected, options 0/5/10/15%
    /// - Low stock: 10 units
    fn default() -> Self {
        ConfigState {
            store_name: "Shopdesk POS".to_string(),
            currency_code: "USD".to_string(),
            currency_symbol: "$".to_string(),
            currency_decimals: 2,
            vat_options: VAT_PERCENT_OPTIONS.to_vec(),
            default_vat_percent: 0,
            low_stock_threshold: DEFAULT_LOW_STOCK_THRESHOLD,
        }
    }
}

impl ConfigState {
    /// Creates a new ConfigState from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `SHOPDESK_STORE_NAME`: Override store name
    /// - `SHOPDESK_CURRENCY_SYMBOL`: Override currency symbol
    /// - `SHOPDESK_DEFAULT_VAT`: Preselected VAT percent (must be an offered option)
    /// - `SHOPDESK_LOW_STOCK_THRESHOLD`: Low-stock cutoff in units
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds configuration from an arbitrary key lookup.
    ///
    /// Unparseable or out-of-range values are logged and ignored.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = ConfigState::default();

        if let Some(store_name) = lookup("SHOPDESK_STORE_NAME") {
            config.store_name = store_name;
        }

        if let Some(symbol) = lookup("SHOPDESK_CURRENCY_SYMBOL") {
            config.currency_symbol = symbol;
        }

        if let Some(vat) = lookup("SHOPDESK_DEFAULT_VAT") {
            match vat.trim().parse::<u32>() {
                Ok(percent) if config.vat_options.contains(&percent) => {
                    config.default_vat_percent = percent;
                }
                _ => warn!(value = %vat, options = ?config.vat_options, "Ignoring SHOPDESK_DEFAULT_VAT"),
            }
        }

        if let Some(threshold) = lookup("SHOPDESK_LOW_STOCK_THRESHOLD") {
            match threshold.trim().parse::<i64>() {
                Ok(units) if units >= 0 => config.low_stock_threshold = units,
                _ => warn!(value = %threshold, "Ignoring SHOPDESK_LOW_STOCK_THRESHOLD"),
            }
        }

        config
    }

    /// Formats a cent amount as a currency string.
    ///
    /// ## Example
    /// ```rust
    /// use shopdesk_console::state::ConfigState;
    ///
    /// let config = ConfigState::default();
    /// assert_eq!(config.format_currency(23800), "$238.00");
    /// ```
    pub fn format_currency(&self, cents: i64) -> String {
        let divisor = 10_i64.pow(self.currency_decimals as u32);
        let whole = cents / divisor;
        let frac = (cents % divisor).abs();

        format!(
            "{}{}{}",
            if cents < 0 { "-" } else { "" },
            self.currency_symbol,
            if self.currency_decimals > 0 {
                format!(
                    "{}.{:0width$}",
                    whole.abs(),
                    frac,
                    width = self.currency_decimals as usize
                )
            } else {
                whole.abs().to_string()
            }
        )
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
    fn test_format_currency_positive() {
        let config = ConfigState::default();
        assert_eq!(config.format_currency(11500), "$115.00");
        assert_eq!(config.format_currency(250), "$2.50");
        assert_eq!(config.format_currency(1), "$0.01");
        assert_eq!(config.format_currency(0), "$0.00");
    }

    #[test]
    fn test_format_currency_negative() {
        let config = ConfigState::default();
        // Gross profit can go negative.
        assert_eq!(config.format_currency(-6000), "-$60.00");
    }

    #[test]
    fn test_env_overrides() {
        let config = ConfigState::from_lookup(lookup(&[
            ("SHOPDESK_STORE_NAME", "Corner Shop"),
            ("SHOPDESK_CURRENCY_SYMBOL", "৳"),
            ("SHOPDESK_DEFAULT_VAT", "15"),
            ("SHOPDESK_LOW_STOCK_THRESHOLD", "5"),
        ]));

        assert_eq!(config.store_name, "Corner Shop");
        assert_eq!(config.format_currency(120), "৳1.20");
        assert_eq!(config.default_vat_percent, 15);
        assert_eq!(config.low_stock_threshold, 5);
    }

    #[test]
    fn test_invalid_overrides_fall_back() {
        let config = ConfigState::from_lookup(lookup(&[
            ("SHOPDESK_DEFAULT_VAT", "12"),
            ("SHOPDESK_LOW_STOCK_THRESHOLD", "-1"),
        ]));

        assert_eq!(config.default_vat_percent, 0);
        assert_eq!(config.low_stock_threshold, DEFAULT_LOW_STOCK_THRESHOLD);
        assert_eq!(config.vat_options, vec![0, 5, 10, 15]);
    }
}
