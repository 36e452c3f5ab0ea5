//! Currency conversion and display
//!
//! All catalog prices are stored in the base currency (rupees); formats
//! pick a display currency and amounts are converted at a static rate on
//! the way out. An unknown symbol converts 1:1 with a warning rather than
//! failing a whole batch.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use super::round_money;

fn default_base() -> String {
    "Rs".to_string()
}

fn default_rates() -> BTreeMap<String, f64> {
    BTreeMap::from([
        ("Rs".to_string(), 1.0),
        ("$".to_string(), 0.012),
        ("€".to_string(), 0.011),
        ("£".to_string(), 0.0095),
        ("₹".to_string(), 1.0),
        ("¥".to_string(), 1.8),
        ("₽".to_string(), 1.2),
        ("AED".to_string(), 0.044),
        ("SAR".to_string(), 0.045),
    ])
}

fn default_two_decimal() -> BTreeSet<String> {
    ["$", "€", "£", "AED", "SAR"]
        .into_iter()
        .map(String::from)
        .collect()
}

fn default_whole_number() -> BTreeSet<String> {
    ["¥", "₽"].into_iter().map(String::from).collect()
}

/// Static conversion-rate table keyed by currency symbol
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CurrencyTable {
    /// Symbol catalog prices are stored in
    pub base: String,
    /// Units of target currency per one unit of base
    pub rates: BTreeMap<String, f64>,
    /// Symbols rendered tight with two decimals ("$1.01")
    pub two_decimal: BTreeSet<String>,
    /// Symbols rendered tight with no decimals ("¥100")
    pub whole_number: BTreeSet<String>,
}

impl Default for CurrencyTable {
    fn default() -> Self {
        Self {
            base: default_base(),
            rates: default_rates(),
            two_decimal: default_two_decimal(),
            whole_number: default_whole_number(),
        }
    }
}

impl CurrencyTable {
    pub fn is_supported(&self, symbol: &str) -> bool {
        self.rates.contains_key(symbol)
    }

    pub fn conversion_rate(&self, symbol: &str) -> Option<f64> {
        self.rates.get(symbol).copied()
    }

    pub fn available_currencies(&self) -> Vec<&str> {
        self.rates.keys().map(String::as_str).collect()
    }

    /// Convert an amount from the base currency into `symbol`.
    ///
    /// Unknown symbols pass the amount through unchanged.
    pub fn convert(&self, amount: f64, symbol: &str) -> f64 {
        if symbol == self.base {
            return amount;
        }
        match self.rates.get(symbol) {
            Some(rate) => round_money(amount * rate),
            None => {
                tracing::warn!(symbol, "unknown currency symbol, amount left unconverted");
                amount
            }
        }
    }

    /// Convert both ends of a price band.
    pub fn convert_range(&self, low: f64, high: f64, symbol: &str) -> (f64, f64) {
        (self.convert(low, symbol), self.convert(high, symbol))
    }

    /// Format an already-converted amount for display.
    ///
    /// `show_symbol == false` drops the symbol but keeps the rounding class.
    /// Amounts go through [`round_money`] first so display and arithmetic
    /// agree on midpoints (half away from zero).
    pub fn format_price(&self, amount: f64, symbol: &str, show_symbol: bool) -> String {
        if self.whole_number.contains(symbol) {
            let rounded = amount.round() as i64;
            if show_symbol {
                format!("{symbol}{rounded}")
            } else {
                format!("{rounded}")
            }
        } else {
            let amount = round_money(amount);
            if self.two_decimal.contains(symbol) {
                if show_symbol {
                    format!("{symbol}{amount:.2}")
                } else {
                    format!("{amount:.2}")
                }
            } else if show_symbol {
                format!("{symbol} {amount:.2}")
            } else {
                format!("{amount:.2}")
            }
        }
    }

    /// Format a converted price band, e.g. `$0.02 - $0.05`.
    pub fn format_range(&self, low: f64, high: f64, symbol: &str) -> String {
        format!(
            "{} - {}",
            self.format_price(low, symbol, true),
            self.format_price(high, symbol, true)
        )
    }

    /// Catalog price band display for one product.
    ///
    /// Base-currency prices are shown as stored; anything else is converted
    /// first.
    pub fn product_price_display(&self, base: f64, max: f64, unit: &str, symbol: &str) -> String {
        if symbol == self.base {
            return format!("{} {base} - {max} per {unit}", self.base);
        }
        let (low, high) = self.convert_range(base, max, symbol);
        format!("{} per {unit}", self.format_range(low, high, symbol))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_conversion_is_identity() {
        let table = CurrencyTable::default();
        assert_eq!(table.convert(123.45, "Rs"), 123.45);
    }

    #[test]
    fn conversion_applies_rate_and_rounds() {
        let table = CurrencyTable::default();
        assert_eq!(table.convert(100.0, "$"), 1.2);
        assert_eq!(table.convert(84.17, "$"), 1.01);
        assert_eq!(table.convert(100.0, "¥"), 180.0);
    }

    #[test]
    fn unknown_symbol_passes_through() {
        let table = CurrencyTable::default();
        assert_eq!(table.convert(50.0, "BTC"), 50.0);
        assert!(!table.is_supported("BTC"));
    }

    #[test]
    fn conversion_is_proportional() {
        let table = CurrencyTable::default();
        let one = table.convert(1000.0, "€");
        let two = table.convert(2000.0, "€");
        assert!((two - 2.0 * one).abs() < 0.01);
    }

    #[test]
    fn format_classes() {
        let table = CurrencyTable::default();
        assert_eq!(table.format_price(1.006, "$", true), "$1.01");
        assert_eq!(table.format_price(100.4, "¥", true), "¥100");
        assert_eq!(table.format_price(100.5, "₽", true), "₽101");
        assert_eq!(table.format_price(11.5, "Rs", true), "Rs 11.50");
        assert_eq!(table.format_price(3.0, "AED", true), "AED3.00");
    }

    #[test]
    fn format_rounds_midpoints_like_round_money() {
        let table = CurrencyTable::default();
        assert_eq!(round_money(2.675), 2.68);
        assert_eq!(table.format_price(2.675, "$", true), "$2.68");
        assert_eq!(table.format_price(1.005, "Rs", true), "Rs 1.01");
        assert_eq!(table.format_price(2.675, "€", false), "2.68");
    }

    #[test]
    fn format_without_symbol_keeps_class_rounding() {
        let table = CurrencyTable::default();
        assert_eq!(table.format_price(100.4, "¥", false), "100");
        assert_eq!(table.format_price(1.006, "$", false), "1.01");
        assert_eq!(table.format_price(11.5, "Rs", false), "11.50");
    }

    #[test]
    fn product_display_base_shortcut() {
        let table = CurrencyTable::default();
        assert_eq!(
            table.product_price_display(2.0, 4.0, "kg", "Rs"),
            "Rs 2 - 4 per kg"
        );
    }

    #[test]
    fn product_display_converted() {
        let table = CurrencyTable::default();
        let display = table.product_price_display(100.0, 200.0, "kg", "$");
        assert_eq!(display, "$1.20 - $2.40 per kg");
    }

    #[test]
    fn available_currencies_lists_all() {
        let table = CurrencyTable::default();
        let all = table.available_currencies();
        assert_eq!(all.len(), 9);
        assert!(all.contains(&"Rs"));
        assert!(all.contains(&"SAR"));
    }
}
