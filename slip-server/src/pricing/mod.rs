//! Pricing
//!
//! Decimal-backed money helpers, the currency conversion/display table and
//! the unit-quantity heuristic. All randomness is injected so generation
//! can be made deterministic in tests.

pub mod currency;
pub mod quantity;

use std::path::Path;

use rand::Rng;
use rust_decimal::{Decimal, RoundingStrategy, prelude::*};
use serde::{Deserialize, Serialize};

pub use currency::CurrencyTable;
pub use quantity::QuantityRanges;

/// Money is displayed and stored with two decimal places
pub const DECIMAL_PLACES: u32 = 2;

/// Convert f64 to Decimal
pub fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or(Decimal::ZERO)
}

/// Convert Decimal back to f64
pub fn to_f64(value: Decimal) -> f64 {
    value.to_f64().unwrap_or(0.0)
}

/// Round a monetary amount to two decimals, half away from zero
pub fn round_money(value: f64) -> f64 {
    to_f64(
        to_decimal(value).round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero),
    )
}

/// Pricing configuration: currency table plus quantity heuristic.
///
/// Built-in defaults cover the common case; a JSON file can override
/// either table.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PricingConfig {
    pub currency: CurrencyTable,
    pub quantity: QuantityRanges,
}

impl PricingConfig {
    /// Load overrides from a JSON file. Missing keys keep their defaults.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        let config: PricingConfig = serde_json::from_str(&raw)?;
        Ok(config)
    }
}

/// Draw a unit price uniformly from `[base, max]`, rounded to two decimals.
///
/// Inverted bounds are swapped rather than rejected; generation should not
/// fail on a sloppy catalog entry.
pub fn generate_unit_price(rng: &mut impl Rng, base: f64, max: f64) -> f64 {
    let (low, high) = if base <= max { (base, max) } else { (max, base) };
    if low == high {
        return round_money(low);
    }
    round_money(rng.gen_range(low..=high))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn round_money_half_away_from_zero() {
        assert_eq!(round_money(1.005), 1.01);
        assert_eq!(round_money(2.675), 2.68);
        assert_eq!(round_money(1.004), 1.0);
    }

    #[test]
    fn unit_price_stays_in_band() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..1000 {
            let p = generate_unit_price(&mut rng, 2.0, 4.0);
            assert!((2.0..=4.0).contains(&p), "price {p} out of band");
            // two decimal places
            assert_eq!(round_money(p), p);
        }
    }

    #[test]
    fn unit_price_swaps_inverted_bounds() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            let p = generate_unit_price(&mut rng, 4.0, 2.0);
            assert!((2.0..=4.0).contains(&p));
        }
    }

    #[test]
    fn unit_price_degenerate_band() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(generate_unit_price(&mut rng, 3.5, 3.5), 3.5);
    }

    #[test]
    fn config_defaults_round_trip() {
        let config = PricingConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let back: PricingConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back.currency.base, config.currency.base);
    }

    #[test]
    fn config_partial_override() {
        let config: PricingConfig = serde_json::from_str(r#"{"currency":{"base":"Rs"}}"#).unwrap();
        assert!(config.currency.is_supported("$"));
        assert_eq!(config.quantity.default_range, (1, 10));
    }
}
