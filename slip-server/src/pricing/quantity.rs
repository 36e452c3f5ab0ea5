//! Quantity heuristic
//!
//! When a generation request does not pin a quantity, a plausible one is
//! drawn from a range keyed on the product's unit. Matching is
//! case-insensitive and tolerant of singular/plural spellings.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// One unit-keyed quantity rule
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuantityRule {
    pub units: Vec<String>,
    pub min: i64,
    pub max: i64,
}

/// Quantity ranges per unit class
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct QuantityRanges {
    pub rules: Vec<QuantityRule>,
    /// Applied when no rule matches the unit
    pub default_range: (i64, i64),
}

fn rule(units: &[&str], min: i64, max: i64) -> QuantityRule {
    QuantityRule {
        units: units.iter().map(|u| u.to_string()).collect(),
        min,
        max,
    }
}

impl Default for QuantityRanges {
    fn default() -> Self {
        Self {
            rules: vec![
                rule(&["pieces", "pcs"], 1, 20),
                rule(&["kg", "kilogram", "kilograms"], 1, 7),
                rule(
                    &["glass", "glasses", "bottle", "bottles", "can", "cans"],
                    1,
                    20,
                ),
                rule(&["dozen", "dozens"], 1, 5),
                rule(&["pack", "packs", "packet", "packets"], 1, 10),
            ],
            default_range: (1, 10),
        }
    }
}

impl QuantityRanges {
    /// Inclusive quantity range for a unit.
    pub fn range_for(&self, unit: &str) -> (i64, i64) {
        let needle = unit.trim().to_lowercase();
        for rule in &self.rules {
            if rule.units.iter().any(|u| u == &needle) {
                return (rule.min, rule.max);
            }
        }
        self.default_range
    }

    /// Draw a realistic quantity for a unit.
    pub fn realistic_quantity(&self, rng: &mut impl Rng, unit: &str) -> i64 {
        let (min, max) = self.range_for(unit);
        if min >= max {
            return min;
        }
        rng.gen_range(min..=max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn unit_classes_match_case_insensitively() {
        let ranges = QuantityRanges::default();
        assert_eq!(ranges.range_for("KG"), (1, 7));
        assert_eq!(ranges.range_for("Kilograms"), (1, 7));
        assert_eq!(ranges.range_for("pcs"), (1, 20));
        assert_eq!(ranges.range_for("Bottles"), (1, 20));
        assert_eq!(ranges.range_for("dozen"), (1, 5));
        assert_eq!(ranges.range_for("packets"), (1, 10));
    }

    #[test]
    fn unknown_unit_uses_default() {
        let ranges = QuantityRanges::default();
        assert_eq!(ranges.range_for("litre"), (1, 10));
        assert_eq!(ranges.range_for(""), (1, 10));
    }

    #[test]
    fn quantities_stay_in_range() {
        let ranges = QuantityRanges::default();
        let mut rng = StdRng::seed_from_u64(99);
        for _ in 0..500 {
            let q = ranges.realistic_quantity(&mut rng, "kg");
            assert!((1..=7).contains(&q));
        }
    }
}
