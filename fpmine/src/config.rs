use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

pub const DEFAULT_MIN_SUPPORT_PERCENT: f64 = 20.0;
pub const DEFAULT_MAX_ITEMS_PER_RULE: usize = 6;

/// Patterns with fewer items never reach the output.
pub const MIN_ITEMS_PER_RULE: usize = 2;

/// Mining options recognised by [`fp_growth_algorithm`](crate::fp_growth_algorithm).
///
/// Missing fields fall back to their defaults when deserialized, so a host can
/// hand over a partial TOML or JSON block. Deserialization does not validate;
/// the mining entry point does.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FpGrowthConfig {
    /// Minimum support as a percentage of all examples, in (0, 100].
    pub min_support_percent: f64,
    /// Largest itemset kept in the output, at least 2.
    pub max_items_per_rule: usize,
}

impl Default for FpGrowthConfig {
    fn default() -> Self {
        Self {
            min_support_percent: DEFAULT_MIN_SUPPORT_PERCENT,
            max_items_per_rule: DEFAULT_MAX_ITEMS_PER_RULE,
        }
    }
}

impl FpGrowthConfig {
    pub fn new(min_support_percent: f64, max_items_per_rule: usize) -> Result<Self, ConfigError> {
        let config = Self {
            min_support_percent,
            max_items_per_rule,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn with_min_support(mut self, percent: f64) -> Self {
        self.min_support_percent = percent;
        self
    }

    pub fn with_max_items(mut self, max_items: usize) -> Self {
        self.max_items_per_rule = max_items;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        // NaN fails both comparisons
        if !(self.min_support_percent > 0.0 && self.min_support_percent <= 100.0) {
            return Err(ConfigError::MinSupportOutOfRange(self.min_support_percent));
        }
        if self.max_items_per_rule < MIN_ITEMS_PER_RULE {
            return Err(ConfigError::MaxItemsTooSmall(self.max_items_per_rule));
        }
        Ok(())
    }

    /// Absolute transaction count a pattern must reach among `num_examples`.
    pub fn cutoff(&self, num_examples: usize) -> usize {
        support_cutoff(num_examples, self.min_support_percent)
    }
}

/// Converts a support percentage into an absolute count, rounding up whenever
/// the product leaves any fractional remainder.
pub fn support_cutoff(num_examples: usize, min_support_percent: f64) -> usize {
    let raw = num_examples as f64 * min_support_percent / 100.0;
    let cutoff = raw as usize;
    if raw > cutoff as f64 {
        cutoff + 1
    } else {
        cutoff
    }
}
