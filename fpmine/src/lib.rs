//! FP-Growth frequent itemset mining.
//!
//! Transactions arrive as a boolean item relation ([`ItemRelation`]). The
//! miner builds an FP-tree, recursively projects conditional pattern bases
//! and enumerates single-path trees directly. Patterns with between two and
//! [`FpGrowthConfig::max_items_per_rule`] items are returned as
//! [`FrequentPatterns`], whose records are `[item, .., item, support]`.
//!
//! ```
//! use fpmine::{FpGrowthConfig, ItemFlags, fp_growth_algorithm};
//!
//! let labels = vec!["bread".to_string(), "milk".to_string(), "eggs".to_string()];
//! let relation = ItemFlags::from_transactions(
//!     labels,
//!     &[vec![0, 1], vec![0, 1, 2], vec![0], vec![1, 2], vec![0, 1, 2]],
//! )?;
//! let config = FpGrowthConfig::new(40.0, 3)?;
//!
//! let patterns = fp_growth_algorithm(&relation, &config)?.expect("frequent pairs exist");
//! assert_eq!(patterns.len(), 4);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod config;
pub mod error;
pub mod fp;

pub use config::{FpGrowthConfig, support_cutoff};
pub use error::{ConfigError, FpGrowthError, InputError, MiningError};
pub use fp::{FrequentPatterns, ItemFlags, ItemRelation, PatternRef, fp_growth_algorithm};
