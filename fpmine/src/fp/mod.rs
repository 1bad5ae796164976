pub mod combinations;
pub mod growth;
pub mod matrix;
pub mod patterns;
pub mod relation;
pub mod utils;


pub use growth::{FPNode, FPTree, FpGrowth, MiningStats, TreeShape, fp_growth_algorithm};
pub use matrix::TransactionMatrix;
pub use patterns::{FrequentPatterns, PatternRef};
pub use relation::{ItemFlags, ItemRelation};
pub use utils::{ItemsetStorage, PatternSink};
