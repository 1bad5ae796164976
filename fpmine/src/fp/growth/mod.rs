pub mod builder;
pub mod header;
pub mod mining;
pub mod tree;

pub use header::{HeaderEntry, HeaderTable};
pub use mining::{FpGrowth, MiningStats, fp_growth_algorithm};
pub use tree::{FPNode, FPTree, NodeId, TreeShape};
