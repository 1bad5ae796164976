use thiserror::Error;

use crate::fp::growth::tree::NodeId;

/// Rejected before any mining starts.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("minimum support must lie in (0, 100] percent, got {0}")]
    MinSupportOutOfRange(f64),
    #[error("maximum itemset size must be at least 2, got {0}")]
    MaxItemsTooSmall(usize),
}

/// A boolean item relation that breaks the input contract.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("{labels} item labels given for {columns} item columns")]
    LabelCountMismatch { labels: usize, columns: usize },
    #[error("item label '{0}' appears more than once")]
    DuplicateLabel(String),
    #[error("transaction {row} references item {item}, but only {num_items} items exist")]
    ItemOutOfRange {
        row: usize,
        item: usize,
        num_items: usize,
    },
}

/// Failures raised while building, projecting or walking FP-trees.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MiningError {
    #[error("node {0} is not part of the tree")]
    DanglingNode(NodeId),
    #[error("node {0} is the root sentinel and carries no item")]
    SentinelNode(NodeId),
    #[error("header position {0} does not exist")]
    UnknownHeaderPosition(usize),
    #[error("ancestor at header position {ancestor} does not precede header position {position}")]
    HeaderOrder { position: usize, ancestor: usize },
    #[error("column {column} out of range for a matrix with {columns} columns")]
    ColumnOutOfRange { column: usize, columns: usize },
    #[error("matrix has {columns} columns but {labels} column labels")]
    ShapeMismatch { columns: usize, labels: usize },
    #[error("mining panicked: {0}")]
    Panicked(String),
}

#[derive(Debug, Error)]
pub enum FpGrowthError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("invalid item relation: {0}")]
    Input(#[from] InputError),
    #[error("frequent pattern mining failed: {0}")]
    Execution(#[source] MiningError),
}
