use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use log::{debug, error, info, trace};

use super::builder::{build_fp_tree, project_conditional};
use super::header::HeaderTable;
use super::tree::TreeShape;
use crate::config::FpGrowthConfig;
use crate::error::{FpGrowthError, MiningError};
use crate::fp::combinations::emit_single_path;
use crate::fp::matrix::TransactionMatrix;
use crate::fp::patterns::{FrequentPatterns, assemble};
use crate::fp::relation::ItemRelation;
use crate::fp::utils::{ItemsetStorage, PatternSink};

/// Counters collected over one mining run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MiningStats {
    pub trees_built: usize,
    pub single_paths: usize,
    /// Length of the longest prefix mined under.
    pub max_depth: usize,
    pub patterns_emitted: usize,
}

/// Recursive FP-Growth miner for a fixed absolute support cutoff.
#[derive(Debug, Clone)]
pub struct FpGrowth {
    cutoff: usize,
    stats: MiningStats,
}

impl FpGrowth {
    pub fn new(cutoff: usize) -> Self {
        Self {
            cutoff,
            stats: MiningStats::default(),
        }
    }

    pub fn cutoff(&self) -> usize {
        self.cutoff
    }

    pub fn stats(&self) -> MiningStats {
        self.stats
    }

    /// Mines every frequent extension of `prefix` within `matrix` and hands
    /// each pattern to `sink`.
    pub fn mine<S: PatternSink + ?Sized>(
        &mut self,
        matrix: &TransactionMatrix,
        prefix: &[usize],
        sink: &mut S,
    ) -> Result<(), MiningError> {
        self.stats.max_depth = self.stats.max_depth.max(prefix.len());

        let mut header = HeaderTable::build(matrix, self.cutoff);
        let fp_tree = build_fp_tree(matrix, &mut header)?;
        self.stats.trees_built += 1;

        let shape = fp_tree.shape();
        debug!(
            "prefix {:?}: {}x{} matrix, {} header items, {} nodes, {:?}",
            prefix,
            matrix.num_rows(),
            matrix.num_columns(),
            header.len(),
            fp_tree.len(),
            shape
        );

        match shape {
            TreeShape::Empty => Ok(()),
            TreeShape::SinglePath => {
                self.stats.single_paths += 1;
                let path = fp_tree.single_path()?;
                let mut traced = TracingSink { inner: sink };
                self.stats.patterns_emitted +=
                    emit_single_path(&fp_tree, &path, prefix, &mut traced)?;
                Ok(())
            }
            TreeShape::Branching => {
                let mut pattern = Vec::with_capacity(prefix.len() + 1);
                pattern.extend_from_slice(prefix);

                for position in (0..header.len()).rev() {
                    let entry = &header.entries()[position];
                    pattern.push(entry.label);
                    trace!("pattern {:?} support {}", pattern, entry.total);
                    sink.emit(&pattern, entry.total);
                    self.stats.patterns_emitted += 1;

                    let conditional = project_conditional(&fp_tree, &header, position)?;
                    if conditional.num_rows() > 0 {
                        self.mine(&conditional, &pattern, sink)?;
                    }
                    pattern.pop();
                }
                Ok(())
            }
        }
    }
}

struct TracingSink<'a, S: PatternSink + ?Sized> {
    inner: &'a mut S,
}

impl<S: PatternSink + ?Sized> PatternSink for TracingSink<'_, S> {
    fn emit(&mut self, items: &[usize], support: usize) {
        trace!("pattern {:?} support {}", items, support);
        self.inner.emit(items, support);
    }
}

/// Mines all frequent itemsets of `relation` and encodes those with 2 to
/// `config.max_items_per_rule` items.
///
/// Returns `Ok(None)` when no pattern survives. A failure anywhere in the
/// recursion, including a panic from the relation, is logged once and
/// returned as [`FpGrowthError::Execution`] without partial output.
pub fn fp_growth_algorithm<R: ItemRelation + ?Sized>(
    relation: &R,
    config: &FpGrowthConfig,
) -> Result<Option<FrequentPatterns>, FpGrowthError> {
    config.validate()?;

    let num_examples = relation.num_examples();
    let cutoff = config.cutoff(num_examples);
    info!(
        "mining {} examples over {} items: min support {}% -> cutoff {}",
        num_examples,
        relation.num_items(),
        config.min_support_percent,
        cutoff
    );

    let outcome = panic::catch_unwind(AssertUnwindSafe(|| mine_relation(relation, cutoff)));
    let (mined, stats) = match outcome {
        Ok(Ok(mined)) => mined,
        Ok(Err(err)) => return Err(execution_failure(err)),
        Err(payload) => {
            return Err(execution_failure(MiningError::Panicked(panic_message(
                payload.as_ref(),
            ))));
        }
    };

    let patterns = assemble(&mined, config.max_items_per_rule, relation.item_labels());
    info!(
        "mined {} patterns with {} trees ({} single paths, depth {}), {} in output",
        stats.patterns_emitted,
        stats.trees_built,
        stats.single_paths,
        stats.max_depth,
        patterns.as_ref().map_or(0, FrequentPatterns::len)
    );
    Ok(patterns)
}

fn mine_relation<R: ItemRelation + ?Sized>(
    relation: &R,
    cutoff: usize,
) -> Result<(ItemsetStorage, MiningStats), MiningError> {
    let matrix = TransactionMatrix::from_relation(relation)?;
    let mut miner = FpGrowth::new(cutoff);
    let mut mined = ItemsetStorage::new();
    miner.mine(&matrix, &[], &mut mined)?;
    Ok((mined, miner.stats()))
}

fn execution_failure(err: MiningError) -> FpGrowthError {
    error!("frequent pattern mining failed: {err}");
    FpGrowthError::Execution(err)
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic".to_string()
    }
}
