use super::growth::tree::{FPTree, NodeId};
use super::utils::PatternSink;
use crate::error::MiningError;

/// Emits `prefix` extended by every non-empty subset of a single-path tree.
/// Returns the number of patterns emitted, `2^n - 1` for an `n`-node path.
pub fn emit_single_path<S: PatternSink + ?Sized>(
    fp_tree: &FPTree,
    path: &[NodeId],
    prefix: &[usize],
    sink: &mut S,
) -> Result<usize, MiningError> {
    let steps = path
        .iter()
        .map(|&id| {
            let node = fp_tree.node(id)?;
            let item = node.item.ok_or(MiningError::SentinelNode(id))?;
            Ok((item, node.count))
        })
        .collect::<Result<Vec<_>, MiningError>>()?;

    Ok(generate_combinations_from_path(&steps, prefix, sink))
}

/// `path` holds `(item, count)` pairs. Each subset's support is the smallest
/// count among the nodes it selects.
pub fn generate_combinations_from_path<S: PatternSink + ?Sized>(
    path: &[(usize, usize)],
    prefix: &[usize],
    sink: &mut S,
) -> usize {
    let mut current = Vec::with_capacity(prefix.len() + path.len());
    current.extend_from_slice(prefix);
    generate_comb_recursive(path, 0, None, &mut current, sink)
}

fn generate_comb_recursive<S: PatternSink + ?Sized>(
    path: &[(usize, usize)],
    start: usize,
    support: Option<usize>,
    current: &mut Vec<usize>,
    sink: &mut S,
) -> usize {
    let mut emitted = 0;

    for i in start..path.len() {
        let (item, count) = path[i];
        let support = support.map_or(count, |s| s.min(count));

        current.push(item);
        sink.emit(current.as_slice(), support);
        emitted += 1 + generate_comb_recursive(path, i + 1, Some(support), current, sink);
        current.pop();
    }

    emitted
}
