use ndarray::Array2;

use super::header::HeaderTable;
use super::tree::{FPTree, NodeId, ROOT};
use crate::error::MiningError;
use crate::fp::matrix::TransactionMatrix;

/// Inserts every transaction of `matrix` into a fresh tree, visiting items in
/// header order, and records each created node in its header entry.
pub fn build_fp_tree(
    matrix: &TransactionMatrix,
    header: &mut HeaderTable,
) -> Result<FPTree, MiningError> {
    let columns = matrix.num_columns();
    let mut fp_tree = FPTree::new();

    for row in matrix.cells().rows() {
        let mut current = ROOT;

        for (position, entry) in header.entries_mut().iter_mut().enumerate() {
            let value = *row
                .get(entry.column)
                .ok_or(MiningError::ColumnOutOfRange {
                    column: entry.column,
                    columns,
                })?;
            if value == 0 {
                continue;
            }

            let (child, created) = fp_tree.insert_child(current, entry.label, value, position)?;
            if created {
                entry.nodes.push(child);
            }
            current = child;
        }
    }

    Ok(fp_tree)
}

/// Projects the conditional pattern base of the header item at `position`
/// into a new matrix.
///
/// Each occurrence of the item with a non-empty ancestor chain becomes one
/// row holding the occurrence count under every ancestor's column. Columns
/// are the items seen in at least one chain, in header order.
pub fn project_conditional(
    fp_tree: &FPTree,
    header: &HeaderTable,
    position: usize,
) -> Result<TransactionMatrix, MiningError> {
    let entry = header
        .get(position)
        .ok_or(MiningError::UnknownHeaderPosition(position))?;

    // Ancestors always sit earlier in the header than the item itself.
    let mut seen = vec![false; position];
    let mut chains: Vec<(Vec<usize>, usize)> = Vec::with_capacity(entry.nodes.len());

    for &node_id in &entry.nodes {
        let chain = fp_tree.ancestors(node_id)?;
        if chain.is_empty() {
            continue;
        }

        let positions = chain
            .iter()
            .map(|&ancestor| ancestor_position(fp_tree, ancestor, position))
            .collect::<Result<Vec<_>, _>>()?;
        for &p in &positions {
            seen[p] = true;
        }
        chains.push((positions, fp_tree.node(node_id)?.count));
    }

    let mut remap = vec![None; position];
    let mut labels = Vec::new();
    for (p, _) in seen.iter().enumerate().filter(|&(_, &present)| present) {
        remap[p] = Some(labels.len());
        labels.push(header.entries()[p].label);
    }

    let mut cells = Array2::zeros((chains.len(), labels.len()));
    for (row, (positions, count)) in chains.iter().enumerate() {
        for column in positions.iter().filter_map(|&p| remap[p]) {
            cells[[row, column]] = *count;
        }
    }

    TransactionMatrix::new(cells, labels)
}

fn ancestor_position(
    fp_tree: &FPTree,
    ancestor: NodeId,
    position: usize,
) -> Result<usize, MiningError> {
    let p = fp_tree
        .node(ancestor)?
        .position
        .ok_or(MiningError::SentinelNode(ancestor))?;
    if p >= position {
        return Err(MiningError::HeaderOrder {
            position,
            ancestor: p,
        });
    }
    Ok(p)
}
