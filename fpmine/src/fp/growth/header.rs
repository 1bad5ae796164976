use std::cmp::Ordering;

use log::error;

use super::tree::NodeId;
use crate::fp::matrix::TransactionMatrix;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderEntry {
    /// Global item id.
    pub label: usize,
    /// Column total in the matrix the table was built from.
    pub total: usize,
    /// Column of the item in that matrix.
    pub column: usize,
    /// Tree nodes carrying this item, filled in while the tree is built.
    pub nodes: Vec<NodeId>,
}

/// Items meeting the cutoff, most frequent first.
///
/// The order fixes both the path order inside the FP-tree and the order in
/// which items are mined, so it must be total and deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderTable {
    entries: Vec<HeaderEntry>,
}

impl HeaderTable {
    pub fn build(matrix: &TransactionMatrix, cutoff: usize) -> Self {
        let mut entries: Vec<HeaderEntry> = matrix
            .totals()
            .iter()
            .zip(matrix.labels())
            .enumerate()
            .filter(|&(_, (&total, _))| total >= cutoff)
            .map(|(column, (&total, &label))| HeaderEntry {
                label,
                total,
                column,
                nodes: Vec::new(),
            })
            .collect();

        entries.sort_by(compare_entries);
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, position: usize) -> Option<&HeaderEntry> {
        self.entries.get(position)
    }

    pub fn entries(&self) -> &[HeaderEntry] {
        &self.entries
    }

    pub(crate) fn entries_mut(&mut self) -> &mut [HeaderEntry] {
        &mut self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &HeaderEntry> {
        self.entries.iter()
    }

    pub fn position_of(&self, label: usize) -> Option<usize> {
        self.entries.iter().position(|entry| entry.label == label)
    }
}

/// Descending total, then ascending label.
fn compare_entries(a: &HeaderEntry, b: &HeaderEntry) -> Ordering {
    match b.total.cmp(&a.total).then(a.label.cmp(&b.label)) {
        Ordering::Equal if a.column != b.column => {
            // Labels are unique per matrix, so two columns never tie here.
            error!(
                "columns {} and {} share label {} and total {}",
                a.column, b.column, a.label, a.total
            );
            debug_assert!(false, "duplicate item label {} in header table", a.label);
            a.column.cmp(&b.column)
        }
        ordering => ordering,
    }
}
