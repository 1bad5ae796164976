use ndarray::{Array2, ArrayView2, Axis};

use super::relation::ItemRelation;
use crate::error::MiningError;

/// Rows are transactions, columns are the items of one mining sub-problem.
///
/// Cells hold occurrence counts: 0/1 at the top level, node counts in a
/// conditional projection. Column totals are derived from the cells when the
/// matrix is built, and the matrix is never modified afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionMatrix {
    cells: Array2<usize>,
    labels: Vec<usize>,
    totals: Vec<usize>,
}

impl TransactionMatrix {
    /// `labels[c]` is the global item id stored in column `c`.
    pub fn new(cells: Array2<usize>, labels: Vec<usize>) -> Result<Self, MiningError> {
        if cells.ncols() != labels.len() {
            return Err(MiningError::ShapeMismatch {
                columns: cells.ncols(),
                labels: labels.len(),
            });
        }
        let totals = cells.sum_axis(Axis(0)).to_vec();
        Ok(Self {
            cells,
            labels,
            totals,
        })
    }

    pub fn from_relation<R: ItemRelation + ?Sized>(relation: &R) -> Result<Self, MiningError> {
        let shape = (relation.num_examples(), relation.num_items());
        let cells = Array2::from_shape_fn(shape, |(row, col)| usize::from(relation.flag(row, col)));
        Self::new(cells, (0..shape.1).collect())
    }

    pub fn num_rows(&self) -> usize {
        self.cells.nrows()
    }

    pub fn num_columns(&self) -> usize {
        self.cells.ncols()
    }

    pub fn labels(&self) -> &[usize] {
        &self.labels
    }

    pub fn totals(&self) -> &[usize] {
        &self.totals
    }

    pub fn column_label(&self, column: usize) -> Option<usize> {
        self.labels.get(column).copied()
    }

    pub fn column_total(&self, column: usize) -> Option<usize> {
        self.totals.get(column).copied()
    }

    pub fn cell(&self, row: usize, column: usize) -> Option<usize> {
        self.cells.get((row, column)).copied()
    }

    pub fn cells(&self) -> ArrayView2<'_, usize> {
        self.cells.view()
    }
}
