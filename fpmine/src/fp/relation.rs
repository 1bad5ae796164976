use std::collections::HashSet;

use ndarray::{Array2, ArrayView2, Axis};

use crate::error::InputError;

/// Boolean item/transaction relation handed over by the host.
///
/// Item ids are column indices into [`item_labels`](Self::item_labels), which
/// are ordered by descending global frequency. Labels are display names only.
pub trait ItemRelation {
    fn item_labels(&self) -> &[String];

    fn num_examples(&self) -> usize;

    fn flag(&self, row: usize, col: usize) -> bool;

    fn num_items(&self) -> usize {
        self.item_labels().len()
    }
}

/// Dense in-memory [`ItemRelation`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemFlags {
    labels: Vec<String>,
    flags: Array2<bool>,
}

impl ItemFlags {
    pub fn new(labels: Vec<String>, flags: Array2<bool>) -> Result<Self, InputError> {
        if labels.len() != flags.ncols() {
            return Err(InputError::LabelCountMismatch {
                labels: labels.len(),
                columns: flags.ncols(),
            });
        }

        let mut seen = HashSet::with_capacity(labels.len());
        for label in &labels {
            if !seen.insert(label.as_str()) {
                return Err(InputError::DuplicateLabel(label.clone()));
            }
        }

        Ok(Self { labels, flags })
    }

    /// Builds the relation from per-transaction lists of item ids.
    pub fn from_transactions(
        labels: Vec<String>,
        transactions: &[Vec<usize>],
    ) -> Result<Self, InputError> {
        let num_items = labels.len();
        let mut flags = Array2::from_elem((transactions.len(), num_items), false);

        for (row, transaction) in transactions.iter().enumerate() {
            for &item in transaction {
                if item >= num_items {
                    return Err(InputError::ItemOutOfRange {
                        row,
                        item,
                        num_items,
                    });
                }
                flags[[row, item]] = true;
            }
        }

        Self::new(labels, flags)
    }

    /// Like [`from_transactions`](Self::from_transactions), but renumbers the
    /// items so that ids follow descending global frequency. Ties keep the
    /// order of `labels`.
    pub fn by_frequency(
        labels: Vec<String>,
        transactions: &[Vec<usize>],
    ) -> Result<Self, InputError> {
        let unordered = Self::from_transactions(labels, transactions)?;
        let totals = unordered.flags.mapv(usize::from).sum_axis(Axis(0));

        let mut order: Vec<usize> = (0..totals.len()).collect();
        order.sort_by(|&a, &b| totals[b].cmp(&totals[a]).then(a.cmp(&b)));

        let labels = order
            .iter()
            .map(|&col| unordered.labels[col].clone())
            .collect();
        let flags = unordered.flags.select(Axis(1), &order);

        Ok(Self { labels, flags })
    }

    pub fn flags(&self) -> ArrayView2<'_, bool> {
        self.flags.view()
    }
}

impl ItemRelation for ItemFlags {
    fn item_labels(&self) -> &[String] {
        &self.labels
    }

    fn num_examples(&self) -> usize {
        self.flags.nrows()
    }

    fn flag(&self, row: usize, col: usize) -> bool {
        self.flags[[row, col]]
    }
}
