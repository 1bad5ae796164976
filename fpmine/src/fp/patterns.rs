use std::fmt::Write;

use log::debug;

use super::utils::ItemsetStorage;
use crate::config::MIN_ITEMS_PER_RULE;

/// One surviving pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatternRef<'a> {
    pub items: &'a [usize],
    pub support: usize,
}

/// Mined patterns with between 2 and the configured maximum items.
///
/// Never empty: an empty result is reported as `None` by [`assemble`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequentPatterns {
    storage: ItemsetStorage,
    item_names: Vec<String>,
    discarded: usize,
}

/// Filters mined patterns by size. Returns `None` when nothing survives.
pub fn assemble(
    mined: &ItemsetStorage,
    max_items: usize,
    item_names: &[String],
) -> Option<FrequentPatterns> {
    let mut storage = ItemsetStorage::new();
    let mut discarded = 0;

    for (items, support) in mined.iter() {
        if (MIN_ITEMS_PER_RULE..=max_items).contains(&items.len()) {
            storage.add_itemset(items, support);
        } else {
            discarded += 1;
        }
    }

    debug!(
        "kept {} of {} mined patterns ({} outside sizes {}..={})",
        storage.len(),
        mined.len(),
        discarded,
        MIN_ITEMS_PER_RULE,
        max_items
    );

    if storage.is_empty() {
        return None;
    }

    Some(FrequentPatterns {
        storage,
        item_names: item_names.to_vec(),
        discarded,
    })
}

impl FrequentPatterns {
    pub fn len(&self) -> usize {
        self.storage.len()
    }

    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }

    /// Mined patterns dropped for being too small or too large.
    pub fn discarded(&self) -> usize {
        self.discarded
    }

    pub fn item_names(&self) -> &[String] {
        &self.item_names
    }

    pub fn get(&self, idx: usize) -> Option<PatternRef<'_>> {
        Some(PatternRef {
            items: self.storage.get_itemset(idx)?,
            support: self.storage.support(idx)?,
        })
    }

    pub fn iter(&self) -> impl Iterator<Item = PatternRef<'_>> + '_ {
        self.storage
            .iter()
            .map(|(items, support)| PatternRef { items, support })
    }

    /// Output records: the pattern's item ids followed by its support.
    pub fn records(&self) -> impl Iterator<Item = Vec<usize>> + '_ {
        self.iter().map(|pattern| {
            let mut record = Vec::with_capacity(pattern.items.len() + 1);
            record.extend_from_slice(pattern.items);
            record.push(pattern.support);
            record
        })
    }

    pub fn into_records(self) -> Vec<Vec<usize>> {
        self.records().collect()
    }

    /// Renders a pattern with item names, e.g. `{bread, milk} (3)`.
    pub fn describe(&self, idx: usize) -> Option<String> {
        let pattern = self.get(idx)?;
        let mut out = String::from("{");
        for (i, &item) in pattern.items.iter().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            match self.item_names.get(item) {
                Some(name) => out.push_str(name),
                None => {
                    let _ = write!(out, "#{item}");
                }
            }
        }
        let _ = write!(out, "}} ({})", pattern.support);
        Some(out)
    }
}
