/// Receives every pattern the miner discovers.
pub trait PatternSink {
    fn emit(&mut self, items: &[usize], support: usize);
}

/// Flat storage for itemsets with their support counts.
///
/// Items keep the order they were emitted in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemsetStorage {
    items: Vec<usize>,
    offsets: Vec<(usize, usize)>,
    supports: Vec<usize>,
}

impl ItemsetStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(estimated_items: usize, estimated_itemsets: usize) -> Self {
        Self {
            items: Vec::with_capacity(estimated_items),
            offsets: Vec::with_capacity(estimated_itemsets),
            supports: Vec::with_capacity(estimated_itemsets),
        }
    }

    pub fn add_itemset(&mut self, items: &[usize], support: usize) -> usize {
        let start = self.items.len();
        self.items.extend_from_slice(items);
        self.offsets.push((start, items.len()));
        self.supports.push(support);
        self.offsets.len() - 1
    }

    pub fn get_itemset(&self, idx: usize) -> Option<&[usize]> {
        let &(start, len) = self.offsets.get(idx)?;
        Some(&self.items[start..start + len])
    }

    pub fn support(&self, idx: usize) -> Option<usize> {
        self.supports.get(idx).copied()
    }

    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&[usize], usize)> + '_ {
        self.offsets
            .iter()
            .zip(&self.supports)
            .map(|(&(start, len), &support)| (&self.items[start..start + len], support))
    }
}

impl PatternSink for ItemsetStorage {
    fn emit(&mut self, items: &[usize], support: usize) {
        self.add_itemset(items, support);
    }
}
