//! Category aggregation
//!
//! Groups retained entries by label. Members keep scan order; labels are
//! returned in ordinal (byte-wise) order, which `BTreeMap<String, _>` gives us
//! directly.

use std::collections::BTreeMap;

use crate::models::{Category, Entry};

#[derive(Debug, Default)]
pub struct CategoryAggregator {
    groups: BTreeMap<String, Vec<Entry>>,
    total: usize,
}

impl CategoryAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, entry: Entry) {
        self.total += 1;
        match self.groups.get_mut(&entry.group) {
            Some(members) => members.push(entry),
            None => {
                self.groups.insert(entry.group.clone(), vec![entry]);
            }
        }
    }

    /// Number of entries pushed so far
    pub fn len(&self) -> usize {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    pub fn category_count(&self) -> usize {
        self.groups.len()
    }

    /// Consume the aggregator into categories sorted by label
    pub fn finish(self) -> Vec<Category> {
        self.groups
            .into_iter()
            .map(|(label, members)| Category { label, members })
            .collect()
    }
}

impl Extend<Entry> for CategoryAggregator {
    fn extend<T: IntoIterator<Item = Entry>>(&mut self, iter: T) {
        for entry in iter {
            self.push(entry);
        }
    }
}
