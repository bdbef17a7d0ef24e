//! Insertion-ordered grouping by value equality.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::hash::Hash;

/// Groups borrowed keys, remembering the order in which each key was first seen.
#[derive(Debug)]
pub(crate) struct FirstSeen<'a, K, V> {
    index: HashMap<&'a K, usize>,
    entries: Vec<(&'a K, V)>,
}

impl<'a, K, V> FirstSeen<'a, K, V>
where
    K: Eq + Hash,
{
    pub(crate) fn new() -> Self {
        Self {
            index: HashMap::new(),
            entries: Vec::new(),
        }
    }

    /// Value slot for `key`. The first key seen stays the group's representative.
    pub(crate) fn slot(&mut self, key: &'a K, init: impl FnOnce() -> V) -> &mut V {
        let position = match self.index.entry(key) {
            Entry::Occupied(e) => *e.get(),
            Entry::Vacant(e) => {
                let position = self.entries.len();
                e.insert(position);
                self.entries.push((key, init()));
                position
            }
        };
        &mut self.entries[position].1
    }

    pub(crate) fn into_entries(self) -> Vec<(&'a K, V)> {
        self.entries
    }
}
