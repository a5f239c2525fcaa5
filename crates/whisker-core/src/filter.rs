use crate::key::GroupKey;
use indexmap::IndexSet;

/// Keys a chart is currently filtered to. Empty means "no filter".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSet {
    keys: IndexSet<GroupKey>,
}

impl FilterSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_filter(&self) -> bool {
        !self.keys.is_empty()
    }

    pub fn contains(&self, key: &GroupKey) -> bool {
        self.keys.contains(key)
    }

    /// Adds `key` if absent, removes it otherwise. Returns whether the key is now filtered.
    pub fn toggle(&mut self, key: &GroupKey) -> bool {
        if self.keys.shift_remove(key) {
            false
        } else {
            self.keys.insert(key.clone());
            true
        }
    }

    pub fn clear(&mut self) {
        self.keys.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &GroupKey> {
        self.keys.iter()
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}
