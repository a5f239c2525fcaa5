//! Keyed enter/update/exit reconciliation between the retained glyph set and a new dataset.

use rustc_hash::FxHashSet;
use std::hash::Hash;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reconciliation<K> {
    /// Keys new to this pass, in dataset order.
    pub enter: Vec<K>,
    /// Keys present before and now, in dataset order.
    pub update: Vec<K>,
    /// Keys that disappeared, in their previous order.
    pub exit: Vec<K>,
}

impl<K> Default for Reconciliation<K> {
    fn default() -> Self {
        Self {
            enter: Vec::new(),
            update: Vec::new(),
            exit: Vec::new(),
        }
    }
}

/// Splits keys into three disjoint lists.
///
/// A key repeated in `current` is only considered once, at its first position.
pub fn reconcile<'a, K, P>(previous: P, current: &[K]) -> Reconciliation<K>
where
    K: Eq + Hash + Clone + 'a,
    P: IntoIterator<Item = &'a K>,
{
    let previous: Vec<&K> = previous.into_iter().collect();
    let before: FxHashSet<&K> = previous.iter().copied().collect();

    let mut out = Reconciliation::default();
    let mut seen: FxHashSet<&K> = FxHashSet::default();
    for key in current {
        if !seen.insert(key) {
            continue;
        }
        if before.contains(key) {
            out.update.push(key.clone());
        } else {
            out.enter.push(key.clone());
        }
    }
    out.exit = previous
        .into_iter()
        .filter(|k| !seen.contains(*k))
        .cloned()
        .collect();
    out
}
