//! Identity-keyed de-duplication.

use std::collections::BTreeMap;

/// Collapse `items` to one entry per key, ordered by ascending key.
///
/// The first item seen for a key is kept.
pub fn unique_by_key<T, K, F>(items: impl IntoIterator<Item = T>, key: F) -> Vec<T>
where
    K: Ord,
    F: Fn(&T) -> K,
{
    let mut seen: BTreeMap<K, T> = BTreeMap::new();
    for item in items {
        seen.entry(key(&item)).or_insert(item);
    }
    seen.into_values().collect()
}
