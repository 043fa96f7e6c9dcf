use crate::types::FacetEntry;
use indexmap::IndexMap;

/// Group `(key, count)` pairs by key and sum the counts.
///
/// Entries come back in the order each key was first seen.
pub fn rollup<K, I>(pairs: I) -> Vec<FacetEntry>
where
    K: Into<String>,
    I: IntoIterator<Item = (K, u64)>,
{
    let mut sums: IndexMap<String, u64> = IndexMap::new();
    for (key, count) in pairs {
        *sums.entry(key.into()).or_insert(0) += count;
    }
    sums.into_iter()
        .map(|(key, value)| FacetEntry { key, value })
        .collect()
}

/// Stable sort, highest count first.
pub fn sort_by_value_desc(entries: &mut [FacetEntry]) {
    entries.sort_by(|a, b| b.value.cmp(&a.value));
}
