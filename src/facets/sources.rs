use super::rollup::rollup;
use crate::types::{Bucket, FacetEntry};
use once_cell::sync::Lazy;
use regex::Regex;

/// Repositories whose display name is not a plain title-casing of the index
/// name. Aliases are compared lower-cased.
const SOURCE_ALIASES: &[(&[&str], &str)] = &[
    (
        &[
            "indexed_harvard_dataverse",
            "harvard_dataverse",
            "harvard dataverse",
        ],
        "Harvard Dataverse",
    ),
    (&["indexed_omicsdi", "omicsdi"], "Omics DI"),
    (&["indexed_ncbi_geo", "ncbi_geo", "ncbi geo"], "NCBI GEO"),
];

// Index rollover suffix, e.g. `zenodo_2`.
static VERSION_SUFFIX_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"_[0-9]").unwrap());

/// Map a source name (index name or partially cleaned) to its display label.
///
/// Known repositories use the alias table; anything else gets its first
/// underscore turned into a space and only its first letter capitalized.
pub fn clean_source_name(source: &str) -> String {
    let lowered = source.to_lowercase();
    if let Some((_, display)) = SOURCE_ALIASES
        .iter()
        .find(|(aliases, _)| aliases.contains(&lowered.as_str()))
    {
        return (*display).to_string();
    }

    let spaced = source.replacen('_', " ", 1).to_lowercase();
    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Strip the backend's index decorations and resolve the display label.
pub(crate) fn index_display_name(index: &str) -> String {
    let stripped = index.replacen("_search", "", 1).replacen("indexed_", "", 1);
    let stripped = VERSION_SUFFIX_RE.replacen(&stripped, 1, "");
    clean_source_name(&stripped.replacen('_', " ", 1))
}

/// Collapse the `_index` buckets into one entry per repository.
///
/// Several physical indices can back one repository, so counts are summed per
/// display label. Entries keep first-seen order; no sort is applied.
pub fn clean_sources(sources: &[Bucket]) -> Vec<FacetEntry> {
    let counts = rollup(sources.iter().map(|b| {
        let label = index_display_name(&b.term);
        tracing::trace!(index = %b.term, label = %label, "resolved source index");
        (label, b.count)
    }));
    tracing::debug!(
        indices = sources.len(),
        sources = counts.len(),
        "cleaned source facet"
    );
    counts
}
