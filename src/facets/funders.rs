use super::rollup::{rollup, sort_by_value_desc};
use crate::error::Result;
use crate::types::{FacetEntry, RawFacetResponse};

pub const FUNDER_FIELD: &str = "funder.name.keyword";
pub const FUNDING_FUNDER_FIELD: &str = "funding.funder.name.keyword";

/// Label of the synthetic entry counting documents with no funder at all.
///
/// Counts are unsigned: when the two funder field totals exceed the grand
/// total, this entry reports 0 rather than a negative remainder.
pub const UNKNOWN_FUNDER: &str = "unknown";

/// Merge the two funder fields into one list sorted by summed count.
///
/// `facet_size` keeps the top-K entries; `Some(0)` is treated as no limit.
/// With `include_unknown`, an `unknown` entry carrying
/// `total - funder.total - funding.total` (floored at zero) is added after
/// truncation and the list is sorted again.
pub fn combine_funders(
    facets: &RawFacetResponse,
    facet_size: Option<usize>,
    include_unknown: bool,
) -> Result<Vec<FacetEntry>> {
    let funder = facets.field(FUNDER_FIELD)?;
    let funding = facets.field(FUNDING_FUNDER_FIELD)?;

    let mut combined = rollup(
        funder
            .terms
            .iter()
            .chain(funding.terms.iter())
            .map(|b| (b.term.as_str(), b.count)),
    );
    sort_by_value_desc(&mut combined);

    if let Some(size) = facet_size.filter(|&n| n > 0) {
        combined.truncate(size);
    }

    if include_unknown {
        let unknown = facets
            .total
            .saturating_sub(funder.total)
            .saturating_sub(funding.total);
        combined.push(FacetEntry::new(UNKNOWN_FUNDER, unknown));
        sort_by_value_desc(&mut combined);
    }

    tracing::debug!(
        funder_terms = funder.terms.len(),
        funding_terms = funding.terms.len(),
        merged = combined.len(),
        "combined funder facets"
    );
    Ok(combined)
}
